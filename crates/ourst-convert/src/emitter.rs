//! Output hierarchy: one document per session and section, linked by toctrees.

use std::collections::BTreeSet;
use std::path::Path;

use ourst_tree::{ContentNode, NodeKind};

use crate::converter::NodeConverter;
use crate::error::EmitError;
use crate::indent::Indent;
use crate::scope::{Diagnostic, Scope};
use crate::sink::{OutputSink, OutputUnit};
use crate::text::underline;

const INDEX_FILE: &str = "index.rst";

/// Summary of one emission run.
#[derive(Debug, Default)]
pub struct EmitReport {
    /// Output units handed to the sink.
    pub units_written: usize,
    /// Diagnostics from every unit, in conversion order.
    pub diagnostics: Vec<Diagnostic>,
}

impl EmitReport {
    /// Distinct tags of elements that had no conversion rule.
    #[must_use]
    pub fn unrecognized_tags(&self) -> BTreeSet<&str> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| matches!(diagnostic, Diagnostic::UnrecognizedElement { .. }))
            .map(Diagnostic::tag)
            .collect()
    }
}

/// Walks the unit/session/section hierarchy and writes one output unit per level.
pub struct HierarchyEmitter<'c> {
    converter: &'c NodeConverter<'c>,
}

impl<'c> HierarchyEmitter<'c> {
    #[must_use]
    pub fn new(converter: &'c NodeConverter<'c>) -> Self {
        Self { converter }
    }

    /// Emit the document rooted at `root` into `sink`.
    ///
    /// `root` is a `Unit` or an element wrapping units (usually `Item`). The
    /// root index is titled `title` and lists every session of every unit.
    /// Child units are written before the unit that links to them.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to store a unit.
    pub fn emit(
        &self,
        root: &ContentNode,
        title: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<EmitReport, EmitError> {
        let mut report = EmitReport::default();

        let units: Vec<&ContentNode> = if root.kind == NodeKind::Unit {
            vec![root]
        } else {
            root.children_of(&NodeKind::Unit).collect()
        };
        let sessions: Vec<&ContentNode> = units
            .iter()
            .flat_map(|unit| unit.children_of(&NodeKind::Session))
            .collect();
        if sessions.is_empty() {
            tracing::warn!(root = root.kind.tag(), "No sessions found");
        }

        let title = title.trim();
        let mut lines = vec![
            title.to_owned(),
            underline(title, '#'),
            String::new(),
        ];
        lines.extend(toctree_header());
        for (index, session) in sessions.iter().enumerate() {
            let name = format!("session{}", index + 1);
            self.emit_level(session, Path::new(&name), sink, &mut report)?;
            lines.push(toctree_entry(&name));
        }
        lines.push(String::new());

        sink.write_unit(&OutputUnit::new(INDEX_FILE, lines))?;
        report.units_written += 1;

        tracing::info!(
            sessions = sessions.len(),
            units = report.units_written,
            diagnostics = report.diagnostics.len(),
            "Emission complete"
        );
        Ok(report)
    }

    /// Emit one session or section into `dir`, recursing into its sections.
    fn emit_level(
        &self,
        level: &ContentNode,
        dir: &Path,
        sink: &mut dyn OutputSink,
        report: &mut EmitReport,
    ) -> Result<(), EmitError> {
        let mut scope = Scope::new();
        let mut lines = Vec::new();
        for child in &level.children {
            lines.extend(
                self.converter
                    .convert(child, Some(&level.kind), &Indent::none(), &mut scope),
            );
        }
        report.diagnostics.extend(scope.take_diagnostics());

        let sections: Vec<&ContentNode> = level.children_of(&NodeKind::Section).collect();
        if !sections.is_empty() {
            lines.extend(toctree_header());
            for (index, section) in sections.iter().enumerate() {
                let name = format!("section{}", index + 1);
                self.emit_level(section, &dir.join(&name), sink, report)?;
                lines.push(toctree_entry(&name));
            }
            lines.push(String::new());
        }

        lines.extend(scope.into_deferred_lines());

        let path = dir.join(INDEX_FILE);
        tracing::debug!(path = %path.display(), lines = lines.len(), "Emitting unit");
        sink.write_unit(&OutputUnit::new(path, lines))?;
        report.units_written += 1;
        Ok(())
    }
}

fn toctree_header() -> [String; 4] {
    [
        ".. toctree::".to_owned(),
        "    :maxdepth: 1".to_owned(),
        "    :hidden:".to_owned(),
        String::new(),
    ]
}

fn toctree_entry(name: &str) -> String {
    format!("    {name}/index")
}
