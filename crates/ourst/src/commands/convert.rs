//! `ourst` conversion command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use ourst_config::{CliSettings, Config};
use ourst_convert::{
    EmitReport, FsSink, HierarchyEmitter, MemorySink, NodeConverter, ReferenceDefaults,
};
use ourst_math::LatexTranslator;
use ourst_tree::CoursewareParser;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the conversion command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Courseware XML document to convert.
    source: PathBuf,

    /// Destination directory for the generated documents.
    destination: PathBuf,

    /// Default structural-block number for cross-references.
    #[arg(short, long, env = "OURST_BLOCK")]
    block: Option<u32>,

    /// Default structural-part number for cross-references.
    #[arg(short, long, env = "OURST_PART")]
    part: Option<u32>,

    /// Root index title (default: destination directory name).
    #[arg(long)]
    title: Option<String>,

    /// Path to configuration file (default: auto-discover ourst.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep an existing destination tree instead of removing it first.
    #[arg(long)]
    no_clean: bool,

    /// Convert without writing, listing the documents that would be written.
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl ConvertArgs {
    pub(crate) fn verbose(&self) -> bool {
        self.verbose
    }

    /// Execute the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is incomplete, the source cannot be
    /// read or parsed, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = CliSettings {
            block: self.block,
            part: self.part,
            title: self.title.clone(),
            clean: self.no_clean.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        let (block, part) = config.require_references()?;

        if !self.source.is_file() {
            return Err(CliError::Validation(format!(
                "Source file not found: {}",
                self.source.display()
            )));
        }
        let xml = std::fs::read_to_string(&self.source)?;
        let root = CoursewareParser::new().parse(&xml)?;

        let title = match config.output.title {
            Some(title) => title,
            None => default_title(&self.destination)?,
        };

        let math = LatexTranslator::new();
        let converter = NodeConverter::new(&math, ReferenceDefaults::numbered(block, part));
        let emitter = HierarchyEmitter::new(&converter);

        output.info(&format!(
            "Converting {} (block{block}, part{part})",
            self.source.display()
        ));

        let report = if self.dry_run {
            let mut sink = MemorySink::new();
            let report = emitter.emit(&root, &title, &mut sink)?;
            for unit in sink.units() {
                output.info(&format!("  {}", self.destination.join(&unit.path).display()));
            }
            report
        } else {
            let mut sink = FsSink::new(&self.destination);
            sink.prepare(config.output.clean)?;
            emitter.emit(&root, &title, &mut sink)?
        };

        report_summary(&output, &report, &self.destination, self.dry_run);
        Ok(())
    }
}

/// Root title from the destination directory name.
fn default_title(destination: &Path) -> Result<String, CliError> {
    let absolute = std::path::absolute(destination)?;
    absolute
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CliError::Validation(format!(
                "Cannot derive a title from {}, pass --title",
                destination.display()
            ))
        })
}

fn report_summary(output: &Output, report: &EmitReport, destination: &Path, dry_run: bool) {
    let tags = report.unrecognized_tags();
    if !tags.is_empty() {
        output.warning(&format!(
            "Skipped {} unrecognized element(s): {}",
            report.diagnostics.len(),
            tags.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }

    let verb = if dry_run { "Would write" } else { "Wrote" };
    output.success(&format!(
        "{verb} {} document(s) to {}",
        report.units_written,
        destination.display()
    ));
}
