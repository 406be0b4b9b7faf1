//! Images, figures, embedded media and inline figures.

use ourst_tree::{ContentNode, NodeKind};

use super::NodeConverter;
use crate::indent::Indent;
use crate::scope::Scope;
use crate::text::file_name;

const YOUTUBE_SCHEME: &str = "youtube:";

/// Referenced file name of an element's `src`, without any directory prefix.
fn source_file(node: &ContentNode) -> Option<&str> {
    let file = node.attr("src").and_then(file_name);
    if file.is_none() {
        tracing::debug!(tag = node.kind.tag(), "Media element without a usable src, omitting");
    }
    file
}

pub(super) fn image(node: &ContentNode, indent: &Indent) -> Vec<String> {
    match source_file(node) {
        Some(file) => vec![format!("{indent}.. image:: {file}"), String::new()],
        None => Vec::new(),
    }
}

/// `|file|` at the point of use; the substitution definition is deferred.
pub(super) fn inline_figure(node: &ContentNode, scope: &mut Scope) -> String {
    let Some(file) = node.child(&NodeKind::Image).and_then(source_file) else {
        return String::new();
    };
    scope.defer(vec![format!(".. |{file}| image:: {file}"), String::new()]);
    format!("|{file}|")
}

impl NodeConverter<'_> {
    pub(super) fn figure(
        &self,
        node: &ContentNode,
        indent: &Indent,
        scope: &mut Scope,
    ) -> Vec<String> {
        let Some(file) = node.child(&NodeKind::Image).and_then(source_file) else {
            return Vec::new();
        };

        let mut lines = vec![format!("{indent}.. figure:: {file}"), String::new()];
        if let Some(caption) = self.caption(node, scope) {
            lines.push(format!("{}{caption}", indent.nested()));
            lines.push(String::new());
        }
        lines
    }

    pub(super) fn media_content(
        &self,
        node: &ContentNode,
        indent: &Indent,
        scope: &mut Scope,
    ) -> Vec<String> {
        let nested = indent.nested();

        if let Some(id) = node
            .attr("src")
            .and_then(|src| src.trim().strip_prefix(YOUTUBE_SCHEME))
        {
            let mut lines = vec![format!("{indent}.. youtube:: {id}"), String::new()];
            for kind in [NodeKind::Description, NodeKind::Transcript] {
                if let Some(child) = node.child(&kind) {
                    lines.extend(self.convert(child, Some(&node.kind), &nested, scope));
                }
            }
            return lines;
        }

        let Some(file) = source_file(node) else {
            return Vec::new();
        };
        let mut lines = vec![format!("{indent}.. iframe:: {file}")];
        for option in ["width", "height"] {
            if let Some(value) = node.attr(option) {
                lines.push(format!("{nested}:{option}: {value}"));
            }
        }
        lines.push(String::new());
        if let Some(caption) = self.caption(node, scope) {
            lines.push(format!("{indent}{caption}"));
            lines.push(String::new());
        }
        lines
    }

    /// Caption child rendered inline on one line.
    fn caption(&self, node: &ContentNode, scope: &mut Scope) -> Option<String> {
        let text = self.inline_text(node.child(&NodeKind::Caption)?, scope);
        (!text.is_empty()).then_some(text)
    }
}
