//! Tables as `list-table` directives.

use ourst_tree::{ContentNode, NodeKind};

use super::NodeConverter;
use crate::indent::Indent;
use crate::scope::Scope;

/// Rows of a table in document order, looking inside row groups.
fn rows(table: &ContentNode) -> Vec<&ContentNode> {
    let mut rows = Vec::new();
    for child in &table.children {
        match child.kind {
            NodeKind::TableRow => rows.push(child),
            NodeKind::TableBody | NodeKind::TableHeader | NodeKind::TableFooter => {
                rows.extend(child.children_of(&NodeKind::TableRow));
            }
            _ => {}
        }
    }
    rows
}

fn is_cell(node: &ContentNode) -> bool {
    matches!(node.kind, NodeKind::HeaderCell | NodeKind::DataCell)
}

impl NodeConverter<'_> {
    pub(super) fn table(
        &self,
        node: &ContentNode,
        indent: &Indent,
        scope: &mut Scope,
    ) -> Vec<String> {
        let rows = rows(node);
        if rows.is_empty() {
            tracing::debug!("Table without rows, omitting");
            return Vec::new();
        }

        let title = match node.child(&NodeKind::TableHead) {
            Some(head) => self.inline_text(head, scope),
            None => String::new(),
        };
        let header_rows = rows
            .iter()
            .filter(|row| row.child(&NodeKind::HeaderCell).is_some())
            .count();
        let body = indent.nested();

        let mut lines = vec![
            format!("{indent}.. list-table:: {title}")
                .trim_end()
                .to_owned(),
        ];
        if header_rows > 0 {
            lines.push(format!("{body}:header-rows: {header_rows}"));
        }
        lines.push(String::new());

        for row in rows {
            for (index, cell) in row.children.iter().filter(|child| is_cell(child)).enumerate() {
                let marker = if index == 0 { "* -" } else { "  -" };
                let text = self.inline_text(cell, scope);
                if text.is_empty() {
                    lines.push(format!("{body}{marker}"));
                } else {
                    lines.push(format!("{body}{marker} {text}"));
                }
            }
        }
        lines.push(String::new());
        lines
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::tests::{lines, render};

    #[test]
    fn test_table_with_title_and_header_row() {
        let xml = "<Table><TableHead>Results</TableHead><tbody>\
                   <tr><th>Name</th><th>Score</th></tr>\
                   <tr><td>Ann</td><td><b>9</b></td></tr>\
                   </tbody></Table>";
        let (output, _) = render(xml, None);
        assert_eq!(
            output,
            lines(&[
                ".. list-table:: Results",
                "    :header-rows: 1",
                "",
                "    * - Name",
                "      - Score",
                "    * - Ann",
                "      - **9**",
                "",
            ])
        );
    }

    #[test]
    fn test_header_rows_counts_rows_with_any_header_cell() {
        let xml = "<Table><tbody>\
                   <tr><th>a</th><th>b</th></tr>\
                   <tr><th>c</th><td>d</td></tr>\
                   <tr><td>e</td><td>f</td></tr>\
                   </tbody></Table>";
        let (output, _) = render(xml, None);
        assert_eq!(output[0], ".. list-table::");
        assert_eq!(output[1], "    :header-rows: 2");
    }

    #[test]
    fn test_rows_without_header_cells() {
        let xml = "<Table><tr><td>x</td><td></td></tr></Table>";
        let (output, _) = render(xml, None);
        assert_eq!(
            output,
            lines(&[".. list-table::", "", "    * - x", "      -", ""])
        );
    }

    #[test]
    fn test_rows_from_all_groups_in_order() {
        let xml = "<Table><thead><tr><th>h</th></tr></thead>\
                   <tbody><tr><td>b</td></tr></tbody>\
                   <tfoot><tr><td>f</td></tr></tfoot></Table>";
        let (output, _) = render(xml, None);
        assert_eq!(
            output,
            lines(&[
                ".. list-table::",
                "    :header-rows: 1",
                "",
                "    * - h",
                "    * - b",
                "    * - f",
                "",
            ])
        );
    }

    #[test]
    fn test_table_without_rows_is_omitted() {
        let (output, _) = render("<Table><TableHead>Empty</TableHead></Table>", None);
        assert!(output.is_empty());
    }
}
