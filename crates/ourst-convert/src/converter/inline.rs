//! Inline formatting rules.

use ourst_tree::{ContentNode, NodeKind};

use super::NodeConverter;
use crate::reference::resolve_target;
use crate::scope::Scope;
use crate::text::wrap;

impl NodeConverter<'_> {
    /// Inline markup for `node`, followed by its tail text.
    ///
    /// Nested formatting is flattened to plain text since the dialect does not
    /// nest inline markup.
    pub(super) fn inline(&self, node: &ContentNode, scope: &mut Scope) -> String {
        let mut out = match &node.kind {
            NodeKind::Italic => wrap(&node.plain_text(), "*", "*"),
            NodeKind::Bold => wrap(&node.plain_text(), "**", "**"),
            NodeKind::Superscript => wrap(&node.plain_text(), ":sup:`", "`"),
            NodeKind::Subscript => wrap(&node.plain_text(), ":sub:`", "`"),
            NodeKind::GlossaryTerm => wrap(&node.plain_text(), ":term:`", "`"),
            NodeKind::ComputerCode => wrap(&node.plain_text(), "``", "``"),
            NodeKind::Link => link(node),
            NodeKind::OLink => self.olink(node),
            NodeKind::LineBreak => " ".to_owned(),
            NodeKind::Font => self.content(node, scope),
            NodeKind::InlineFigure => super::media::inline_figure(node, scope),
            _ => String::new(),
        };
        out.push_str(&node.tail);
        out
    }

    fn olink(&self, node: &ContentNode) -> String {
        let Some(path) = node
            .attr("targetdoc")
            .and_then(|target| resolve_target(target, &self.references))
        else {
            tracing::debug!("Cross-reference without a resolvable targetdoc, omitting");
            return String::new();
        };
        wrap(&node.plain_text(), ":doc:`", &format!(" </{path}/index>`"))
    }
}

fn link(node: &ContentNode) -> String {
    match node.attr("href").map(str::trim).filter(|href| !href.is_empty()) {
        Some(href) => wrap(&node.plain_text(), "`", &format!(" <{href}>`_")),
        None => {
            tracing::debug!("Link without href, omitting");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::tests::{lines, render};

    fn paragraph(inner: &str) -> Vec<String> {
        render(&format!("<Paragraph>{inner}</Paragraph>"), None).0
    }

    #[test]
    fn test_trailing_space_moves_into_tail() {
        assert_eq!(paragraph("<b>bold </b>text"), lines(&["**bold** text", ""]));
        assert_eq!(paragraph("a <i>it </i>"), lines(&["a *it*", ""]));
    }

    #[test]
    fn test_trailing_space_without_following_text() {
        let (output, _) = render("<i>word </i>", None);
        assert_eq!(output, lines(&["*word* "]));
    }

    #[test]
    fn test_leading_space_moves_before_delimiter() {
        assert_eq!(paragraph("x<b> y</b>z"), lines(&["x **y**z", ""]));
    }

    #[test]
    fn test_blank_inline_text_is_absent() {
        assert_eq!(paragraph("a<b> </b>b"), lines(&["a b", ""]));
        assert_eq!(paragraph("a<i></i>b"), lines(&["ab", ""]));
    }

    #[test]
    fn test_role_markup() {
        assert_eq!(
            paragraph("x<sup>2</sup> H<sub>2</sub>O <GlossaryTerm>mean</GlossaryTerm>"),
            lines(&["x:sup:`2` H:sub:`2`O :term:`mean`", ""])
        );
    }

    #[test]
    fn test_adjacent_roles_are_separated() {
        assert_eq!(paragraph("<b>a</b><i>b</i>"), lines(&[r"**a**\ *b*", ""]));
        assert_eq!(
            paragraph("<i>x</i><sup>2</sup> and <b>y</b> <i>z</i>"),
            lines(&[r"*x*\ :sup:`2` and **y** *z*", ""])
        );
    }

    #[test]
    fn test_nested_inline_is_flattened() {
        assert_eq!(paragraph("<b>very <i>bold</i></b>"), lines(&["**very bold**", ""]));
    }

    #[test]
    fn test_link() {
        assert_eq!(
            paragraph(r#"See <a href="https://example.org">the site </a>now"#),
            lines(&["See `the site <https://example.org>`_ now", ""])
        );
    }

    #[test]
    fn test_link_without_href_is_omitted_but_tail_kept() {
        assert_eq!(paragraph("See <a>nothing</a> here"), lines(&["See here", ""]));
    }

    #[test]
    fn test_olink_resolves_target() {
        assert_eq!(
            paragraph(r#"Read <olink targetdoc="Some Block, Part 2, UnitX">unit X</olink>."#),
            lines(&["Read :doc:`unit X </block5/part2/unitx/index>`.", ""])
        );
    }

    #[test]
    fn test_olink_without_target_is_omitted() {
        assert_eq!(paragraph("a <olink>gone</olink>b"), lines(&["a b", ""]));
    }

    #[test]
    fn test_line_break_and_font() {
        assert_eq!(
            paragraph("one<br/>two <font face=\"x\">plain <i>it</i></font>"),
            lines(&["one two plain *it*", ""])
        );
    }
}
