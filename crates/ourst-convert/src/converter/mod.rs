//! Element-to-markup conversion rules (reStructuredText dialect).

mod inline;
mod media;
mod table;

use ourst_math::MathTranslator;
use ourst_tree::{ContentNode, NodeKind};

use crate::indent::Indent;
use crate::reference::ReferenceDefaults;
use crate::scope::{Diagnostic, Scope};
use crate::text::{append_inline, collapse, end_block, underline};

/// Converts one content element into lines of reStructuredText.
///
/// Block rules return lines that end with a blank separator, so sibling
/// outputs can be concatenated directly. Inline kinds return a single fragment
/// including the element's tail text.
pub struct NodeConverter<'a> {
    math: &'a dyn MathTranslator,
    references: ReferenceDefaults,
}

impl<'a> NodeConverter<'a> {
    /// Create a converter with its math translator and cross-reference defaults.
    #[must_use]
    pub fn new(math: &'a dyn MathTranslator, references: ReferenceDefaults) -> Self {
        Self { math, references }
    }

    /// Convert `node` at `indent`.
    ///
    /// `parent` is the kind of the enclosing element; it selects heading
    /// underlines and list markers. Deferred output and diagnostics go to
    /// `scope`. Never fails: unknown elements are diagnosed and produce no
    /// lines.
    pub fn convert(
        &self,
        node: &ContentNode,
        parent: Option<&NodeKind>,
        indent: &Indent,
        scope: &mut Scope,
    ) -> Vec<String> {
        match &node.kind {
            NodeKind::Title | NodeKind::Heading => self.heading(node, parent, indent, scope),
            NodeKind::Paragraph
            | NodeKind::Caption
            | NodeKind::Question
            | NodeKind::SubSection
            | NodeKind::SubSubSection => self.body(node, indent, scope),
            NodeKind::Quote => self.body(node, &indent.nested(), scope),
            NodeKind::Box => {
                let header = match self.heading_text(node, scope) {
                    Some(heading) => format!(".. admonition:: {heading}"),
                    None => ".. container:: box".to_owned(),
                };
                self.directive(node, &header, indent, scope)
            }
            NodeKind::Activity => self.titled_directive(node, "activity", indent, scope),
            NodeKind::Reading => self.titled_directive(node, "reading", indent, scope),
            NodeKind::StudyNote => self.directive(node, ".. note::", indent, scope),
            NodeKind::Answer => self.directive(node, ".. activity-answer::", indent, scope),
            NodeKind::Discussion => {
                self.directive(node, ".. activity-discussion::", indent, scope)
            }
            NodeKind::Description => self.directive(node, ".. description::", indent, scope),
            NodeKind::Transcript => self.directive(node, ".. transcript::", indent, scope),
            NodeKind::InternalSection => self.internal_section(node, indent, scope),
            NodeKind::SourceReference => self.source_reference(node, indent, scope),
            NodeKind::Reference => self.reference(node, indent, scope),
            NodeKind::BulletedList
            | NodeKind::BulletedSubsidiaryList
            | NodeKind::UnNumberedList
            | NodeKind::NumberedList
            | NodeKind::NumberedSubsidiaryList => self.list(node, indent, scope),
            NodeKind::ListItem | NodeKind::SubListItem => {
                self.list_item(node, parent, indent, scope)
            }
            NodeKind::Image => media::image(node, indent),
            NodeKind::Figure => self.figure(node, indent, scope),
            NodeKind::MediaContent => self.media_content(node, indent, scope),
            NodeKind::Table => self.table(node, indent, scope),
            NodeKind::Equation => self.equation(node, indent),
            NodeKind::ComputerCode if is_code_block(node) => code_block(node, indent),
            NodeKind::ComputerCode
            | NodeKind::Italic
            | NodeKind::Bold
            | NodeKind::Link
            | NodeKind::OLink
            | NodeKind::Superscript
            | NodeKind::Subscript
            | NodeKind::GlossaryTerm
            | NodeKind::LineBreak
            | NodeKind::Font
            | NodeKind::InlineFigure => {
                let fragment = self.inline(node, scope);
                if fragment.is_empty() {
                    Vec::new()
                } else {
                    vec![fragment]
                }
            }
            // Structure walked by the emitter or by the owning rule
            NodeKind::Item
            | NodeKind::Unit
            | NodeKind::Session
            | NodeKind::Section
            | NodeKind::MathMl
            | NodeKind::TableHead
            | NodeKind::TableBody
            | NodeKind::TableHeader
            | NodeKind::TableFooter
            | NodeKind::TableRow
            | NodeKind::HeaderCell
            | NodeKind::DataCell => Vec::new(),
            NodeKind::Other(tag) => {
                scope.diagnose(Diagnostic::UnrecognizedElement { tag: tag.clone() });
                Vec::new()
            }
        }
    }

    fn heading(
        &self,
        node: &ContentNode,
        parent: Option<&NodeKind>,
        indent: &Indent,
        scope: &mut Scope,
    ) -> Vec<String> {
        let text = self.inline_text(node, scope);
        if text.is_empty() {
            return Vec::new();
        }

        let style = match parent {
            Some(NodeKind::Session) => '=',
            Some(NodeKind::Section) => '-',
            Some(NodeKind::SubSection) => '~',
            Some(NodeKind::SubSubSection) => '^',
            other => {
                scope.diagnose(Diagnostic::UnrecognizedHeadingParent {
                    tag: other.map_or("(none)", NodeKind::tag).to_owned(),
                });
                '"'
            }
        };

        vec![
            format!("{indent}{text}"),
            format!("{indent}{}", underline(&text, style)),
            String::new(),
        ]
    }

    /// Flowed content of `node` at `indent`, closed with a blank line.
    fn body(&self, node: &ContentNode, indent: &Indent, scope: &mut Scope) -> Vec<String> {
        let mut lines = self.flow(node, &node.children, indent, indent, scope);
        if !lines.is_empty() {
            end_block(&mut lines);
        }
        lines
    }

    /// Directive header followed by the node's content one level deeper.
    ///
    /// A `Heading` child belongs to the header and is skipped in the body.
    fn directive(
        &self,
        node: &ContentNode,
        header: &str,
        indent: &Indent,
        scope: &mut Scope,
    ) -> Vec<String> {
        let nested = indent.nested();
        let mut lines = vec![format!("{indent}{header}"), String::new()];
        lines.extend(self.flow(node, without_heading(node), &nested, &nested, scope));
        end_block(&mut lines);
        lines
    }

    fn titled_directive(
        &self,
        node: &ContentNode,
        name: &str,
        indent: &Indent,
        scope: &mut Scope,
    ) -> Vec<String> {
        let header = match self.heading_text(node, scope) {
            Some(heading) => format!(".. {name}:: {heading}"),
            None => format!(".. {name}::"),
        };
        self.directive(node, &header, indent, scope)
    }

    fn heading_text(&self, node: &ContentNode, scope: &mut Scope) -> Option<String> {
        let text = self.inline_text(node.child(&NodeKind::Heading)?, scope);
        (!text.is_empty()).then_some(text)
    }

    fn internal_section(
        &self,
        node: &ContentNode,
        indent: &Indent,
        scope: &mut Scope,
    ) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(heading) = self.heading_text(node, scope) {
            lines.push(format!("{indent}.. rubric:: {heading}"));
            lines.push(String::new());
        }
        lines.extend(self.flow(node, without_heading(node), indent, indent, scope));
        if !lines.is_empty() {
            end_block(&mut lines);
        }
        lines
    }

    fn source_reference(
        &self,
        node: &ContentNode,
        indent: &Indent,
        scope: &mut Scope,
    ) -> Vec<String> {
        let text = self.inline_text(node, scope);
        if text.is_empty() {
            return Vec::new();
        }
        vec![format!("{indent}-- {text}"), String::new()]
    }

    fn reference(&self, node: &ContentNode, indent: &Indent, scope: &mut Scope) -> Vec<String> {
        let text = self.inline_text(node, scope);
        if text.is_empty() {
            return Vec::new();
        }
        vec![format!("{indent}.. [{text}] {text}"), String::new()]
    }

    /// Items at the list's own indent, followed by one blank line.
    fn list(&self, node: &ContentNode, indent: &Indent, scope: &mut Scope) -> Vec<String> {
        let mut lines = Vec::new();
        for child in &node.children {
            if child.kind.is_list() {
                // Stray sub-list directly inside a list: nest it under the previous item
                if !lines.is_empty() {
                    end_block(&mut lines);
                }
                let width = list_marker(Some(&node.kind)).chars().count();
                lines.extend(self.convert(child, Some(&node.kind), &indent.padded(width), scope));
            } else {
                lines.extend(self.convert(child, Some(&node.kind), indent, scope));
            }
        }
        if !lines.is_empty() {
            end_block(&mut lines);
        }
        lines
    }

    /// One item: marker on the first line, continuation padded to its width.
    fn list_item(
        &self,
        node: &ContentNode,
        parent: Option<&NodeKind>,
        indent: &Indent,
        scope: &mut Scope,
    ) -> Vec<String> {
        let marker = list_marker(parent);
        let first = indent.marked(marker);
        let rest = indent.padded(marker.chars().count());
        self.flow(node, &node.children, &first, &rest, scope)
    }

    fn equation(&self, node: &ContentNode, indent: &Indent) -> Vec<String> {
        let mathml = node.child(&NodeKind::MathMl).unwrap_or(node);
        match self
            .math
            .translate(mathml)
            .filter(|latex| !latex.trim().is_empty())
        {
            Some(latex) => vec![format!("{indent}{}", display_math(&latex)), String::new()],
            None => {
                tracing::debug!("Equation could not be translated, omitting");
                Vec::new()
            }
        }
    }

    /// Lay out the node's text and `children` as lines.
    ///
    /// Inline children join the current text line. A block child ends the
    /// line, is rendered at `rest`, and its tail starts the next line. The
    /// first emitted line carries `first` instead of `rest`; both must have
    /// the same width.
    fn flow<'n>(
        &self,
        node: &'n ContentNode,
        children: impl IntoIterator<Item = &'n ContentNode>,
        first: &Indent,
        rest: &Indent,
        scope: &mut Scope,
    ) -> Vec<String> {
        let mut lines = Vec::new();
        let mut text = node.text.clone();

        for child in children {
            if !is_block(child) {
                append_inline(&mut text, &self.inline(child, scope));
                continue;
            }

            let mut block = self.convert(child, Some(&node.kind), rest, scope);
            if !block.is_empty() {
                let pending = collapse(&text);
                if !pending.is_empty() {
                    push_line(&mut lines, &pending, first, rest);
                    lines.push(String::new());
                }
                if lines.is_empty()
                    && let Some(line) = block.first_mut()
                    && let Some(content) = line.strip_prefix(rest.as_str())
                {
                    *line = format!("{first}{content}");
                }
                lines.extend(block);
                text.clear();
            }
            text.push_str(&child.tail);
        }

        let pending = collapse(&text);
        if !pending.is_empty() {
            push_line(&mut lines, &pending, first, rest);
        }
        lines
    }

    /// Node text with inline children rendered, collapsed onto one line.
    fn inline_text(&self, node: &ContentNode, scope: &mut Scope) -> String {
        collapse(&self.content(node, scope))
    }

    /// Node text followed by each child's inline rendering.
    ///
    /// Block children are flattened to their non-blank output lines.
    fn content(&self, node: &ContentNode, scope: &mut Scope) -> String {
        let mut out = node.text.clone();
        for child in &node.children {
            if is_block(child) {
                let lines = self.convert(child, Some(&node.kind), &Indent::none(), scope);
                for line in lines.iter().map(|line| line.trim()).filter(|line| !line.is_empty()) {
                    out.push(' ');
                    out.push_str(line);
                }
                out.push(' ');
                out.push_str(&child.tail);
            } else {
                append_inline(&mut out, &self.inline(child, scope));
            }
        }
        out
    }
}

fn push_line(lines: &mut Vec<String>, text: &str, first: &Indent, rest: &Indent) {
    let indent = if lines.is_empty() { first } else { rest };
    lines.push(format!("{indent}{text}"));
}

fn without_heading(node: &ContentNode) -> impl Iterator<Item = &ContentNode> {
    node.children
        .iter()
        .filter(|child| child.kind != NodeKind::Heading)
}

fn list_marker(parent: Option<&NodeKind>) -> &'static str {
    if parent.is_some_and(NodeKind::is_ordered_list) {
        "#. "
    } else {
        "* "
    }
}

/// Multi-line computer code is a literal block; anything else is inline.
fn is_code_block(node: &ContentNode) -> bool {
    node.text.contains('\n')
}

fn is_block(node: &ContentNode) -> bool {
    match &node.kind {
        NodeKind::ComputerCode => is_code_block(node),
        kind => !kind.is_inline(),
    }
}

fn code_block(node: &ContentNode, indent: &Indent) -> Vec<String> {
    let nested = indent.nested();
    let code = node.plain_text();
    let mut lines = vec![format!("{indent}.. sourcecode::"), String::new()];
    for line in code.trim_matches(['\n', '\r']).lines() {
        let line = line.trim_end();
        if line.is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("{nested}{line}"));
        }
    }
    lines.push(String::new());
    lines
}

/// Rewrite translator output as one `$$`-delimited line with escaped backslashes.
fn display_math(latex: &str) -> String {
    latex
        .replace(['\n', '\r'], "")
        .replace(r"\[", "$$")
        .replace(r"\]", "$$")
        .replace('\\', r"\\")
}

#[cfg(test)]
mod tests {
    use ourst_math::LatexTranslator;
    use ourst_tree::CoursewareParser;
    use pretty_assertions::assert_eq;

    use super::*;

    pub(super) fn parse(xml: &str) -> ContentNode {
        CoursewareParser::new().parse(xml).unwrap()
    }

    /// Convert `xml` under `parent` with the built-in translator.
    pub(super) fn render(xml: &str, parent: Option<&NodeKind>) -> (Vec<String>, Scope) {
        let math = LatexTranslator::new();
        render_with(&math, xml, parent)
    }

    pub(super) fn render_with(
        math: &dyn MathTranslator,
        xml: &str,
        parent: Option<&NodeKind>,
    ) -> (Vec<String>, Scope) {
        let converter = NodeConverter::new(math, ReferenceDefaults::numbered(5, 1));
        let mut scope = Scope::new();
        let lines = converter.convert(&parse(xml), parent, &Indent::none(), &mut scope);
        (lines, scope)
    }

    pub(super) fn lines(expected: &[&str]) -> Vec<String> {
        expected.iter().map(|line| (*line).to_owned()).collect()
    }

    #[test]
    fn test_heading_underline_by_parent() {
        let cases = [
            (NodeKind::Session, "====="),
            (NodeKind::Section, "-----"),
            (NodeKind::SubSection, "~~~~~"),
            (NodeKind::SubSubSection, "^^^^^"),
        ];
        for (parent, underline) in cases {
            let (output, scope) = render("<Title> Intro </Title>", Some(&parent));
            assert_eq!(output, lines(&["Intro", underline, ""]));
            assert!(scope.diagnostics().is_empty());
        }
    }

    #[test]
    fn test_heading_under_unknown_parent_is_diagnosed() {
        let (output, scope) = render("<Title>Intro</Title>", Some(&NodeKind::Box));

        assert_eq!(output, lines(&["Intro", "\"\"\"\"\"", ""]));
        assert_eq!(
            scope.diagnostics(),
            &[Diagnostic::UnrecognizedHeadingParent {
                tag: "Box".to_owned()
            }]
        );
    }

    #[test]
    fn test_heading_includes_inline_children() {
        let (output, _) = render(
            "<Title>The <i>mean</i> value</Title>",
            Some(&NodeKind::Section),
        );
        assert_eq!(output, lines(&["The *mean* value", "----------------", ""]));
    }

    #[test]
    fn test_paragraph_with_inline_markup() {
        let (output, _) = render(
            "<Paragraph>Hello <i>world</i>, this is <b>bold </b>text.</Paragraph>",
            Some(&NodeKind::Session),
        );
        assert_eq!(output, lines(&["Hello *world*, this is **bold** text.", ""]));
    }

    #[test]
    fn test_paragraph_collapses_layout_whitespace() {
        let (output, _) = render(
            "<Paragraph>\n    Wrapped\n    source   text\n</Paragraph>",
            None,
        );
        assert_eq!(output, lines(&["Wrapped source text", ""]));
    }

    #[test]
    fn test_empty_paragraph_produces_nothing() {
        let (output, _) = render("<Paragraph>  \n </Paragraph>", None);
        assert!(output.is_empty());
    }

    #[test]
    fn test_paragraph_split_around_block_child() {
        let (output, _) = render(
            r#"<Paragraph>Before <Image src="a.png"/> after</Paragraph>"#,
            None,
        );
        assert_eq!(
            output,
            lines(&["Before", "", ".. image:: a.png", "", "after", ""])
        );
    }

    #[test]
    fn test_box_with_heading() {
        let (output, _) = render(
            "<Box><Heading>Key point</Heading><Paragraph>Remember this.</Paragraph></Box>",
            None,
        );
        assert_eq!(
            output,
            lines(&[
                ".. admonition:: Key point",
                "",
                "    Remember this.",
                "",
            ])
        );
    }

    #[test]
    fn test_box_without_heading() {
        let (output, _) = render("<Box><Paragraph>Plain.</Paragraph></Box>", None);
        assert_eq!(
            output,
            lines(&[".. container:: box", "", "    Plain.", ""])
        );
    }

    #[test]
    fn test_study_note() {
        let (output, _) = render("<StudyNote><Paragraph>Note.</Paragraph></StudyNote>", None);
        assert_eq!(output, lines(&[".. note::", "", "    Note.", ""]));
    }

    #[test]
    fn test_activity_with_question_and_answer() {
        let xml = "<Activity><Heading>Activity 1</Heading>\
                   <Question><Paragraph>Why?</Paragraph></Question>\
                   <Answer><Paragraph>Because.</Paragraph></Answer></Activity>";
        let (output, _) = render(xml, None);
        assert_eq!(
            output,
            lines(&[
                ".. activity:: Activity 1",
                "",
                "    Why?",
                "",
                "    .. activity-answer::",
                "",
                "        Because.",
                "",
            ])
        );
    }

    #[test]
    fn test_activity_without_heading() {
        let (output, _) = render(
            "<Activity><Question><Paragraph>Q</Paragraph></Question></Activity>",
            None,
        );
        assert_eq!(output, lines(&[".. activity::", "", "    Q", ""]));
    }

    #[test]
    fn test_reading_and_discussion() {
        let (output, _) = render(
            "<Reading><Heading>Reading 2</Heading><Paragraph>Text</Paragraph></Reading>",
            None,
        );
        assert_eq!(output, lines(&[".. reading:: Reading 2", "", "    Text", ""]));

        let (output, _) = render(
            "<Discussion><Paragraph>Talk</Paragraph></Discussion>",
            None,
        );
        assert_eq!(
            output,
            lines(&[".. activity-discussion::", "", "    Talk", ""])
        );
    }

    #[test]
    fn test_quote_with_source_reference() {
        let (output, _) = render(
            "<Quote><Paragraph>To be.</Paragraph><SourceReference>Shakespeare</SourceReference></Quote>",
            None,
        );
        assert_eq!(
            output,
            lines(&["    To be.", "", "    -- Shakespeare", ""])
        );
    }

    #[test]
    fn test_reference() {
        let (output, _) = render("<Reference> Smith 2001 </Reference>", None);
        assert_eq!(output, lines(&[".. [Smith 2001] Smith 2001", ""]));
    }

    #[test]
    fn test_internal_section_with_rubric() {
        let (output, _) = render(
            "<InternalSection><Heading>Aside</Heading><Paragraph>Body</Paragraph></InternalSection>",
            None,
        );
        assert_eq!(output, lines(&[".. rubric:: Aside", "", "Body", ""]));
    }

    #[test]
    fn test_subsection_title_and_body() {
        let xml = "<SubSection><Title>Detail</Title><Paragraph>More.</Paragraph></SubSection>";
        let (output, _) = render(xml, Some(&NodeKind::Section));
        assert_eq!(output, lines(&["Detail", "~~~~~~", "", "More.", ""]));
    }

    #[test]
    fn test_bulleted_list() {
        let (output, _) = render(
            "<BulletedList><ListItem>One</ListItem><ListItem>Two</ListItem></BulletedList>",
            None,
        );
        assert_eq!(output, lines(&["* One", "* Two", ""]));
    }

    #[test]
    fn test_marker_chosen_by_parent_kind() {
        let (output, _) = render(
            "<NumberedList><ListItem>One</ListItem><SubListItem>Two</SubListItem></NumberedList>",
            None,
        );
        assert_eq!(output, lines(&["#. One", "#. Two", ""]));

        let (output, _) = render("<ListItem>Alone</ListItem>", None);
        assert_eq!(output, lines(&["* Alone"]));
    }

    #[test]
    fn test_list_item_continuation_padded_to_marker_width() {
        let xml = "<NumberedList><ListItem><Paragraph>First</Paragraph>\
                   <Paragraph>Second</Paragraph></ListItem></NumberedList>";
        let (output, _) = render(xml, None);
        assert_eq!(output, lines(&["#. First", "", "   Second", ""]));

        let xml = "<BulletedList><ListItem><Paragraph>First</Paragraph>\
                   <Paragraph>Second</Paragraph></ListItem></BulletedList>";
        let (output, _) = render(xml, None);
        assert_eq!(output, lines(&["* First", "", "  Second", ""]));
    }

    #[test]
    fn test_nested_list() {
        let xml = "<BulletedList><ListItem>Outer\
                   <NumberedSubsidiaryList><SubListItem>a</SubListItem><SubListItem>b</SubListItem></NumberedSubsidiaryList>\
                   </ListItem><ListItem>Next</ListItem></BulletedList>";
        let (output, _) = render(xml, None);
        assert_eq!(
            output,
            lines(&["* Outer", "", "  #. a", "  #. b", "", "* Next", ""])
        );
    }

    #[test]
    fn test_list_item_starting_with_nested_list() {
        let xml = "<BulletedList><ListItem><BulletedSubsidiaryList>\
                   <SubListItem>a</SubListItem><SubListItem>b</SubListItem>\
                   </BulletedSubsidiaryList></ListItem></BulletedList>";
        let (output, _) = render(xml, None);
        assert_eq!(output, lines(&["* * a", "  * b", ""]));
    }

    #[test]
    fn test_inline_computer_code() {
        let (output, _) = render(
            "<Paragraph>Run <ComputerCode>ls </ComputerCode>now</Paragraph>",
            None,
        );
        assert_eq!(output, lines(&["Run ``ls`` now", ""]));
    }

    #[test]
    fn test_multiline_computer_code_is_a_block() {
        let (output, _) = render(
            "<ComputerCode>\nfor x in y:\n    print(x)\n</ComputerCode>",
            None,
        );
        assert_eq!(
            output,
            lines(&[
                ".. sourcecode::",
                "",
                "    for x in y:",
                "        print(x)",
                "",
            ])
        );
    }

    #[test]
    fn test_equation_rewritten_to_single_line() {
        let stub = |_: &ContentNode| Some("\\[x^2\n\\]".to_owned());
        let (output, _) = render_with(
            &stub,
            "<Equation><MathML><math/></MathML></Equation>",
            None,
        );
        assert_eq!(output, lines(&["$$x^2$$", ""]));
    }

    #[test]
    fn test_equation_escapes_backslashes() {
        let (output, _) = render(
            r#"<Equation><MathML><math display="block"><mfrac><mn>1</mn><mn>2</mn></mfrac></math></MathML></Equation>"#,
            None,
        );
        assert_eq!(output, lines(&[r"$$\\frac{1}{2}$$", ""]));
    }

    #[test]
    fn test_untranslatable_equation_is_omitted() {
        let stub = |_: &ContentNode| -> Option<String> { None };
        let (output, scope) = render_with(&stub, "<Equation><MathML/></Equation>", None);
        assert!(output.is_empty());
        assert!(scope.diagnostics().is_empty());
    }

    #[test]
    fn test_unknown_kind_diagnosed_once_and_skipped() {
        let (output, scope) = render(
            "<Timing><Paragraph>Hidden</Paragraph><Image src=\"x.png\"/></Timing>",
            None,
        );
        assert!(output.is_empty());
        assert_eq!(
            scope.diagnostics(),
            &[Diagnostic::UnrecognizedElement {
                tag: "Timing".to_owned()
            }]
        );
    }

    #[test]
    fn test_traversal_continues_after_unknown_kind() {
        let (output, scope) = render(
            "<Paragraph>a <Timing>1h</Timing>b <i>c</i></Paragraph>",
            None,
        );
        assert_eq!(output, lines(&["a b *c*", ""]));
        assert_eq!(scope.diagnostics().len(), 1);
    }

    #[test]
    fn test_structural_kinds_produce_nothing() {
        for xml in ["<Section><Paragraph>x</Paragraph></Section>", "<Unit/>", "<tr/>"] {
            let (output, scope) = render(xml, None);
            assert!(output.is_empty());
            assert!(scope.diagnostics().is_empty());
        }
    }

    #[test]
    fn test_display_math() {
        assert_eq!(display_math("\\[a\r\n+b\\]"), "$$a+b$$");
        assert_eq!(display_math(r"$\alpha$"), r"$\\alpha$");
    }
}
