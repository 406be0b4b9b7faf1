//! Courseware XML parser.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use std::collections::HashMap;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::ParseError;
use crate::node::{ContentNode, NodeKind};

/// Parse courseware XML into a [`ContentNode`] tree.
///
/// Processing instructions, comments, the XML declaration and DOCTYPE are
/// dropped. Whitespace is kept exactly as authored.
pub struct CoursewareParser;

impl CoursewareParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse a document and return its root element.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not well-formed XML or contains no
    /// element.
    pub fn parse(&self, xml: &str) -> Result<ContentNode, ParseError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let mut root = self.open_element(&reader, &e)?;
                    self.read_children(&mut reader, &mut root)?;
                    return Ok(root);
                }
                Event::Empty(e) => return self.open_element(&reader, &e),
                Event::Eof => return Err(ParseError::MissingRoot),
                // Prolog content before the root element
                _ => {}
            }
            buf.clear();
        }
    }

    fn read_children<R: BufRead>(
        &self,
        reader: &mut Reader<R>,
        node: &mut ContentNode,
    ) -> Result<(), ParseError> {
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let mut child = self.open_element(reader, &e)?;
                    self.read_children(reader, &mut child)?;
                    node.children.push(child);
                }
                Event::Empty(e) => {
                    let child = self.open_element(reader, &e)?;
                    node.children.push(child);
                }
                Event::Text(e) => {
                    let text = reader.decoder().decode(&e)?;
                    append_text(node, &text);
                }
                Event::GeneralRef(e) => {
                    let name = reader.decoder().decode(&e)?;
                    append_text(node, &decode_entity(&name));
                }
                Event::CData(e) => {
                    append_text(node, &String::from_utf8_lossy(&e));
                }
                Event::End(_) | Event::Eof => return Ok(()),
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
            buf.clear();
        }
    }

    fn open_element<R: BufRead>(
        &self,
        reader: &Reader<R>,
        e: &BytesStart,
    ) -> Result<ContentNode, ParseError> {
        let name = e.name();
        let tag = reader.decoder().decode(name.as_ref())?;
        let mut node = ContentNode::new(NodeKind::from_tag(&tag));
        node.attrs = self.decode_attrs(reader, e);
        Ok(node)
    }

    fn decode_attrs<R: BufRead>(
        &self,
        reader: &Reader<R>,
        e: &BytesStart,
    ) -> HashMap<String, String> {
        let mut attrs = HashMap::new();
        for attr in e.attributes().flatten() {
            let key = reader.decoder().decode(attr.key.as_ref()).map_or_else(
                |_| String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                std::borrow::Cow::into_owned,
            );
            if key.starts_with("xmlns") {
                continue;
            }
            let value = attr.unescape_value().map_or_else(
                |_| String::from_utf8_lossy(&attr.value).into_owned(),
                std::borrow::Cow::into_owned,
            );
            attrs.insert(key, value);
        }
        attrs
    }
}

impl Default for CoursewareParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Append text to the node's text, or to the last child's tail.
fn append_text(node: &mut ContentNode, text: &str) {
    if let Some(last_child) = node.children.last_mut() {
        last_child.tail.push_str(text);
    } else {
        node.text.push_str(text);
    }
}

/// Decode an entity reference name (without `&` and `;`).
///
/// Unknown entities are preserved as written.
fn decode_entity(name: &str) -> String {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        return value
            .and_then(char::from_u32)
            .map_or_else(|| format!("&{name};"), String::from);
    }
    named_entity(name).map_or_else(|| format!("&{name};"), str::to_owned)
}

/// XML and common HTML named entities found in legacy courseware.
fn named_entity(name: &str) -> Option<&'static str> {
    Some(match name {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "apos" => "'",
        "quot" => "\"",
        "nbsp" => "\u{00a0}",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "bull" => "\u{2022}",
        "hellip" => "\u{2026}",
        "rarr" => "\u{2192}",
        "larr" => "\u{2190}",
        "le" => "\u{2264}",
        "ge" => "\u{2265}",
        "ne" => "\u{2260}",
        "plusmn" => "\u{00b1}",
        "times" => "\u{00d7}",
        "divide" => "\u{00f7}",
        "minus" => "\u{2212}",
        "deg" => "\u{00b0}",
        "copy" => "\u{00a9}",
        "reg" => "\u{00ae}",
        "trade" => "\u{2122}",
        "pound" => "\u{00a3}",
        "euro" => "\u{20ac}",
        "sect" => "\u{00a7}",
        "middot" => "\u{00b7}",
        "frac12" => "\u{00bd}",
        "frac14" => "\u{00bc}",
        "frac34" => "\u{00be}",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(xml: &str) -> ContentNode {
        CoursewareParser::new().parse(xml).unwrap()
    }

    #[test]
    fn test_parse_text_and_tail() {
        let tree = parse("<Paragraph>Hello <i>world</i> again</Paragraph>");

        assert_eq!(tree.kind, NodeKind::Paragraph);
        assert_eq!(tree.text, "Hello ");
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].kind, NodeKind::Italic);
        assert_eq!(tree.children[0].text, "world");
        assert_eq!(tree.children[0].tail, " again");
    }

    #[test]
    fn test_parse_attributes() {
        let tree = parse(r#"<Image src="C:\imgs\fig1.png" width="100"/>"#);

        assert_eq!(tree.kind, NodeKind::Image);
        assert_eq!(tree.attr("src"), Some(r"C:\imgs\fig1.png"));
        assert_eq!(tree.attr("width"), Some("100"));
    }

    #[test]
    fn test_parse_skips_prolog_and_processing_instructions() {
        let tree = parse(
            "<?xml version=\"1.0\"?><!-- c --><Item><?pi data?><Unit><Session/></Unit></Item>",
        );

        assert_eq!(tree.kind, NodeKind::Item);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].kind, NodeKind::Unit);
        assert_eq!(tree.children[0].children[0].kind, NodeKind::Session);
    }

    #[test]
    fn test_parse_entities() {
        let tree = parse("<Paragraph>a&nbsp;b &amp; c&#8212;d&#x41;&unknown;</Paragraph>");

        assert_eq!(tree.text, "a\u{00a0}b & c\u{2014}dA&unknown;");
    }

    #[test]
    fn test_parse_entity_after_child_goes_to_tail() {
        let tree = parse("<Paragraph><b>x</b>&lt;y</Paragraph>");

        assert_eq!(tree.children[0].tail, "<y");
    }

    #[test]
    fn test_parse_cdata() {
        let tree = parse("<ComputerCode><![CDATA[a < b]]></ComputerCode>");

        assert_eq!(tree.text, "a < b");
    }

    #[test]
    fn test_parse_unknown_tags_kept() {
        let tree = parse("<Session><Timing>1h</Timing></Session>");

        assert_eq!(tree.children[0].kind, NodeKind::Other("Timing".to_owned()));
        assert_eq!(tree.children[0].text, "1h");
    }

    #[test]
    fn test_parse_empty_document() {
        let err = CoursewareParser::new().parse("   ").unwrap_err();
        assert!(matches!(err, ParseError::MissingRoot));
    }

    #[test]
    fn test_parse_malformed_document() {
        let result = CoursewareParser::new().parse("<Session><Title></Session>");
        assert!(result.is_err());
    }
}
