//! Attributed content tree for OU-XML courseware documents.
//!
//! Parses a courseware document into a [`ContentNode`] tree that keeps the
//! XML text layout intact: text before an element's first child lives in
//! [`ContentNode::text`], text after an element (but still inside its parent)
//! lives in [`ContentNode::tail`].
//!
//! # Example
//!
//! ```
//! use ourst_tree::{CoursewareParser, NodeKind};
//!
//! let tree = CoursewareParser::new()
//!     .parse("<Paragraph>Hello <i>world</i>!</Paragraph>")
//!     .unwrap();
//! assert_eq!(tree.kind, NodeKind::Paragraph);
//! assert_eq!(tree.children[0].tail, "!");
//! ```

mod error;
mod node;
mod parser;

pub use error::ParseError;
pub use node::{ContentNode, NodeKind};
pub use parser::CoursewareParser;
