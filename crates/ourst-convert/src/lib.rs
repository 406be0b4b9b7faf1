//! Conversion engine from OU-XML courseware trees to reStructuredText.
//!
//! [`NodeConverter`] maps one content element to lines of markup.
//! [`HierarchyEmitter`] drives it across the unit, session and section
//! levels, producing one [`OutputUnit`] per level for an [`OutputSink`].
//!
//! # Example
//!
//! ```
//! use ourst_convert::{HierarchyEmitter, MemorySink, NodeConverter, ReferenceDefaults};
//! use ourst_math::LatexTranslator;
//! use ourst_tree::CoursewareParser;
//!
//! let root = CoursewareParser::new()
//!     .parse("<Unit><Session><Title>Intro</Title></Session></Unit>")
//!     .unwrap();
//! let math = LatexTranslator::new();
//! let converter = NodeConverter::new(&math, ReferenceDefaults::numbered(1, 1));
//! let mut sink = MemorySink::new();
//!
//! let report = HierarchyEmitter::new(&converter)
//!     .emit(&root, "Course", &mut sink)
//!     .unwrap();
//! assert_eq!(report.units_written, 2);
//! assert_eq!(sink.get("session1/index.rst").unwrap().render(), "Intro\n=====\n\n");
//! ```

mod converter;
mod deferred;
mod emitter;
mod error;
mod indent;
mod reference;
mod scope;
mod sink;
mod text;

pub use converter::NodeConverter;
pub use deferred::DeferredQueue;
pub use emitter::{EmitReport, HierarchyEmitter};
pub use error::EmitError;
pub use indent::Indent;
pub use reference::{ReferenceDefaults, resolve_target};
pub use scope::{Diagnostic, Scope};
pub use sink::{FsSink, MemorySink, OutputSink, OutputUnit};
