//! Presentation-MathML to LaTeX translation for courseware equations.
//!
//! The converter only depends on the [`MathTranslator`] trait. [`LatexTranslator`]
//! is the built-in implementation; closures of type
//! `Fn(&ContentNode) -> Option<String>` also implement the trait.
//!
//! # Example
//!
//! ```
//! use ourst_math::{LatexTranslator, MathTranslator};
//! use ourst_tree::CoursewareParser;
//!
//! let mathml = CoursewareParser::new()
//!     .parse(r#"<math display="block"><msup><mi>x</mi><mn>2</mn></msup></math>"#)
//!     .unwrap();
//! assert_eq!(LatexTranslator::new().translate(&mathml).as_deref(), Some(r"\[x^2\]"));
//! ```

mod latex;
mod symbols;

use ourst_tree::ContentNode;

pub use latex::LatexTranslator;

/// Translate a MathML element into a LaTeX equation string.
///
/// Implementations must be deterministic and free of side effects. `None`
/// means the element could not be translated.
pub trait MathTranslator {
    fn translate(&self, mathml: &ContentNode) -> Option<String>;
}

impl<F> MathTranslator for F
where
    F: Fn(&ContentNode) -> Option<String>,
{
    fn translate(&self, mathml: &ContentNode) -> Option<String> {
        self(mathml)
    }
}
