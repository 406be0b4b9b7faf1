//! Leading-whitespace prefix for block output.

use std::fmt;

/// Width of one nesting level for directive bodies and block quotes.
const NESTED_WIDTH: usize = 4;

/// Prefix written before every line of a block.
///
/// Indents are values: each derivation returns a new prefix and leaves the
/// original untouched, so callers can hand them down the recursion freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indent(String);

impl Indent {
    /// Empty prefix.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// One nesting level deeper.
    #[must_use]
    pub fn nested(&self) -> Self {
        self.padded(NESTED_WIDTH)
    }

    /// Prefix followed by a list marker, used for the first line of an item.
    #[must_use]
    pub fn marked(&self, marker: &str) -> Self {
        Self(format!("{}{marker}", self.0))
    }

    /// Prefix followed by `width` spaces.
    #[must_use]
    pub fn padded(&self, width: usize) -> Self {
        Self(format!("{}{}", self.0, " ".repeat(width)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivations_do_not_mutate() {
        let base = Indent::none().nested();
        let marked = base.marked("#. ");
        let padded = base.padded(3);

        assert_eq!(base.as_str(), "    ");
        assert_eq!(marked.as_str(), "    #. ");
        assert_eq!(padded.as_str(), "       ");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}x", Indent::none().marked("* ")), "* x");
    }
}
