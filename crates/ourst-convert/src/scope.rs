//! Per-unit conversion state and diagnostics.

use std::fmt;

use crate::deferred::DeferredQueue;

/// Non-fatal problem found while converting a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// Element kind with no conversion rule; its output was dropped.
    UnrecognizedElement { tag: String },
    /// Heading whose parent has no underline style; a fallback was used.
    UnrecognizedHeadingParent { tag: String },
}

impl Diagnostic {
    /// Tag of the element the diagnostic is about.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::UnrecognizedElement { tag } | Self::UnrecognizedHeadingParent { tag } => tag,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedElement { tag } => write!(f, "unrecognized element <{tag}>"),
            Self::UnrecognizedHeadingParent { tag } => {
                write!(f, "heading inside unrecognized parent <{tag}>")
            }
        }
    }
}

/// State owned by the output unit currently being converted.
#[derive(Debug, Default)]
pub struct Scope {
    deferred: DeferredQueue,
    diagnostics: Vec<Diagnostic>,
}

impl Scope {
    /// Fresh scope for a new output unit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a block for the end of the unit.
    pub fn defer(&mut self, block: Vec<String>) {
        self.deferred.push_block(block);
    }

    /// Record a diagnostic and log it.
    pub fn diagnose(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(tag = diagnostic.tag(), "{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    #[must_use]
    pub fn deferred(&self) -> &DeferredQueue {
        &self.deferred
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Remove and return the diagnostics recorded so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Consume the scope, returning its deferred lines.
    #[must_use]
    pub fn into_deferred_lines(self) -> Vec<String> {
        self.deferred.into_lines()
    }
}
