//! Output unit destinations.
//!
//! - [`OutputSink`]: Trait for destinations
//! - [`FsSink`]: Writes units below a root directory
//! - [`MemorySink`]: Collects units in memory (tests and dry runs)

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EmitError;

/// Lines of one output document and its path relative to the output root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputUnit {
    /// Relative path, e.g. `session1/section2/index.rst`.
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl OutputUnit {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// Document text: every line terminated by a newline.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|line| line.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Destination for output units.
pub trait OutputSink {
    /// Store one unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit cannot be stored.
    fn write_unit(&mut self, unit: &OutputUnit) -> Result<(), EmitError>;
}

/// Writes output units as files below a root directory.
#[derive(Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory, removing an existing tree first if `clean`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be removed or created.
    pub fn prepare(&self, clean: bool) -> Result<(), EmitError> {
        if clean && self.root.exists() {
            tracing::debug!(path = %self.root.display(), "Removing existing output tree");
            fs::remove_dir_all(&self.root).map_err(|e| EmitError::io(&self.root, e))?;
        }
        fs::create_dir_all(&self.root).map_err(|e| EmitError::io(&self.root, e))
    }
}

impl OutputSink for FsSink {
    fn write_unit(&mut self, unit: &OutputUnit) -> Result<(), EmitError> {
        let path = self.root.join(&unit.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| EmitError::io(parent, e))?;
        }
        fs::write(&path, unit.render()).map_err(|e| EmitError::io(&path, e))?;
        tracing::debug!(path = %path.display(), lines = unit.lines.len(), "Wrote output unit");
        Ok(())
    }
}

/// Collects output units in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    units: Vec<OutputUnit>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn units(&self) -> &[OutputUnit] {
        &self.units
    }

    /// Unit stored at `path`, if any.
    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&OutputUnit> {
        let path = path.as_ref();
        self.units.iter().find(|unit| unit.path == path)
    }
}

impl OutputSink for MemorySink {
    fn write_unit(&mut self, unit: &OutputUnit) -> Result<(), EmitError> {
        self.units.push(unit.clone());
        Ok(())
    }
}
