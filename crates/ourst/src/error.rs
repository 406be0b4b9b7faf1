//! CLI error types.

use ourst_config::ConfigError;
use ourst_convert::EmitError;
use ourst_tree::ParseError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid courseware XML: {0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Emit(#[from] EmitError),

    #[error("{0}")]
    Validation(String),
}
