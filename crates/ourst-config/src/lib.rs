//! Configuration management for ourst.
//!
//! Parses `ourst.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [references]
//! block = 5
//! part = 1
//!
//! [output]
//! title = "Introducing statistics"
//! clean = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override default structural-block number.
    pub block: Option<u32>,
    /// Override default structural-part number.
    pub part: Option<u32>,
    /// Override root index title.
    pub title: Option<String>,
    /// Override clean flag.
    pub clean: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "ourst.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cross-reference defaults.
    pub references: ReferencesConfig,
    /// Output tree configuration.
    pub output: OutputConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Defaults for cross-references whose target omits the block or part.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReferencesConfig {
    /// Default structural-block number.
    pub block: Option<u32>,
    /// Default structural-part number.
    pub part: Option<u32>,
}

/// Output tree configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root index title (defaults to the destination directory name).
    pub title: Option<String>,
    /// Remove an existing destination tree before writing.
    pub clean: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            title: None,
            clean: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `ourst.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(block) = settings.block {
            self.references.block = Some(block);
        }
        if let Some(part) = settings.part {
            self.references.part = Some(part);
        }
        if let Some(title) = &settings.title {
            self.output.title = Some(title.clone());
        }
        if let Some(clean) = settings.clean {
            self.output.clean = clean;
        }
    }

    /// Get the default block and part numbers.
    ///
    /// Both are required to resolve cross-references, but may come from
    /// either the config file or the command line.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if either value is missing.
    pub fn require_references(&self) -> Result<(u32, u32), ConfigError> {
        let block = self.references.block.ok_or_else(|| {
            ConfigError::Validation(
                "references.block is required (set it in ourst.toml or pass --block)".to_owned(),
            )
        })?;
        let part = self.references.part.ok_or_else(|| {
            ConfigError::Validation(
                "references.part is required (set it in ourst.toml or pass --part)".to_owned(),
            )
        })?;
        Ok((block, part))
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(title) = &self.output.title
            && title.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "output.title cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Search for a config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}
