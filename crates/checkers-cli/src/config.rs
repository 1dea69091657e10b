//! Configuration file loading for the checkers shell.
//!
//! Settings live in `checkers.toml` in the current directory unless another
//! path is given on the command line.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How the board is drawn.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Draw pieces as unicode discs instead of letters.
    #[serde(default)]
    pub unicode: bool,
    /// Mark the selected piece and its destinations.
    #[serde(default = "default_true")]
    pub show_highlights: bool,
    /// Print row numbers and column letters around the board.
    #[serde(default = "default_true")]
    pub show_coordinates: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            unicode: false,
            show_highlights: true,
            show_coordinates: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Shell configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Tracing filter used when `RUST_LOG` is not set. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_level: default_log_level(),
            display: DisplayConfig::default(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, [`Self::config_path()`] is
    /// read if present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the default path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("checkers.toml")
    }
}
