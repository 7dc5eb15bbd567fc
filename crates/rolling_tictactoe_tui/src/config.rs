//! Terminal UI configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end, read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File the tracing subscriber writes to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Title shown above the board.
    #[serde(default = "default_title")]
    title: String,

    /// Show each player's rolling queue beside the board.
    #[serde(default = "default_show_history")]
    show_history: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rolling_tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_title() -> String {
    "Tic Tac Toe".to_string()
}

fn default_show_history() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            title: default_title(),
            show_history: default_show_history(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(title = %config.title, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: TuiConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.title(), "Tic Tac Toe");
        assert!(*config.show_history());
    }

    #[test]
    fn test_partial_toml_overrides_fields() {
        let config: TuiConfig = toml::from_str(
            r#"
            title = "Rolling"
            show_history = false
            "#,
        )
        .expect("partial config parses");
        assert_eq!(config.title(), "Rolling");
        assert!(!*config.show_history());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_error_reports_location() {
        let err = ConfigError::new("boom".to_string());
        assert_eq!(err.file, file!());
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
