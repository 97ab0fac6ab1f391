use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/flickflow/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("flickflow").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - Missing file: `Config::default()`.
    /// - Otherwise parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Slideshow interval, top-N and UI tick are positive
    /// - Storage key and fallback source are not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slideshow.interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "slideshow.interval_ms must be greater than zero".to_string(),
            });
        }

        if self.slideshow.top_n == 0 {
            return Err(ConfigError::ValidationError {
                message: "slideshow.top_n must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_ms must be greater than zero".to_string(),
            });
        }

        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "storage.key must not be empty".to_string(),
            });
        }

        if self.fallback.source.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "fallback.source must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
