use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::FrontendConfig;

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

impl FrontendConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/emufront/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("emufront").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `FrontendConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(FrontendConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: FrontendConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The clock offset is less than a day
    /// - Status messages are visible for at least one frame
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-23..=23).contains(&self.clock_offset_hours) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "clock_offset_hours must be within -23..=23, got {}",
                    self.clock_offset_hours
                ),
            });
        }

        if self.toast_frames == 0 {
            return Err(ConfigError::ValidationError {
                message: "toast_frames must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
