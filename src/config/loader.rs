use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, MIN_PANEL_WIDTH};
use crate::style::{StyleField, StyleState};

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
    /// Uses `<config_dir>/style-panel/config.toml` via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("style-panel").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
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
        tracing::debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The panel is at least `MIN_PANEL_WIDTH` columns wide
    /// - Every default override names an option of its field's domain
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panel.width < MIN_PANEL_WIDTH {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Panel width {} is below the minimum of {}",
                    self.panel.width, MIN_PANEL_WIDTH
                ),
            });
        }
        self.resolve_defaults().map(|_| ())
    }

    /// Builds the default style from the domain defaults and the overrides.
    pub fn resolve_defaults(&self) -> Result<StyleState, ConfigError> {
        let mut style = StyleState::default();
        for field in StyleField::ALL {
            let Some(id) = self.defaults.get(field) else {
                continue;
            };
            let option = field
                .domain()
                .find(id)
                .ok_or_else(|| ConfigError::ValidationError {
                    message: format!(
                        "Unknown option '{}' for defaults.{}",
                        id,
                        field.config_key()
                    ),
                })?;
            style.set(field, option);
        }
        Ok(style)
    }
}
