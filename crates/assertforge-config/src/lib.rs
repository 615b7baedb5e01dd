//! Configuration system for AssertForge.
//!
//! Load rendering limits and logging preferences from TOML or YAML so that
//! failure messages can be tuned per project without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use assertforge_config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     [render]
//!     max_string_length = 120
//!     max_sequence_items = 25
//!
//!     [logging]
//!     level = "debug"
//! "#).unwrap();
//!
//! assert_eq!(config.render.max_string_length, 120);
//! assert_eq!(config.render.max_sequence_items, 25);
//! assert_eq!(config.logging.level, "debug");
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use assertforge_config::EngineConfig;
//!
//! let config = EngineConfig::load("assertforge.toml").unwrap_or_default();
//! assert_eq!(config.render.max_string_length, 60);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Limits applied when rendering failure messages.
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging preferences for the console layer.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML or YAML file, chosen
    /// by extension (`.yaml`/`.yml` for YAML, anything else for TOML).
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, fails to parse, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads and validates configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses and validates configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the render configuration.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Sets the logging level directive.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Checks every section for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.render.validate()?;
        self.logging.validate()
    }
}

/// Limits used by the text message writer.
///
/// Every limit must be non-zero. Values beyond a limit are clipped and
/// marked with an ellipsis rather than rendered in full.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct RenderConfig {
    /// Maximum characters of a string value before it is clipped.
    pub max_string_length: usize,

    /// Maximum sequence items listed before the rest are elided.
    pub max_sequence_items: usize,

    /// Maximum nesting depth of sequences before they are elided.
    pub max_depth: usize,

    /// Line width used when clipping strings around a mismatch.
    pub max_line_length: usize,
}

impl RenderConfig {
    pub const DEFAULT_MAX_STRING_LENGTH: usize = 60;
    pub const DEFAULT_MAX_SEQUENCE_ITEMS: usize = 10;
    pub const DEFAULT_MAX_DEPTH: usize = 8;
    pub const DEFAULT_MAX_LINE_LENGTH: usize = 78;

    /// Sets the maximum string length.
    pub fn with_max_string_length(mut self, length: usize) -> Self {
        self.max_string_length = length;
        self
    }

    /// Sets the maximum number of listed sequence items.
    pub fn with_max_sequence_items(mut self, items: usize) -> Self {
        self.max_sequence_items = items;
        self
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the line width.
    pub fn with_max_line_length(mut self, length: usize) -> Self {
        self.max_line_length = length;
        self
    }

    /// Rejects zero limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("max_string_length", self.max_string_length),
            ("max_sequence_items", self.max_sequence_items),
            ("max_depth", self.max_depth),
            ("max_line_length", self.max_line_length),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(ConfigError::Invalid(format!(
                    "render.{} must be greater than zero",
                    name
                )));
            }
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_string_length: Self::DEFAULT_MAX_STRING_LENGTH,
            max_sequence_items: Self::DEFAULT_MAX_SEQUENCE_ITEMS,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_line_length: Self::DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

/// Logging configuration consumed by the console layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct LoggingConfig {
    /// Default `tracing` level directive for assertforge targets.
    pub level: String,

    /// Whether console output is colored.
    pub color: bool,

    /// Whether passing assertions are printed too.
    pub show_passes: bool,
}

impl LoggingConfig {
    const LEVELS: [&'static str; 5] = ["trace", "debug", "info", "warn", "error"];

    /// Rejects unknown level names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_ascii_lowercase();
        if Self::LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::Invalid(format!(
                "logging.level must be one of {:?}, got {:?}",
                Self::LEVELS,
                self.level
            )))
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            color: true,
            show_passes: false,
        }
    }
}

#[cfg(test)]
mod tests;
