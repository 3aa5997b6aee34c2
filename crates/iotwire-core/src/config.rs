//! Codec configuration

use crate::LogLevel;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration shared by the codec and the command line tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Pretty-print marshalled documents (default: false for compact wire output)
    #[serde(default)]
    pub pretty: bool,

    /// Log level name (`trace`, `debug`, `info`, `warn`, `error`, `off`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            log_level: default_log_level(),
        }
    }
}

impl CodecConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the defaults.
    pub fn from_json(bytes: &[u8]) -> ConfigResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Create configuration from a TOML document
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                let text = String::from_utf8_lossy(&contents);
                Self::from_toml_str(&text)
            }
            Some("json") => Self::from_json(&contents),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    /// Parsed log level
    pub fn log_level(&self) -> ConfigResult<LogLevel> {
        self.log_level.parse()
    }

    /// Enable or disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Override the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}
