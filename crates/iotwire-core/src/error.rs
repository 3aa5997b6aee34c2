//! Error types for configuration loading

use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for configuration operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML configuration could not be parsed
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON configuration could not be parsed
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file has an extension we do not read
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Log level name is not recognized
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
