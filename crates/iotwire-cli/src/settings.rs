//! Tool configuration: file first, then command line overrides

use anyhow::{Context, Result};
use iotwire_core::CodecConfig;
use std::path::Path;

/// Load the configuration file (if any) and apply command line overrides
///
/// The resulting log level is validated here so a typo fails before any work starts.
pub fn load(path: Option<&Path>, log_level: Option<&str>, pretty: bool) -> Result<CodecConfig> {
    let mut config = match path {
        Some(path) => CodecConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => CodecConfig::default(),
    };

    if let Some(level) = log_level {
        config = config.with_log_level(level);
    }
    if pretty {
        config = config.with_pretty(true);
    }

    config.log_level().context("invalid log level")?;
    Ok(config)
}
