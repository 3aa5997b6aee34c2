//! Global subscriber installation

use crate::reload::{ReloadHandle, convert_level_to_filter};
use iotwire_core::LogLevel;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;

/// Initialize the logging system
///
/// Installs a registry with a reloadable level filter and a human readable layer
/// writing to stderr. When `RUST_LOG` is set, its directives further narrow what the
/// stderr layer prints. Returns `false` without changing anything when a global
/// subscriber is already installed.
pub fn init_logging(level: LogLevel) -> bool {
    let (filter, handle) = reload::Layer::new(convert_level_to_filter(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_directives());

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    // Ignore the error if a subscriber is already set
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }

    ReloadHandle::global().set_handle(handle);
    tracing::debug!(%level, "logging initialized");
    true
}

fn env_directives() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(LevelFilter::TRACE.to_string()))
}
