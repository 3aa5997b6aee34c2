//! iotwire-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber with a reloadable level filter
//! - [`ReloadHandle`] to change the level after installation

mod reload;
mod subscriber;

pub use iotwire_core::LogLevel;
pub use reload::{ReloadError, ReloadHandle};
pub use subscriber::init_logging;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
