//! Tracing library adapter implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Logger that forwards to the `tracing` crate.
///
/// Output only appears once a subscriber is installed, e.g. via
/// [`crate::logging::init_logging`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new tracing logger adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "geoverlay", "{}", args),
            LogLevel::Debug => tracing::debug!(target: "geoverlay", "{}", args),
            LogLevel::Info => tracing::info!(target: "geoverlay", "{}", args),
            LogLevel::Warn => tracing::warn!(target: "geoverlay", "{}", args),
            LogLevel::Error => tracing::error!(target: "geoverlay", "{}", args),
        }
    }
}
