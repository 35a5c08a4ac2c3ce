//! Logging configuration.

use std::path::{Path, PathBuf};

use super::defaults::DEFAULT_LOG_FILE;

/// Where log output goes besides stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Directory for the log file; `None` logs to stdout only
    directory: Option<PathBuf>,
    /// Log file name inside `directory`
    file_name: String,
}

impl LoggingConfig {
    /// Create a stdout-only logging configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also write logs to a file in `directory`.
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Set the log file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Get the log directory, if file logging is enabled.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Get the log file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
