//! In-memory logger that keeps every message.

use crate::log::{LogLevel, Logger};
use parking_lot::Mutex;
use std::fmt::Arguments;

/// A single captured log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Level the message was logged at
    pub level: LogLevel,
    /// Formatted message text
    pub message: String,
}

/// Logger that stores messages so they can be inspected later.
///
/// Intended for tests and for hosts that surface diagnostics in their own UI.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured records, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Messages captured at `Warn` level.
    pub fn warnings(&self) -> Vec<String> {
        self.messages_at(LogLevel::Warn)
    }

    /// Messages captured at exactly `level`.
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    /// Drop all captured records.
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        self.records.lock().push(LogRecord {
            level,
            message: args.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let logger = MemoryLogger::new();
        logger.info(format_args!("first"));
        logger.warn(format_args!("second {}", 2));

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, LogLevel::Info);
        assert_eq!(records[1].message, "second 2");
    }

    #[test]
    fn test_warnings_filter() {
        let logger = MemoryLogger::new();
        logger.debug(format_args!("noise"));
        logger.warn(format_args!("careful"));
        assert_eq!(logger.warnings(), vec!["careful".to_string()]);
    }

    #[test]
    fn test_clear() {
        let logger = MemoryLogger::new();
        logger.error(format_args!("boom"));
        logger.clear();
        assert!(logger.records().is_empty());
    }
}
