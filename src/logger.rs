//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! and forwards them to a buffer the UI renders in its log panel.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept for the log panel.
///
const MAX_LOG_ENTRIES: usize = 500;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Bounded, shareable store of formatted log entries.
///
#[derive(Clone, Debug, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    /// Append an entry, dropping the oldest once full.
    ///
    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == MAX_LOG_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Return a snapshot of the entries, oldest first.
    ///
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Custom logger that captures logs through a callback
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }

    /// Install a logger feeding the given buffer as the global logger.
    ///
    pub fn init(level: LevelFilter, buffer: LogBuffer) -> Result<(), log::SetLoggerError> {
        let logger = CustomLogger::new(level);
        logger.set_log_callback(Box::new(move |entry| buffer.push(entry)));
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::default();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            buffer.push(format!("entry {}", i));
        }
        let entries = buffer.entries();
        assert_eq!(entries.len(), MAX_LOG_ENTRIES);
        assert_eq!(entries[0], "entry 5");
    }

    #[test]
    fn test_logger_forwards_enabled_records() {
        let buffer = LogBuffer::default();
        let logger = CustomLogger::new(LevelFilter::Info);
        let sink = buffer.clone();
        logger.set_log_callback(Box::new(move |entry| sink.push(entry)));

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("form submitted"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .args(format_args!("hidden"))
                .build(),
        );

        let entries = buffer.entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("INFO form submitted"));
    }

    #[test]
    fn test_second_init_is_an_app_error() {
        fn install() -> crate::error::AppResult<()> {
            CustomLogger::init(LevelFilter::Info, LogBuffer::default())?;
            Ok(())
        }
        let _ = install();
        let error = install().unwrap_err();
        assert!(matches!(error, crate::error::AppError::Logger(_)));
        assert!(std::error::Error::source(&error).is_some());
    }
}
