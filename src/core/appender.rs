//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// An output channel sink
///
/// Appenders receive fully formed entries; routing on
/// [`LogEntry::channel`] is up to each implementation.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
