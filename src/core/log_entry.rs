//! Log entry structure

use super::log_context::LogContext;
use super::log_level::{Channel, LogLevel};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single emitted log entry
///
/// `context` is `None` whenever the merged context was empty, so appenders
/// never receive an empty structured argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<LogContext>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            context: None,
        }
    }

    /// Attach a context, dropping it when empty
    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = (!context.is_empty()).then_some(context);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// ISO-8601 UTC timestamp with millisecond precision, e.g. `2025-01-08T10:30:45.123Z`
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// The formatted line: `[<timestamp>] [<LEVEL>]: <message>`
    pub fn formatted(&self) -> String {
        format!(
            "[{}] [{}]: {}",
            self.timestamp_iso(),
            self.level.to_str(),
            self.message
        )
    }

    #[inline]
    pub fn channel(&self) -> Channel {
        self.level.channel()
    }
}
