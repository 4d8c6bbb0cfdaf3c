//! In-memory appender
//!
//! Keeps every entry it receives so that hosts and tests can inspect what a
//! logger emitted on each channel.

use crate::core::{Appender, Channel, LogEntry, Result};
use parking_lot::Mutex;
use std::sync::Arc;

pub struct MemoryAppender {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

/// Read side of a [`MemoryAppender`], usable after the appender was moved
/// into a logger
#[derive(Debug, Clone)]
pub struct MemoryHandle {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn handle(&self) -> MemoryHandle {
        MemoryHandle {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl Default for MemoryAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

impl MemoryHandle {
    /// Snapshot of every captured entry, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Entries routed to `channel`
    pub fn on(&self, channel: Channel) -> Vec<LogEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.channel() == channel)
            .cloned()
            .collect()
    }

    pub fn last(&self) -> Option<LogEntry> {
        self.entries.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_handle_sees_appended_entries() {
        let mut appender = MemoryAppender::new();
        let handle = appender.handle();

        appender.append(&LogEntry::new(LogLevel::Error, "e")).unwrap();
        appender.append(&LogEntry::new(LogLevel::Warn, "w")).unwrap();
        appender.append(&LogEntry::new(LogLevel::Debug, "d")).unwrap();

        assert_eq!(handle.len(), 3);
        assert_eq!(handle.on(Channel::Error).len(), 1);
        assert_eq!(handle.on(Channel::Warn).len(), 1);
        assert_eq!(handle.on(Channel::Log)[0].message, "d");

        handle.clear();
        assert!(handle.is_empty());
    }
}
