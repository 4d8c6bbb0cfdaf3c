//! Console appender implementation

use crate::core::{Appender, Channel, LogEntry, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// Severity-aware console
///
/// Error and warn channels go to stderr, the generic log channel to stdout.
/// Context, when present, follows the line as a JSON object.
pub struct ConsoleAppender {
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn render(&self, entry: &LogEntry) -> String {
        let line = self.paint(entry, entry.formatted());
        match entry.context {
            Some(ref context) => format!("{} {}", line, context.to_json()),
            None => line,
        }
    }

    #[cfg(feature = "console")]
    fn paint(&self, entry: &LogEntry, line: String) -> String {
        if self.use_colors {
            line.color(entry.level.color_code()).to_string()
        } else {
            line
        }
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, _entry: &LogEntry, line: String) -> String {
        line
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.render(entry);

        match entry.channel() {
            Channel::Error | Channel::Warn => writeln!(std::io::stderr().lock(), "{}", output)?,
            Channel::Log => writeln!(std::io::stdout().lock(), "{}", output)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
