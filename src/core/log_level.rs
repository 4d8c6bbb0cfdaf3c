//! Log level definitions
//!
//! Levels follow the npm/cli ordering: `error` is the most severe (priority 0)
//! and `input` the least (priority 10). A level is enabled for a logger when
//! its priority is less than or equal to the priority of the logger's level.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    #[default]
    Info = 2,
    Http = 3,
    Verbose = 4,
    Debug = 5,
    Silly = 6,
    Help = 7,
    Data = 8,
    Prompt = 9,
    Input = 10,
}

/// Output channel an entry is routed to
///
/// Mirrors a severity-aware console: errors and warnings get their own
/// channels, everything else shares the generic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Error,
    Warn,
    Log,
}

impl LogLevel {
    /// Every level, most severe first
    pub const ALL: [LogLevel; 11] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Http,
        LogLevel::Verbose,
        LogLevel::Debug,
        LogLevel::Silly,
        LogLevel::Help,
        LogLevel::Data,
        LogLevel::Prompt,
        LogLevel::Input,
    ];

    #[inline]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Http => "HTTP",
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Silly => "SILLY",
            LogLevel::Help => "HELP",
            LogLevel::Data => "DATA",
            LogLevel::Prompt => "PROMPT",
            LogLevel::Input => "INPUT",
        }
    }

    /// Lower-case level name as used in configuration and entry objects
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Http => "http",
            LogLevel::Verbose => "verbose",
            LogLevel::Debug => "debug",
            LogLevel::Silly => "silly",
            LogLevel::Help => "help",
            LogLevel::Data => "data",
            LogLevel::Prompt => "prompt",
            LogLevel::Input => "input",
        }
    }

    /// Look up a level by its exact lower-case name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.name() == name)
    }

    /// Whether `self` passes a logger configured at `threshold`
    #[inline]
    pub fn is_enabled_at(self, threshold: LogLevel) -> bool {
        self <= threshold
    }

    pub fn channel(&self) -> Channel {
        match self {
            LogLevel::Error => Channel::Error,
            LogLevel::Warn => Channel::Warn,
            _ => Channel::Log,
        }
    }

    /// RGB console color for the level
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            LogLevel::Error => (0xfb, 0x2c, 0x36),
            LogLevel::Warn => (0xff, 0x69, 0x00),
            LogLevel::Info => (0x8e, 0xc5, 0xff),
            LogLevel::Http => (0x1f, 0x1f, 0x1f),
            LogLevel::Verbose => (0x80, 0x00, 0x80),
            LogLevel::Debug => (0xc2, 0x7a, 0xff),
            LogLevel::Silly => (0x05, 0xdf, 0x72),
            LogLevel::Help => (0xff, 0xc0, 0xcb),
            LogLevel::Data => (0xff, 0xd7, 0x00),
            LogLevel::Prompt => (0xc0, 0xc0, 0xc0),
            LogLevel::Input => (0xff, 0xff, 0xff),
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        let (r, g, b) = self.rgb();
        colored::Color::TrueColor { r, g, b }
    }
}

/// Priority of a level name, `None` for names outside the level table
pub fn priority_of(name: &str) -> Option<u8> {
    LogLevel::from_name(name).map(LogLevel::priority)
}

/// Whether the level called `name` is enabled under `threshold`
///
/// Unknown names are never enabled.
pub fn is_enabled_for(name: &str, threshold: LogLevel) -> bool {
    LogLevel::from_name(name).is_some_and(|level| level.is_enabled_at(threshold))
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        match lowered.as_str() {
            "warning" => Ok(LogLevel::Warn),
            other => LogLevel::from_name(other).ok_or_else(|| LoggerError::invalid_level(s)),
        }
    }
}
