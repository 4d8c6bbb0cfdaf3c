//! Logger capability interface
//!
//! [`Logger`] is the object-safe contract every backend implements; it is
//! what hosts store as `Arc<dyn Logger>`. [`LoggerExt`] layers the leveled
//! convenience methods on top of any `Logger`, including trait objects.
//!
//! Every method that does not produce a value returns the logger so calls
//! can be chained:
//!
//! ```
//! use rust_logger_facade::prelude::*;
//!
//! let memory = MemoryAppender::new();
//! let handle = memory.handle();
//! let logger = ConsoleLogger::builder().appender(memory).build();
//!
//! logger
//!     .info("server started")
//!     .warn_with("slow response", &[serde_json::json!({"ms": 812})]);
//! assert_eq!(handle.len(), 2);
//! ```

use super::error::Result;
use super::log_call::{LogCall, Message};
use super::log_context::LogContext;
use super::log_level::{is_enabled_for, LogLevel};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub trait Logger: Send + Sync {
    /// Unified entry point; calls at disabled or unknown levels are no-ops
    fn log(&self, call: LogCall) -> &dyn Logger;

    /// Current threshold level
    fn level(&self) -> LogLevel;

    fn set_level(&self, level: LogLevel) -> &dyn Logger;

    /// Shallow-merge `context` into the default context of this logger
    fn add_context(&self, context: LogContext) -> &dyn Logger;

    /// Independent logger with the same settings and `context` merged over
    /// the default context
    fn child(&self, context: LogContext) -> Arc<dyn Logger>;

    fn clear(&self) -> &dyn Logger;

    fn close(&self) -> &dyn Logger;

    fn start_timer(&self) -> Result<Profiler<'_>>;

    /// Start or finish the named profile
    fn profile(&self, id: &str, meta: Option<LogContext>) -> Result<&dyn Logger>;

    /// Short backend name, used in error messages
    fn backend(&self) -> &'static str;

    /// Set the level from its name, failing on names outside the level table
    fn set_level_name(&self, name: &str) -> Result<&dyn Logger> {
        let level: LogLevel = name.parse()?;
        Ok(self.set_level(level))
    }

    fn is_level_enabled(&self, level: &str) -> bool {
        is_enabled_for(level, self.level())
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled_at(self.level())
    }

    fn is_error_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Warn)
    }

    fn is_info_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    fn is_verbose_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Verbose)
    }

    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    fn is_silly_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Silly)
    }
}

macro_rules! leveled_methods {
    ($($name:ident, $with:ident => $level:ident;)+) => {
        $(
            #[doc = concat!("Log at `", stringify!($name), "` level")]
            #[inline]
            fn $name(&self, message: impl Into<Message>) -> &Self {
                self.log(LogCall::new(LogLevel::$level, message));
                self
            }

            #[doc = concat!("Log at `", stringify!($name), "` level with meta values")]
            #[inline]
            fn $with(&self, message: impl Into<Message>, meta: &[Value]) -> &Self {
                self.log(LogCall::new(LogLevel::$level, message).with_meta(meta.iter().cloned()));
                self
            }
        )+
    };
}

/// Leveled convenience methods, available on every [`Logger`]
pub trait LoggerExt: Logger {
    leveled_methods! {
        error, error_with => Error;
        warn, warn_with => Warn;
        info, info_with => Info;
        http, http_with => Http;
        verbose, verbose_with => Verbose;
        debug, debug_with => Debug;
        silly, silly_with => Silly;
        help, help_with => Help;
        data, data_with => Data;
        prompt, prompt_with => Prompt;
        input, input_with => Input;
    }

    /// `log(level, message, ...meta)`
    #[inline]
    fn log_at(&self, level: LogLevel, message: impl Into<Message>, meta: &[Value]) -> &Self {
        self.log(LogCall::new(level, message).with_meta(meta.iter().cloned()));
        self
    }

    /// `log({ level, message, ...extra })`
    #[inline]
    fn log_entry(&self, entry: Value) -> &Self {
        self.log(LogCall::entry(entry));
        self
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}

impl fmt::Debug for dyn Logger + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("backend", &self.backend())
            .field("level", &self.level())
            .finish()
    }
}

/// Handle returned by [`Logger::start_timer`]
#[derive(Debug)]
pub struct Profiler<'a> {
    logger: &'a dyn Logger,
    start: Instant,
}

impl<'a> Profiler<'a> {
    pub fn new(logger: &'a dyn Logger) -> Self {
        Self {
            logger,
            start: Instant::now(),
        }
    }

    pub fn logger(&self) -> &'a dyn Logger {
        self.logger
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Log an `info` entry carrying `durationMs`
    ///
    /// Returns whether the entry passed the logger's level.
    pub fn done(self, message: impl Into<Message>, meta: Option<LogContext>) -> bool {
        let mut context = meta.unwrap_or_default();
        context.add_field("durationMs", duration_millis(self.elapsed()));

        self.logger
            .log(LogCall::new(LogLevel::Info, message).meta(context.to_value()));
        self.logger.is_enabled(LogLevel::Info)
    }
}

pub(crate) fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
