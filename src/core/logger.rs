//! Console logger engine
//!
//! `ConsoleLogger` emulates a severity-aware console: it filters by level,
//! merges the default context with per-call meta, optionally attaches the
//! caller's stack trace and hands the formatted entry to its appenders.

use super::{
    appender::Appender,
    error::{LoggerError, Result},
    facade::{Logger, Profiler},
    log_call::LogCall,
    log_context::LogContext,
    log_entry::LogEntry,
    log_level::LogLevel,
    stack_trace::{self, STACK_TRACE_KEY},
};
use crate::appenders::ConsoleAppender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Default number of frames kept in a captured stack trace
pub const DEFAULT_STACK_TRACE_LIMIT: usize = 10;

const BACKEND: &str = "console";

/// Construction options for [`ConsoleLogger`]
#[derive(Debug, Clone, PartialEq)]
pub struct LoggerOptions {
    pub level: LogLevel,
    pub default_context: LogContext,
    pub include_stack_trace: bool,
    pub stack_trace_limit: usize,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            default_context: LogContext::new(),
            include_stack_trace: false,
            stack_trace_limit: DEFAULT_STACK_TRACE_LIMIT,
        }
    }
}

pub struct ConsoleLogger {
    state: RwLock<LoggerOptions>,
    /// Shared with every child logger
    appenders: Arc<RwLock<Vec<Box<dyn Appender>>>>,
}

impl ConsoleLogger {
    /// Create a logger writing to a [`ConsoleAppender`]
    #[must_use]
    pub fn new(options: LoggerOptions) -> Self {
        Self::with_appenders(options, vec![Box::new(ConsoleAppender::new())])
    }

    #[must_use]
    pub fn with_appenders(options: LoggerOptions, appenders: Vec<Box<dyn Appender>>) -> Self {
        Self {
            state: RwLock::new(options),
            appenders: Arc::new(RwLock::new(appenders)),
        }
    }

    /// Create a builder for ConsoleLogger
    ///
    /// # Example
    /// ```
    /// use rust_logger_facade::prelude::*;
    ///
    /// let logger = ConsoleLogger::builder()
    ///     .level(LogLevel::Debug)
    ///     .context_field("app", "checkout")
    ///     .build();
    /// assert!(logger.is_debug_enabled());
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    /// Snapshot of the current settings
    pub fn options(&self) -> LoggerOptions {
        self.state.read().clone()
    }

    pub fn default_context(&self) -> LogContext {
        self.state.read().default_context.clone()
    }

    pub fn includes_stack_trace(&self) -> bool {
        self.state.read().include_stack_trace
    }

    pub fn stack_trace_limit(&self) -> usize {
        self.state.read().stack_trace_limit
    }

    /// Replace the level; no other setting changes
    pub fn set_level(&self, level: LogLevel) -> &Self {
        self.state.write().level = level;
        self
    }

    pub fn add_context(&self, context: LogContext) -> &Self {
        self.state.write().default_context.merge(&context);
        self
    }

    /// Turn stack trace capture on, optionally changing the frame limit
    pub fn enable_stack_trace(&self, limit: Option<usize>) -> &Self {
        let mut state = self.state.write();
        state.include_stack_trace = true;
        if let Some(limit) = limit {
            state.stack_trace_limit = limit;
        }
        self
    }

    /// Turn stack trace capture off; the frame limit is kept
    pub fn disable_stack_trace(&self) -> &Self {
        self.state.write().include_stack_trace = false;
        self
    }

    pub fn set_stack_trace_limit(&self, limit: usize) -> &Self {
        self.state.write().stack_trace_limit = limit;
        self
    }

    /// Independent logger with `context` merged over this logger's default
    /// context; level, stack trace settings and appenders are carried over
    #[must_use]
    pub fn child(&self, context: LogContext) -> ConsoleLogger {
        let state = self.state.read();
        let options = LoggerOptions {
            default_context: state.default_context.merged(&context),
            ..state.clone()
        };

        ConsoleLogger {
            state: RwLock::new(options),
            appenders: Arc::clone(&self.appenders),
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    fn dispatch(&self, call: LogCall) {
        let Some(level) = call.level() else {
            return;
        };

        let state = self.state.read();
        if !level.is_enabled_at(state.level) {
            return;
        }
        let Some(resolved) = call.resolve() else {
            return;
        };

        let context = state.default_context.merged(&resolved.context);
        let stack_trace_limit = state.include_stack_trace.then_some(state.stack_trace_limit);
        drop(state);

        self.emit(resolved.level, resolved.message, context, stack_trace_limit);
    }

    fn emit(
        &self,
        level: LogLevel,
        message: String,
        mut context: LogContext,
        stack_trace_limit: Option<usize>,
    ) {
        if let Some(trace) = stack_trace_limit.and_then(stack_trace::capture) {
            context.add_field(STACK_TRACE_KEY, trace);
        }

        let entry = LogEntry::new(level, message).with_context(context);
        self.write(&entry);
    }

    /// Hand the entry to every appender
    ///
    /// A failing appender is reported on stderr and does not stop the others.
    fn write(&self, entry: &LogEntry) {
        let mut appenders = self.appenders.write();
        for (idx, appender) in appenders.iter_mut().enumerate() {
            if let Err(e) = appender.append(entry) {
                eprintln!(
                    "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                    idx,
                    appender.name(),
                    e
                );
            }
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(LoggerOptions::default())
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, call: LogCall) -> &dyn Logger {
        self.dispatch(call);
        self
    }

    fn level(&self) -> LogLevel {
        self.state.read().level
    }

    fn set_level(&self, level: LogLevel) -> &dyn Logger {
        ConsoleLogger::set_level(self, level)
    }

    fn add_context(&self, context: LogContext) -> &dyn Logger {
        ConsoleLogger::add_context(self, context)
    }

    fn child(&self, context: LogContext) -> Arc<dyn Logger> {
        Arc::new(ConsoleLogger::child(self, context))
    }

    fn clear(&self) -> &dyn Logger {
        self
    }

    fn close(&self) -> &dyn Logger {
        self
    }

    fn start_timer(&self) -> Result<Profiler<'_>> {
        Err(LoggerError::unsupported("startTimer", BACKEND))
    }

    fn profile(&self, _id: &str, _meta: Option<LogContext>) -> Result<&dyn Logger> {
        Err(LoggerError::unsupported("profile", BACKEND))
    }

    fn backend(&self) -> &'static str {
        BACKEND
    }
}

/// Builder for constructing ConsoleLogger with a fluent API
///
/// When no appender is added, the built logger writes to a
/// [`ConsoleAppender`].
pub struct LoggerBuilder {
    options: LoggerOptions,
    appenders: Vec<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            options: LoggerOptions::default(),
            appenders: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.options.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn default_context(mut self, context: LogContext) -> Self {
        self.options.default_context = context;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn context_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.options.default_context.add_field(key, value);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn include_stack_trace(mut self, include: bool) -> Self {
        self.options.include_stack_trace = include;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn stack_trace_limit(mut self, limit: usize) -> Self {
        self.options.stack_trace_limit = limit;
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Build the ConsoleLogger
    pub fn build(self) -> ConsoleLogger {
        if self.appenders.is_empty() {
            ConsoleLogger::new(self.options)
        } else {
            ConsoleLogger::with_appenders(self.options, self.appenders)
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::{MemoryAppender, MemoryHandle};
    use crate::core::{facade::LoggerExt, Channel};
    use serde_json::json;

    fn capturing(level: LogLevel) -> (ConsoleLogger, MemoryHandle) {
        let memory = MemoryAppender::new();
        let handle = memory.handle();
        let logger = ConsoleLogger::builder().level(level).appender(memory).build();
        (logger, handle)
    }

    #[test]
    fn test_defaults() {
        let logger = ConsoleLogger::default();
        let options = logger.options();
        assert_eq!(options.level, LogLevel::Info);
        assert!(options.default_context.is_empty());
        assert!(!options.include_stack_trace);
        assert_eq!(options.stack_trace_limit, 10);
    }

    #[test]
    fn test_builder_options() {
        let logger = ConsoleLogger::builder()
            .level(LogLevel::Debug)
            .context_field("app", "test-app")
            .include_stack_trace(true)
            .stack_trace_limit(3)
            .build();

        assert_eq!(Logger::level(&logger), LogLevel::Debug);
        assert_eq!(logger.default_context().to_value(), json!({"app": "test-app"}));
        assert!(logger.includes_stack_trace());
        assert_eq!(logger.stack_trace_limit(), 3);
    }

    #[test]
    fn test_routes_by_channel() {
        let (logger, handle) = capturing(LogLevel::Info);

        logger.info("Info message");
        logger.error("Error message");
        logger.warn("Warning message");

        assert_eq!(handle.on(Channel::Log).len(), 1);
        assert_eq!(handle.on(Channel::Error).len(), 1);
        assert_eq!(handle.on(Channel::Warn).len(), 1);
        assert!(handle.on(Channel::Error)[0]
            .formatted()
            .ends_with("[ERROR]: Error message"));
    }

    #[test]
    fn test_disabled_levels_emit_nothing() {
        let (logger, handle) = capturing(LogLevel::Warn);

        logger.info("This should not be logged");
        logger.debug("Nor this");
        assert!(handle.is_empty());

        logger.warn("logged").error("logged too");
        assert_eq!(handle.len(), 2);
    }

    #[test]
    fn test_unknown_level_names_are_noops() {
        let (logger, handle) = capturing(LogLevel::Input);
        logger.log(LogCall::named("fatal", "m"));
        logger.log_entry(json!({"level": "critical", "message": "m"}));
        assert!(handle.is_empty());
        assert!(!logger.is_level_enabled("fatal"));
    }

    #[test]
    fn test_context_merge_order() {
        let (logger, handle) = capturing(LogLevel::Info);
        logger.add_context(LogContext::new().with_field("app", "a").with_field("k", 0));

        logger.info_with(
            "m",
            &[json!({"k": 1, "user": "u"}), json!("ignored"), json!({"k": 2})],
        );

        let context = handle.last().unwrap().context.unwrap();
        assert_eq!(context.to_value(), json!({"app": "a", "k": 2, "user": "u"}));
    }

    #[test]
    fn test_empty_context_is_not_attached() {
        let (logger, handle) = capturing(LogLevel::Info);
        logger.info("m");
        assert!(handle.last().unwrap().context.is_none());
    }

    #[test]
    fn test_child_is_independent() {
        let (parent, handle) = capturing(LogLevel::Debug);
        parent.add_context(LogContext::new().with_field("app", "parent-app"));

        let child = parent.child(LogContext::new().with_field("component", "child-component"));
        child.info("Child logger message");
        assert_eq!(
            handle.last().unwrap().context.unwrap().to_value(),
            json!({"app": "parent-app", "component": "child-component"})
        );

        child.add_context(LogContext::new().with_field("extra", true));
        child.set_level(LogLevel::Error);
        assert_eq!(parent.default_context().to_value(), json!({"app": "parent-app"}));
        assert!(parent.is_debug_enabled());

        parent.add_context(LogContext::new().with_field("late", 1));
        assert!(child.default_context().get("late").is_none());
    }

    #[test]
    fn test_child_keys_win() {
        let (parent, _handle) = capturing(LogLevel::Info);
        parent.add_context(LogContext::new().with_field("app", "parent"));
        let child = parent.child(LogContext::new().with_field("app", "child"));
        assert_eq!(child.default_context().to_value(), json!({"app": "child"}));
    }

    #[test]
    fn test_stack_trace_settings() {
        let logger = ConsoleLogger::default();

        logger.enable_stack_trace(Some(4));
        assert!(logger.includes_stack_trace());
        assert_eq!(logger.stack_trace_limit(), 4);

        logger.disable_stack_trace();
        assert!(!logger.includes_stack_trace());
        assert_eq!(logger.stack_trace_limit(), 4);

        logger.set_stack_trace_limit(7).enable_stack_trace(None);
        assert!(logger.includes_stack_trace());
        assert_eq!(logger.stack_trace_limit(), 7);
    }

    #[test]
    fn test_set_level_flips_predicates() {
        let logger = ConsoleLogger::default();
        assert!(!logger.is_debug_enabled());
        logger.set_level(LogLevel::Debug);
        assert!(logger.is_debug_enabled());
        assert!(logger.default_context().is_empty());
    }

    #[test]
    fn test_set_level_name_validates() {
        let logger = ConsoleLogger::default();
        assert!(logger.set_level_name("verbose").is_ok());
        assert_eq!(Logger::level(&logger), LogLevel::Verbose);

        let err = logger.set_level_name("loud").err().unwrap();
        assert!(matches!(err, LoggerError::InvalidLevel(_)));
        assert_eq!(Logger::level(&logger), LogLevel::Verbose);
    }

    #[test]
    fn test_unsupported_operations_fail() {
        let logger = ConsoleLogger::default();
        assert!(matches!(
            logger.start_timer(),
            Err(LoggerError::Unsupported { operation: "startTimer", .. })
        ));
        assert!(matches!(
            logger.profile("test", None),
            Err(LoggerError::Unsupported { operation: "profile", .. })
        ));
    }

    #[test]
    fn test_clear_and_close_are_noops() {
        let (logger, handle) = capturing(LogLevel::Info);
        logger.clear().close();
        Logger::log(&logger, LogCall::new(LogLevel::Info, "still logging"));
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn test_failing_appender_does_not_stop_others() {
        struct FailingAppender;

        impl Appender for FailingAppender {
            fn append(&mut self, _entry: &LogEntry) -> Result<()> {
                Err(LoggerError::writer("simulated failure"))
            }

            fn flush(&mut self) -> Result<()> {
                Ok(())
            }

            fn name(&self) -> &str {
                "failing"
            }
        }

        let memory = MemoryAppender::new();
        let handle = memory.handle();
        let logger = ConsoleLogger::builder()
            .appender(FailingAppender)
            .appender(memory)
            .build();

        logger.error("still recorded");
        assert_eq!(handle.len(), 1);
    }
}
