//! # Rust Logger Facade
//!
//! A pluggable structured-logging facade. Application code talks to one
//! [`Logger`] interface with npm-style levels (`error` through `silly`);
//! the backend behind it is chosen by configuration.
//!
//! ## Features
//!
//! - **Console engine**: [`ConsoleLogger`] filters by level, merges default
//!   context with per-call meta, optionally attaches a caller stack trace
//!   and writes to error, warn or log channels
//! - **Server backend**: [`server::ServerLogger`] forwards entries to
//!   `tracing` with JSON or compact output
//! - **Named cache**: [`LoggerFactory`] returns one shared logger per name
//! - **Host glue**: [`host`] provides a process logger slot, per-request
//!   loggers and request/response logging
//!
//! ```
//! use rust_logger_facade::prelude::*;
//! use serde_json::json;
//!
//! let factory = LoggerFactory::new(LoggerConfig {
//!     loglevel: LogLevel::Debug,
//!     include_stack_trace: false,
//!     ..LoggerConfig::default()
//! });
//!
//! let logger = factory.get_logger(Some("checkout"));
//! logger
//!     .add_context(LogContext::new().with_field("service", "checkout"))
//!     .debug_with("cart loaded", &[json!({"items": 3})]);
//!
//! assert!(std::sync::Arc::ptr_eq(&logger, &factory.get_logger(Some("checkout"))));
//! ```

pub mod appenders;
pub mod core;
pub mod host;
pub mod macros;
pub mod server;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender, MemoryHandle};
    pub use crate::core::{
        get_logger, Appender, Backend, Channel, ConsoleLogger, LogCall, LogContext, LogEntry,
        LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerExt, LoggerFactory,
        LoggerOptions, Message, Profiler, Result, ServerMode,
    };
    pub use crate::host::{use_logger, RequestContext, RequestInfo, RequestLogger};
    pub use crate::server::ServerLogger;
}

pub use crate::appenders::{ConsoleAppender, MemoryAppender, MemoryHandle};
pub use crate::core::{
    get_logger, global_factory, init_global_factory, is_enabled_for, priority_of, Appender,
    Backend, Channel, ConsoleLogger, LogCall, LogContext, LogEntry, LogLevel, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerExt, LoggerFactory, LoggerOptions, Message,
    Profiler, ResolvedCall, Result, ServerMode, DEFAULT_LOGGER_NAME, DEFAULT_STACK_TRACE_LIMIT,
    MISSING_MESSAGE, STACK_TRACE_KEY,
};
pub use crate::host::{install, provide_logger, use_logger, LoggerSlot, RequestContext};
pub use crate::server::{init_subscriber, ServerLogger};
