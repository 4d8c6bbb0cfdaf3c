//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod facade;
pub mod factory;
pub mod log_call;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod stack_trace;

pub use appender::Appender;
pub use config::{Backend, LoggerConfig, ServerMode};
pub use error::{LoggerError, Result};
pub use facade::{Logger, LoggerExt, Profiler};
pub use factory::{get_logger, global_factory, init_global_factory, LoggerFactory, DEFAULT_LOGGER_NAME};
pub use log_call::{LogCall, Message, ResolvedCall, MISSING_MESSAGE};
pub use log_context::LogContext;
pub use log_entry::LogEntry;
pub use log_level::{is_enabled_for, priority_of, Channel, LogLevel};
pub use logger::{ConsoleLogger, LoggerBuilder, LoggerOptions, DEFAULT_STACK_TRACE_LIMIT};
pub use stack_trace::STACK_TRACE_KEY;
