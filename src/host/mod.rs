//! Host integration
//!
//! A host registers one application logger at startup with
//! [`provide_logger`] (or [`install`]) and reads it back anywhere with
//! [`use_logger`]. Per-request code keeps a lazily created logger in a
//! [`RequestContext`], and [`RequestLogger`] records incoming requests and
//! failed responses.

pub mod request;

pub use request::{RequestInfo, RequestLogger};

use crate::core::error::{LoggerError, Result};
use crate::core::facade::Logger;
use crate::core::factory;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Write-once holder for an application logger
pub struct LoggerSlot {
    logger: OnceCell<Arc<dyn Logger>>,
}

impl LoggerSlot {
    pub const fn new() -> Self {
        Self {
            logger: OnceCell::new(),
        }
    }

    pub fn provide(&self, logger: Arc<dyn Logger>) -> Result<()> {
        self.logger
            .set(logger)
            .map_err(|_| LoggerError::AlreadyInitialized)
    }

    /// The provided logger, or [`LoggerError::NotInitialized`]
    pub fn get(&self) -> Result<Arc<dyn Logger>> {
        self.logger
            .get()
            .cloned()
            .ok_or(LoggerError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.logger.get().is_some()
    }
}

impl Default for LoggerSlot {
    fn default() -> Self {
        Self::new()
    }
}

static APP_LOGGER: LoggerSlot = LoggerSlot::new();

pub fn provide_logger(logger: Arc<dyn Logger>) -> Result<()> {
    APP_LOGGER.provide(logger)
}

/// Application logger registered with [`provide_logger`]
pub fn use_logger() -> Result<Arc<dyn Logger>> {
    APP_LOGGER.get()
}

/// Register the global factory's logger for `name` as the application logger
pub fn install(name: Option<&str>) -> Result<Arc<dyn Logger>> {
    let logger = factory::get_logger(name)?;
    provide_logger(Arc::clone(&logger))?;
    Ok(logger)
}

/// Per-request storage for a logger created on first use
#[derive(Default)]
pub struct RequestContext {
    logger: OnceCell<Arc<dyn Logger>>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger: OnceCell::with_value(logger),
        }
    }

    /// Logger stored in this request, created by `init` on first access
    pub fn logger_or_init<F>(&self, init: F) -> Arc<dyn Logger>
    where
        F: FnOnce() -> Arc<dyn Logger>,
    {
        Arc::clone(self.logger.get_or_init(init))
    }

    /// Logger stored in this request, taken from the global factory on
    /// first access
    pub fn logger(&self) -> Result<Arc<dyn Logger>> {
        self.logger
            .get_or_try_init(|| factory::get_logger(None))
            .map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConsoleLogger, LogLevel};

    #[test]
    fn test_slot_before_and_after_provide() {
        let slot = LoggerSlot::new();
        let err = slot.get().unwrap_err();
        assert!(matches!(err, LoggerError::NotInitialized));
        assert!(err.to_string().contains("Logger not available"));

        slot.provide(Arc::new(ConsoleLogger::default())).unwrap();
        assert!(slot.is_initialized());
        assert!(slot.get().is_ok());
    }

    #[test]
    fn test_slot_rejects_second_provide() {
        let slot = LoggerSlot::new();
        slot.provide(Arc::new(ConsoleLogger::default())).unwrap();
        let err = slot.provide(Arc::new(ConsoleLogger::default())).unwrap_err();
        assert!(matches!(err, LoggerError::AlreadyInitialized));
    }

    #[test]
    fn test_request_context_initializes_once() {
        let context = RequestContext::new();
        let mut calls = 0;
        let first = context.logger_or_init(|| {
            calls += 1;
            Arc::new(ConsoleLogger::default())
        });
        let second = context.logger_or_init(|| {
            calls += 1;
            Arc::new(ConsoleLogger::default())
        });

        assert_eq!(calls, 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_request_context_with_logger() {
        let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger::default());
        logger.set_level(LogLevel::Warn);
        let context = RequestContext::with_logger(Arc::clone(&logger));
        assert!(Arc::ptr_eq(&context.logger().unwrap(), &logger));
    }
}
