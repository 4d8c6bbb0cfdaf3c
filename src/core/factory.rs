//! Named logger cache
//!
//! The factory hands out one shared logger per name. The first request for
//! a name builds the logger from the configuration current at that moment;
//! later configuration changes only affect names requested afterwards.

use super::config::{Backend, LoggerConfig};
use super::error::{LoggerError, Result};
use super::facade::Logger;
use super::logger::ConsoleLogger;
use crate::server::{subscriber::ensure_subscriber, ServerLogger};
use once_cell::sync::OnceCell;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

/// Name used when the caller does not give one
pub const DEFAULT_LOGGER_NAME: &str = "default";

pub struct LoggerFactory {
    config: RwLock<LoggerConfig>,
    loggers: Mutex<HashMap<String, Arc<dyn Logger>>>,
}

impl LoggerFactory {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config: RwLock::new(config),
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Logger registered under `name`, created on first request
    ///
    /// Concurrent first requests for the same name observe one instance.
    pub fn get_logger(&self, name: Option<&str>) -> Arc<dyn Logger> {
        let name = name.unwrap_or(DEFAULT_LOGGER_NAME);

        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name) {
            return Arc::clone(logger);
        }

        let logger = build_logger(&self.config.read());
        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    pub fn config(&self) -> LoggerConfig {
        self.config.read().clone()
    }

    /// Replace the configuration used for loggers created from now on
    pub fn set_config(&self, config: LoggerConfig) {
        *self.config.write() = config;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.lock().contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

fn build_logger(config: &LoggerConfig) -> Arc<dyn Logger> {
    match config.backend {
        Backend::Console => Arc::new(ConsoleLogger::new(config.console_options())),
        Backend::Server => {
            ensure_subscriber(config.mode);
            Arc::new(ServerLogger::from_config(config))
        }
    }
}

static GLOBAL_FACTORY: OnceCell<LoggerFactory> = OnceCell::new();

/// Process-wide factory, configured from the environment on first use
pub fn global_factory() -> Result<&'static LoggerFactory> {
    GLOBAL_FACTORY.get_or_try_init(|| LoggerConfig::from_env().map(LoggerFactory::new))
}

/// Configure the process-wide factory before its first use
pub fn init_global_factory(config: LoggerConfig) -> Result<&'static LoggerFactory> {
    let mut config = Some(config);
    let factory = GLOBAL_FACTORY.get_or_init(|| LoggerFactory::new(config.take().unwrap_or_default()));
    if config.is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    Ok(factory)
}

/// Shared logger for `name` from the process-wide factory
pub fn get_logger(name: Option<&str>) -> Result<Arc<dyn Logger>> {
    Ok(global_factory()?.get_logger(name))
}
