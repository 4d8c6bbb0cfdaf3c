//! Host configuration surface
//!
//! The configuration is read when a logger is first created for a name.
//! It can come from JSON (the host's runtime config) and from environment
//! variables, which override JSON values:
//!
//! | Variable                      | Field               |
//! |-------------------------------|---------------------|
//! | `LOGGER_CONFIG`               | whole config, JSON  |
//! | `LOGGER_LEVEL`                | `loglevel`          |
//! | `LOGGER_INCLUDE_STACK_TRACE`  | `includeStackTrace` |
//! | `LOGGER_STACK_TRACE_LIMIT`    | `stackTraceLimit`   |
//! | `LOGGER_BACKEND`              | `backend`           |
//! | `LOGGER_MODE`                 | `mode`              |

use super::error::{LoggerError, Result};
use super::log_context::LogContext;
use super::log_level::LogLevel;
use super::logger::{LoggerOptions, DEFAULT_STACK_TRACE_LIMIT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ENV_CONFIG: &str = "LOGGER_CONFIG";
pub const ENV_LEVEL: &str = "LOGGER_LEVEL";
pub const ENV_INCLUDE_STACK_TRACE: &str = "LOGGER_INCLUDE_STACK_TRACE";
pub const ENV_STACK_TRACE_LIMIT: &str = "LOGGER_STACK_TRACE_LIMIT";
pub const ENV_BACKEND: &str = "LOGGER_BACKEND";
pub const ENV_MODE: &str = "LOGGER_MODE";

/// Which [`Logger`](crate::Logger) implementation the factory builds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Console-emulating engine
    #[default]
    Console,
    /// `tracing`-backed server logger
    Server,
}

/// Output style of the server backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerMode {
    /// One JSON object per line
    Production,
    /// Compact human-readable lines
    #[default]
    Development,
}

impl FromStr for Backend {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "console" | "browser" | "client" => Ok(Backend::Console),
            "server" => Ok(Backend::Server),
            other => Err(LoggerError::config(
                "backend",
                format!("unknown backend '{}'", other),
            )),
        }
    }
}

impl FromStr for ServerMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(ServerMode::Production),
            "development" | "dev" => Ok(ServerMode::Development),
            other => Err(LoggerError::config(
                "mode",
                format!("unknown mode '{}'", other),
            )),
        }
    }
}

impl fmt::Display for ServerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerMode::Production => write!(f, "production"),
            ServerMode::Development => write!(f, "development"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggerConfig {
    pub loglevel: LogLevel,
    /// Context objects merged in order into the default context
    pub meta: Vec<LogContext>,
    pub include_stack_trace: bool,
    pub stack_trace_limit: usize,
    pub backend: Backend,
    pub mode: ServerMode,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            loglevel: LogLevel::Info,
            meta: Vec::new(),
            include_stack_trace: true,
            stack_trace_limit: DEFAULT_STACK_TRACE_LIMIT,
            backend: Backend::Console,
            mode: ServerMode::Development,
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoggerError::config("LoggerConfig", e.to_string()))
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG) {
            Some(json) => Self::from_json_str(&json)?,
            None => Self::default(),
        };

        if let Some(level) = lookup(ENV_LEVEL) {
            config.loglevel = level.parse()?;
        }
        if let Some(include) = lookup(ENV_INCLUDE_STACK_TRACE) {
            config.include_stack_trace = parse_bool(ENV_INCLUDE_STACK_TRACE, &include)?;
        }
        if let Some(limit) = lookup(ENV_STACK_TRACE_LIMIT) {
            config.stack_trace_limit = limit.trim().parse().map_err(|_| {
                LoggerError::config(
                    ENV_STACK_TRACE_LIMIT,
                    format!("expected a non-negative integer, got '{}'", limit),
                )
            })?;
        }
        if let Some(backend) = lookup(ENV_BACKEND) {
            config.backend = backend.parse()?;
        }
        if let Some(mode) = lookup(ENV_MODE) {
            config.mode = mode.parse()?;
        }

        Ok(config)
    }

    /// The `meta` list merged into one context, later objects winning
    pub fn default_context(&self) -> LogContext {
        self.meta
            .iter()
            .fold(LogContext::new(), |acc, ctx| acc.merged(ctx))
    }

    pub fn console_options(&self) -> LoggerOptions {
        LoggerOptions {
            level: self.loglevel,
            default_context: self.default_context(),
            include_stack_trace: self.include_stack_trace,
            stack_trace_limit: self.stack_trace_limit,
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoggerError::config(
            name,
            format!("expected a boolean, got '{}'", value),
        )),
    }
}
