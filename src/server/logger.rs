//! `tracing`-backed logger

use crate::core::{
    config::{LoggerConfig, ServerMode},
    error::Result,
    facade::{duration_millis, Logger, Profiler},
    LogCall, LogContext, LogLevel,
};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::Level;

/// Target of every event emitted by the server backend
pub const TARGET: &str = "rust_logger_facade::server";

const BACKEND: &str = "server";

#[derive(Debug, Clone)]
struct ServerState {
    level: LogLevel,
    default_meta: LogContext,
}

/// Logger delegating every entry to the `tracing` dispatcher
///
/// Filtering by facade level happens before the event is built; the
/// installed subscriber may filter further. Named profiles are shared
/// between a logger and its children.
pub struct ServerLogger {
    state: RwLock<ServerState>,
    mode: ServerMode,
    profiles: Arc<Mutex<HashMap<String, Instant>>>,
}

/// `tracing` level an entry of `level` is emitted at
pub fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Verbose | LogLevel::Debug => Level::DEBUG,
        LogLevel::Silly => Level::TRACE,
        LogLevel::Info
        | LogLevel::Http
        | LogLevel::Help
        | LogLevel::Data
        | LogLevel::Prompt
        | LogLevel::Input => Level::INFO,
    }
}

impl ServerLogger {
    pub fn new(mode: ServerMode) -> Self {
        Self {
            state: RwLock::new(ServerState {
                level: LogLevel::Info,
                default_meta: LogContext::new(),
            }),
            mode,
            profiles: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        let logger = Self::new(config.mode);
        {
            let mut state = logger.state.write();
            state.level = config.loglevel;
            state.default_meta = config.default_context();
        }
        logger
    }

    pub fn mode(&self) -> ServerMode {
        self.mode
    }

    pub fn default_meta(&self) -> LogContext {
        self.state.read().default_meta.clone()
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
        let context = state.default_meta.merged(&resolved.context);
        drop(state);

        emit(resolved.level, &resolved.message, &context);
    }
}

fn emit(level: LogLevel, message: &str, context: &LogContext) {
    let name = level.name();
    let context = (!context.is_empty()).then(|| context.to_json());

    macro_rules! event {
        ($lvl:expr) => {
            match context {
                Some(ref context) => tracing::event!(
                    target: TARGET,
                    $lvl,
                    level = name,
                    context = %context,
                    "{}",
                    message
                ),
                None => tracing::event!(target: TARGET, $lvl, level = name, "{}", message),
            }
        };
    }

    match tracing_level(level) {
        Level::ERROR => event!(Level::ERROR),
        Level::WARN => event!(Level::WARN),
        Level::DEBUG => event!(Level::DEBUG),
        Level::TRACE => event!(Level::TRACE),
        _ => event!(Level::INFO),
    }
}

impl Logger for ServerLogger {
    fn log(&self, call: LogCall) -> &dyn Logger {
        self.dispatch(call);
        self
    }

    fn level(&self) -> LogLevel {
        self.state.read().level
    }

    fn set_level(&self, level: LogLevel) -> &dyn Logger {
        self.state.write().level = level;
        self
    }

    fn add_context(&self, context: LogContext) -> &dyn Logger {
        self.state.write().default_meta.merge(&context);
        self
    }

    fn child(&self, context: LogContext) -> Arc<dyn Logger> {
        let state = self.state.read();
        Arc::new(ServerLogger {
            state: RwLock::new(ServerState {
                level: state.level,
                default_meta: state.default_meta.merged(&context),
            }),
            mode: self.mode,
            profiles: Arc::clone(&self.profiles),
        })
    }

    fn clear(&self) -> &dyn Logger {
        self.profiles.lock().clear();
        self
    }

    fn close(&self) -> &dyn Logger {
        self
    }

    fn start_timer(&self) -> Result<Profiler<'_>> {
        Ok(Profiler::new(self))
    }

    /// The first call for `id` starts a timer, the second logs `id` at
    /// `info` with `durationMs` and forgets the timer
    fn profile(&self, id: &str, meta: Option<LogContext>) -> Result<&dyn Logger> {
        let started = {
            let mut profiles = self.profiles.lock();
            match profiles.remove(id) {
                Some(started) => Some(started),
                None => {
                    profiles.insert(id.to_string(), Instant::now());
                    None
                }
            }
        };

        if let Some(started) = started {
            let mut context = meta.unwrap_or_default();
            context.add_field("durationMs", duration_millis(started.elapsed()));
            self.dispatch(LogCall::new(LogLevel::Info, id).meta(context.to_value()));
        }
        Ok(self)
    }

    fn backend(&self) -> &'static str {
        BACKEND
    }
}
