//! Process-wide `tracing-subscriber` installation

use super::logger::TARGET;
use crate::core::config::ServerMode;
use crate::core::error::{LoggerError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
///
/// Other crates log at `info`; the facade has already filtered its own
/// events by level, so they all pass.
pub fn default_filter() -> String {
    format!("info,{}=trace", TARGET)
}

/// Install the global subscriber for `mode`
///
/// Production writes one JSON object per line, development writes compact
/// text. Fails with [`LoggerError::Subscriber`] when a global subscriber is
/// already installed.
pub fn init_subscriber(mode: ServerMode) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match mode {
        ServerMode::Production => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init(),
        ServerMode::Development => registry.with(fmt::layer().compact()).try_init(),
    };

    installed.map_err(|e| LoggerError::Subscriber(e.to_string()))
}

/// Install the subscriber unless one is already present
pub(crate) fn ensure_subscriber(mode: ServerMode) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    match init_subscriber(mode) {
        // another thread installed one between the check and the install
        Ok(()) | Err(LoggerError::Subscriber(_)) => {}
        Err(e) => eprintln!("[LOGGER ERROR] Failed to install server subscriber: {}", e),
    }
}
