//! Request/response logging hooks

use crate::core::facade::{Logger, LoggerExt};
use crate::core::LogContext;
use chrono::{DateTime, SecondsFormat, Utc};

/// What is recorded about one HTTP request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestInfo {
    pub method: String,
    pub url: String,
    pub remote_address: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl RequestInfo {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            remote_address: None,
            user_agent: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_remote_address(mut self, address: impl Into<String>) -> Self {
        self.remote_address = Some(address.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Context fields logged with the request; absent values are omitted
    pub fn to_context(&self) -> LogContext {
        let mut context = LogContext::new()
            .with_field("method", self.method.as_str())
            .with_field("url", self.url.as_str());
        if let Some(address) = &self.remote_address {
            context.add_field("remoteAddress", address.as_str());
        }
        if let Some(user_agent) = &self.user_agent {
            context.add_field("userAgent", user_agent.as_str());
        }
        context.add_field(
            "timestamp",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        context
    }
}

/// Logs failed responses, and every request when `log_all` is set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestLogger {
    log_all: bool,
}

impl RequestLogger {
    pub fn new(log_all: bool) -> Self {
        Self { log_all }
    }

    /// Log `Incoming request` at `info` when every request is recorded
    pub fn on_request(&self, logger: &dyn Logger, info: &RequestInfo) {
        if self.log_all {
            logger.info_with("Incoming request", &[info.to_context().to_value()]);
        }
    }

    /// Log statuses of 400 and above at `error`
    pub fn on_response(&self, logger: &dyn Logger, info: &RequestInfo, status: u16) {
        if status >= 400 {
            let context = info.to_context().with_field("statusCode", status);
            logger.error_with(
                format!("Failed request ({})", status),
                &[context.to_value()],
            );
        }
    }

    /// Run `handler` between [`on_request`](Self::on_request) and
    /// [`on_response`](Self::on_response), returning its status
    pub fn observe<F>(&self, logger: &dyn Logger, info: &RequestInfo, handler: F) -> u16
    where
        F: FnOnce() -> u16,
    {
        self.on_request(logger, info);
        let status = handler();
        self.on_response(logger, info, status);
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::core::{Channel, ConsoleLogger, LogLevel};
    use serde_json::json;

    fn logger() -> (ConsoleLogger, crate::appenders::MemoryHandle) {
        let memory = MemoryAppender::new();
        let handle = memory.handle();
        (ConsoleLogger::builder().appender(memory).build(), handle)
    }

    #[test]
    fn test_context_omits_missing_fields() {
        let info = RequestInfo::new("GET", "/cart").with_user_agent("curl/8.0");
        let context = info.to_context();
        assert_eq!(context.get("method"), Some(&json!("GET")));
        assert_eq!(context.get("userAgent"), Some(&json!("curl/8.0")));
        assert!(context.get("remoteAddress").is_none());
        assert!(context.get("timestamp").unwrap().as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_errors_only_by_default() {
        let (logger, handle) = logger();
        let requests = RequestLogger::default();
        let info = RequestInfo::new("POST", "/orders").with_remote_address("10.0.0.7");

        assert_eq!(requests.observe(&logger, &info, || 201), 201);
        assert!(handle.is_empty());

        requests.observe(&logger, &info, || 503);
        let entry = handle.last().unwrap();
        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.message, "Failed request (503)");
        let context = entry.context.unwrap();
        assert_eq!(context.get("statusCode"), Some(&json!(503)));
        assert_eq!(context.get("remoteAddress"), Some(&json!("10.0.0.7")));
    }

    #[test]
    fn test_log_all_records_incoming_requests() {
        let (logger, handle) = logger();
        let requests = RequestLogger::new(true);
        let info = RequestInfo::new("GET", "/missing");

        requests.observe(&logger, &info, || 404);

        let entries = handle.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "Incoming request");
        assert_eq!(entries[0].level, LogLevel::Info);
        assert_eq!(handle.on(Channel::Error).len(), 1);
    }

    #[test]
    fn test_status_boundary() {
        let (logger, handle) = logger();
        let requests = RequestLogger::default();
        let info = RequestInfo::new("GET", "/");
        requests.on_response(&logger, &info, 399);
        assert!(handle.is_empty());
        requests.on_response(&logger, &info, 400);
        assert_eq!(handle.len(), 1);
    }
}
