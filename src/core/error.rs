//! Error types for the logger facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Logger accessed before a host provided one
    #[error("Logger not available. Make sure the logger plugin is properly initialized.")]
    NotInitialized,

    /// A logger was already provided to this slot
    #[error("Logger already initialized")]
    AlreadyInitialized,

    /// Operation that the backend does not implement
    #[error("{operation} is not implemented by the {backend} logger")]
    Unsupported {
        operation: &'static str,
        backend: &'static str,
    },

    /// Level name outside the level table
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Global tracing subscriber could not be installed
    #[error("Failed to install tracing subscriber: {0}")]
    Subscriber(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an unsupported-operation error
    pub fn unsupported(operation: &'static str, backend: &'static str) -> Self {
        LoggerError::Unsupported { operation, backend }
    }

    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}
