//! Call shapes accepted by the unified `log` entry point
//!
//! Three shapes are supported:
//!
//! 1. a level, a text message and optional meta values
//! 2. a level and a structured (JSON) message, serialized to become the text
//! 3. a single entry object carrying `level`, `message` and extra fields
//!
//! Shapes 1 and 2 are [`LogCall::Plain`], shape 3 is [`LogCall::Entry`].
//! Both are normalized once by [`LogCall::resolve`] before emission.

use super::log_context::LogContext;
use super::log_level::LogLevel;
use serde_json::Value;

/// Message used for entry objects without a `message` key
pub const MISSING_MESSAGE: &str = "[Object]";

/// Message argument: plain text or a structured value
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    Object(Value),
}

impl Message {
    /// Text form of the message
    ///
    /// Objects and arrays are serialized as compact JSON in insertion order,
    /// JSON strings are used verbatim and `null` becomes an empty string.
    pub fn into_text(self) -> String {
        match self {
            Message::Text(text) => text,
            Message::Object(Value::String(text)) => text,
            Message::Object(Value::Null) => String::new(),
            Message::Object(value) => value.to_string(),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Message::Text(text.clone())
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Message::Object(value)
    }
}

/// One invocation of the unified `log` entry point
#[derive(Debug, Clone, PartialEq)]
pub enum LogCall {
    /// `log(level, message, ...meta)`
    Plain {
        /// `None` when the call named a level outside the level table
        level: Option<LogLevel>,
        message: Message,
        meta: Vec<Value>,
    },
    /// `log({ level, message, ...extra })`
    Entry {
        level: Option<LogLevel>,
        message: Option<Value>,
        extra: LogContext,
    },
}

/// A call after normalization, ready to be merged and emitted
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCall {
    pub level: LogLevel,
    pub message: String,
    /// Context contributed by the call itself, meta objects merged in order
    pub context: LogContext,
}

impl LogCall {
    pub fn new(level: LogLevel, message: impl Into<Message>) -> Self {
        LogCall::Plain {
            level: Some(level),
            message: message.into(),
            meta: Vec::new(),
        }
    }

    /// Plain call with a level given by name; unknown names never log
    pub fn named(level: &str, message: impl Into<Message>) -> Self {
        LogCall::Plain {
            level: LogLevel::from_name(level),
            message: message.into(),
            meta: Vec::new(),
        }
    }

    /// Entry-object call
    ///
    /// `level` and `message` are taken from the object, every other key
    /// becomes context. Values that are not objects produce a call that
    /// never logs.
    pub fn entry(entry: Value) -> Self {
        let Value::Object(fields) = entry else {
            return LogCall::Entry {
                level: None,
                message: None,
                extra: LogContext::new(),
            };
        };

        let mut level = None;
        let mut message = None;
        let mut extra = LogContext::new();
        for (key, value) in fields {
            match key.as_str() {
                "level" => level = value.as_str().and_then(LogLevel::from_name),
                "message" => message = Some(value),
                _ => extra.add_field(key, value),
            }
        }

        LogCall::Entry {
            level,
            message,
            extra,
        }
    }

    /// Append a meta value; only JSON objects contribute to the context
    ///
    /// Entry calls take their context from the entry object and ignore meta.
    #[must_use]
    pub fn meta(mut self, value: impl Into<Value>) -> Self {
        if let LogCall::Plain { meta, .. } = &mut self {
            meta.push(value.into());
        }
        self
    }

    /// Append several meta values
    #[must_use]
    pub fn with_meta<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        if let LogCall::Plain { meta, .. } = &mut self {
            meta.extend(values);
        }
        self
    }

    /// Level the call targets, if it is a known one
    pub fn level(&self) -> Option<LogLevel> {
        match self {
            LogCall::Plain { level, .. } | LogCall::Entry { level, .. } => *level,
        }
    }

    /// Normalize the call; `None` when its level is unknown
    pub fn resolve(self) -> Option<ResolvedCall> {
        match self {
            LogCall::Plain {
                level,
                message,
                meta,
            } => {
                let level = level?;
                let mut context = LogContext::new();
                for value in &meta {
                    context.merge_value(value);
                }
                Some(ResolvedCall {
                    level,
                    message: message.into_text(),
                    context,
                })
            }
            LogCall::Entry {
                level,
                message,
                extra,
            } => {
                let level = level?;
                let message = match message {
                    None | Some(Value::Null) => MISSING_MESSAGE.to_string(),
                    Some(value) => Message::Object(value).into_text(),
                };
                Some(ResolvedCall {
                    level,
                    message,
                    context: extra,
                })
            }
        }
    }
}

impl From<Value> for LogCall {
    fn from(entry: Value) -> Self {
        LogCall::entry(entry)
    }
}
