use crate::level::Level;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Originating function (or module path) and source line of a log call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caller {
    pub function: String,
    pub line: u32,
}

/// Backend-neutral log record handed to the line formatter.
///
/// Attributes keep their insertion order; duplicate keys are allowed and
/// rendered as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    pub caller: Option<Caller>,
    pub attributes: Vec<(String, String)>,
}

impl LogRecord {
    /// Record stamped with the current time, without caller or attributes.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        LogRecord {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            caller: None,
            attributes: Vec::new(),
        }
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_caller(mut self, function: impl Into<String>, line: u32) -> Self {
        self.caller = Some(Caller { function: function.into(), line });
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }
}
