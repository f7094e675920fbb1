use std::io;

use thiserror::Error;

/// Rejected input when building an [`Event`](crate::Event).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("event name must not be blank")]
    BlankName,

    #[error("day of week must be between 1 (Monday) and 7 (Sunday), got {0}")]
    DayOfWeekOutOfRange(u8),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown month `{0}`")]
pub struct ParseMonthError(pub String);

/// Failure while reading events from a text source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read events: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl LoadError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}
