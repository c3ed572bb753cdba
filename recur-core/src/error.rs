//! Error types for recur.
//!
//! Only boundary parsing and validation can fail. Expansion and mutation
//! never return errors: an empty or unchanged collection is their answer.

use thiserror::Error;

/// Errors raised while turning user input into core values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Start time {start} must be before end time {end}")]
    InvalidTimeRange { start: String, end: String },

    #[error("Event title must not be empty")]
    MissingTitle,

    #[error("Repeat interval must be at least 1, got {0}")]
    InvalidInterval(u32),

    #[error("Unknown repeat type '{0}'. Expected daily, weekly, monthly or yearly")]
    UnknownFrequency(String),

    #[error("Unknown scope '{0}'. Expected single or all")]
    UnknownScope(String),
}

/// Result type alias for recur operations.
pub type RecurResult<T> = Result<T, RecurError>;
