//! Error types for amnet-schedule operations.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A 12-hour clock string did not match `h:mm am|pm`. Carries the raw input.
    #[error("Malformed time string: {0:?}")]
    Parse(String),

    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// A required field is missing or the record is internally inconsistent.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Local time {local} does not exist in {timezone}")]
    NonexistentLocalTime {
        local: NaiveDateTime,
        timezone: String,
    },

    #[error("Local time {local} is ambiguous in {timezone}")]
    AmbiguousLocalTime {
        local: NaiveDateTime,
        timezone: String,
    },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
