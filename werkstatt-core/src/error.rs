//! Error types for the werkstatt scheduling engine.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in scheduling operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTimeFormat(String),

    #[error("Start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Slot unavailable: {0}")]
    SlotUnavailable(String),

    #[error("No appointment found for '{0}'")]
    NotFound(String),

    #[error("No free slot within the next {0} days")]
    NoSlotAvailable(u32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for scheduling operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
