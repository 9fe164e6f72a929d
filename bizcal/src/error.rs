//! Error types for schedule compilation and business-time queries.
//!
//! Configuration errors are raised only while a [`Schedule`](crate::Schedule)
//! is being loaded or compiled. Range errors are raised only by queries, from
//! caller-supplied arguments. A compiled schedule never produces a
//! configuration error.

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Result type for configuration loading and schedule compilation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for business-time queries
pub type RangeResult<T> = Result<T, RangeError>;

/// Error type for configuration loading and schedule compilation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Value {value} is out of range (must be below {max})")]
    OutOfRange { value: i64, max: i64 },

    #[error("Invalid hours on {weekday}: open {open} must be before close {close}")]
    InvalidInterval {
        weekday: chrono::Weekday,
        open: String,
        close: String,
    },

    #[error("Overlapping hours on {weekday}")]
    OverlappingIntervals { weekday: chrono::Weekday },

    #[error("Duplicate holiday: {0}")]
    DuplicateHoliday(NaiveDate),

    #[error("Invalid break on {date}: start {start} must be before end {end}")]
    InvalidBreak {
        date: NaiveDate,
        start: String,
        end: String,
    },

    #[error("Hours must not be empty")]
    NoHours,

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Invalid time of day: {0:?} (expected HH:MM)")]
    InvalidTimeOfDay(String),

    #[error("Unknown weekday: {0:?}")]
    UnknownWeekday(String),

    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Failed to read config file: {0}")]
    Io(String),

    #[error("Failed to parse config file: {0}")]
    Parse(String),
}

/// Error type for business-time queries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Duration must not be negative: {0}")]
    NegativeDuration(Duration),

    #[error("Invalid range: {to} is before {from}")]
    InvalidRange {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },

    #[error("Business duration {duration} from {instant} exceeds the representable range")]
    BeyondRange {
        instant: DateTime<Utc>,
        duration: Duration,
    },
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
