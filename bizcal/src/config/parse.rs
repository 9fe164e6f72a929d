//! Parsing of the textual values found in schedule files.

use std::str::FromStr;

use chrono::{NaiveDate, Weekday};

use crate::error::{ConfigError, ConfigResult};
use crate::time::DayTime;

/// Parses an `HH:MM` time of day, `00:00` through `24:00`.
pub fn parse_day_time(text: &str) -> ConfigResult<DayTime> {
    let invalid = || ConfigError::InvalidTimeOfDay(text.to_string());

    let (hour, minute) = text.trim().split_once(':').ok_or_else(invalid)?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return Err(invalid());
    }
    if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    DayTime::from_hm(hour, minute).map_err(|_| invalid())
}

/// Parses a weekday name: `mon`, `Monday`, `TUE`, ...
pub fn parse_weekday(text: &str) -> ConfigResult<Weekday> {
    text.trim()
        .parse::<Weekday>()
        .map_err(|_| ConfigError::UnknownWeekday(text.to_string()))
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(text: &str) -> ConfigResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| ConfigError::InvalidDate(text.to_string()))
}

impl FromStr for DayTime {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        parse_day_time(s)
    }
}
