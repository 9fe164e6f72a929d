//! Loading schedules from configuration files.
//!
//! The compiler in [`crate::schedule`] only consumes validated values. This
//! module turns the textual forms people write (`"09:00"`, `"mon"`,
//! `"2006-12-25"`, `"America/New_York"`) into a
//! [`ScheduleConfig`](crate::schedule::ScheduleConfig).
//!
//! - [`file`]: the TOML schedule file format
//! - [`parse`]: time-of-day, weekday and date parsers

pub mod file;
pub mod parse;

pub use file::ScheduleFile;
pub use parse::{parse_date, parse_day_time, parse_weekday};
