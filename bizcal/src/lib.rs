//! Business-time arithmetic.
//!
//! A [`Schedule`] combines weekly open hours, holidays and breaks in one time
//! zone. From it, a lazy stream of business and non-business
//! [`Period`](periods::Period)s can be generated from any instant, forwards
//! or backwards, and the usual questions are answered on top of that stream:
//! is an instant business time, what instant lies N business hours ahead,
//! and how much business time separates two instants.
//!
//! # Modules
//!
//! - [`time`]: week/day offsets, absolute time segments, time zones
//! - [`schedule`]: intervals, holidays, breaks and the schedule compiler
//! - [`periods`]: the period stream generator
//! - [`calculation`]: business-time queries on a schedule
//! - [`config`]: TOML schedule files
//! - [`error`]: error types

pub mod calculation;
pub mod config;
pub mod error;
pub mod periods;
pub mod schedule;
pub mod time;

pub use error::{ConfigError, ConfigResult, RangeError, RangeResult};
pub use periods::{generate, Direction, Period, Periods};
pub use schedule::{Hours, Schedule, ScheduleConfig};
pub use time::{DayTime, WeekTime, Zone};
