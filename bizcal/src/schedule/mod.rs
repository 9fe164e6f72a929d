//! Compiled business schedules.
//!
//! A [`Schedule`] is built once from a [`ScheduleConfig`] (or a TOML file,
//! see [`crate::config`]) and is read-only afterwards, so it can be shared
//! between threads freely.
//!
//! # Example
//!
//! ```
//! use bizcal::Schedule;
//!
//! let schedule = Schedule::from_toml_str(r#"
//!     time_zone = "Etc/UTC"
//!     holidays = ["2006-01-01", "2006-12-25"]
//!
//!     [hours]
//!     mon = { "09:00" = "17:00" }
//!     tue = { "10:00" = "16:00" }
//! "#).unwrap();
//!
//! assert_eq!(schedule.intervals().len(), 2);
//! assert_eq!(schedule.holidays().len(), 2);
//! ```

pub mod compiler;
pub mod holiday;
pub mod interval;

use std::path::Path;

use chrono::NaiveDate;

pub use compiler::{BreakConfig, Hours, ScheduleConfig};
pub use holiday::{Break, Holiday};
pub use interval::Interval;

use crate::config::ScheduleFile;
use crate::error::ConfigResult;
use crate::time::Zone;

/// Immutable weekly hours, holidays and breaks in one time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    zone: Zone,
    intervals: Vec<Interval>,
    holidays: Vec<Holiday>,
    breaks: Vec<Break>,
}

impl Schedule {
    /// Compiles a schedule from validated configuration.
    pub fn new(config: ScheduleConfig) -> ConfigResult<Self> {
        compiler::compile(config)
    }

    /// Loads and compiles a schedule from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::new(ScheduleFile::from_toml_str(content)?.into_config()?)
    }

    /// Loads and compiles a schedule from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        Self::new(ScheduleFile::from_file(path)?.into_config()?)
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Open hours, sorted by start and non-overlapping.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Holidays, sorted by date and unique.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Breaks, sorted by date and start.
    pub fn breaks(&self) -> &[Break] {
        &self.breaks
    }

    /// Holidays dated within `[from, to)`.
    pub(crate) fn holidays_between(&self, from: NaiveDate, to: NaiveDate) -> &[Holiday] {
        let lo = self.holidays.partition_point(|h| h.date() < from);
        let hi = self.holidays.partition_point(|h| h.date() < to);
        &self.holidays[lo..hi.max(lo)]
    }

    /// Breaks dated within `[from, to)`.
    pub(crate) fn breaks_between(&self, from: NaiveDate, to: NaiveDate) -> &[Break] {
        let lo = self.breaks.partition_point(|b| b.date() < from);
        let hi = self.breaks.partition_point(|b| b.date() < to);
        &self.breaks[lo..hi.max(lo)]
    }
}
