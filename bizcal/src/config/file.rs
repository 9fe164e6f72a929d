//! TOML schedule files.
//!
//! ```toml
//! time_zone = "America/New_York"
//! holidays = ["2006-01-01", "2006-12-25"]
//!
//! [hours]
//! mon = { "09:00" = "17:00" }
//! tue = { "09:00" = "12:00", "13:00" = "17:00" }
//!
//! [breaks]
//! "2006-01-04" = { "10:00" = "11:30" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::parse::{parse_date, parse_day_time, parse_weekday};
use crate::error::ConfigResult;
use crate::schedule::{Hours, ScheduleConfig};
use crate::time::Zone;

/// Raw contents of a schedule file, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleFile {
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    #[serde(default)]
    pub holidays: Vec<String>,
    /// Weekday name to `open = close` pairs.
    #[serde(default)]
    pub hours: BTreeMap<String, BTreeMap<String, String>>,
    /// Date to `start = end` pairs.
    #[serde(default)]
    pub breaks: BTreeMap<String, BTreeMap<String, String>>,
}

fn default_time_zone() -> String {
    "Etc/UTC".to_string()
}

impl Default for ScheduleFile {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            holidays: Vec::new(),
            hours: BTreeMap::new(),
            breaks: BTreeMap::new(),
        }
    }
}

impl ScheduleFile {
    /// Parses schedule file contents.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a schedule file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading schedule file {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validates every value and resolves the time zone.
    pub fn into_config(self) -> ConfigResult<ScheduleConfig> {
        let mut config = ScheduleConfig::new(Zone::named(&self.time_zone)?);

        for (day, spans) in &self.hours {
            let weekday = parse_weekday(day)?;
            for (open, close) in spans {
                let hours = Hours::new(parse_day_time(open)?, parse_day_time(close)?);
                config = config.with_hours(weekday, hours);
            }
        }

        for holiday in &self.holidays {
            config = config.with_holiday(parse_date(holiday)?);
        }

        for (date, spans) in &self.breaks {
            let date = parse_date(date)?;
            for (start, end) in spans {
                config = config.with_break(date, parse_day_time(start)?, parse_day_time(end)?);
            }
        }

        Ok(config)
    }
}
