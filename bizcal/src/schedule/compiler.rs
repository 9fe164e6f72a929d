//! Compilation of raw configuration into an immutable [`Schedule`].
//!
//! Weekday open hours become [`Interval`]s sorted by week time, holidays are
//! sorted and checked for duplicates, and breaks are sorted by date and start.
//! Compilation runs once; the result is never mutated.

use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};

use super::{Break, Holiday, Interval, Schedule};
use crate::error::{ConfigError, ConfigResult};
use crate::time::{DayTime, WeekTime, Zone};

/// One `{open, close}` pair of zone-local wall-clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hours {
    pub open: DayTime,
    pub close: DayTime,
}

impl Hours {
    pub fn new(open: DayTime, close: DayTime) -> Self {
        Self { open, close }
    }
}

/// A dated span of closed time, as configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakConfig {
    pub date: NaiveDate,
    pub start: DayTime,
    pub end: DayTime,
}

/// Validated input for [`Schedule::new`].
///
/// # Examples
///
/// ```
/// use bizcal::schedule::{Hours, Schedule, ScheduleConfig};
/// use bizcal::time::{DayTime, Zone};
/// use chrono::{NaiveDate, Weekday};
///
/// let nine_to_five = Hours::new(DayTime::from_hm(9, 0).unwrap(), DayTime::from_hm(17, 0).unwrap());
/// let config = ScheduleConfig::new(Zone::utc())
///     .with_hours(Weekday::Tue, nine_to_five)
///     .with_hours(Weekday::Mon, nine_to_five)
///     .with_holiday(NaiveDate::from_ymd_opt(2006, 12, 25).unwrap());
///
/// let schedule = Schedule::new(config).unwrap();
/// assert_eq!(schedule.intervals()[0].start().weekday(), Weekday::Mon);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleConfig {
    pub hours: HashMap<Weekday, Vec<Hours>>,
    pub holidays: Vec<NaiveDate>,
    pub breaks: Vec<BreakConfig>,
    pub zone: Zone,
}

impl ScheduleConfig {
    pub fn new(zone: Zone) -> Self {
        Self {
            zone,
            ..Self::default()
        }
    }

    pub fn with_hours(mut self, weekday: Weekday, hours: Hours) -> Self {
        self.hours.entry(weekday).or_default().push(hours);
        self
    }

    pub fn with_holiday(mut self, date: NaiveDate) -> Self {
        self.holidays.push(date);
        self
    }

    pub fn with_break(mut self, date: NaiveDate, start: DayTime, end: DayTime) -> Self {
        self.breaks.push(BreakConfig { date, start, end });
        self
    }
}

/// Turns a [`ScheduleConfig`] into a [`Schedule`].
pub(crate) fn compile(config: ScheduleConfig) -> ConfigResult<Schedule> {
    let ScheduleConfig {
        hours,
        holidays,
        breaks,
        zone,
    } = config;

    let intervals = compile_intervals(&hours, &zone)?;
    let holidays = compile_holidays(holidays, &zone)?;
    let breaks = compile_breaks(&breaks, &zone)?;

    log::debug!(
        "Compiled schedule in {}: {} intervals, {} holidays, {} breaks",
        zone,
        intervals.len(),
        holidays.len(),
        breaks.len()
    );

    Ok(Schedule {
        zone,
        intervals,
        holidays,
        breaks,
    })
}

fn compile_intervals(
    hours: &HashMap<Weekday, Vec<Hours>>,
    zone: &Zone,
) -> ConfigResult<Vec<Interval>> {
    let mut intervals = Vec::new();

    for (&weekday, day_hours) in hours {
        for h in day_hours {
            if h.open >= h.close {
                return Err(ConfigError::InvalidInterval {
                    weekday,
                    open: h.open.to_string(),
                    close: h.close.to_string(),
                });
            }
            intervals.push(Interval::new(
                WeekTime::from_day_time(weekday, h.open),
                WeekTime::from_day_time(weekday, h.close),
                zone.clone(),
            )?);
        }
    }

    if intervals.is_empty() {
        return Err(ConfigError::NoHours);
    }

    intervals.sort_by_key(|interval| (interval.start(), interval.end()));

    for pair in intervals.windows(2) {
        if pair[0].end() > pair[1].start() {
            return Err(ConfigError::OverlappingIntervals {
                weekday: pair[1].start().weekday(),
            });
        }
    }

    Ok(intervals)
}

fn compile_holidays(mut dates: Vec<NaiveDate>, zone: &Zone) -> ConfigResult<Vec<Holiday>> {
    dates.sort_unstable();

    if let Some(pair) = dates.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(ConfigError::DuplicateHoliday(pair[0]));
    }

    Ok(dates
        .into_iter()
        .map(|date| Holiday::new(date, zone.clone()))
        .collect())
}

fn compile_breaks(configs: &[BreakConfig], zone: &Zone) -> ConfigResult<Vec<Break>> {
    let mut breaks = configs
        .iter()
        .map(|b| Break::new(b.date, b.start, b.end, zone.clone()))
        .collect::<ConfigResult<Vec<_>>>()?;

    breaks.sort_by_key(|b| (b.date(), b.start(), b.end()));
    Ok(breaks)
}
