//! Weekly open-hours intervals.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};
use smallvec::SmallVec;

use crate::error::{ConfigError, ConfigResult};
use crate::time::{TimeSegment, WeekTime, Zone};

/// A weekly-recurring span of open hours, `[start, end)` in zone-local week time.
///
/// An interval never wraps past Sunday: `start < end <= end_of_week`. Hours
/// running from Sunday night into Monday are two intervals.
///
/// # Examples
///
/// ```
/// use bizcal::schedule::Interval;
/// use bizcal::time::{WeekTime, Zone};
/// use chrono::{TimeZone, Utc};
///
/// let interval = Interval::new(
///     WeekTime::new(9 * 60).unwrap(),
///     WeekTime::new(17 * 60).unwrap(),
///     Zone::utc(),
/// )
/// .unwrap();
///
/// // 2006-01-02 is a Monday
/// assert!(interval.contains(Utc.with_ymd_and_hms(2006, 1, 2, 9, 0, 0).unwrap()));
/// assert!(!interval.contains(Utc.with_ymd_and_hms(2006, 1, 2, 17, 0, 0).unwrap()));
/// assert_eq!(interval.duration_minutes(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    start: WeekTime,
    end: WeekTime,
    zone: Zone,
}

impl Interval {
    pub fn new(start: WeekTime, end: WeekTime, zone: Zone) -> ConfigResult<Self> {
        if start >= end || end > WeekTime::end_of_week() {
            return Err(ConfigError::InvalidInterval {
                weekday: start.weekday(),
                open: start.day_time().to_string(),
                close: end.day_time().to_string(),
            });
        }
        Ok(Self { start, end, zone })
    }

    pub fn start(&self) -> WeekTime {
        self.start
    }

    pub fn end(&self) -> WeekTime {
        self.end
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Wall-clock length of the interval in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }

    /// Wall-clock length of the interval.
    ///
    /// On a DST transition date the absolute time covered may differ.
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes()))
    }

    /// Whether `instant`, projected onto the zone-local week, falls inside.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        let Some(local) = self.zone.local(instant) else {
            return false;
        };
        let week_second = i64::from(local.weekday().num_days_from_monday()) * 86_400
            + i64::from(local.num_seconds_from_midnight());
        self.start.seconds() <= week_second && week_second < self.end.seconds()
    }

    /// Absolute spans of this interval in the zone-local week starting on `monday`.
    ///
    /// Empty when the interval lies inside a skipped hour. Two spans when it
    /// reaches into a repeated hour.
    pub(crate) fn time_segments(&self, monday: NaiveDate) -> SmallVec<[TimeSegment; 2]> {
        match (self.start.on_week(monday), self.end.on_week(monday)) {
            (Some(start), Some(end)) => self.zone.spans(start, end),
            _ => SmallVec::new(),
        }
    }
}
