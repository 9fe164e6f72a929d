//! Points within a recurring week and within a day.
//!
//! Both types are plain minute offsets in zone-local wall-clock terms: a
//! [`WeekTime`] counts minutes from Monday 00:00 and a [`DayTime`] counts
//! minutes from midnight. Neither carries a date or a time zone.

use std::fmt;

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::error::{ConfigError, ConfigResult};

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;
pub const MINUTES_PER_WEEK: u32 = 7 * MINUTES_PER_DAY;

/// A point within a 7-day week, in minutes from Monday 00:00.
///
/// Valid values are in `[0, 10080)`. The single exception is
/// [`WeekTime::end_of_week`], the exclusive end of the week, which may only
/// appear as the end of an [`Interval`](crate::schedule::Interval).
///
/// # Examples
///
/// ```
/// use bizcal::time::WeekTime;
///
/// let monday_nine = WeekTime::new(9 * 60).unwrap();
/// let sunday_late = WeekTime::new(6 * 1440 + 23 * 60).unwrap();
///
/// assert!(monday_nine < sunday_late);
/// assert_eq!(sunday_late.forward_distance(monday_nine), 10 * 60);
/// assert!(WeekTime::new(10080).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekTime(u32);

impl WeekTime {
    /// Monday 00:00.
    pub const START: WeekTime = WeekTime(0);

    /// Creates a week time from minutes since Monday 00:00.
    ///
    /// Fails with [`ConfigError::OutOfRange`] unless `minutes < 10080`.
    pub fn new(minutes: u32) -> ConfigResult<Self> {
        if minutes < MINUTES_PER_WEEK {
            Ok(Self(minutes))
        } else {
            Err(ConfigError::OutOfRange {
                value: i64::from(minutes),
                max: i64::from(MINUTES_PER_WEEK),
            })
        }
    }

    /// The exclusive end of the week (next Monday 00:00).
    pub const fn end_of_week() -> Self {
        Self(MINUTES_PER_WEEK)
    }

    /// Combines a weekday and a time of day.
    ///
    /// `Sunday` at `24:00` yields [`WeekTime::end_of_week`].
    pub fn from_day_time(weekday: Weekday, day_time: DayTime) -> Self {
        Self(weekday.num_days_from_monday() * MINUTES_PER_DAY + day_time.minutes())
    }

    /// Projects a zone-local wall-clock time onto the week, truncating seconds.
    pub fn from_local(local: NaiveDateTime) -> Self {
        Self(
            local.weekday().num_days_from_monday() * MINUTES_PER_DAY
                + local.hour() * MINUTES_PER_HOUR
                + local.minute(),
        )
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub(crate) fn seconds(self) -> i64 {
        i64::from(self.0) * 60
    }

    pub fn is_end_of_week(self) -> bool {
        self.0 == MINUTES_PER_WEEK
    }

    /// Day of the week this point falls on; the end of the week belongs to Sunday.
    pub fn weekday(self) -> Weekday {
        let day = if self.is_end_of_week() {
            6
        } else {
            self.0 / MINUTES_PER_DAY
        };
        weekday_from_monday(day)
    }

    /// Time of day within [`WeekTime::weekday`]; the end of the week is Sunday `24:00`.
    pub fn day_time(self) -> DayTime {
        if self.is_end_of_week() {
            DayTime::END_OF_DAY
        } else {
            DayTime(self.0 % MINUTES_PER_DAY)
        }
    }

    /// Minutes from `self` forward to `other`, wrapping past Sunday.
    ///
    /// The result is always in `[0, 10080)`; equal points are `0` apart.
    pub fn forward_distance(self, other: WeekTime) -> u32 {
        (other.0 % MINUTES_PER_WEEK + MINUTES_PER_WEEK - self.0 % MINUTES_PER_WEEK)
            % MINUTES_PER_WEEK
    }

    /// Local wall-clock time of this point in the week starting on `monday`.
    pub(crate) fn on_week(self, monday: NaiveDate) -> Option<NaiveDateTime> {
        monday
            .and_time(NaiveTime::MIN)
            .checked_add_signed(Duration::minutes(i64::from(self.0)))
    }
}

impl fmt::Display for WeekTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.weekday(), self.day_time())
    }
}

/// A time of day in minutes from midnight, `00:00` through `24:00`.
///
/// `24:00` ([`DayTime::END_OF_DAY`]) is only meaningful as the close of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayTime(u32);

impl DayTime {
    pub const MIDNIGHT: DayTime = DayTime(0);
    pub const END_OF_DAY: DayTime = DayTime(MINUTES_PER_DAY);

    /// Creates a time of day from minutes since midnight, `0..=1440`.
    pub fn new(minutes: u32) -> ConfigResult<Self> {
        if minutes <= MINUTES_PER_DAY {
            Ok(Self(minutes))
        } else {
            Err(ConfigError::OutOfRange {
                value: i64::from(minutes),
                max: i64::from(MINUTES_PER_DAY) + 1,
            })
        }
    }

    /// Creates a time of day from an hour and minute.
    ///
    /// ```
    /// use bizcal::time::DayTime;
    ///
    /// assert_eq!(DayTime::from_hm(9, 30).unwrap().minutes(), 570);
    /// assert_eq!(DayTime::from_hm(24, 0).unwrap(), DayTime::END_OF_DAY);
    /// assert!(DayTime::from_hm(24, 1).is_err());
    /// assert!(DayTime::from_hm(9, 60).is_err());
    /// ```
    pub fn from_hm(hour: u32, minute: u32) -> ConfigResult<Self> {
        if minute >= MINUTES_PER_HOUR {
            return Err(ConfigError::OutOfRange {
                value: i64::from(minute),
                max: i64::from(MINUTES_PER_HOUR),
            });
        }
        Self::new(hour.saturating_mul(MINUTES_PER_HOUR).saturating_add(minute))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Local wall-clock time of this time of day on `date` (`24:00` rolls to the next day).
    pub(crate) fn on_date(self, date: NaiveDate) -> Option<NaiveDateTime> {
        date.and_time(NaiveTime::MIN)
            .checked_add_signed(Duration::minutes(i64::from(self.0)))
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

fn weekday_from_monday(days: u32) -> Weekday {
    match days % 7 {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

/// Monday of the week containing `date`.
pub(crate) fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}
