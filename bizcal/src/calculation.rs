//! Business-time queries.
//!
//! Every query here is answered by consuming a [`Periods`](crate::periods::Periods)
//! stream; none of them has an algorithm of its own.
//!
//! # Example
//!
//! ```
//! use bizcal::Schedule;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let schedule = Schedule::from_toml_str(r#"
//!     [hours]
//!     mon = { "09:00" = "17:00" }
//!     tue = { "09:00" = "17:00" }
//! "#).unwrap();
//!
//! let monday_four_pm = Utc.with_ymd_and_hms(2006, 1, 2, 16, 0, 0).unwrap();
//! let due = schedule
//!     .time_after_business_duration(monday_four_pm, Duration::hours(2))
//!     .unwrap();
//!
//! assert_eq!(due, Utc.with_ymd_and_hms(2006, 1, 3, 10, 0, 0).unwrap());
//! assert_eq!(
//!     schedule.business_duration_between(monday_four_pm, due).unwrap(),
//!     Duration::hours(2)
//! );
//! ```

use chrono::{DateTime, Duration, Utc};

use crate::error::{RangeError, RangeResult};
use crate::periods::Period;
use crate::schedule::Schedule;

impl Schedule {
    /// Whether `instant` is business time: inside open hours and not on a
    /// holiday or break.
    pub fn is_business_time(&self, instant: DateTime<Utc>) -> bool {
        self.periods_after(instant)
            .next()
            .is_some_and(|period| period.business)
    }

    /// Whether `instant` is inside the weekly open hours, ignoring holidays and breaks.
    pub fn in_hours(&self, instant: DateTime<Utc>) -> bool {
        self.intervals()
            .iter()
            .any(|interval| interval.contains(instant))
    }

    /// Whether `instant` falls on a holiday date in the schedule's zone.
    pub fn on_holiday(&self, instant: DateTime<Utc>) -> bool {
        let Some(date) = self.zone().local(instant).map(|local| local.date()) else {
            return false;
        };
        self.holidays()
            .binary_search_by_key(&date, |holiday| holiday.date())
            .is_ok()
    }

    /// Whether `instant` falls inside a break.
    pub fn on_break(&self, instant: DateTime<Utc>) -> bool {
        self.breaks().iter().any(|b| b.contains(instant))
    }

    /// The earliest instant at which `duration` of business time has elapsed
    /// since `instant`.
    ///
    /// A zero duration returns `instant` unchanged. Fails with
    /// [`RangeError::NegativeDuration`] for negative durations and
    /// [`RangeError::BeyondRange`] when the representable timeline ends first.
    pub fn time_after_business_duration(
        &self,
        instant: DateTime<Utc>,
        duration: Duration,
    ) -> RangeResult<DateTime<Utc>> {
        if duration < Duration::zero() {
            return Err(RangeError::NegativeDuration(duration));
        }
        if duration.is_zero() {
            return Ok(instant);
        }

        let mut remaining = duration;
        for period in self.periods_after(instant) {
            if !period.business {
                continue;
            }
            let start = period.start.max(instant);
            let available = period.end - start;
            if available >= remaining {
                return Ok(start + remaining);
            }
            remaining = remaining - available;
        }
        Err(RangeError::BeyondRange { instant, duration })
    }

    /// The latest instant from which `duration` of business time elapses
    /// until `instant`.
    ///
    /// A zero duration returns `instant` unchanged. Fails with
    /// [`RangeError::NegativeDuration`] for negative durations and
    /// [`RangeError::BeyondRange`] when the representable timeline ends first.
    pub fn time_before_business_duration(
        &self,
        instant: DateTime<Utc>,
        duration: Duration,
    ) -> RangeResult<DateTime<Utc>> {
        if duration < Duration::zero() {
            return Err(RangeError::NegativeDuration(duration));
        }
        if duration.is_zero() {
            return Ok(instant);
        }

        let mut remaining = duration;
        for period in self.periods_before(instant) {
            if !period.business {
                continue;
            }
            let end = period.end.min(instant);
            if end <= period.start {
                continue;
            }
            let available = end - period.start;
            if available >= remaining {
                return Ok(end - remaining);
            }
            remaining = remaining - available;
        }
        Err(RangeError::BeyondRange { instant, duration })
    }

    /// Business time elapsed within `[from, to)`.
    ///
    /// Fails with [`RangeError::InvalidRange`] if `to` is before `from`.
    pub fn business_duration_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RangeResult<Duration> {
        Ok(self
            .periods_within(from, to)?
            .iter()
            .filter(|period| period.business)
            .map(Period::duration)
            .fold(Duration::zero(), |total, d| total + d))
    }

    /// The periods covering `[from, to)`, with the first and last clipped to
    /// the range.
    ///
    /// The result is contiguous and its union is exactly `[from, to)`; an
    /// empty range yields no periods. Fails with [`RangeError::InvalidRange`]
    /// if `to` is before `from`.
    pub fn periods_within(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RangeResult<Vec<Period>> {
        if to < from {
            return Err(RangeError::InvalidRange { from, to });
        }

        Ok(self
            .periods_after(from)
            .take_while(|period| period.start < to)
            .filter_map(|period| period.clip(from, to))
            .collect())
    }
}
