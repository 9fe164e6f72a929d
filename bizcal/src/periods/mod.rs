//! Lazy, ordered streams of business and non-business periods.
//!
//! A schedule partitions the whole timeline into [`Period`]s. Business
//! periods are the open spans of each zone-local week after holidays and
//! breaks are cut out; non-business periods are the complete gaps between
//! them, never split (a holiday running into a weekend is one period). Two
//! business periods can only meet at a zone-local week boundary.
//!
//! [`Periods`] walks that partition from an anchor instant in either
//! direction. The first period yielded always contains the anchor, and the
//! stream is restartable: generating again from the same anchor and
//! direction yields the same periods.
//!
//! # Example
//!
//! ```
//! use bizcal::periods::{generate, Direction};
//! use bizcal::Schedule;
//! use chrono::{TimeZone, Utc};
//!
//! let schedule = Schedule::from_toml_str(r#"
//!     [hours]
//!     mon = { "09:00" = "17:00" }
//!     tue = { "09:00" = "17:00" }
//! "#).unwrap();
//!
//! // Monday 2006-01-02, 12:00
//! let anchor = Utc.with_ymd_and_hms(2006, 1, 2, 12, 0, 0).unwrap();
//! let periods: Vec<_> = generate(&schedule, anchor, Direction::Forward).take(3).collect();
//!
//! assert!(periods[0].business);
//! assert_eq!(periods[0].start, Utc.with_ymd_and_hms(2006, 1, 2, 9, 0, 0).unwrap());
//! assert!(!periods[1].business);
//! assert_eq!(periods[1].end, Utc.with_ymd_and_hms(2006, 1, 3, 9, 0, 0).unwrap());
//! assert!(periods[2].business);
//! ```

mod segments;

use std::iter::FusedIterator;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::schedule::Schedule;
use crate::time::TimeSegment;

use segments::Segments;

/// A half-open span `[start, end)` of absolute time with one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub business: bool,
}

impl Period {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, business: bool) -> Self {
        Self {
            start,
            end,
            business,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// The part of this period inside `[from, to)`, if any.
    pub fn clip(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Option<Period> {
        let start = self.start.max(from);
        let end = self.end.min(to);
        (start < end).then(|| Period::new(start, end, self.business))
    }
}

/// Which way a [`Periods`] stream walks through time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// Pull-driven stream of [`Period`]s anchored at an instant.
///
/// Forward streams yield periods in increasing time order, each starting
/// where the previous one ended; backward streams yield them in decreasing
/// order, each ending where the previous one started. The stream only ends
/// when the representable range of `DateTime<Utc>` is exhausted.
#[derive(Debug, Clone)]
pub struct Periods<'a> {
    direction: Direction,
    segments: Segments<'a>,
    pending: Option<TimeSegment>,
    /// Boundary the next period starts at (forward) or ends at (backward).
    cursor: Option<DateTime<Utc>>,
}

impl<'a> Periods<'a> {
    /// Starts a stream whose first period contains `anchor`.
    pub fn generate(schedule: &'a Schedule, anchor: DateTime<Utc>, direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self::forward(schedule, anchor),
            Direction::Backward => Self::backward(schedule, anchor),
        }
    }

    fn forward(schedule: &'a Schedule, anchor: DateTime<Utc>) -> Self {
        let mut segments = Segments::new(schedule, anchor, Direction::Forward);
        let pending = segments.next();

        let cursor = match pending {
            Some(segment) if segment.start() <= anchor => segment.start(),
            _ => Segments::new(schedule, anchor, Direction::Backward)
                .next()
                .map_or(DateTime::<Utc>::MIN_UTC, |previous| previous.end().min(anchor)),
        };

        Self {
            direction: Direction::Forward,
            segments,
            pending,
            cursor: Some(cursor),
        }
    }

    fn backward(schedule: &'a Schedule, anchor: DateTime<Utc>) -> Self {
        let mut segments = Segments::new(schedule, anchor, Direction::Backward);
        let pending = segments.next();

        let cursor = match pending {
            Some(segment) if segment.end() > anchor => segment.end(),
            _ => Segments::new(schedule, anchor, Direction::Forward)
                .next()
                .map_or(DateTime::<Utc>::MAX_UTC, |following| following.start()),
        };

        Self {
            direction: Direction::Backward,
            segments,
            pending,
            cursor: Some(cursor),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn next_segment(&mut self) -> Option<TimeSegment> {
        self.pending.take().or_else(|| self.segments.next())
    }

    fn next_forward(&mut self, cursor: DateTime<Utc>) -> Option<Period> {
        while let Some(segment) = self.next_segment() {
            // Spans reaching back before the cursor are trimmed to keep the stream contiguous.
            let Some(segment) = TimeSegment::new(segment.start().max(cursor), segment.end()) else {
                continue;
            };

            if segment.start() == cursor {
                self.cursor = Some(segment.end());
                return Some(Period::new(cursor, segment.end(), true));
            }

            self.pending = Some(segment);
            self.cursor = Some(segment.start());
            return Some(Period::new(cursor, segment.start(), false));
        }

        self.cursor = None;
        (cursor < DateTime::<Utc>::MAX_UTC)
            .then(|| Period::new(cursor, DateTime::<Utc>::MAX_UTC, false))
    }

    fn next_backward(&mut self, cursor: DateTime<Utc>) -> Option<Period> {
        while let Some(segment) = self.next_segment() {
            let Some(segment) = TimeSegment::new(segment.start(), segment.end().min(cursor)) else {
                continue;
            };

            if segment.end() == cursor {
                self.cursor = Some(segment.start());
                return Some(Period::new(segment.start(), cursor, true));
            }

            self.pending = Some(segment);
            self.cursor = Some(segment.end());
            return Some(Period::new(segment.end(), cursor, false));
        }

        self.cursor = None;
        (DateTime::<Utc>::MIN_UTC < cursor)
            .then(|| Period::new(DateTime::<Utc>::MIN_UTC, cursor, false))
    }
}

impl Iterator for Periods<'_> {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        let cursor = self.cursor?;
        match self.direction {
            Direction::Forward => self.next_forward(cursor),
            Direction::Backward => self.next_backward(cursor),
        }
    }
}

impl FusedIterator for Periods<'_> {}

/// Lazily generates the periods of `schedule` from `anchor` in `direction`.
pub fn generate(schedule: &Schedule, anchor: DateTime<Utc>, direction: Direction) -> Periods<'_> {
    Periods::generate(schedule, anchor, direction)
}

impl Schedule {
    /// Periods from the one containing `instant` onwards.
    pub fn periods_after(&self, instant: DateTime<Utc>) -> Periods<'_> {
        Periods::generate(self, instant, Direction::Forward)
    }

    /// Periods from the one containing `instant` backwards.
    pub fn periods_before(&self, instant: DateTime<Utc>) -> Periods<'_> {
        Periods::generate(self, instant, Direction::Backward)
    }
}

#[cfg(test)]
mod periods_tests;
