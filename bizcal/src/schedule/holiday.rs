//! Holidays and breaks: dated closures that override open hours.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use smallvec::SmallVec;

use crate::error::{ConfigError, ConfigResult};
use crate::time::{DayTime, TimeSegment, Zone};

/// A zone-local calendar date excluded from business time in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    date: NaiveDate,
    zone: Zone,
}

impl Holiday {
    pub fn new(date: NaiveDate, zone: Zone) -> Self {
        Self { date, zone }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Whether `instant` falls on this date in the holiday's zone.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.zone
            .local(instant)
            .is_some_and(|local| local.date() == self.date)
    }

    /// Absolute time from local midnight to the next local midnight.
    pub(crate) fn time_segments(&self) -> SmallVec<[TimeSegment; 2]> {
        spans_on(&self.zone, self.date, DayTime::MIDNIGHT, DayTime::END_OF_DAY)
    }
}

/// A dated, partial-day span of closed time in zone-local wall-clock terms.
///
/// Like a holiday, a break overrides any open hours it overlaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Break {
    date: NaiveDate,
    start: DayTime,
    end: DayTime,
    zone: Zone,
}

impl Break {
    pub fn new(date: NaiveDate, start: DayTime, end: DayTime, zone: Zone) -> ConfigResult<Self> {
        if start >= end {
            return Err(ConfigError::InvalidBreak {
                date,
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            date,
            start,
            end,
            zone,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start(&self) -> DayTime {
        self.start
    }

    pub fn end(&self) -> DayTime {
        self.end
    }

    /// Whether the zone-local time at `instant` falls inside the break.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        match (self.zone.local(instant), self.local_range()) {
            (Some(local), Some((start, end))) => start <= local && local < end,
            _ => false,
        }
    }

    pub(crate) fn time_segments(&self) -> SmallVec<[TimeSegment; 2]> {
        spans_on(&self.zone, self.date, self.start, self.end)
    }

    fn local_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.start.on_date(self.date)?, self.end.on_date(self.date)?))
    }
}

fn spans_on(zone: &Zone, date: NaiveDate, start: DayTime, end: DayTime) -> SmallVec<[TimeSegment; 2]> {
    match (start.on_date(date), end.on_date(date)) {
        (Some(start), Some(end)) => zone.spans(start, end),
        _ => SmallVec::new(),
    }
}
