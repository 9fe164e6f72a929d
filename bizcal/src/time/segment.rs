//! Half-open spans of absolute time.

use std::cmp::{max, min};

use chrono::{DateTime, Duration, Utc};
use smallvec::{smallvec, SmallVec};

/// A non-empty half-open span `[start, end)` of absolute time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSegment {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeSegment {
    /// Creates a segment, or `None` if `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    #[inline]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    #[inline]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Overlapping part of two segments, if any.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        Self::new(max(self.start, other.start), min(self.end, other.end))
    }

    /// Parts of `self` not covered by `other` (zero, one or two segments).
    pub fn difference(&self, other: &Self) -> SmallVec<[Self; 2]> {
        if self.intersection(other).is_none() {
            return smallvec![*self];
        }

        let mut result = SmallVec::new();
        if let Some(before) = Self::new(self.start, other.start) {
            result.push(before);
        }
        if let Some(after) = Self::new(other.end, self.end) {
            result.push(after);
        }
        result
    }

    /// Merges `other` into `self` when it starts inside or exactly at the end of `self`.
    pub(crate) fn absorb(&mut self, other: &Self) -> bool {
        if self.start <= other.start && other.start <= self.end {
            self.end = max(self.end, other.end);
            true
        } else {
            false
        }
    }
}
