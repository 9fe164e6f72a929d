//! Time-zone capability consumed by the schedule.
//!
//! The schedule never computes offsets itself. It asks a [`ZoneRules`]
//! implementation to project absolute instants to zone-local wall-clock
//! time and back. [`Zone`] is the shared, read-only handle to one such
//! implementation; it is resolved once and cloned into every interval,
//! holiday and break of a schedule.

use std::fmt;
use std::sync::Arc;

use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use smallvec::SmallVec;

use super::TimeSegment;
use crate::error::{ConfigError, ConfigResult};

/// Longest run of nonexistent local time we search across, in hours.
const MAX_GAP_HOURS: i64 = 48;

/// Conversion rules between absolute instants and zone-local wall-clock time.
pub trait ZoneRules: fmt::Debug + Send + Sync {
    /// IANA name (or another stable identifier) of the zone.
    fn name(&self) -> &str;

    /// Wall-clock time observed in the zone at `instant`, or `None` when it
    /// falls outside the range of `NaiveDateTime`.
    fn to_local(&self, instant: DateTime<Utc>) -> Option<NaiveDateTime>;

    /// Absolute instant(s) at which the zone observes `local`.
    fn from_local(&self, local: NaiveDateTime) -> LocalResult<DateTime<Utc>>;
}

impl ZoneRules for Tz {
    fn name(&self) -> &str {
        Tz::name(*self)
    }

    fn to_local(&self, instant: DateTime<Utc>) -> Option<NaiveDateTime> {
        let utc = instant.naive_utc();
        utc.checked_add_offset(self.offset_from_utc_datetime(&utc).fix())
    }

    fn from_local(&self, local: NaiveDateTime) -> LocalResult<DateTime<Utc>> {
        self.from_local_datetime(&local)
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Where a local wall-clock time lands on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Occurrence {
    Once(DateTime<Utc>),
    /// Both passes through a repeated local time, earlier first.
    Twice(DateTime<Utc>, DateTime<Utc>),
}

impl Occurrence {
    fn first(self) -> DateTime<Utc> {
        match self {
            Occurrence::Once(t) | Occurrence::Twice(t, _) => t,
        }
    }
}

/// Shared handle to a time zone's conversion rules.
///
/// Two zones compare equal when their rules report the same name.
///
/// # Examples
///
/// ```
/// use bizcal::time::Zone;
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let zone = Zone::named("America/New_York").unwrap();
/// let local = NaiveDate::from_ymd_opt(2006, 7, 3).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let instant = zone.instant(local).unwrap();
///
/// assert_eq!(instant, Utc.with_ymd_and_hms(2006, 7, 3, 13, 0, 0).unwrap());
/// assert_eq!(zone.local(instant), Some(local));
/// ```
#[derive(Clone)]
pub struct Zone(Arc<dyn ZoneRules>);

impl Zone {
    /// Wraps custom zone rules.
    pub fn new<R: ZoneRules + 'static>(rules: R) -> Self {
        Self(Arc::new(rules))
    }

    /// Resolves an IANA time-zone name from the bundled database.
    pub fn named(name: &str) -> ConfigResult<Self> {
        let tz: Tz = name
            .parse()
            .map_err(|_| ConfigError::UnknownTimeZone(name.to_string()))?;
        Ok(Self::new(tz))
    }

    pub fn utc() -> Self {
        Self::new(Tz::UTC)
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Zone-local wall-clock time at `instant`.
    ///
    /// `None` near the ends of the representable range, where the local time
    /// has no `NaiveDateTime`.
    pub fn local(&self, instant: DateTime<Utc>) -> Option<NaiveDateTime> {
        self.0.to_local(instant)
    }

    /// The first instant whose local time is at or after `local`.
    ///
    /// A repeated local time resolves to its earlier occurrence. A skipped
    /// local time resolves to the transition that skips it, whatever the
    /// size of the shift.
    pub fn instant(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.occurrence(local).map(Occurrence::first)
    }

    /// Absolute spans during which the local time lies in `[from, to)`.
    ///
    /// Usually one span. A range reaching into a repeated hour also covers
    /// the second pass through it, which adds a span.
    ///
    /// ```
    /// use bizcal::time::Zone;
    /// use chrono::{NaiveDate, TimeZone, Utc};
    ///
    /// let zone = Zone::named("America/New_York").unwrap();
    /// let day = NaiveDate::from_ymd_opt(2006, 10, 29).unwrap();
    /// let spans = zone.spans(day.and_hms_opt(0, 0, 0).unwrap(), day.and_hms_opt(1, 30, 0).unwrap());
    ///
    /// assert_eq!(spans.len(), 2);
    /// assert_eq!(spans[1].start(), Utc.with_ymd_and_hms(2006, 10, 29, 6, 0, 0).unwrap());
    /// assert_eq!(spans[1].end(), Utc.with_ymd_and_hms(2006, 10, 29, 6, 30, 0).unwrap());
    /// ```
    pub fn spans(&self, from: NaiveDateTime, to: NaiveDateTime) -> SmallVec<[TimeSegment; 2]> {
        let mut spans = SmallVec::new();
        let (Some(start), Some(end)) = (self.occurrence(from), self.occurrence(to)) else {
            return spans;
        };

        // Leaving a repeated `from` drops the local time below the range;
        // leaving a repeated `to` brings it back in.
        let exit = self.fold_transition(start, from);
        let reentry = self.fold_transition(end, to);

        // (instant, opens)
        let mut edges: SmallVec<[(DateTime<Utc>, bool); 6]> = SmallVec::new();
        match start {
            Occurrence::Once(t) => edges.push((t, true)),
            Occurrence::Twice(a, b) => edges.extend([(a, true), (b, true)]),
        }
        match end {
            Occurrence::Once(t) => edges.push((t, false)),
            Occurrence::Twice(a, b) => edges.extend([(a, false), (b, false)]),
        }
        // Both ends in the same repeated hour: the jump back leaves and reenters at once.
        if exit.is_none() || exit != reentry {
            edges.extend(exit.map(|t| (t, false)));
            edges.extend(reentry.map(|t| (t, true)));
        }
        edges.sort_unstable();

        let mut open = None;
        for (instant, opens) in edges {
            match (open, opens) {
                (None, true) => open = Some(instant),
                (Some(start), false) => {
                    spans.extend(TimeSegment::new(start, instant));
                    open = None;
                }
                _ => {}
            }
        }
        spans
    }

    fn occurrence(&self, local: NaiveDateTime) -> Option<Occurrence> {
        match self.0.from_local(local) {
            LocalResult::Single(t) => Some(Occurrence::Once(t)),
            LocalResult::Ambiguous(a, b) => Some(Occurrence::Twice(a.min(b), a.max(b))),
            LocalResult::None => self.gap_end(local).map(Occurrence::Once),
        }
    }

    /// The transition that skips the nonexistent `local`.
    fn gap_end(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        let probe = |hours: i64| local.checked_add_signed(Duration::hours(hours));
        let after = (1..=MAX_GAP_HOURS).find_map(|h| self.0.from_local(probe(h)?).earliest());
        let before = (1..=MAX_GAP_HOURS).find_map(|h| self.0.from_local(probe(-h)?).latest());

        let (Some(before), Some(after)) = (before, after) else {
            log::debug!("Zone {}: no instant around local time {}", self.name(), local);
            return None;
        };
        bisect(before, after, |t| Some(self.local(t)? >= local))
    }

    /// The jump back that starts the second pass through a repeated local time.
    fn fold_transition(&self, occurrence: Occurrence, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        let Occurrence::Twice(first, second) = occurrence else {
            return None;
        };
        bisect(first, second, |t| Some(self.local(t)? <= local))
    }
}

/// First whole second in `(lo, hi]` at which `reached` holds, given that it
/// holds at `hi` and flips from false to true at most once in that range.
fn bisect(
    lo: DateTime<Utc>,
    hi: DateTime<Utc>,
    reached: impl Fn(DateTime<Utc>) -> Option<bool>,
) -> Option<DateTime<Utc>> {
    let mut found = hi;
    let (mut lo, mut hi) = (lo.timestamp(), hi.timestamp());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        let instant = DateTime::from_timestamp(mid, 0)?;
        if reached(instant)? {
            hi = mid;
            found = instant;
        } else {
            lo = mid;
        }
    }
    Some(found)
}

impl fmt::Debug for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Zone").field(&self.name()).finish()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PartialEq for Zone {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Zone {}

impl Default for Zone {
    fn default() -> Self {
        Self::utc()
    }
}
