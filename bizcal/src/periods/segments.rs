//! Week-by-week source of business segments.
//!
//! The timeline is partitioned per zone-local week (Monday 00:00 to the next
//! Monday 00:00). Within a week, interval spans are computed in absolute
//! time, holidays and breaks are cut out, and touching spans are merged.
//! Spans of different weeks are never merged.

use std::collections::VecDeque;

use chrono::{DateTime, Days, NaiveDate, Utc};

use super::Direction;
use crate::schedule::Schedule;
use crate::time::week_time::week_start;
use crate::time::TimeSegment;

const WEEK: Days = Days::new(7);

/// Business segments of the zone-local week starting on `monday`, in order.
pub(crate) fn week_segments(schedule: &Schedule, monday: NaiveDate) -> Vec<TimeSegment> {
    let Some(next_monday) = monday.checked_add_days(WEEK) else {
        return Vec::new();
    };

    let mut open: Vec<TimeSegment> = schedule
        .intervals()
        .iter()
        .flat_map(|interval| interval.time_segments(monday))
        .collect();
    open.sort();

    let closed = schedule
        .holidays_between(monday, next_monday)
        .iter()
        .flat_map(|holiday| holiday.time_segments())
        .chain(
            schedule
                .breaks_between(monday, next_monday)
                .iter()
                .flat_map(|b| b.time_segments()),
        );

    for exclusion in closed {
        open = open
            .iter()
            .flat_map(|segment| segment.difference(&exclusion))
            .collect();
    }

    let mut merged: Vec<TimeSegment> = Vec::with_capacity(open.len());
    for segment in open {
        if let Some(last) = merged.last_mut() {
            if last.absorb(&segment) {
                continue;
            }
        }
        merged.push(segment);
    }

    log::trace!(
        "Week of {}: {} business segments",
        monday,
        merged.len()
    );
    merged
}

/// Business segments in one direction from an anchor, loaded a week at a time.
///
/// Forward yields segments ending after the anchor in increasing order;
/// backward yields segments starting at or before the anchor in decreasing
/// order. Iteration stops only at the edge of the representable date range.
#[derive(Debug, Clone)]
pub(crate) struct Segments<'a> {
    schedule: &'a Schedule,
    direction: Direction,
    anchor: DateTime<Utc>,
    week: Option<NaiveDate>,
    buffer: VecDeque<TimeSegment>,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(schedule: &'a Schedule, anchor: DateTime<Utc>, direction: Direction) -> Self {
        // Past the local range the anchor sits beyond every representable week.
        let anchor_date = match schedule.zone().local(anchor) {
            Some(local) => local.date(),
            None if anchor.timestamp() > 0 => NaiveDate::MAX,
            None => NaiveDate::MIN,
        };
        let anchor_week = week_start(anchor_date);
        // Start one week early so spans pushed across a week boundary are not missed.
        let week = match direction {
            Direction::Forward => anchor_week.and_then(|m| m.checked_sub_days(WEEK)),
            Direction::Backward => anchor_week.and_then(|m| m.checked_add_days(WEEK)),
        };

        Self {
            schedule,
            direction,
            anchor,
            week,
            buffer: VecDeque::new(),
        }
    }

    fn load_week(&mut self, monday: NaiveDate) {
        let segments = week_segments(self.schedule, monday);
        let anchor = self.anchor;
        match self.direction {
            Direction::Forward => {
                self.week = monday.checked_add_days(WEEK);
                self.buffer
                    .extend(segments.into_iter().filter(|s| s.end() > anchor));
            }
            Direction::Backward => {
                self.week = monday.checked_sub_days(WEEK);
                self.buffer
                    .extend(segments.into_iter().rev().filter(|s| s.start() <= anchor));
            }
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = TimeSegment;

    fn next(&mut self) -> Option<TimeSegment> {
        loop {
            if let Some(segment) = self.buffer.pop_front() {
                return Some(segment);
            }
            let monday = self.week?;
            self.load_week(monday);
        }
    }
}
