use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc, Weekday};

use super::{generate, Direction, Period};
use crate::schedule::{Hours, Schedule, ScheduleConfig};
use crate::time::{DayTime, Zone};

fn hm(h: u32, m: u32) -> DayTime {
    DayTime::from_hm(h, m).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

fn weekdays(zone: Zone, open: DayTime, close: DayTime) -> ScheduleConfig {
    WEEKDAYS
        .into_iter()
        .fold(ScheduleConfig::new(zone), |config, day| {
            config.with_hours(day, Hours::new(open, close))
        })
}

fn office() -> Schedule {
    Schedule::new(weekdays(Zone::utc(), hm(9, 0), hm(17, 0))).unwrap()
}

fn assert_contiguous_forward(periods: &[Period]) {
    for pair in periods.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "gap or overlap between {:?}", pair);
        assert!(pair[0].start < pair[0].end);
    }
}

#[test]
fn test_forward_from_inside_business() {
    let schedule = office();
    let periods: Vec<Period> = generate(&schedule, utc(2006, 1, 2, 12, 0), Direction::Forward)
        .take(3)
        .collect();

    assert_eq!(
        periods,
        vec![
            Period::new(utc(2006, 1, 2, 9, 0), utc(2006, 1, 2, 17, 0), true),
            Period::new(utc(2006, 1, 2, 17, 0), utc(2006, 1, 3, 9, 0), false),
            Period::new(utc(2006, 1, 3, 9, 0), utc(2006, 1, 3, 17, 0), true),
        ]
    );
}

#[test]
fn test_forward_from_gap_starts_at_previous_close() {
    let schedule = office();
    let first = generate(&schedule, utc(2006, 1, 3, 3, 0), Direction::Forward)
        .next()
        .unwrap();

    assert_eq!(
        first,
        Period::new(utc(2006, 1, 2, 17, 0), utc(2006, 1, 3, 9, 0), false)
    );
}

#[test]
fn test_anchor_on_boundaries() {
    let schedule = office();

    let opening = schedule.periods_after(utc(2006, 1, 2, 9, 0)).next().unwrap();
    assert!(opening.business);
    assert_eq!(opening.start, utc(2006, 1, 2, 9, 0));

    let closing = schedule.periods_after(utc(2006, 1, 2, 17, 0)).next().unwrap();
    assert!(!closing.business);
    assert_eq!(closing.start, utc(2006, 1, 2, 17, 0));

    let closing_back = schedule.periods_before(utc(2006, 1, 2, 17, 0)).next().unwrap();
    assert_eq!(closing_back, closing);
}

#[test]
fn test_forward_stream_is_contiguous_and_alternates() {
    let schedule = office();
    let periods: Vec<Period> = generate(&schedule, utc(2006, 1, 1, 0, 0), Direction::Forward)
        .take(40)
        .collect();

    assert_contiguous_forward(&periods);
    for pair in periods.windows(2) {
        assert_ne!(pair[0].business, pair[1].business);
    }
}

#[test]
fn test_backward_stream() {
    let schedule = office();
    let periods: Vec<Period> = generate(&schedule, utc(2006, 1, 4, 12, 0), Direction::Backward)
        .take(4)
        .collect();

    assert_eq!(
        periods,
        vec![
            Period::new(utc(2006, 1, 4, 9, 0), utc(2006, 1, 4, 17, 0), true),
            Period::new(utc(2006, 1, 3, 17, 0), utc(2006, 1, 4, 9, 0), false),
            Period::new(utc(2006, 1, 3, 9, 0), utc(2006, 1, 3, 17, 0), true),
            Period::new(utc(2006, 1, 2, 17, 0), utc(2006, 1, 3, 9, 0), false),
        ]
    );
}

#[test]
fn test_backward_from_gap_contains_anchor() {
    let schedule = office();
    let anchor = utc(2006, 1, 7, 12, 0);
    let periods: Vec<Period> = generate(&schedule, anchor, Direction::Backward)
        .take(2)
        .collect();

    assert_eq!(
        periods[0],
        Period::new(utc(2006, 1, 6, 17, 0), utc(2006, 1, 9, 9, 0), false)
    );
    assert!(periods[0].contains(anchor));
    assert_eq!(periods[1].end, periods[0].start);
    assert!(periods[1].business);
}

#[test]
fn test_holiday_and_weekend_form_one_period() {
    let schedule =
        Schedule::new(weekdays(Zone::utc(), hm(9, 0), hm(17, 0)).with_holiday(date(2006, 1, 6)))
            .unwrap();

    let first = schedule.periods_after(utc(2006, 1, 7, 12, 0)).next().unwrap();
    assert_eq!(
        first,
        Period::new(utc(2006, 1, 5, 17, 0), utc(2006, 1, 9, 9, 0), false)
    );
}

#[test]
fn test_holiday_overrides_open_hours() {
    let schedule =
        Schedule::new(weekdays(Zone::utc(), hm(9, 0), hm(17, 0)).with_holiday(date(2006, 1, 4)))
            .unwrap();

    let period = schedule.periods_after(utc(2006, 1, 4, 12, 0)).next().unwrap();
    assert!(!period.business);
    assert_eq!(period.start, utc(2006, 1, 3, 17, 0));
    assert_eq!(period.end, utc(2006, 1, 5, 9, 0));
}

#[test]
fn test_break_splits_business_day() {
    let schedule = Schedule::new(
        weekdays(Zone::utc(), hm(9, 0), hm(17, 0)).with_break(date(2006, 1, 2), hm(12, 0), hm(13, 0)),
    )
    .unwrap();

    let periods: Vec<Period> = schedule.periods_after(utc(2006, 1, 2, 10, 0)).take(3).collect();
    assert_eq!(
        periods,
        vec![
            Period::new(utc(2006, 1, 2, 9, 0), utc(2006, 1, 2, 12, 0), true),
            Period::new(utc(2006, 1, 2, 12, 0), utc(2006, 1, 2, 13, 0), false),
            Period::new(utc(2006, 1, 2, 13, 0), utc(2006, 1, 2, 17, 0), true),
        ]
    );
}

#[test]
fn test_business_periods_meet_at_week_boundary() {
    let config = ScheduleConfig::new(Zone::utc())
        .with_hours(Weekday::Sun, Hours::new(hm(0, 0), DayTime::END_OF_DAY))
        .with_hours(Weekday::Mon, Hours::new(hm(0, 0), hm(9, 0)));
    let schedule = Schedule::new(config).unwrap();

    let periods: Vec<Period> = schedule.periods_after(utc(2006, 1, 8, 12, 0)).take(3).collect();
    assert_eq!(
        periods,
        vec![
            Period::new(utc(2006, 1, 8, 0, 0), utc(2006, 1, 9, 0, 0), true),
            Period::new(utc(2006, 1, 9, 0, 0), utc(2006, 1, 9, 9, 0), true),
            Period::new(utc(2006, 1, 9, 9, 0), utc(2006, 1, 15, 0, 0), false),
        ]
    );

    let backward: Vec<Period> = schedule.periods_before(utc(2006, 1, 9, 3, 0)).take(2).collect();
    assert_eq!(backward[0], periods[1]);
    assert_eq!(backward[1], periods[0]);
}

#[test]
fn test_stream_is_restartable() {
    let schedule = office();
    let anchor = utc(2006, 3, 15, 8, 30);

    let first: Vec<Period> = schedule.periods_after(anchor).take(25).collect();
    let second: Vec<Period> = schedule.periods_after(anchor).take(25).collect();
    assert_eq!(first, second);

    let mut stream = schedule.periods_before(anchor);
    let cloned = stream.clone();
    stream.next();
    assert_eq!(cloned.take(5).count(), 5);
}

#[test]
fn test_wall_clock_hours_across_dst() {
    let zone = Zone::named("America/New_York").unwrap();
    let config = ScheduleConfig::new(zone)
        .with_hours(Weekday::Sun, Hours::new(hm(0, 0), hm(12, 0)))
        .with_hours(Weekday::Mon, Hours::new(hm(9, 0), hm(17, 0)));
    let schedule = Schedule::new(config).unwrap();

    // 2006-04-02 is the spring-forward Sunday in New York
    let periods: Vec<Period> = schedule
        .periods_after(utc(2006, 4, 2, 10, 0))
        .filter(|p| p.business)
        .take(2)
        .collect();

    assert_eq!(periods[0].start, utc(2006, 4, 2, 5, 0));
    assert_eq!(periods[0].end, utc(2006, 4, 2, 16, 0));
    assert_eq!(periods[0].duration(), Duration::hours(11));

    assert_eq!(periods[1].start, utc(2006, 4, 3, 13, 0));
    assert_eq!(periods[1].duration(), Duration::hours(8));
}

#[test]
fn test_hours_closing_in_repeated_hour() {
    let zone = Zone::named("America/New_York").unwrap();
    let config = ScheduleConfig::new(zone)
        .with_hours(Weekday::Sun, Hours::new(hm(0, 0), hm(1, 30)))
        .with_hours(Weekday::Sun, Hours::new(hm(2, 30), hm(5, 0)));
    let schedule = Schedule::new(config).unwrap();

    // 2006-10-29 is the fall-back Sunday; 01:00-01:30 happens twice
    let periods: Vec<Period> = schedule
        .periods_after(utc(2006, 10, 29, 4, 0))
        .take(5)
        .collect();
    assert_contiguous_forward(&periods);
    assert_eq!(
        periods,
        vec![
            Period::new(utc(2006, 10, 29, 4, 0), utc(2006, 10, 29, 5, 30), true),
            Period::new(utc(2006, 10, 29, 5, 30), utc(2006, 10, 29, 6, 0), false),
            Period::new(utc(2006, 10, 29, 6, 0), utc(2006, 10, 29, 6, 30), true),
            Period::new(utc(2006, 10, 29, 6, 30), utc(2006, 10, 29, 7, 30), false),
            Period::new(utc(2006, 10, 29, 7, 30), utc(2006, 10, 29, 10, 0), true),
        ]
    );
}

#[test]
fn test_hours_opening_in_skipped_hour() {
    let zone = Zone::named("America/New_York").unwrap();
    let config = ScheduleConfig::new(zone)
        .with_hours(Weekday::Sun, Hours::new(hm(2, 30), hm(5, 0)));
    let schedule = Schedule::new(config).unwrap();

    let period = schedule.periods_after(utc(2006, 4, 2, 7, 15)).next().unwrap();
    assert!(period.business);
    assert_eq!(period.start, utc(2006, 4, 2, 7, 0));
    assert_eq!(period.end, utc(2006, 4, 2, 9, 0));
}

#[test]
fn test_period_clip() {
    let period = Period::new(utc(2006, 1, 2, 9, 0), utc(2006, 1, 2, 17, 0), true);

    assert_eq!(
        period.clip(utc(2006, 1, 2, 10, 0), utc(2006, 1, 3, 0, 0)),
        Some(Period::new(utc(2006, 1, 2, 10, 0), utc(2006, 1, 2, 17, 0), true))
    );
    assert_eq!(period.clip(utc(2006, 1, 2, 17, 0), utc(2006, 1, 3, 0, 0)), None);
}
