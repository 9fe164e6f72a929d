//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use bizcal::{DayTime, Hours, Schedule, ScheduleConfig, Zone};
use chrono::{DateTime, NaiveDate, TimeZone, Utc, Weekday};

/// Mon/Wed/Fri 09:00-17:00, Tue/Thu 10:00-16:00, Sat 11:00-14:30,
/// with New Year's Day and Christmas 2006 as holidays.
pub const STANDARD_TOML: &str = r#"
time_zone = "Etc/UTC"
holidays = ["2006-01-01", "2006-12-25"]

[hours]
mon = { "09:00" = "17:00" }
tue = { "10:00" = "16:00" }
wed = { "09:00" = "17:00" }
thu = { "10:00" = "16:00" }
fri = { "09:00" = "17:00" }
sat = { "11:00" = "14:30" }
"#;

pub fn hm(hour: u32, minute: u32) -> DayTime {
    DayTime::from_hm(hour, minute).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

pub fn standard_config(zone: Zone) -> ScheduleConfig {
    ScheduleConfig::new(zone)
        .with_hours(Weekday::Mon, Hours::new(hm(9, 0), hm(17, 0)))
        .with_hours(Weekday::Tue, Hours::new(hm(10, 0), hm(16, 0)))
        .with_hours(Weekday::Wed, Hours::new(hm(9, 0), hm(17, 0)))
        .with_hours(Weekday::Thu, Hours::new(hm(10, 0), hm(16, 0)))
        .with_hours(Weekday::Fri, Hours::new(hm(9, 0), hm(17, 0)))
        .with_hours(Weekday::Sat, Hours::new(hm(11, 0), hm(14, 30)))
        .with_holiday(date(2006, 1, 1))
        .with_holiday(date(2006, 12, 25))
}

pub fn standard_schedule() -> Schedule {
    Schedule::new(standard_config(Zone::utc())).unwrap()
}

/// The standard hours in New York, with a lunch break on 2006-03-15.
pub fn new_york_schedule() -> Schedule {
    let zone = Zone::named("America/New_York").unwrap();
    Schedule::new(standard_config(zone).with_break(date(2006, 3, 15), hm(12, 0), hm(13, 0)))
        .unwrap()
}

/// The standard hours in New York, plus Sunday hours that open inside the
/// 2006-04-02 skipped hour and close inside the 2006-10-29 repeated hour.
pub fn dst_boundary_schedule() -> Schedule {
    let zone = Zone::named("America/New_York").unwrap();
    Schedule::new(
        standard_config(zone)
            .with_hours(Weekday::Sun, Hours::new(hm(0, 0), hm(1, 30)))
            .with_hours(Weekday::Sun, Hours::new(hm(1, 40), hm(1, 50)))
            .with_hours(Weekday::Sun, Hours::new(hm(2, 30), hm(5, 0))),
    )
    .unwrap()
}
