//! Command line front end for business-time queries.
//!
//! # Usage
//!
//! ```bash
//! bizcal schedule.toml check 2006-01-04T10:00:00Z
//! bizcal schedule.toml after 2006-01-04T16:00:00Z 7200
//! bizcal schedule.toml before 2006-01-04T10:00:00Z 7200
//! bizcal schedule.toml between 2006-01-02T00:00:00Z 2006-01-09T00:00:00Z
//! bizcal schedule.toml periods 2006-01-02T00:00:00Z 2006-01-09T00:00:00Z --json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use bizcal::Schedule;

const USAGE: &str = "\
usage: bizcal <schedule.toml> <command> [args]

commands:
  check <instant>                   is the instant business time
  after <instant> <seconds>         instant after that much business time
  before <instant> <seconds>        instant before that much business time
  between <from> <to>               business seconds within [from, to)
  periods <from> <to> [--json]      periods covering [from, to)

instants are RFC 3339, e.g. 2006-01-04T09:00:00-05:00";

fn parse_instant(text: &str) -> Result<DateTime<Utc>> {
    let instant = DateTime::parse_from_rfc3339(text)
        .with_context(|| format!("Invalid instant {:?} (expected RFC 3339)", text))?;
    Ok(instant.with_timezone(&Utc))
}

fn parse_seconds(text: &str) -> Result<Duration> {
    let seconds: i64 = text
        .parse()
        .with_context(|| format!("Invalid number of seconds: {:?}", text))?;
    Duration::try_seconds(seconds).with_context(|| format!("Duration out of range: {}", seconds))
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    match args.get(index) {
        Some(value) => Ok(value.as_str()),
        None => bail!("Missing argument <{}>\n\n{}", name, USAGE),
    }
}

fn run(args: &[String]) -> Result<()> {
    let path = arg(args, 1, "schedule.toml")?;
    let command = arg(args, 2, "command")?;

    let schedule = Schedule::from_file(path)
        .with_context(|| format!("Failed to load schedule from {}", path))?;
    debug!(
        zone = schedule.zone().name(),
        intervals = schedule.intervals().len(),
        holidays = schedule.holidays().len(),
        "Schedule loaded"
    );

    match command {
        "check" => {
            let instant = parse_instant(arg(args, 3, "instant")?)?;
            println!("business time:  {}", schedule.is_business_time(instant));
            println!("in hours:       {}", schedule.in_hours(instant));
            println!("on holiday:     {}", schedule.on_holiday(instant));
            println!("on break:       {}", schedule.on_break(instant));
        }
        "after" => {
            let instant = parse_instant(arg(args, 3, "instant")?)?;
            let duration = parse_seconds(arg(args, 4, "seconds")?)?;
            let result = schedule.time_after_business_duration(instant, duration)?;
            println!("{}", result.to_rfc3339());
        }
        "before" => {
            let instant = parse_instant(arg(args, 3, "instant")?)?;
            let duration = parse_seconds(arg(args, 4, "seconds")?)?;
            let result = schedule.time_before_business_duration(instant, duration)?;
            println!("{}", result.to_rfc3339());
        }
        "between" => {
            let from = parse_instant(arg(args, 3, "from")?)?;
            let to = parse_instant(arg(args, 4, "to")?)?;
            let duration = schedule.business_duration_between(from, to)?;
            println!("{}", duration.num_seconds());
        }
        "periods" => {
            let from = parse_instant(arg(args, 3, "from")?)?;
            let to = parse_instant(arg(args, 4, "to")?)?;
            let json = args.get(5).is_some_and(|flag| flag == "--json");
            for period in schedule.periods_within(from, to)? {
                if json {
                    println!("{}", serde_json::to_string(&period)?);
                } else {
                    println!(
                        "{} {} .. {}",
                        if period.business { "business" } else { "closed  " },
                        period.start.to_rfc3339(),
                        period.end.to_rfc3339()
                    );
                }
            }
        }
        other => bail!("Unknown command {:?}\n\n{}", other, USAGE),
    }

    Ok(())
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    run(&args)
}
