//! Time primitives for business-time arithmetic.
//!
//! - [`WeekTime`] / [`DayTime`]: zone-local offsets within a week or a day
//! - [`TimeSegment`]: half-open spans of absolute time
//! - [`Zone`] / [`ZoneRules`]: the time-zone capability

pub mod segment;
pub mod week_time;
pub mod zone;

pub use segment::TimeSegment;
pub use week_time::{DayTime, WeekTime, MINUTES_PER_DAY, MINUTES_PER_HOUR, MINUTES_PER_WEEK};
pub use zone::{Zone, ZoneRules};
