//! Sunrise and sunset times.

pub mod calculator;
pub mod types;

pub use calculator::{calculate_sun_times, julian_day, julian_to_utc, timezone_offset_hours};
pub use types::{Coordinates, DayKind, SolarError, SunTimes};
