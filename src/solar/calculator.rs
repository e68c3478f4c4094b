//! Sunrise/sunset from a simplified solar-position model.
//!
//! Julian day → mean anomaly → equation of center → ecliptic longitude →
//! declination → hour angle. Refraction and the solar disc radius are not
//! modelled, so results run a few minutes inside published almanac times.

use chrono::{Datelike, DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

use super::types::{Coordinates, DayKind, SolarError, SunTimes};

/// Julian date of the Unix epoch (1970-01-01T00:00Z).
const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Julian date of J2000.0 (2000-01-01T12:00 TT).
const J2000: f64 = 2451545.0;

/// Obliquity of the ecliptic in degrees.
const EARTH_AXIAL_TILT: f64 = 23.44;

/// Perihelion argument in degrees.
const PERIHELION: f64 = 102.9372;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days from 0001-01-01 (day 1 of the common era) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Julian date of a calendar date at 00:00 UTC.
pub fn julian_day(date: NaiveDate) -> f64 {
    (date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE) as f64 + UNIX_EPOCH_JD
}

/// Convert a Julian date to a UTC instant (second precision).
pub fn julian_to_utc(jd: f64) -> Result<DateTime<Utc>, SolarError> {
    let seconds = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY).round() as i64;
    DateTime::<Utc>::from_timestamp(seconds, 0).ok_or(SolarError::OutOfRange(jd))
}

/// Whole-hour UTC offset of the 15°-wide band containing `longitude`.
pub fn timezone_offset_hours(longitude: f64) -> i32 {
    (longitude / 15.0).round() as i32
}

/// Compute sunrise and sunset for `date` at `coords`.
///
/// Times are expressed in the longitude-derived fixed offset returned by
/// [`timezone_offset_hours`]. When the sun never rises the result is a
/// zero-length day at local noon; when it never sets, 00:00 to 23:59.
pub fn calculate_sun_times(date: NaiveDate, coords: Coordinates) -> Result<SunTimes, SolarError> {
    coords.validate()?;

    let offset = fixed_offset(&coords)?;

    let n = (julian_day(date) - J2000 + 0.0008).ceil();
    let mean_solar_noon = n - coords.longitude / 360.0;

    let mean_anomaly = (357.5291 + 0.98560028 * mean_solar_noon).rem_euclid(360.0);
    let m = mean_anomaly.to_radians();
    let center = 1.9148 * m.sin() + 0.0200 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin();

    let ecliptic_longitude = (mean_anomaly + center + 180.0 + PERIHELION).rem_euclid(360.0);
    let lambda = ecliptic_longitude.to_radians();

    let transit = J2000 + mean_solar_noon + 0.0053 * m.sin() - 0.0069 * (2.0 * lambda).sin();

    let declination = (lambda.sin() * EARTH_AXIAL_TILT.to_radians().sin()).asin();
    let cos_hour_angle = -coords.latitude.to_radians().tan() * declination.tan();

    if cos_hour_angle > 1.0 {
        let noon = local_time(date, 12, 0, &offset)?;
        return Ok(SunTimes {
            sunrise: noon,
            sunset: noon,
            kind: DayKind::PolarNight,
        });
    }

    if cos_hour_angle < -1.0 {
        return Ok(SunTimes {
            sunrise: local_time(date, 0, 0, &offset)?,
            sunset: local_time(date, 23, 59, &offset)?,
            kind: DayKind::PolarDay,
        });
    }

    let hour_angle = cos_hour_angle.acos().to_degrees();
    let sunrise = julian_to_utc(transit - hour_angle / 360.0)?;
    let sunset = julian_to_utc(transit + hour_angle / 360.0)?;

    Ok(SunTimes {
        sunrise: sunrise.with_timezone(&offset),
        sunset: sunset.with_timezone(&offset),
        kind: DayKind::Normal,
    })
}

fn fixed_offset(coords: &Coordinates) -> Result<FixedOffset, SolarError> {
    let hours = timezone_offset_hours(coords.longitude);
    FixedOffset::east_opt(hours * 3600).ok_or(SolarError::InvalidCoordinates {
        latitude: coords.latitude,
        longitude: coords.longitude,
    })
}

fn local_time(
    date: NaiveDate,
    hour: u32,
    minute: u32,
    offset: &FixedOffset,
) -> Result<DateTime<FixedOffset>, SolarError> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .ok_or(SolarError::OutOfRange(julian_day(date)))
}

impl SunTimes {
    /// Time between sunrise and sunset.
    pub fn day_length(&self) -> Duration {
        self.sunset - self.sunrise
    }

    /// Whether the sun is up at `at`.
    pub fn is_daylight(&self, at: DateTime<Utc>) -> bool {
        match self.kind {
            DayKind::PolarDay => true,
            DayKind::PolarNight => false,
            DayKind::Normal => {
                at >= self.sunrise.with_timezone(&Utc) && at < self.sunset.with_timezone(&Utc)
            }
        }
    }
}
