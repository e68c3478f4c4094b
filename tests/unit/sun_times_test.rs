//! Unit tests for sunrise/sunset against almanac values.

use chrono::{NaiveDate, NaiveTime, Timelike};
use fitcoach::solar::{calculate_sun_times, Coordinates, DayKind};

/// Allowed difference from almanac times. The model ignores refraction,
/// which moves sunrise later and sunset earlier by a few minutes.
const TOLERANCE_MINUTES: i64 = 12;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn minutes_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

fn assert_close(actual: NaiveTime, expected: (u32, u32), label: &str) {
    let expected = NaiveTime::from_hms_opt(expected.0, expected.1, 0).unwrap();
    let diff = (minutes_of_day(actual) - minutes_of_day(expected)).abs();
    assert!(
        diff <= TOLERANCE_MINUTES,
        "{label}: got {actual}, almanac {expected} ({diff} min apart)"
    );
}

/// (date, lat, lon, almanac sunrise, almanac sunset) in the longitude-band
/// offset used by the calculator (standard time, no DST).
fn almanac() -> Vec<(NaiveDate, f64, f64, (u32, u32), (u32, u32), &'static str)> {
    vec![
        (date(2024, 6, 21), 51.5074, -0.1278, (3, 43), (20, 21), "London summer"),
        (date(2024, 12, 21), 51.5074, -0.1278, (8, 4), (15, 54), "London winter"),
        (date(2024, 6, 21), 40.7128, -74.0060, (4, 25), (19, 31), "New York"),
        (date(2024, 6, 21), 35.6762, 139.6503, (4, 26), (19, 0), "Tokyo"),
        (date(2024, 1, 15), -33.8688, 151.2093, (4, 58), (19, 9), "Sydney"),
    ]
}

#[test]
fn test_matches_almanac() {
    for (day, lat, lon, sunrise, sunset, label) in almanac() {
        let times = calculate_sun_times(day, Coordinates::new(lat, lon)).unwrap();
        assert_eq!(times.kind, DayKind::Normal, "{label}");
        assert_eq!(times.sunrise.date_naive(), day, "{label}");
        assert_close(times.sunrise.time(), sunrise, label);
        assert_close(times.sunset.time(), sunset, label);
    }
}

#[test]
fn test_sunrise_before_sunset_outside_polar_circles() {
    let days = [
        date(2024, 1, 1),
        date(2024, 3, 20),
        date(2024, 6, 21),
        date(2024, 9, 22),
        date(2024, 12, 21),
    ];
    for day in days {
        let mut lat = -66.0;
        while lat <= 66.0 {
            for lon in [-170.0, -75.0, 0.0, 30.0, 120.0, 179.0] {
                let times = calculate_sun_times(day, Coordinates::new(lat, lon)).unwrap();
                assert_eq!(times.kind, DayKind::Normal);
                assert!(
                    times.sunrise < times.sunset,
                    "{day} lat {lat} lon {lon}: {} !< {}",
                    times.sunrise,
                    times.sunset
                );
            }
            lat += 6.0;
        }
    }
}

#[test]
fn test_equator_twelve_hours_year_round() {
    let mut day = date(2024, 1, 1);
    while day < date(2025, 1, 1) {
        for lon in [-120.0, 0.0, 100.0] {
            let times = calculate_sun_times(day, Coordinates::new(0.0, lon)).unwrap();
            let minutes = times.day_length().num_minutes();
            assert!((719..=720).contains(&minutes), "{day} lon {lon}: {minutes}");
        }
        day = day + chrono::Duration::days(7);
    }
}

#[test]
fn test_offset_follows_longitude_band() {
    let times = calculate_sun_times(date(2024, 6, 21), Coordinates::new(40.7128, -74.006)).unwrap();
    assert_eq!(times.sunrise.offset().local_minus_utc(), -5 * 3600);
}

#[test]
fn test_southern_polar_night_in_june() {
    let times = calculate_sun_times(date(2024, 6, 21), Coordinates::new(-75.0, 0.0)).unwrap();
    assert_eq!(times.kind, DayKind::PolarNight);
    assert_eq!(times.day_length().num_seconds(), 0);
}
