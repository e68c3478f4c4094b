//! Solar calculation types.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, north positive (-90 to 90)
    pub latitude: f64,
    /// Longitude, east positive (-180 to 180)
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check both components are finite and in range.
    pub fn validate(&self) -> Result<(), SolarError> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(SolarError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// What kind of day the sun times describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Sun rises and sets
    Normal,
    /// Sun stays below the horizon; sunrise = sunset = local noon
    PolarNight,
    /// Sun stays above the horizon; 00:00 to 23:59 local
    PolarDay,
}

/// Sunrise and sunset for one day, in a longitude-derived fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    /// Sunrise instant
    pub sunrise: DateTime<FixedOffset>,
    /// Sunset instant
    pub sunset: DateTime<FixedOffset>,
    /// Normal day or a polar edge case
    pub kind: DayKind,
}

/// Solar calculation errors.
#[derive(Debug, Error)]
pub enum SolarError {
    /// Latitude or longitude outside the valid range.
    #[error("Invalid coordinates: lat {latitude}, lon {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Result cannot be represented as a calendar time.
    #[error("Julian date {0} is out of range")]
    OutOfRange(f64),
}
