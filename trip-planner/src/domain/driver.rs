//! Driver hours-of-service snapshot.
//!
//! Recorded alongside the schedule for display. Availability and route
//! selection do not consume these figures; enforcing driving-time limits is
//! a separate feature.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::time::Timestamp;

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct GeoPosition {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Deserialize)]
struct RawPosition {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawPosition> for GeoPosition {
    type Error = DomainError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lon)
    }
}

impl GeoPosition {
    /// Create a position, checking coordinate ranges.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidPosition("latitude out of range"));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvalidPosition("longitude out of range"));
        }
        Ok(Self { lat, lon })
    }

    /// Parse `"lat, lon"`.
    ///
    /// ```
    /// use trip_planner::domain::GeoPosition;
    ///
    /// let p = GeoPosition::parse("45.7636166, 10.9984833").unwrap();
    /// assert_eq!(p.lat, 45.7636166);
    /// assert!(GeoPosition::parse("45.76").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or(DomainError::InvalidPosition("expected \"lat, lon\""))?;
        let lat = lat
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidPosition("latitude is not a number"))?;
        let lon = lon
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidPosition("longitude is not a number"))?;
        Self::new(lat, lon)
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}

/// Remaining driving and rest allowances reported for the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverStatus {
    pub name: String,
    pub week_start: Option<Timestamp>,
    pub weekly_driving_remaining_hours: f64,
    pub daily_driving_remaining_hours: f64,
    pub continuous_driving_remaining_minutes: u32,
    pub break_remaining_minutes: u32,
    pub last_position: Option<GeoPosition>,
}

impl Default for DriverStatus {
    fn default() -> Self {
        Self {
            name: String::new(),
            week_start: None,
            weekly_driving_remaining_hours: 56.0,
            daily_driving_remaining_hours: 9.0,
            continuous_driving_remaining_minutes: 270, // 4h30
            break_remaining_minutes: 45,
            last_position: None,
        }
    }
}
