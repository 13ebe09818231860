//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{
    CandidateRoute, DomainError, MovementMode, Timestamp, TrailerState, Trip, TripCode,
};
use crate::schedule::{ScheduleTable, ScheduleTotals};

/// Request to add a trip to the schedule.
#[derive(Debug, Deserialize)]
pub struct TripRequest {
    /// Trip code; blank or absent means not yet assigned
    #[serde(default)]
    pub code: Option<String>,

    pub origin: String,

    pub departure: Timestamp,

    pub destination: String,

    pub arrival: Timestamp,

    pub distance_km: f64,

    /// Free-text duration; derived from the timestamps when absent
    #[serde(default)]
    pub duration: Option<String>,

    pub payout: f64,

    /// Explicit rate; derived from payout / distance when absent
    #[serde(default)]
    pub rate_per_km: Option<f64>,

    #[serde(default)]
    pub trailer: Option<TrailerState>,

    #[serde(default)]
    pub mode: Option<MovementMode>,
}

impl TripRequest {
    /// Validate and build the trip.
    pub fn into_trip(self) -> Result<Trip, DomainError> {
        let code = match self.code.as_deref().map(str::trim) {
            None | Some("") => TripCode::unassigned(),
            Some(code) => TripCode::parse(code)?,
        };

        let mut trip = Trip::new(
            code,
            self.origin,
            self.departure,
            self.destination,
            self.arrival,
            self.distance_km,
            self.payout,
        )?;

        if let Some(rate) = self.rate_per_km {
            trip = trip.with_rate_per_km(rate)?;
        }
        if let Some(duration) = self.duration {
            trip = trip.with_duration_label(duration);
        }
        if let Some(trailer) = self.trailer {
            trip = trip.with_trailer(trailer);
        }
        if let Some(mode) = self.mode {
            trip = trip.with_mode(mode);
        }
        Ok(trip)
    }
}

/// The costed schedule.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// Trip rows followed by the totals row (absent when there are no trips)
    pub rows: ScheduleTable,

    pub totals: ScheduleTotals,

    /// When the driver may leave again
    pub next_available: Option<Timestamp>,
}

/// Availability after the last trip.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub last_arrival: Timestamp,
    pub unload_minutes: u32,
    pub rest_hours: u32,
    pub next_available: Timestamp,
}

/// Query for the schedule CSV download.
#[derive(Debug, Default, Deserialize)]
pub struct CsvQuery {
    /// Field delimiter (defaults to ',')
    pub delimiter: Option<char>,
}

/// Thresholds for route selection. The request body is the routes CSV.
#[derive(Debug, Default, Deserialize)]
pub struct CompatibleRoutesQuery {
    pub min_payout: Option<f64>,
    pub min_rate_per_km: Option<f64>,
    pub min_distance_km: Option<f64>,

    /// Maximum routes to return (defaults to the configured value)
    pub top_n: Option<usize>,

    /// Field delimiter of the uploaded CSV (defaults to ',')
    pub delimiter: Option<char>,
}

/// Ranked routes the driver can take.
#[derive(Debug, Serialize)]
pub struct CompatibleRoutesResponse {
    pub available_from: Timestamp,

    /// Number of routes in the upload
    pub candidates: usize,

    pub routes: Vec<CandidateRoute>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
