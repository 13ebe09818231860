//! Candidate routes offered to the driver.

use serde::Serialize;

use super::error::{DomainError, non_negative};
use super::time::Timestamp;

/// A future trip the driver could take next.
///
/// Origin and destination are carried for display only; selection looks at
/// departure, distance, payout and rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRoute {
    pub origin: Option<String>,
    pub destination: Option<String>,
    departure: Timestamp,
    distance_km: f64,
    payout: f64,
    rate_per_km: Option<f64>,
}

impl CandidateRoute {
    /// Create a route.
    ///
    /// When `rate_per_km` is `None` it is derived from payout / distance.
    /// A zero-distance route has no rate.
    pub fn new(
        departure: Timestamp,
        distance_km: f64,
        payout: f64,
        rate_per_km: Option<f64>,
    ) -> Result<Self, DomainError> {
        let distance_km = non_negative("distance", distance_km)?;
        let payout = non_negative("payout", payout)?;
        let rate_per_km = rate_per_km
            .map(|r| non_negative("rate per km", r))
            .transpose()?;

        let rate_per_km = if distance_km == 0.0 {
            None
        } else {
            Some(rate_per_km.unwrap_or(payout / distance_km))
        };

        Ok(Self {
            origin: None,
            destination: None,
            departure,
            distance_km,
            payout,
            rate_per_km,
        })
    }

    /// Attach display labels.
    pub fn between(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self.destination = Some(destination.into());
        self
    }

    pub fn departure(&self) -> Timestamp {
        self.departure
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn payout(&self) -> f64 {
        self.payout
    }

    pub fn rate_per_km(&self) -> Option<f64> {
        self.rate_per_km
    }
}
