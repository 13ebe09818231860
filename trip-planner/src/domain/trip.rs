//! Trip records.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{DomainError, non_negative};
use super::time::Timestamp;
use crate::costs::TripCosts;

/// Code reserved for the synthetic totals row of an exported schedule.
pub const TOTALS_SENTINEL: &str = "TOTALE";

/// Placeholder code for a trip whose real code is not yet known.
const UNASSIGNED: &str = "N/A";

/// Opaque trip identifier.
///
/// Any non-empty text except [`TOTALS_SENTINEL`].
///
/// ```
/// use trip_planner::domain::TripCode;
///
/// assert!(TripCode::parse("ORD-1042").is_ok());
/// assert!(TripCode::parse("").is_err());
/// assert!(TripCode::parse("TOTALE").is_err());
/// assert!(TripCode::unassigned().is_unassigned());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TripCode(String);

impl TripCode {
    /// Parse a trip code, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let code = s.trim();
        if code.is_empty() {
            return Err(DomainError::EmptyCode);
        }
        if code == TOTALS_SENTINEL {
            return Err(DomainError::ReservedCode(code.to_string()));
        }
        Ok(Self(code.to_string()))
    }

    /// The "not yet assigned" placeholder.
    pub fn unassigned() -> Self {
        Self(UNASSIGNED.to_string())
    }

    /// Whether this is the placeholder code.
    pub fn is_unassigned(&self) -> bool {
        self.0 == UNASSIGNED
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trailer coupling state at the end of a trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrailerState {
    Attached,
    Detached,
    SemiTrailer,
    /// Anything else, kept verbatim.
    Other(String),
}

impl TrailerState {
    /// Parse a label case-insensitively. Unknown labels become `Other`.
    pub fn parse(s: &str) -> Self {
        let label = s.trim();
        match label.to_ascii_lowercase().as_str() {
            "attached" => TrailerState::Attached,
            "detached" => TrailerState::Detached,
            "semi-trailer" | "semitrailer" | "semi trailer" | "semi" => TrailerState::SemiTrailer,
            _ => TrailerState::Other(label.to_string()),
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        match self {
            TrailerState::Attached => "attached",
            TrailerState::Detached => "detached",
            TrailerState::SemiTrailer => "semi-trailer",
            TrailerState::Other(s) => s,
        }
    }
}

/// How the trip was dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementMode {
    RealTime,
    /// Any other mode, kept verbatim.
    Other(String),
}

impl MovementMode {
    /// Parse a label case-insensitively. Unknown labels become `Other`.
    pub fn parse(s: &str) -> Self {
        let label = s.trim();
        match label.to_ascii_lowercase().as_str() {
            "real-time" | "realtime" | "real time" => MovementMode::RealTime,
            _ => MovementMode::Other(label.to_string()),
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        match self {
            MovementMode::RealTime => "real-time",
            MovementMode::Other(s) => s,
        }
    }
}

macro_rules! label_serde {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(<$ty>::parse(&s))
            }
        }
    };
}

label_serde!(TrailerState);
label_serde!(MovementMode);

/// One completed or planned movement, plus its derived costs.
///
/// Everything except the costs is fixed at construction. Costs start absent
/// and are filled in (and overwritten on recomputation) by
/// [`crate::costs::apply_costs`].
///
/// # Examples
///
/// ```
/// use trip_planner::domain::{Timestamp, Trip, TripCode};
///
/// let trip = Trip::new(
///     TripCode::parse("A1").unwrap(),
///     "Verona",
///     Timestamp::parse("2025-07-11 06:00").unwrap(),
///     "Lyon",
///     Timestamp::parse("2025-07-11 14:15").unwrap(),
///     728.0,
///     1508.46,
/// )
/// .unwrap();
///
/// assert_eq!(trip.rate_per_km(), Some(1508.46 / 728.0));
/// assert_eq!(trip.duration_label(), "8h 15m");
/// assert!(trip.costs().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    code: TripCode,
    origin: String,
    departure: Timestamp,
    destination: String,
    arrival: Timestamp,
    distance_km: f64,
    duration_label: Option<String>,
    payout: f64,
    rate_per_km: Option<f64>,
    trailer: Option<TrailerState>,
    mode: Option<MovementMode>,
    costs: Option<TripCosts>,
}

impl Trip {
    /// Create a trip.
    ///
    /// Distance and payout must be finite and non-negative, and arrival must
    /// not precede departure.
    pub fn new(
        code: TripCode,
        origin: impl Into<String>,
        departure: Timestamp,
        destination: impl Into<String>,
        arrival: Timestamp,
        distance_km: f64,
        payout: f64,
    ) -> Result<Self, DomainError> {
        let distance_km = non_negative("distance", distance_km)?;
        let payout = non_negative("payout", payout)?;
        if arrival < departure {
            return Err(DomainError::ArrivalBeforeDeparture {
                departure: departure.to_string(),
                arrival: arrival.to_string(),
            });
        }

        Ok(Self {
            code,
            origin: origin.into(),
            departure,
            destination: destination.into(),
            arrival,
            distance_km,
            duration_label: None,
            payout,
            rate_per_km: None,
            trailer: None,
            mode: None,
            costs: None,
        })
    }

    /// Use an explicit rate instead of deriving it from payout and distance.
    pub fn with_rate_per_km(mut self, rate: f64) -> Result<Self, DomainError> {
        self.rate_per_km = Some(non_negative("rate per km", rate)?);
        Ok(self)
    }

    /// Use a free-text duration label instead of deriving one.
    pub fn with_duration_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.duration_label = if label.trim().is_empty() {
            None
        } else {
            Some(label)
        };
        self
    }

    pub fn with_trailer(mut self, trailer: TrailerState) -> Self {
        self.trailer = Some(trailer);
        self
    }

    pub fn with_mode(mut self, mode: MovementMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn code(&self) -> &TripCode {
        &self.code
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn departure(&self) -> Timestamp {
        self.departure
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn arrival(&self) -> Timestamp {
        self.arrival
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn payout(&self) -> f64 {
        self.payout
    }

    pub fn trailer(&self) -> Option<&TrailerState> {
        self.trailer.as_ref()
    }

    pub fn mode(&self) -> Option<&MovementMode> {
        self.mode.as_ref()
    }

    /// Payout per kilometre.
    ///
    /// The explicit rate if one was given, otherwise payout / distance.
    /// Undefined for a zero-distance trip either way.
    pub fn rate_per_km(&self) -> Option<f64> {
        if self.distance_km == 0.0 {
            return None;
        }
        Some(self.rate_per_km.unwrap_or(self.payout / self.distance_km))
    }

    /// The duration label, derived from departure and arrival as `"{h}h {mm}m"`
    /// when none was supplied.
    pub fn duration_label(&self) -> String {
        if let Some(label) = &self.duration_label {
            return label.clone();
        }
        let mins = self.arrival.signed_duration_since(self.departure).num_minutes();
        format!("{}h {:02}m", mins / 60, mins % 60)
    }

    /// Derived costs, if they have been computed.
    pub fn costs(&self) -> Option<&TripCosts> {
        self.costs.as_ref()
    }

    pub fn fuel_cost(&self) -> Option<f64> {
        self.costs.as_ref().and_then(|c| c.fuel)
    }

    pub fn toll_cost(&self) -> Option<f64> {
        self.costs.as_ref().map(|c| c.toll)
    }

    pub fn total_cost(&self) -> Option<f64> {
        self.costs.as_ref().map(|c| c.total)
    }

    /// Replace the derived costs.
    pub fn set_costs(&mut self, costs: TripCosts) {
        self.costs = Some(costs);
    }
}
