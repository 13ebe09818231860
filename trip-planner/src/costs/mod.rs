//! Operating cost model.
//!
//! Pure functions turning a trip's distance and endpoints into fuel, toll
//! and total cost, plus the parameter set they read from.

mod tolls;

use serde::Serialize;
use tracing::trace;

use crate::config::ConfigError;
use crate::domain::Trip;

pub use tolls::TollTable;

/// Round a currency amount to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parameters for costing a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct CostParameters {
    /// Kilometres per litre of fuel.
    fuel_consumption_km_per_l: f64,

    /// Currency per litre.
    fuel_price_per_l: f64,

    /// Toll estimates per (origin, destination).
    tolls: TollTable,
}

impl CostParameters {
    /// Create a parameter set. Consumption and price must be finite and positive.
    pub fn new(
        fuel_consumption_km_per_l: f64,
        fuel_price_per_l: f64,
        tolls: TollTable,
    ) -> Result<Self, ConfigError> {
        check_positive("fuel consumption", fuel_consumption_km_per_l)?;
        check_positive("fuel price", fuel_price_per_l)?;
        Ok(Self {
            fuel_consumption_km_per_l,
            fuel_price_per_l,
            tolls,
        })
    }

    pub fn fuel_consumption_km_per_l(&self) -> f64 {
        self.fuel_consumption_km_per_l
    }

    pub fn fuel_price_per_l(&self) -> f64 {
        self.fuel_price_per_l
    }

    pub fn tolls(&self) -> &TollTable {
        &self.tolls
    }

    /// Replace the toll table.
    pub fn with_tolls(mut self, tolls: TollTable) -> Self {
        self.tolls = tolls;
        self
    }
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            fuel_consumption_km_per_l: 3.5,
            fuel_price_per_l: 1.69,
            tolls: TollTable::default(),
        }
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

/// Fuel cost of driving `distance_km`, rounded to two decimals.
///
/// ```
/// use trip_planner::costs::fuel_cost;
///
/// assert_eq!(fuel_cost(728.0, 3.5, 1.69), 351.52);
/// ```
pub fn fuel_cost(distance_km: f64, consumption_km_per_l: f64, price_per_l: f64) -> f64 {
    round2(distance_km / consumption_km_per_l * price_per_l)
}

/// Toll estimate between two places. Unknown pairs cost nothing.
pub fn toll_cost(origin: &str, destination: &str, tolls: &TollTable) -> f64 {
    match tolls.get(origin, destination) {
        Some(toll) => toll,
        None => {
            trace!(origin, destination, "no toll entry, assuming zero");
            0.0
        }
    }
}

/// Fuel plus toll, rounded to cents so float noise never reaches the export.
pub fn total_cost(fuel: f64, toll: f64) -> f64 {
    round2(fuel + toll)
}

/// Derived costs of one trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripCosts {
    /// Absent for a zero-distance trip.
    pub fuel: Option<f64>,
    pub toll: f64,
    pub total: f64,
}

impl TripCosts {
    /// Compute the costs of `trip` without modifying it.
    pub fn compute(trip: &Trip, params: &CostParameters) -> Self {
        let fuel = (trip.distance_km() > 0.0).then(|| {
            fuel_cost(
                trip.distance_km(),
                params.fuel_consumption_km_per_l,
                params.fuel_price_per_l,
            )
        });
        let toll = toll_cost(trip.origin(), trip.destination(), &params.tolls);
        let total = total_cost(fuel.unwrap_or(0.0), toll);

        Self { fuel, toll, total }
    }
}

/// Compute and store the costs of `trip`, replacing any earlier values.
pub fn apply_costs(trip: &mut Trip, params: &CostParameters) {
    let costs = TripCosts::compute(trip, params);
    trip.set_costs(costs);
}
