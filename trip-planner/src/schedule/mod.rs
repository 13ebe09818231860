//! A driver's schedule of trips.
//!
//! Trips are added in order, costed in place, and folded into summary
//! totals. For display and export the schedule is flattened into a
//! [`ScheduleTable`], optionally with a trailing totals row.

mod table;
mod totals;

use tracing::debug;

use crate::costs::{CostParameters, apply_costs};
use crate::domain::{Timestamp, Trip};
use crate::planner::{RestPolicy, next_available};

pub use crate::domain::TOTALS_SENTINEL;
pub use table::{COLUMNS, ScheduleRow, ScheduleTable};
pub use totals::{ScheduleTotals, append_totals_row, compute_totals};

/// The ordered trips of one planning session.
///
/// Not synchronised: callers sharing a schedule must serialise access.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    trips: Vec<Trip>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trip.
    pub fn add_trip(&mut self, trip: Trip) {
        debug!(code = %trip.code(), "trip added to schedule");
        self.trips.push(trip);
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// The most recently added trip.
    pub fn last_trip(&self) -> Option<&Trip> {
        self.trips.last()
    }

    /// Cost every trip, replacing earlier results.
    pub fn compute_costs(&mut self, params: &CostParameters) {
        for trip in &mut self.trips {
            apply_costs(trip, params);
        }
        debug!(trips = self.trips.len(), "computed trip costs");
    }

    /// When the driver may start the next trip, based on the last trip's arrival.
    ///
    /// `None` for an empty schedule or when the rest period runs past the
    /// representable calendar.
    pub fn next_available(&self, policy: &RestPolicy) -> Option<Timestamp> {
        self.last_trip()
            .and_then(|t| next_available(t.arrival(), policy.unload_minutes, policy.rest_hours))
    }

    /// One row per trip, without a totals row.
    pub fn to_table(&self) -> ScheduleTable {
        self.trips.iter().map(ScheduleRow::from_trip).collect::<Vec<_>>().into()
    }

    /// Aggregates over all trips.
    pub fn totals(&self) -> ScheduleTotals {
        compute_totals(&self.to_table())
    }
}
