//! Flat tabular view of a schedule, as rendered and exported.

use serde::Serialize;

use crate::domain::{TOTALS_SENTINEL, Timestamp, Trip};

/// Column headers, in export order.
pub const COLUMNS: [&str; 14] = [
    "code",
    "origin",
    "departure",
    "destination",
    "arrival",
    "distance_km",
    "duration",
    "payout",
    "rate_per_km",
    "trailer",
    "mode",
    "fuel_cost",
    "toll_cost",
    "total_cost",
];

/// One row of a schedule table.
///
/// Either a trip or the synthetic totals row. `None` renders as an empty
/// cell so every row has the same column set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub code: String,
    pub origin: String,
    pub departure: Option<Timestamp>,
    pub destination: String,
    pub arrival: Option<Timestamp>,
    pub distance_km: Option<f64>,
    pub duration: String,
    pub payout: Option<f64>,
    pub rate_per_km: Option<f64>,
    pub trailer: String,
    pub mode: String,
    pub fuel_cost: Option<f64>,
    pub toll_cost: Option<f64>,
    pub total_cost: Option<f64>,
}

impl ScheduleRow {
    /// Render a trip, including its costs if computed.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            code: trip.code().to_string(),
            origin: trip.origin().to_string(),
            departure: Some(trip.departure()),
            destination: trip.destination().to_string(),
            arrival: Some(trip.arrival()),
            distance_km: Some(trip.distance_km()),
            duration: trip.duration_label(),
            payout: Some(trip.payout()),
            rate_per_km: trip.rate_per_km(),
            trailer: trip.trailer().map(|t| t.to_string()).unwrap_or_default(),
            mode: trip.mode().map(|m| m.to_string()).unwrap_or_default(),
            fuel_cost: trip.fuel_cost(),
            toll_cost: trip.toll_cost(),
            total_cost: trip.total_cost(),
        }
    }

    /// A row with the given code and every other cell empty.
    pub(crate) fn blank(code: &str) -> Self {
        Self {
            code: code.to_string(),
            origin: String::new(),
            departure: None,
            destination: String::new(),
            arrival: None,
            distance_km: None,
            duration: String::new(),
            payout: None,
            rate_per_km: None,
            trailer: String::new(),
            mode: String::new(),
            fuel_cost: None,
            toll_cost: None,
            total_cost: None,
        }
    }

    /// Whether this is a synthetic totals row.
    pub fn is_totals(&self) -> bool {
        self.code == TOTALS_SENTINEL
    }
}

/// An ordered list of schedule rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScheduleTable {
    rows: Vec<ScheduleRow>,
}

impl ScheduleTable {
    pub fn new(rows: Vec<ScheduleRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: ScheduleRow) {
        self.rows.push(row);
    }

    /// Rows that are not totals rows.
    pub fn trip_rows(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter().filter(|r| !r.is_totals())
    }
}

impl From<Vec<ScheduleRow>> for ScheduleTable {
    fn from(rows: Vec<ScheduleRow>) -> Self {
        Self::new(rows)
    }
}

impl<'a> IntoIterator for &'a ScheduleTable {
    type Item = &'a ScheduleRow;
    type IntoIter = std::slice::Iter<'a, ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
