//! Schedule aggregates and the synthetic totals row.

use serde::Serialize;

use super::table::{ScheduleRow, ScheduleTable};
use crate::costs::round2;
use crate::domain::TOTALS_SENTINEL;

/// Aggregates over the trip rows of a schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScheduleTotals {
    pub distance_km: f64,
    pub payout: f64,
    /// payout / distance; absent when the total distance is zero.
    pub rate_per_km: Option<f64>,
    pub fuel_cost: f64,
    pub toll_cost: f64,
    pub total_cost: f64,
}

/// Sum the trip rows of `rows`.
///
/// Rows whose code is [`TOTALS_SENTINEL`] are skipped, so a table that
/// already carries a totals row produces the same result as one without.
/// Missing numeric cells count as zero. The average rate is taken from the
/// raw sums; the sums themselves are then rounded to two decimals.
pub fn compute_totals<'a>(rows: impl IntoIterator<Item = &'a ScheduleRow>) -> ScheduleTotals {
    let mut totals = rows
        .into_iter()
        .filter(|r| !r.is_totals())
        .fold(ScheduleTotals::default(), |mut acc, row| {
            acc.distance_km += row.distance_km.unwrap_or(0.0);
            acc.payout += row.payout.unwrap_or(0.0);
            acc.fuel_cost += row.fuel_cost.unwrap_or(0.0);
            acc.toll_cost += row.toll_cost.unwrap_or(0.0);
            acc.total_cost += row.total_cost.unwrap_or(0.0);
            acc
        });

    totals.rate_per_km =
        (totals.distance_km > 0.0).then(|| round2(totals.payout / totals.distance_km));
    totals.distance_km = round2(totals.distance_km);
    totals.payout = round2(totals.payout);
    totals.fuel_cost = round2(totals.fuel_cost);
    totals.toll_cost = round2(totals.toll_cost);
    totals.total_cost = round2(totals.total_cost);

    totals
}

impl ScheduleTotals {
    /// Render as a totals row: aggregate cells filled, everything else empty.
    pub fn to_row(&self) -> ScheduleRow {
        ScheduleRow {
            distance_km: Some(self.distance_km),
            payout: Some(self.payout),
            rate_per_km: self.rate_per_km,
            fuel_cost: Some(self.fuel_cost),
            toll_cost: Some(self.toll_cost),
            total_cost: Some(self.total_cost),
            ..ScheduleRow::blank(TOTALS_SENTINEL)
        }
    }
}

/// Return a copy of `table` with a totals row appended.
pub fn append_totals_row(table: &ScheduleTable) -> ScheduleTable {
    let totals = compute_totals(table);
    let mut out = table.clone();
    out.push(totals.to_row());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::{CostParameters, apply_costs};
    use crate::domain::{Timestamp, Trip, TripCode};

    fn costed_row(code: &str, distance: f64, payout: f64) -> ScheduleRow {
        let mut trip = Trip::new(
            TripCode::parse(code).unwrap(),
            "Verona",
            Timestamp::parse("2025-07-11 06:00").unwrap(),
            "Lyon",
            Timestamp::parse("2025-07-11 14:15").unwrap(),
            distance,
            payout,
        )
        .unwrap();
        apply_costs(&mut trip, &CostParameters::default());
        ScheduleRow::from_trip(&trip)
    }

    fn three_trips() -> ScheduleTable {
        ScheduleTable::new(vec![
            costed_row("A1", 728.0, 1508.46),
            costed_row("A2", 192.2, 490.28),
            costed_row("A3", 294.5, 891.61),
        ])
    }

    #[test]
    fn rate_uses_unrounded_distance() {
        let totals = compute_totals(&ScheduleTable::new(vec![costed_row("A1", 0.004, 10.0)]));
        assert_eq!(totals.distance_km, 0.0);
        assert_eq!(totals.rate_per_km, Some(2500.0));

        let totals = compute_totals(&ScheduleTable::new(vec![costed_row("A1", 0.006, 10.0)]));
        assert_eq!(totals.distance_km, 0.01);
        assert_eq!(totals.rate_per_km, Some(1666.67));
    }

    #[test]
    fn end_to_end_totals() {
        let totals = compute_totals(&three_trips());

        assert_eq!(totals.distance_km, 1214.7);
        assert_eq!(totals.payout, 2890.35);
        assert_eq!(totals.rate_per_km, Some(2.38));
        assert_eq!(totals.fuel_cost, 586.53);
        assert_eq!(totals.toll_cost, 0.0);
        assert_eq!(totals.total_cost, 586.53);
    }

    #[test]
    fn empty_table_sums_to_zero() {
        let totals = compute_totals(&ScheduleTable::default());
        assert_eq!(totals, ScheduleTotals::default());
        assert_eq!(totals.rate_per_km, None);
    }

    #[test]
    fn zero_distance_leaves_rate_undefined() {
        let table = ScheduleTable::new(vec![costed_row("Z", 0.0, 100.0)]);
        let totals = compute_totals(&table);
        assert_eq!(totals.payout, 100.0);
        assert_eq!(totals.rate_per_km, None);
        assert_eq!(totals.to_row().rate_per_km, None);
    }

    #[test]
    fn totals_row_shape() {
        let table = append_totals_row(&three_trips());
        assert_eq!(table.len(), 4);

        let last = &table.rows()[3];
        assert!(last.is_totals());
        assert_eq!(last.code, "TOTALE");
        assert_eq!(last.distance_km, Some(1214.7));
        assert_eq!(last.payout, Some(2890.35));
        assert_eq!(last.rate_per_km, Some(2.38));
        assert_eq!(last.origin, "");
        assert_eq!(last.destination, "");
        assert_eq!(last.departure, None);
        assert_eq!(last.arrival, None);
        assert_eq!(last.duration, "");
        assert_eq!(last.trailer, "");
        assert_eq!(last.mode, "");
    }

    #[test]
    fn input_rows_are_preserved() {
        let original = three_trips();
        let with_totals = append_totals_row(&original);
        assert_eq!(&with_totals.rows()[..3], original.rows());
        // Input untouched
        assert_eq!(original.len(), 3);
    }

    #[test]
    fn totals_ignore_existing_totals_row() {
        let table = three_trips();
        let once = append_totals_row(&table);
        assert_eq!(compute_totals(&table), compute_totals(&once));
    }

    #[test]
    fn appending_twice_does_not_double() {
        let once = append_totals_row(&three_trips());
        let twice = append_totals_row(&once);

        assert_eq!(twice.len(), 5);
        assert_eq!(twice.rows()[3], twice.rows()[4]);
        assert_eq!(twice.rows()[4].payout, Some(2890.35));
        assert_eq!(compute_totals(&twice), compute_totals(&three_trips()));
    }
}
