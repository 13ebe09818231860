//! Next-departure calculation.

use chrono::Duration;

use crate::domain::Timestamp;

/// Earliest time a driver may start a new trip.
///
/// The driver must first unload the current cargo and then complete the
/// full mandatory rest. Inputs are not checked against any wider
/// driving-time calendar. Returns `None` when the result falls outside the
/// representable calendar.
///
/// ```
/// use trip_planner::domain::Timestamp;
/// use trip_planner::planner::next_available;
///
/// let arrival = Timestamp::parse("2025-07-11 14:15").unwrap();
/// let next = next_available(arrival, 45, 11).unwrap();
/// assert_eq!(next.to_string(), "2025-07-12 02:00");
/// ```
pub fn next_available(
    last_arrival: Timestamp,
    unload_minutes: u32,
    rest_hours: u32,
) -> Option<Timestamp> {
    last_arrival
        .checked_add(Duration::minutes(i64::from(unload_minutes)))?
        .checked_add(Duration::hours(i64::from(rest_hours)))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn base() -> Timestamp {
        Timestamp::parse("2025-01-01 00:00").unwrap()
    }

    proptest! {
        /// Later arrival never yields earlier availability
        #[test]
        fn monotonic_in_arrival(
            a in 0i64..500_000,
            b in 0i64..500_000,
            unload in 0u32..240,
            rest in 0u32..48,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let arr_lo = base() + Duration::minutes(lo);
            let arr_hi = base() + Duration::minutes(hi);
            prop_assert!(next_available(arr_lo, unload, rest) <= next_available(arr_hi, unload, rest));
            prop_assert!(next_available(arr_hi, unload, rest).is_some());
        }

        /// Availability is never before arrival
        #[test]
        fn never_before_arrival(mins in 0i64..500_000, unload in 0u32..240, rest in 0u32..48) {
            let arrival = base() + Duration::minutes(mins);
            let next = next_available(arrival, unload, rest).unwrap();
            prop_assert!(next >= arrival);
            prop_assert_eq!(
                next.signed_duration_since(arrival),
                Duration::minutes(i64::from(unload) + 60 * i64::from(rest))
            );
        }

        /// Date advances by whole days only when the wait spans midnight
        #[test]
        fn stays_on_day_without_crossing_midnight(h in 0u32..12, m in 0u32..60) {
            let date = NaiveDate::from_ymd_opt(2025, 7, 11).unwrap();
            let arrival = Timestamp::new(date, chrono::NaiveTime::from_hms_opt(h, m, 0).unwrap());
            prop_assert_eq!(next_available(arrival, 45, 11).unwrap().date(), date);
        }
    }
}
