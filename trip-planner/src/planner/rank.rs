//! Route filtering and ranking.
//!
//! Picks the candidate routes a driver can actually take once available,
//! and orders them by profitability.

use std::cmp::Ordering;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{CandidateRoute, Timestamp};

/// Optional profitability thresholds plus the result limit.
///
/// Every threshold left as `None` imposes no constraint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RouteFilter {
    pub min_payout: Option<f64>,
    pub min_rate_per_km: Option<f64>,
    pub min_distance_km: Option<f64>,

    /// Maximum number of routes to return.
    pub top_n: usize,
}

impl RouteFilter {
    /// A filter with no thresholds returning at most `top_n` routes.
    pub fn top(top_n: usize) -> Self {
        Self {
            top_n,
            ..Self::default()
        }
    }

    /// Whether `route` passes every configured threshold.
    ///
    /// A route without a rate (zero distance) fails a rate threshold.
    pub fn accepts(&self, route: &CandidateRoute) -> bool {
        self.min_payout.is_none_or(|min| route.payout() >= min)
            && self
                .min_rate_per_km
                .is_none_or(|min| route.rate_per_km().is_some_and(|r| r >= min))
            && self.min_distance_km.is_none_or(|min| route.distance_km() >= min)
    }
}

impl Default for RouteFilter {
    fn default() -> Self {
        Self {
            min_payout: None,
            min_rate_per_km: None,
            min_distance_km: None,
            top_n: 5,
        }
    }
}

/// Ranking order: payout descending, then rate descending.
///
/// Routes without a rate sort after those with one.
fn by_profitability(a: &CandidateRoute, b: &CandidateRoute) -> Ordering {
    let payout_cmp = b.payout().total_cmp(&a.payout());
    if payout_cmp != Ordering::Equal {
        return payout_cmp;
    }

    match (a.rate_per_km(), b.rate_per_km()) {
        (Some(ra), Some(rb)) => rb.total_cmp(&ra),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Rank routes best-first. The sort is stable, so full ties keep their
/// input order.
pub fn rank_routes<'a>(mut routes: Vec<&'a CandidateRoute>) -> Vec<&'a CandidateRoute> {
    routes.sort_by(|a, b| by_profitability(a, b));
    routes
}

/// Select the routes a driver available at `available_from` can take.
///
/// A route is eligible when it departs at or after `available_from` and
/// passes every threshold in `filter`. Eligible routes are ranked by
/// [`rank_routes`] and the first `filter.top_n` are returned. Fewer eligible
/// routes than `top_n` is not an error.
pub fn select_compatible_routes<'a>(
    routes: &'a [CandidateRoute],
    available_from: Timestamp,
    filter: &RouteFilter,
) -> Vec<&'a CandidateRoute> {
    let eligible: Vec<&CandidateRoute> = routes
        .iter()
        .filter(|r| r.departure() >= available_from)
        .filter(|r| filter.accepts(r))
        .collect();

    debug!(
        candidates = routes.len(),
        eligible = eligible.len(),
        top_n = filter.top_n,
        %available_from,
        "filtered candidate routes"
    );

    let mut ranked = rank_routes(eligible);
    ranked.truncate(filter.top_n);
    ranked
}
