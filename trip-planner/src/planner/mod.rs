//! Availability and route selection.
//!
//! Answers two questions for a driver who has just finished a trip:
//! "when may I leave again?" and "which of the offered routes should I take?"

mod availability;
mod config;
mod rank;

pub use availability::next_available;
pub use config::RestPolicy;
pub use rank::{RouteFilter, rank_routes, select_compatible_routes};
