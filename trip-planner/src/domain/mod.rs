//! Domain types for the trip planner.
//!
//! This module contains the core data model: trips, candidate routes and
//! the driver's status. Types check their invariants at construction time,
//! so code that receives them can trust their validity.

mod driver;
mod error;
mod route;
mod time;
mod trip;

pub use driver::{DriverStatus, GeoPosition};
pub use error::DomainError;
pub use route::CandidateRoute;
pub use time::{Timestamp, TimestampError};
pub use trip::{MovementMode, TOTALS_SENTINEL, TrailerState, Trip, TripCode};
