//! Web layer for the trip planner.
//!
//! A JSON session service: add trips, read the costed schedule, download it
//! as CSV, and rank uploaded candidate routes against the driver's
//! availability.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, Session};
