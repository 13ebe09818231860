//! Freight trip planner.
//!
//! Helps a single driver plan successive trips: costs each trip taken,
//! works out the earliest legal departure after unloading and rest, and
//! ranks offered routes against that point and optional profitability
//! thresholds.

pub mod config;
pub mod costs;
pub mod domain;
pub mod planner;
pub mod schedule;
pub mod tables;
pub mod web;
