//! Rest policy for the availability calculator.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Regulatory waiting times after a trip.
///
/// Supplied per invocation; never derived from trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestPolicy {
    /// Time to unload the current cargo (minutes).
    pub unload_minutes: u32,

    /// Mandatory daily rest (hours).
    pub rest_hours: u32,
}

impl RestPolicy {
    pub fn new(unload_minutes: u32, rest_hours: u32) -> Self {
        Self {
            unload_minutes,
            rest_hours,
        }
    }

    /// Returns the unloading time as a Duration.
    pub fn unload(&self) -> Duration {
        Duration::minutes(i64::from(self.unload_minutes))
    }

    /// Returns the mandatory rest as a Duration.
    pub fn rest(&self) -> Duration {
        Duration::hours(i64::from(self.rest_hours))
    }
}

impl Default for RestPolicy {
    fn default() -> Self {
        Self {
            unload_minutes: 45,
            rest_hours: 11,
        }
    }
}
