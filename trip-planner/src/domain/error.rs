//! Domain error types.
//!
//! These errors represent validation failures when building trips, routes
//! and driver data. They are distinct from I/O and configuration errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A numeric field is negative, NaN or infinite
    #[error("invalid {field}: {value} (must be finite and non-negative)")]
    InvalidAmount { field: &'static str, value: f64 },

    /// Trip code is empty
    #[error("trip code must not be empty")]
    EmptyCode,

    /// Trip code collides with the totals row marker
    #[error("trip code {0:?} is reserved for the totals row")]
    ReservedCode(String),

    /// Arrival precedes departure
    #[error("arrival {arrival} is before departure {departure}")]
    ArrivalBeforeDeparture { departure: String, arrival: String },

    /// GPS position could not be parsed or is out of range
    #[error("invalid position: {0}")]
    InvalidPosition(&'static str),
}

/// Check that `value` is finite and non-negative. `-0.0` comes back as `0.0`.
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(if value == 0.0 { 0.0 } else { value })
    } else {
        Err(DomainError::InvalidAmount { field, value })
    }
}
