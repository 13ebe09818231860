//! Timestamp handling for trips and candidate routes.
//!
//! Trip data arrives as "YYYY-MM-DD HH:MM" strings. Ingesting collaborators
//! are responsible for locale negotiation; this module only accepts the
//! ISO-like forms listed on [`Timestamp::parse`].

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Display format, also the canonical input format.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Accepted input formats, tried in order.
const INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimestampError {
    input: String,
    reason: &'static str,
}

impl TimestampError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A zone-less point in time at minute resolution.
///
/// Departure and arrival times of a single driver's trips are all expressed
/// in the same local clock, so no timezone is carried.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::Timestamp;
///
/// let t = Timestamp::parse("2025-07-11 14:15").unwrap();
/// assert_eq!(t.to_string(), "2025-07-11 14:15");
///
/// // Seconds are accepted but truncated
/// let t = Timestamp::parse("2025-07-11T14:15:59").unwrap();
/// assert_eq!(t.to_string(), "2025-07-11 14:15");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Create a timestamp from date and time components.
    ///
    /// Seconds and sub-second precision are dropped.
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self::from_datetime(date.and_time(time))
    }

    /// Create a timestamp from a `NaiveDateTime`, truncating to the minute.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        let truncated = dt
            .with_second(0)
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(dt);
        Self(truncated)
    }

    /// Parse a timestamp.
    ///
    /// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DD HH:MM:SS` and the same two
    /// forms with a `T` separator.
    ///
    /// ```
    /// use trip_planner::domain::Timestamp;
    ///
    /// assert!(Timestamp::parse("2025-07-11 14:15").is_ok());
    /// assert!(Timestamp::parse("2025-07-11T14:15").is_ok());
    /// assert!(Timestamp::parse("11/07/2025 14:15").is_err());
    /// assert!(Timestamp::parse("2025-07-11 25:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TimestampError::new(s, "empty"));
        }

        INPUT_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(Self::from_datetime)
            .ok_or_else(|| TimestampError::new(s, "expected YYYY-MM-DD HH:MM"))
    }

    /// Returns the date component.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Returns the time-of-day component.
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Converts to a NaiveDateTime.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Add a duration, returning `None` on calendar overflow.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        self.0.checked_add_signed(duration).map(Self::from_datetime)
    }

    /// Returns the duration between two timestamps.
    ///
    /// Negative if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0.signed_duration_since(other.0)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs).expect("timestamp overflow")
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0.format(DISPLAY_FORMAT))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    #[test]
    fn parse_accepted_forms() {
        let expected = ts("2025-07-11 14:15");
        assert_eq!(ts("2025-07-11 14:15:00"), expected);
        assert_eq!(ts("2025-07-11T14:15"), expected);
        assert_eq!(ts("2025-07-11T14:15:30"), expected);
        assert_eq!(ts("  2025-07-11 14:15  "), expected);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Timestamp::parse("").is_err());
        assert!(Timestamp::parse("   ").is_err());
        assert!(Timestamp::parse("2025-07-11").is_err());
        assert!(Timestamp::parse("14:15").is_err());
        assert!(Timestamp::parse("2025-13-01 10:00").is_err());
        assert!(Timestamp::parse("2025-02-30 10:00").is_err());
        assert!(Timestamp::parse("11/07/2025 14:15").is_err());
    }

    #[test]
    fn error_message_names_input() {
        let err = Timestamp::parse("tomorrow").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid timestamp \"tomorrow\": expected YYYY-MM-DD HH:MM"
        );
    }

    #[test]
    fn add_crosses_midnight() {
        let later = ts("2025-07-11 23:30") + Duration::hours(1);
        assert_eq!(later, ts("2025-07-12 00:30"));
        assert_eq!(later.date(), NaiveDate::from_ymd_opt(2025, 7, 12).unwrap());
    }

    #[test]
    fn ordering_follows_calendar() {
        assert!(ts("2025-07-11 23:59") < ts("2025-07-12 00:00"));
        assert!(ts("2024-12-31 10:00") < ts("2025-01-01 09:00"));
    }

    #[test]
    fn duration_since() {
        let dep = ts("2025-07-11 06:00");
        let arr = ts("2025-07-11 14:15");
        assert_eq!(arr.signed_duration_since(dep), Duration::minutes(495));
        assert_eq!(dep.signed_duration_since(arr), Duration::minutes(-495));
    }

    #[test]
    fn serde_as_string() {
        let t = ts("2025-07-11 14:15");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"2025-07-11 14:15\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);

        assert!(serde_json::from_str::<Timestamp>("\"not a time\"").is_err());
    }

    #[test]
    fn debug_format() {
        assert_eq!(
            format!("{:?}", ts("2025-07-11 14:15")),
            "Timestamp(2025-07-11 14:15)"
        );
    }
}
