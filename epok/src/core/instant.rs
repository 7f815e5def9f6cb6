//! The resolved instant type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// A signed `(seconds, nanoseconds)` offset from the Unix epoch.
///
/// The two fields form one signed offset: for pre-epoch values the
/// nanosecond part is negative or zero, matching the sign of `seconds`.
/// Use [`ResolvedInstant::to_datetime`] for a normalised calendar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ResolvedInstant {
    /// Whole seconds since the epoch.
    pub seconds: i64,
    /// Sub-second remainder in nanoseconds.
    pub nanoseconds: i64,
}

impl ResolvedInstant {
    /// The epoch itself.
    pub const EPOCH: Self = Self::new(0, 0);

    /// Creates a new instant from its two offset parts.
    #[must_use]
    pub const fn new(seconds: i64, nanoseconds: i64) -> Self {
        Self {
            seconds,
            nanoseconds,
        }
    }

    /// Returns the exact offset from the epoch in nanoseconds.
    #[must_use]
    pub const fn total_nanos(&self) -> i128 {
        self.seconds as i128 * NANOS_PER_SECOND as i128 + self.nanoseconds as i128
    }

    /// Converts into a UTC datetime.
    ///
    /// Nanoseconds outside `[0, 1s)` carry into the seconds. Returns `None`
    /// when chrono cannot represent the result.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let carry = self.nanoseconds.div_euclid(NANOS_PER_SECOND);
        let nanos = u32::try_from(self.nanoseconds.rem_euclid(NANOS_PER_SECOND)).ok()?;
        let seconds = self.seconds.checked_add(carry)?;
        DateTime::from_timestamp(seconds, nanos)
    }
}

impl From<(i64, i64)> for ResolvedInstant {
    fn from((seconds, nanoseconds): (i64, i64)) -> Self {
        Self::new(seconds, nanoseconds)
    }
}

impl From<ResolvedInstant> for (i64, i64) {
    fn from(instant: ResolvedInstant) -> Self {
        (instant.seconds, instant.nanoseconds)
    }
}

/// Displays as the canonical total-nanosecond decimal string.
impl fmt::Display for ResolvedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total_nanos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_total_nanos_keeps_sign() {
        assert_eq!(ResolvedInstant::new(1, 500).total_nanos(), 1_000_000_500);
        assert_eq!(
            ResolvedInstant::new(-1, -500).total_nanos(),
            -1_000_000_500
        );
    }

    #[test]
    fn test_total_nanos_beyond_i64() {
        let instant = ResolvedInstant::new(9_999_999_999, 999_999_999);
        assert_eq!(instant.total_nanos(), 9_999_999_999_999_999_999_i128);
        assert_eq!(instant.to_string(), "9999999999999999999");
    }

    #[test]
    fn test_to_datetime_positive() {
        let dt = ResolvedInstant::new(1_751_074_598, 123_000_000)
            .to_datetime()
            .unwrap();
        assert_eq!(dt.year(), 2025);
        assert_eq!(dt.month(), 6);
        assert_eq!(dt.day(), 28);
        assert_eq!(dt.nanosecond(), 123_000_000);
    }

    #[test]
    fn test_to_datetime_normalises_negative_nanos() {
        let dt = ResolvedInstant::new(-1, -250_000_000).to_datetime().unwrap();
        assert_eq!(dt.timestamp(), -2);
        assert_eq!(dt.timestamp_subsec_nanos(), 750_000_000);
    }

    #[test]
    fn test_to_datetime_out_of_range() {
        assert!(ResolvedInstant::new(i64::MAX, 0).to_datetime().is_none());
    }

    #[test]
    fn test_tuple_conversions() {
        let instant: ResolvedInstant = (5, 6).into();
        assert_eq!(instant, ResolvedInstant::new(5, 6));
        let pair: (i64, i64) = instant.into();
        assert_eq!(pair, (5, 6));
    }

    #[test]
    fn test_instant_serialize() {
        let json = serde_json::to_string(&ResolvedInstant::new(-3, -4)).unwrap();
        assert_eq!(json, r#"{"seconds":-3,"nanoseconds":-4}"#);
    }
}
