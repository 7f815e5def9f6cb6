//! Epoch generation at a requested precision.
//!
//! The inverse direction of the resolver: given an instant, produce the
//! decimal epoch count a user asked for.

use crate::core::{Precision, ResolvedInstant};
use crate::errors::EpokError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// An instant paired with the precision it should be rendered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochStamp {
    /// The instant being rendered.
    pub at: DateTime<Utc>,
    /// The unit the epoch counts in.
    pub precision: Precision,
}

impl EpochStamp {
    /// Creates a new stamp for `at`.
    #[must_use]
    pub const fn new(at: DateTime<Utc>, precision: Precision) -> Self {
        Self { at, precision }
    }

    /// Creates a stamp for the current instant.
    #[must_use]
    pub fn now(precision: Precision) -> Self {
        Self::new(Utc::now(), precision)
    }

    /// Returns the epoch as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns `EpokError::EpochOutOfRange` when a nanosecond count does not fit in `i64`.
    pub fn epoch(&self) -> Result<String, EpokError> {
        let count = match self.precision {
            Precision::Seconds => self.at.timestamp(),
            Precision::Milliseconds => self.at.timestamp_millis(),
            Precision::Microseconds => self.at.timestamp_micros(),
            Precision::Nanoseconds => self
                .at
                .timestamp_nanos_opt()
                .ok_or(EpokError::EpochOutOfRange(self.precision))?,
        };
        Ok(count.to_string())
    }

    /// Returns the resolved form of this stamp's instant.
    #[must_use]
    pub fn instant(&self) -> ResolvedInstant {
        ResolvedInstant::new(
            self.at.timestamp(),
            i64::from(self.at.timestamp_subsec_nanos()),
        )
    }
}

/// Serializes as `{"Epoch": "<count>", "Now": "<rfc3339>"}`.
impl Serialize for EpochStamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let epoch = self
            .epoch()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        let mut state = serializer.serialize_struct("EpochStamp", 2)?;
        state.serialize_field("Epoch", &epoch)?;
        state.serialize_field("Now", &self.at.to_rfc3339_opts(SecondsFormat::Secs, true))?;
        state.end()
    }
}

/// Renders a resolved instant as an epoch count at `precision`.
///
/// Finer digits than the precision are truncated toward zero, which makes
/// this the inverse of [`crate::resolver::parse`] for canonical inputs.
///
/// # Errors
///
/// Returns `EpokError::EpochOutOfRange` when the count does not fit in `i64`.
pub fn format_epoch(instant: ResolvedInstant, precision: Precision) -> Result<String, EpokError> {
    let count = instant.total_nanos() / i128::from(precision.nanos_per_unit());
    let count = i64::try_from(count).map_err(|_| EpokError::EpochOutOfRange(precision))?;
    Ok(count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed() -> DateTime<Utc> {
        Utc.timestamp_opt(1_751_074_598, 123_456_789).unwrap()
    }

    #[test]
    fn test_epoch_at_each_precision() {
        let cases = [
            (Precision::Seconds, "1751074598"),
            (Precision::Milliseconds, "1751074598123"),
            (Precision::Microseconds, "1751074598123456"),
            (Precision::Nanoseconds, "1751074598123456789"),
        ];
        for (precision, expected) in cases {
            let stamp = EpochStamp::new(fixed(), precision);
            assert_eq!(stamp.epoch().unwrap(), expected, "{precision}");
        }
    }

    #[test]
    fn test_epoch_nanos_out_of_range() {
        let far = Utc.with_ymd_and_hms(2500, 1, 1, 0, 0, 0).unwrap();
        let stamp = EpochStamp::new(far, Precision::Nanoseconds);
        assert!(matches!(
            stamp.epoch(),
            Err(EpokError::EpochOutOfRange(Precision::Nanoseconds))
        ));
        assert!(EpochStamp::new(far, Precision::Microseconds).epoch().is_ok());
    }

    #[test]
    fn test_epoch_stamp_json() {
        let stamp = EpochStamp::new(fixed(), Precision::Milliseconds);
        let json = serde_json::to_value(stamp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Epoch": "1751074598123",
                "Now": "2025-06-28T01:36:38Z",
            })
        );
    }

    #[test]
    fn test_stamp_instant() {
        let stamp = EpochStamp::new(fixed(), Precision::Seconds);
        assert_eq!(stamp.instant(), ResolvedInstant::new(1_751_074_598, 123_456_789));
    }

    #[test]
    fn test_format_epoch_inverts_parse() {
        for input in [
            "1751074598",
            "1751074598123",
            "1751074598123456",
            "1751074598123456789",
            "-1",
            "-30000000000",
            "-99999999999999",
            "-9999999999999998",
        ] {
            let (instant, precision) = resolver::parse_with_precision(input).unwrap();
            assert_eq!(format_epoch(instant, precision).unwrap(), input);
        }
    }

    #[test]
    fn test_format_epoch_truncates() {
        let instant = ResolvedInstant::new(-1, -999_999_999);
        assert_eq!(format_epoch(instant, Precision::Seconds).unwrap(), "-1");
        assert_eq!(format_epoch(instant, Precision::Milliseconds).unwrap(), "-1999");
    }

    #[test]
    fn test_format_epoch_out_of_range() {
        let instant = ResolvedInstant::new(9_999_999_999, 999_999_999);
        assert!(matches!(
            format_epoch(instant, Precision::Nanoseconds),
            Err(EpokError::EpochOutOfRange(Precision::Nanoseconds))
        ));
        assert_eq!(
            format_epoch(instant, Precision::Microseconds).unwrap(),
            "9999999999999999"
        );
    }
}
