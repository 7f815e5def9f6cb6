//! Magnitude thresholds for precision inference.

use crate::core::{Precision, ResolvedInstant};

/// Ordered `(inclusive upper bound, precision)` rows.
///
/// The first row whose bound is at least the value wins; anything above
/// the last bound is nanoseconds. The negative rows are not a mirror of
/// the positive ones: the seconds band reaches down only to
/// `-29_999_999_999`.
pub const THRESHOLDS: [(i64, Precision); 6] = [
    (-9_999_999_999_999_999, Precision::Nanoseconds),
    (-100_000_000_000_000, Precision::Microseconds),
    (-30_000_000_000, Precision::Milliseconds),
    (99_999_999_999, Precision::Seconds),
    (99_999_999_999_999, Precision::Milliseconds),
    (9_999_999_999_999_998, Precision::Microseconds),
];

/// Precision for values above every bound in [`THRESHOLDS`].
pub const ABOVE_THRESHOLDS: Precision = Precision::Nanoseconds;

/// Infers the precision of an integer epoch timestamp from its magnitude.
#[must_use]
pub fn classify(value: i64) -> Precision {
    THRESHOLDS
        .iter()
        .find(|(bound, _)| value <= *bound)
        .map_or(ABOVE_THRESHOLDS, |(_, precision)| *precision)
}

/// Splits a count of `precision` units into seconds and nanoseconds.
///
/// Truncates toward zero, so the nanosecond part has the sign of `value`.
#[must_use]
pub const fn from_units(value: i64, precision: Precision) -> ResolvedInstant {
    let per_second = precision.units_per_second();
    ResolvedInstant::new(
        value / per_second,
        (value % per_second) * precision.nanos_per_unit(),
    )
}
