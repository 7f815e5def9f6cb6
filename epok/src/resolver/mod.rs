//! The timestamp resolver.
//!
//! [`parse`] fuzzy-parses a bare integer string into a [`ResolvedInstant`].
//! The default precision is seconds; larger magnitudes are taken to be
//! milliseconds, microseconds and finally nanoseconds according to
//! [`THRESHOLDS`]. Strings too large for `i64` are split lexically into
//! seconds and a nine-digit nanosecond fraction.
//!
//! Everything here is a pure function of its input.

mod overflow;
mod thresholds;

pub use thresholds::{classify, from_units, ABOVE_THRESHOLDS, THRESHOLDS};

use crate::core::{Precision, ResolvedInstant};
use crate::errors::ParseError;
use std::num::IntErrorKind;

/// Resolves a trimmed epoch timestamp string into an instant.
///
/// `input` must be an optional leading `-` followed by decimal digits.
///
/// # Examples
///
/// ```
/// use epok::resolver::parse;
///
/// assert_eq!(parse("99999999999").unwrap().seconds, 99_999_999_999);
/// assert_eq!(parse("100000000000").unwrap().seconds, 100_000_000);
/// ```
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for empty or non-integer input and
/// `ParseError::Overflow` when the value is too large even as nanoseconds.
pub fn parse(input: &str) -> Result<ResolvedInstant, ParseError> {
    parse_with_precision(input).map(|(instant, _)| instant)
}

/// Like [`parse`], also returning the precision that was inferred.
///
/// Inputs beyond `i64` always report `Precision::Nanoseconds`.
pub fn parse_with_precision(input: &str) -> Result<(ResolvedInstant, Precision), ParseError> {
    if !is_signed_digits(input) {
        return Err(ParseError::InvalidFormat);
    }

    match input.parse::<i64>() {
        Ok(value) => {
            let precision = classify(value);
            Ok((from_units(value, precision), precision))
        }
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            overflow::resolve(input).map(|instant| (instant, Precision::Nanoseconds))
        }
        Err(_) => Err(ParseError::InvalidFormat),
    }
}

/// Resolves an integer epoch timestamp, inferring its precision.
#[must_use]
pub fn resolve_int(value: i64) -> ResolvedInstant {
    from_units(value, classify(value))
}

/// `-?[0-9]+`
fn is_signed_digits(input: &str) -> bool {
    let digits = input.strip_prefix('-').unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
