//! Resolution of digit strings larger than `i64`.
//!
//! Such values can only be nanoseconds. The last nine digits are the
//! sub-second part; whatever precedes them must fit in `i64` as seconds.

use crate::core::ResolvedInstant;
use crate::errors::ParseError;
use std::num::IntErrorKind;

/// Width of the nanosecond fraction in decimal digits.
const NANOS_DIGITS: usize = 9;

/// Splits an out-of-range digit string into seconds and nanoseconds.
///
/// `raw` is an optional `-` followed by decimal digits.
pub(super) fn resolve(raw: &str) -> Result<ResolvedInstant, ParseError> {
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw),
    };
    let digits = unsigned.trim_start_matches('0');
    if digits.len() <= NANOS_DIGITS {
        return Err(ParseError::InvalidFormat);
    }

    let (second_digits, nano_digits) = digits.split_at(digits.len() - NANOS_DIGITS);
    let nanoseconds: i64 = nano_digits
        .parse()
        .map_err(|_| ParseError::InvalidFormat)?;
    let seconds: i64 = second_digits.parse().map_err(|e: std::num::ParseIntError| {
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::Overflow,
            _ => ParseError::InvalidFormat,
        }
    })?;

    Ok(ResolvedInstant::new(sign * seconds, sign * nanoseconds))
}
