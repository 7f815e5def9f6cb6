//! Timestamp precision.

use crate::errors::EpokError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The unit an integer epoch timestamp counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Whole seconds.
    Seconds,
    /// Thousandths of a second.
    Milliseconds,
    /// Millionths of a second.
    Microseconds,
    /// Billionths of a second.
    Nanoseconds,
}

impl Default for Precision {
    fn default() -> Self {
        Self::Seconds
    }
}

impl Precision {
    /// All precisions, coarsest first.
    pub const ALL: [Self; 4] = [
        Self::Seconds,
        Self::Milliseconds,
        Self::Microseconds,
        Self::Nanoseconds,
    ];

    /// How many units of this precision make up one second.
    #[must_use]
    pub const fn units_per_second(self) -> i64 {
        match self {
            Self::Seconds => 1,
            Self::Milliseconds => 1_000,
            Self::Microseconds => 1_000_000,
            Self::Nanoseconds => 1_000_000_000,
        }
    }

    /// How many nanoseconds one unit of this precision spans.
    #[must_use]
    pub const fn nanos_per_unit(self) -> i64 {
        match self {
            Self::Seconds => 1_000_000_000,
            Self::Milliseconds => 1_000_000,
            Self::Microseconds => 1_000,
            Self::Nanoseconds => 1,
        }
    }

    /// Returns the lowercase long name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
            Self::Microseconds => "microseconds",
            Self::Nanoseconds => "nanoseconds",
        }
    }

    /// Returns the title-cased name, e.g. `Milliseconds`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Seconds => "Seconds",
            Self::Milliseconds => "Milliseconds",
            Self::Microseconds => "Microseconds",
            Self::Nanoseconds => "Nanoseconds",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precision {
    type Err = EpokError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seconds" | "second" | "secs" | "s" => Ok(Self::Seconds),
            "milliseconds" | "millisecond" | "millis" | "ms" => Ok(Self::Milliseconds),
            "microseconds" | "microsecond" | "micros" | "us" => Ok(Self::Microseconds),
            "nanoseconds" | "nanosecond" | "nanos" | "ns" => Ok(Self::Nanoseconds),
            _ => Err(EpokError::InvalidPrecision(s.to_string())),
        }
    }
}
