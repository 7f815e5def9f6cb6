//! Error types for epok.
//!
//! [`ParseError`] is the resolver's closed set of failures. [`EpokError`]
//! covers everything around it: input acquisition, configuration and
//! epoch generation.

use crate::core::Precision;
use std::path::PathBuf;
use thiserror::Error;

/// Why a timestamp string could not be resolved.
///
/// Both kinds are deterministic functions of the input and never worth
/// retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input is empty, carries non-digit content, or is otherwise not an integer.
    #[error("invalid timestamp format")]
    InvalidFormat,

    /// The input is too large to resolve even as nanoseconds.
    #[error("overflow")]
    Overflow,
}

/// The main error type for epok operations.
#[derive(Debug, Error)]
pub enum EpokError {
    /// The input token could not be resolved into an instant.
    #[error("could not parse input: {source}")]
    Parse {
        /// The trimmed token that was handed to the resolver.
        input: String,
        /// The underlying resolver failure.
        #[source]
        source: ParseError,
    },

    /// A precision name was not recognised.
    #[error("invalid precision: {0}")]
    InvalidPrecision(String),

    /// An output mode name was not recognised.
    #[error("invalid output mode: {0}")]
    InvalidOutputMode(String),

    /// The instant cannot be expressed as an `i64` count at this precision.
    #[error("timestamp out of range for {0} precision")]
    EpochOutOfRange(Precision),

    /// Input acquisition was cancelled.
    #[error("cancelled: {0}")]
    Cancelled(String),

    /// A configuration file could not be understood.
    #[error("invalid config file {}: {message}", .path.display())]
    Config {
        /// The file that was read.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EpokError {
    /// Wraps a resolver failure with the input that caused it.
    #[must_use]
    pub fn parse(input: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            input: input.into(),
            source,
        }
    }

    /// Returns the resolver failure, if this is one.
    #[must_use]
    pub fn parse_error(&self) -> Option<ParseError> {
        match self {
            Self::Parse { source, .. } => Some(*source),
            _ => None,
        }
    }
}
