//! # Epok
//!
//! Fuzzy parsing of Unix epoch timestamps.
//!
//! Given a bare integer such as `1751074598` or `1751074598123456`, epok
//! guesses whether it counts seconds, milliseconds, microseconds or
//! nanoseconds since the Unix epoch and resolves it into an exact
//! `(seconds, nanoseconds)` pair. Around that core it provides:
//!
//! - **Precision vocabulary**: one [`Precision`] type for inferred and
//!   requested units, with the shorthands users type (`ms`, `micros`, ...)
//! - **Epoch generation**: rendering an instant at a chosen precision
//! - **Cancellable input**: reading a token from stdin (or any async reader)
//!   under a cooperative [`CancellationToken`]
//! - **Configuration**: output mode and default precision from a file and
//!   `EPOK_*` environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use epok::resolver;
//!
//! let instant = resolver::parse("1751074598123").unwrap();
//! assert_eq!(instant.seconds, 1_751_074_598);
//! assert_eq!(instant.nanoseconds, 123_000_000);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cancellation;
pub mod config;
pub mod core;
pub mod epoch;
pub mod errors;
pub mod input;
pub mod observability;
pub mod resolver;

pub use crate::cancellation::CancellationToken;
pub use crate::core::{OutputMode, Precision, ResolvedInstant};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cancellation::CancellationToken;
    pub use crate::config::EpokConfig;
    pub use crate::core::{OutputMode, Precision, ResolvedInstant};
    pub use crate::epoch::{format_epoch, EpochStamp};
    pub use crate::errors::{EpokError, ParseError};
    pub use crate::input::{read_input, resolve_arg, resolve_input};
    pub use crate::resolver::{classify, parse, parse_with_precision, resolve_int};
}
