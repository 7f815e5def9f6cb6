//! Core value types for epok.
//!
//! This module contains the types shared by every other module:
//! - The resolved instant produced by the resolver
//! - The precision vocabulary
//! - The output mode vocabulary

mod instant;
mod output_mode;
mod precision;

pub use instant::{ResolvedInstant, NANOS_PER_SECOND};
pub use output_mode::OutputMode;
pub use precision::Precision;
