//! Output mode vocabulary.

use crate::errors::EpokError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a rendered result should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Styled table output for interactive terminals.
    Pretty,
    /// Plain tab-aligned text.
    Simple,
    /// A single JSON document.
    Json,
}

impl Default for OutputMode {
    fn default() -> Self {
        Self::Pretty
    }
}

impl OutputMode {
    /// Returns the mode to actually use for a destination.
    ///
    /// Styled output is downgraded to `Simple` when the destination is not a terminal.
    #[must_use]
    pub const fn effective(self, is_terminal: bool) -> Self {
        match self {
            Self::Pretty if !is_terminal => Self::Simple,
            other => other,
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Simple => write!(f, "simple"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = EpokError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "p" => Ok(Self::Pretty),
            "simple" | "s" => Ok(Self::Simple),
            "json" | "j" => Ok(Self::Json),
            _ => Err(EpokError::InvalidOutputMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_shorthands() {
        assert_eq!("p".parse::<OutputMode>().unwrap(), OutputMode::Pretty);
        assert_eq!("s".parse::<OutputMode>().unwrap(), OutputMode::Simple);
        assert_eq!("j".parse::<OutputMode>().unwrap(), OutputMode::Json);
        assert_eq!("JSON".parse::<OutputMode>().unwrap(), OutputMode::Json);
    }

    #[test]
    fn test_output_mode_rejects_unknown() {
        assert!(matches!(
            "yaml".parse::<OutputMode>(),
            Err(EpokError::InvalidOutputMode(_))
        ));
    }

    #[test]
    fn test_pretty_downgrades_off_terminal() {
        assert_eq!(OutputMode::Pretty.effective(false), OutputMode::Simple);
        assert_eq!(OutputMode::Pretty.effective(true), OutputMode::Pretty);
        assert_eq!(OutputMode::Json.effective(false), OutputMode::Json);
        assert_eq!(OutputMode::Simple.effective(true), OutputMode::Simple);
    }

    #[test]
    fn test_output_mode_display() {
        assert_eq!(OutputMode::default().to_string(), "pretty");
        assert_eq!(OutputMode::Json.to_string(), "json");
    }
}
