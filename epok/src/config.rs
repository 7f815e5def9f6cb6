//! Configuration for epok.
//!
//! Settings come from an optional JSON file (by default `$HOME/.epok.json`)
//! and are then overridden by `EPOK_*` environment variables.

use crate::core::{OutputMode, Precision};
use crate::errors::EpokError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name looked up in the home directory.
pub const DEFAULT_FILE_NAME: &str = ".epok.json";

/// Environment variable overriding [`EpokConfig::output`].
pub const ENV_OUTPUT: &str = "EPOK_OUTPUT";

/// Environment variable overriding [`EpokConfig::precision`].
pub const ENV_PRECISION: &str = "EPOK_PRECISION";

/// User-facing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EpokConfig {
    /// Requested output mode.
    pub output: OutputMode,
    /// Precision used when generating epochs.
    pub precision: Precision,
}

impl EpokConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output mode.
    #[must_use]
    pub const fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Sets the epoch precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Loads a configuration file.
    pub fn load(path: &Path) -> Result<Self, EpokError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text).map_err(|e| EpokError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        info!(path = %path.display(), "Using config file");
        Ok(config)
    }

    /// Returns `$HOME/.epok.json`, if a home directory is known.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| PathBuf::from(home).join(DEFAULT_FILE_NAME))
    }

    /// Finds and loads the configuration file.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present and defaults apply otherwise.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, EpokError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies `EPOK_*` overrides using `lookup` to read variables.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, EpokError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_OUTPUT) {
            self.output = value.parse()?;
        }
        if let Some(value) = lookup(ENV_PRECISION) {
            self.precision = value.parse()?;
        }
        Ok(self)
    }

    /// Applies `EPOK_*` overrides from the process environment.
    pub fn from_env(self) -> Result<Self, EpokError> {
        self.apply_env(|key| std::env::var(key).ok())
    }
}
