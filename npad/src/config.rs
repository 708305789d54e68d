//! Optional JSON5 configuration file.
//!
//! ```json5
//! {
//!   // jitter scale for the interior midpoints
//!   roughness: 0.35,
//!   octaves: true,
//!   seed: 1234,
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file read when `--config` is not given. Missing is fine.
pub const DEFAULT_CONFIG_PATH: &str = "npad.json5";

/// Values read from the config file. Unset fields fall back to the built-in
/// defaults, command line flags override everything.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NpadConfig {
    /// Jitter scale for the interior midpoints.
    pub roughness: Option<f64>,
    /// Blend in lower resolution octaves.
    pub octaves: Option<bool>,
    /// Seed for reproducible output.
    pub seed: Option<u32>,
    /// Generate in single precision.
    pub single_precision: Option<bool>,
}

impl NpadConfig {
    /// Parses a config from JSON5 text.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json5::from_str(text).context("Failed to parse config")
    }

    /// Loads the config at `path`, or [`DEFAULT_CONFIG_PATH`] when `path` is `None`.
    ///
    /// An explicitly requested file must exist; a missing default file yields the
    /// default config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config =
            Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }
}
