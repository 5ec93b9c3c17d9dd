//! Stemmer configuration: defaults, environment overrides, JSON files.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable enabling the per-step trace.
pub const ENV_TRACE: &str = "PORTER2_TRACE";
/// Environment variable selecting the rule set.
pub const ENV_VARIANT: &str = "PORTER2_VARIANT";
/// Environment variable selecting how R1/R2 follow edits.
pub const ENV_REGIONS: &str = "PORTER2_REGIONS";

/// Which rule set the stemmer runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Pre-processing plus steps 0 through 4. Marked `Y` is left in the output.
    #[default]
    Distilled,
    /// The published 2005 rule set: exceptional forms, step 5, `Y` lowered back.
    Snowball,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Distilled => "distilled",
            Variant::Snowball => "snowball",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distilled" => Ok(Variant::Distilled),
            "snowball" | "porter2" => Ok(Variant::Snowball),
            other => Err(Error::Config(format!("unknown variant: {:?}", other))),
        }
    }
}

/// How region boundaries behave while the word is being edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionMode {
    /// Compute R1/R2 once after pre-processing; clamp to the word length on read.
    #[default]
    Fixed,
    /// Derive R1/R2 from the current word on every region access.
    Recompute,
}

impl RegionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionMode::Fixed => "fixed",
            RegionMode::Recompute => "recompute",
        }
    }
}

impl fmt::Display for RegionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(RegionMode::Fixed),
            "recompute" => Ok(RegionMode::Recompute),
            other => Err(Error::Config(format!("unknown region mode: {:?}", other))),
        }
    }
}

/// Options recognized by a stemming call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Emit the word's state after each step as `tracing` debug events.
    pub trace: bool,
    /// Rule set to run.
    pub variant: Variant,
    /// Region boundary policy.
    pub regions: RegionMode,
}

impl StemmerConfig {
    /// Defaults with tracing switched on.
    pub fn traced() -> Self {
        Self {
            trace: true,
            ..Self::default()
        }
    }

    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, starting from the defaults.
    /// Unset keys keep their default; unrecognized values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TRACE) {
            config.trace = parse_flag(ENV_TRACE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_VARIANT) {
            config.variant = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_REGIONS) {
            config.regions = raw.parse()?;
        }

        debug!(
            trace = config.trace,
            variant = %config.variant,
            regions = %config.regions,
            "Stemmer configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        debug!("Loaded stemmer configuration from {}", path.display());
        Ok(config)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::Config(format!("{}: expected a boolean, got {:?}", key, other))),
    }
}
