//! TOML configuration for the CLI and embedding applications.
//!
//! ```toml
//! [matcher]
//! precision = 5
//!
//! [format]
//! decimals = 4
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::codec::DEFAULT_DECIMALS;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub matcher: MatcherConfig,
    pub format: FormatConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MatcherConfig {
    /// Fraction digits compared when matching coordinate text and points
    pub precision: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_DECIMALS,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FormatConfig {
    /// Fraction digits used when rendering coordinates
    pub decimals: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        Ok(config)
    }
}
