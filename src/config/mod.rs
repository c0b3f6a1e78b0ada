//! Configuration management
//!
//! Loads the speed estimation settings from a TOML document:
//!
//! ```toml
//! [speed]
//! lp_norm = 2.0
//! should_smooth = true
//! smooth_halflife = 50.0
//! use_linear = true
//! ```
//!
//! Every key is optional; missing keys take the defaults of
//! [`SpeedCalculatorConfig`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::speed::SpeedCalculator;

pub mod types;

pub use types::SpeedCalculatorConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Speed calculator configuration
    #[serde(default)]
    pub speed: SpeedCalculatorConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// Applies the same checks as [`SpeedCalculator::init`], so a config
    /// that validates here is accepted there.
    pub fn validate(&self) -> Result<()> {
        SpeedCalculator::validate_config(&self.speed).context("Invalid [speed] section")?;
        Ok(())
    }

    /// Serialize configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
