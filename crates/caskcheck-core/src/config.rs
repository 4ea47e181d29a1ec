//! Check configuration (`caskcheck.toml`) parsing and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::constants;

/// Conventional configuration file name.
pub const CONFIG_FILE: &str = "caskcheck.toml";

/// Errors that can occur when loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("on-system-methods must not be empty")]
    NoConditionalBlocks,

    #[error("invalid conditional block name '{0}': must start with `on_`")]
    InvalidConditionalBlock(String),

    #[error("livecheck name '{0}' is also listed as a conditional block")]
    LivecheckIsConditional(String),
}

/// The complete caskcheck.toml configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Settings of the `Cask/NoOverrides` check.
    #[serde(default, rename = "no-overrides")]
    pub no_overrides: NoOverridesConfig,
}

/// Settings of the `Cask/NoOverrides` check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct NoOverridesConfig {
    /// Whether the check runs at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Names of the conditional blocks.
    #[serde(default = "default_on_system_methods")]
    pub on_system_methods: Vec<String>,

    /// Name of the block whose stanzas never count as overrides.
    #[serde(default = "default_livecheck")]
    pub livecheck: String,
}

fn default_enabled() -> bool {
    true
}

fn default_on_system_methods() -> Vec<String> {
    constants::ON_SYSTEM_METHODS
        .iter()
        .map(|name| (*name).to_string())
        .collect()
}

fn default_livecheck() -> String {
    constants::LIVECHECK.to_string()
}

impl Default for NoOverridesConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            on_system_methods: default_on_system_methods(),
            livecheck: default_livecheck(),
        }
    }
}

impl NoOverridesConfig {
    /// Validate the settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.on_system_methods.is_empty() {
            return Err(ConfigError::NoConditionalBlocks);
        }
        if let Some(name) = self
            .on_system_methods
            .iter()
            .find(|name| !name.starts_with("on_") || name.len() == 3)
        {
            return Err(ConfigError::InvalidConditionalBlock(name.clone()));
        }
        if self.on_system_methods.contains(&self.livecheck) {
            return Err(ConfigError::LivecheckIsConditional(self.livecheck.clone()));
        }
        Ok(())
    }
}

impl Config {
    /// Load and validate a configuration from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        content.parse()
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.no_overrides.validate()
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
