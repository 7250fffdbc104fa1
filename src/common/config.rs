//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Driver settings
    #[serde(default)]
    pub driver: DriverConfig,

    /// Bounds for the scenario 1 draws
    #[serde(default)]
    pub random: RandomConfig,
}

/// Driver settings
#[derive(Debug, Deserialize, Default)]
pub struct DriverConfig {
    /// Fixed seed for the random draws; fresh entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,

    /// Run scenario 6, which aborts with a division-by-zero error
    #[serde(default)]
    pub enable_exception: bool,
}

/// Inclusive bounds for the random draws
///
/// Draws are `u32` and summed as `u64`, so any accepted range is safe to add.
#[derive(Debug, Deserialize)]
pub struct RandomConfig {
    #[serde(default = "default_min")]
    pub min: u32,

    #[serde(default = "default_max")]
    pub max: u32,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
        }
    }
}

fn default_min() -> u32 {
    1
}
fn default_max() -> u32 {
    100
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.random.min > self.random.max {
            return Err(Error::Config(format!(
                "random.min ({}) must not exceed random.max ({})",
                self.random.min, self.random.max
            )));
        }
        Ok(())
    }
}
