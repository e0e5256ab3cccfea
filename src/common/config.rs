//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::Result;
use crate::output::OutputFormat;
use crate::sequence::{Strategy, DEFAULT_RECURSION_DEPTH, MAX_RECURSION_DEPTH};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Default settings
    #[serde(default)]
    pub defaults: Defaults,

    /// Resource limits
    #[serde(default)]
    pub limits: Limits,
}

/// Default settings, overridden by command-line flags
#[derive(Debug, Deserialize, Default)]
pub struct Defaults {
    /// Strategy used when `--strategy` is not given
    #[serde(default)]
    pub strategy: Strategy,

    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

/// Resource limits
#[derive(Debug, Deserialize)]
pub struct Limits {
    /// Maximum number of terms the recursive strategy will build
    #[serde(default = "default_recursion_depth")]
    pub recursion_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            recursion_depth: default_recursion_depth(),
        }
    }
}

fn default_recursion_depth() -> usize {
    DEFAULT_RECURSION_DEPTH
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config: Self =
            toml::from_str(&content).map_err(|e| super::Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Reject values that would be unsafe to honor
    fn validate(&self) -> Result<()> {
        if self.limits.recursion_depth > MAX_RECURSION_DEPTH {
            return Err(super::Error::ConfigParse(format!(
                "limits.recursion_depth = {} exceeds the maximum of {}",
                self.limits.recursion_depth, MAX_RECURSION_DEPTH
            )));
        }
        Ok(())
    }
}
