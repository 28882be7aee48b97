//! Configuration handling.

use crate::error::ConfigError;
use crate::search::CloSpan;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mining configuration
    pub mining: MiningConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Log level for the command line tool
    pub log_level: String,
}

/// Mining configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum support for patterns
    pub min_support: usize,
    /// Maximum pattern length, unbounded when absent
    pub max_length: Option<usize>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where closed patterns are written
    pub path: PathBuf,
    /// Whether to write the CSV file at all
    pub write_csv: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 2,
            max_length: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("result_clospan.csv"),
            write_csv: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mining: MiningConfig::default(),
            output: OutputConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from environment variables (with prefix)
    ///
    /// A value that does not parse is rejected, never replaced by the default.
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var(format!("{}_MIN_SUPPORT", prefix)) {
            config.mining.min_support = parse_env("MIN_SUPPORT", &value)?;
        }

        if let Ok(value) = std::env::var(format!("{}_MAX_LENGTH", prefix)) {
            config.mining.max_length = Some(parse_env("MAX_LENGTH", &value)?);
        }

        if let Ok(path) = std::env::var(format!("{}_OUTPUT", prefix)) {
            config.output.path = PathBuf::from(path);
        }

        if let Ok(level) = std::env::var(format!("{}_LOG_LEVEL", prefix)) {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mining.min_support == 0 {
            return Err(ConfigError::Validation(
                "Minimum support must be at least 1".to_string(),
            ));
        }

        if self.mining.max_length == Some(0) {
            return Err(ConfigError::Validation(
                "Maximum pattern length must be at least 1".to_string(),
            ));
        }

        if self.output.write_csv && self.output.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "Output path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the miner described by the mining section
    pub fn miner(&self) -> CloSpan {
        let miner = CloSpan::new(self.mining.min_support);
        match self.mining.max_length {
            Some(length) => miner.max_length(length),
            None => miner,
        }
    }
}

fn parse_env(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{} must be a positive integer, got `{}`", key, value)))
}
