//! Demo configuration management.
//!
//! Handles loading of the demo configuration from a TOML file with
//! environment variable override support.

use serde::Deserialize;
use std::any::type_name;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use valuekit_core::rng::{DEMO_HIGH, DEMO_LOW};

/// Configuration file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "valuekit.toml";

/// Environment variable overriding `seed`
pub const ENV_SEED: &str = "VALUEKIT_SEED";
/// Environment variable overriding `low`
pub const ENV_LOW: &str = "VALUEKIT_LOW";
/// Environment variable overriding `high`
pub const ENV_HIGH: &str = "VALUEKIT_HIGH";
/// Environment variable overriding `log_level`
pub const ENV_LOG_LEVEL: &str = "VALUEKIT_LOG_LEVEL";

/// Recognised `log_level` values
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Generator seed; `None` draws one from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Inclusive lower bound of the random integer draw
    #[serde(default = "default_low")]
    pub low: i32,

    /// Inclusive upper bound of the random integer draw
    #[serde(default = "default_high")]
    pub high: i32,

    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_low() -> i32 {
    DEMO_LOW
}

fn default_high() -> i32 {
    DEMO_HIGH
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            low: default_low(),
            high: default_high(),
            log_level: default_log_level(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Every unparsable numeric value is reported; none is silently dropped.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();

        if let Some(seed) = parse_override(&lookup, ENV_SEED, &mut errors) {
            self.seed = Some(seed);
        }

        if let Some(low) = parse_override(&lookup, ENV_LOW, &mut errors) {
            self.low = low;
        }

        if let Some(high) = parse_override(&lookup, ENV_HIGH, &mut errors) {
            self.high = high;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = log_level;
        }

        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.low > self.high {
            errors.push(format!(
                "low ({}) must not exceed high ({})",
                self.low, self.high
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Resolve the configuration for a run
    ///
    /// An explicit `path` must exist; only the implicit [`DEFAULT_CONFIG_PATH`]
    /// may be absent, in which case defaults are used. Overrides from `lookup`
    /// are applied on top of the file, then the result is validated.
    pub fn resolve(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH))?,
        };
        let config = config.with_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }
}

/// Parse `key` from `lookup`, recording a message in `errors` on failure
fn parse_override<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(format!("Invalid {} '{}': not a valid {}", key, raw, type_name::<T>()));
            None
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
