//! Configuration system for giftdraw.
//!
//! Load draw configuration from TOML or YAML files to control the roster
//! size, randomness, search budget and token shape without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use giftdraw_config::DrawConfig;
//! use std::time::Duration;
//!
//! let config = DrawConfig::from_toml_str(r#"
//!     participant_count = 8
//!     attempts = 3
//!
//!     [search]
//!     node_limit = 50000
//!     seconds_spent_limit = 2
//!
//!     [token]
//!     random_length = 16
//! "#).unwrap();
//!
//! assert_eq!(config.participant_count, 8);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(2)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use giftdraw_config::DrawConfig;
//!
//! let config = DrawConfig::load("giftdraw.toml").unwrap_or_default();
//! assert_eq!(config.participant_count, 13);
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use giftdraw_core::DEFAULT_PARTICIPANT_COUNT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default node-visit budget for one search.
pub const DEFAULT_NODE_LIMIT: u64 = 1_000_000;

/// Default length of the random part of a token.
pub const DEFAULT_TOKEN_RANDOM_LENGTH: usize = 13;

/// Shortest random part accepted for a token.
pub const MIN_TOKEN_RANDOM_LENGTH: usize = 8;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main draw configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DrawConfig {
    /// Exact number of participants a draw requires.
    #[serde(default = "default_participant_count")]
    pub participant_count: usize,

    /// Environment mode affecting reproducibility and assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed used in reproducible mode.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Independent shuffles the draw pipeline tries before giving up.
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    /// Search budget.
    #[serde(default)]
    pub search: SearchConfig,

    /// Token generation.
    #[serde(default)]
    pub token: TokenConfig,

    /// Draw archive location.
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_participant_count() -> usize {
    DEFAULT_PARTICIPANT_COUNT
}

fn default_attempts() -> u32 {
    1
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            participant_count: DEFAULT_PARTICIPANT_COUNT,
            environment_mode: EnvironmentMode::default(),
            random_seed: None,
            attempts: default_attempts(),
            search: SearchConfig::default(),
            token: TokenConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl DrawConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no draw could run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.participant_count < 2 {
            return Err(ConfigError::Invalid(format!(
                "participant_count must be at least 2, got {}",
                self.participant_count
            )));
        }
        if self.attempts == 0 {
            return Err(ConfigError::Invalid("attempts must be at least 1".into()));
        }
        if self.token.random_length < MIN_TOKEN_RANDOM_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "token.random_length must be at least {}, got {}",
                MIN_TOKEN_RANDOM_LENGTH, self.token.random_length
            )));
        }
        Ok(())
    }

    /// Sets the required participant count.
    pub fn with_participant_count(mut self, count: usize) -> Self {
        self.participant_count = count;
        self
    }

    /// Sets the random seed and switches to reproducible mode.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self.environment_mode = EnvironmentMode::Reproducible;
        self
    }

    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the node-visit budget.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.search.node_limit = Some(limit);
        self
    }

    /// Sets the wall-clock budget in seconds.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.search.seconds_spent_limit = Some(seconds);
        self
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Returns the search time limit, if configured.
    ///
    /// Convenience method that delegates to `search.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.search.time_limit()
    }

    /// Seed to use for the search, if any.
    ///
    /// Only reproducible and full-assert modes honour `random_seed`;
    /// reproducible mode falls back to seed 0.
    pub fn effective_seed(&self) -> Option<u64> {
        match self.environment_mode {
            EnvironmentMode::NonReproducible => None,
            EnvironmentMode::Reproducible => Some(self.random_seed.unwrap_or(0)),
            EnvironmentMode::FullAssert => self.random_seed,
        }
    }
}

/// Environment mode affecting draw behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Fresh OS entropy for every search.
    #[default]
    NonReproducible,

    /// Deterministic shuffles from `random_seed`.
    Reproducible,

    /// Re-checks every finished draw against its invariants.
    FullAssert,
}

impl EnvironmentMode {
    pub fn is_asserted(&self) -> bool {
        matches!(self, EnvironmentMode::FullAssert)
    }
}

/// Search budget configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Maximum nodes visited per search.
    #[serde(default = "default_node_limit")]
    pub node_limit: Option<u64>,

    /// Maximum seconds per search.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds per search.
    pub millis_spent_limit: Option<u64>,
}

fn default_node_limit() -> Option<u64> {
    Some(DEFAULT_NODE_LIMIT)
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_limit: default_node_limit(),
            seconds_spent_limit: None,
            millis_spent_limit: None,
        }
    }
}

impl SearchConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self
            .seconds_spent_limit
            .unwrap_or(0)
            .saturating_mul(1000)
            .saturating_add(self.millis_spent_limit.unwrap_or(0));
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }

    /// Removes every budget, leaving the search unbounded.
    pub fn unbounded() -> Self {
        Self {
            node_limit: None,
            seconds_spent_limit: None,
            millis_spent_limit: None,
        }
    }
}

/// Token generation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TokenConfig {
    /// Length of the random suffix appended to the timestamp.
    #[serde(default = "default_random_length")]
    pub random_length: usize,
}

fn default_random_length() -> usize {
    DEFAULT_TOKEN_RANDOM_LENGTH
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            random_length: DEFAULT_TOKEN_RANDOM_LENGTH,
        }
    }
}

/// Draw archive configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreConfig {
    /// JSON file holding saved draws.
    pub path: Option<PathBuf>,
}
