//! Experiment configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::Algorithm;

/// Errors from loading or validating an [`ExperimentConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Parameters for a batch of randomized matching trials.
///
/// Missing TOML keys fall back to the defaults (10 participants per
/// group, 10 runs, Gale-Shapley, random seed).
///
/// # Example
///
/// ```
/// use stable_match::engine::Algorithm;
/// use stable_match::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::new(Algorithm::Naive)
///     .with_participant_count(20)
///     .with_run_count(100)
///     .with_seed(42);
///
/// assert_eq!(config.participant_count(), 20);
/// assert_eq!(config.run_count(), 100);
/// assert_eq!(config.seed(), Some(42));
///
/// let parsed = ExperimentConfig::from_toml_str(r#"
///     algorithm = "naive"
///     participant_count = 20
///     run_count = 100
///     seed = 42
/// "#).unwrap();
/// assert_eq!(parsed, config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    algorithm: Algorithm,
    participant_count: usize,
    run_count: usize,
    seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

impl ExperimentConfig {
    /// Creates a configuration for `algorithm` with default sizes.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            participant_count: 10,
            run_count: 10,
            seed: None,
        }
    }

    /// Sets the size of each group
    pub fn with_participant_count(mut self, count: usize) -> Self {
        self.participant_count = count;
        self
    }

    /// Sets the number of trials
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Fixes the RNG seed so the experiment is reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn participant_count(&self) -> usize {
        self.participant_count
    }

    pub fn run_count(&self) -> usize {
        self.run_count
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Parses and validates a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks that the happiness scale is defined and at least one trial runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.participant_count < 2 {
            tracing::warn!(participant_count = self.participant_count, "rejected config");
            return Err(ConfigError::Invalid {
                field: "participant_count",
                reason: format!("need at least 2 per group, got {}", self.participant_count),
            });
        }
        if self.run_count == 0 {
            tracing::warn!("rejected config with zero runs");
            return Err(ConfigError::Invalid {
                field: "run_count",
                reason: "need at least one run".to_string(),
            });
        }
        Ok(())
    }
}
