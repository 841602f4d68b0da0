//! Rank computation configuration
//!
//! Loaded from YAML (every field optional) or built in code.

use linkrank_algorithms::{
    PageRankConfig, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES, DEFAULT_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Knobs for both estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping (usually 0.85)
    pub damping_factor: f64,
    /// Random-walk length for the sampling estimator
    pub samples: usize,
    /// Convergence threshold for the iterative estimator
    pub threshold: f64,
    /// Iteration cap for the iterative estimator
    pub max_iterations: usize,
    /// Seed for the random walk; unseeded walks use the thread RNG
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl RankConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: RankConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading rank config from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.samples == 0 {
            return Err(ConfigError::Invalid(
                "samples must be at least 1".to_string(),
            ));
        }
        self.pagerank()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Solver settings
    pub fn pagerank(&self) -> PageRankConfig {
        PageRankConfig {
            damping_factor: self.damping_factor,
            threshold: self.threshold,
            max_iterations: self.max_iterations,
        }
    }
}
