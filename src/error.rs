//! Top-level error type

use crate::config::ConfigError;
use crate::graph::GraphError;
use linkrank_algorithms::RankError;
use thiserror::Error;

/// Errors surfaced by the corpus ranking entry points
#[derive(Error, Debug)]
pub enum LinkRankError {
    /// Corpus construction error
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Estimator input validation error
    #[error("Rank error: {0}")]
    Rank(#[from] RankError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type LinkRankResult<T> = Result<T, LinkRankError>;
