pub mod common;
pub mod distribution;
pub mod error;
pub mod pagerank;
pub mod sampling;
pub mod transition;

pub use common::{GraphView, NodeId};
pub use distribution::Distribution;
pub use error::{ErrorKind, RankError, RankResult};
pub use pagerank::{
    iterate_rank, solve, PageRankConfig, SolverReport, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS,
    DEFAULT_THRESHOLD,
};
pub use sampling::{sample_rank, sample_rank_with_rng, DEFAULT_SAMPLES};
pub use transition::{transition, transition_row};
