//! Rank estimation over a link corpus
//!
//! The estimators live in the `linkrank-algorithms` crate.
//! This module provides the integration/adapter layer.

use crate::config::RankConfig;
use crate::error::LinkRankResult;
use crate::graph::Corpus;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

// Re-export algorithms
pub use linkrank_algorithms::{
    iterate_rank, sample_rank, sample_rank_with_rng, solve, transition, Distribution, GraphView,
    PageRankConfig, RankError, SolverReport,
};

/// Build a GraphView from the corpus for algorithm execution
pub fn build_view(corpus: &Corpus) -> LinkRankResult<GraphView> {
    let view = GraphView::from_links(
        corpus
            .iter()
            .map(|(page, links)| (page.as_str(), links.iter().map(|l| l.as_str()))),
    )?;
    Ok(view)
}

/// Both estimates for one corpus
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    /// Random-walk estimate
    pub sampled: Distribution,
    /// Iterative estimate
    pub iterated: Distribution,
    /// Solver passes performed
    pub iterations: usize,
    /// Whether the solver met its threshold before the iteration cap
    pub converged: bool,
    /// Largest per-node gap between the two estimates
    pub max_disagreement: f64,
}

/// Run the sampling and iterative estimators side by side.
///
/// The estimators share the read-only view and run on the rayon pool.
pub fn rank_corpus(corpus: &Corpus, config: &RankConfig) -> LinkRankResult<RankReport> {
    config.validate()?;
    let view = build_view(corpus)?;

    info!(
        "Ranking {} pages with {} links (damping {}, {} samples)",
        view.node_count(),
        view.link_count(),
        config.damping_factor,
        config.samples
    );

    let solver_config = config.pagerank();
    let (sampled, solved) = rayon::join(
        || match config.seed {
            Some(seed) => sample_rank_with_rng(
                &view,
                config.damping_factor,
                config.samples,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => sample_rank(&view, config.damping_factor, config.samples),
        },
        || solve(&view, &solver_config),
    );
    let sampled = sampled?;
    let solved = solved?;

    let max_disagreement = sampled.max_abs_diff(&solved.ranks);
    info!(
        "Solver finished after {} iterations; estimates differ by at most {:.4}",
        solved.iterations, max_disagreement
    );

    Ok(RankReport {
        sampled,
        iterated: solved.ranks,
        iterations: solved.iterations,
        converged: solved.converged,
        max_disagreement,
    })
}
