//! Random-walk PageRank estimation
//!
//! Walks the Markov chain defined by the transition model and reports how
//! often each node was visited. Visit frequencies converge to the stationary
//! distribution as the walk grows longer.

use crate::common::GraphView;
use crate::distribution::Distribution;
use crate::error::{check_damping, RankError, RankResult};
use crate::transition::transition_row;
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::Rng;
use tracing::debug;

/// Default walk length
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Estimate PageRank from a random walk of `sample_count` steps.
pub fn sample_rank(
    view: &GraphView,
    damping_factor: f64,
    sample_count: usize,
) -> RankResult<Distribution> {
    sample_rank_with_rng(view, damping_factor, sample_count, &mut rand::thread_rng())
}

/// Same as [`sample_rank`], drawing from a caller-supplied RNG.
pub fn sample_rank_with_rng<R: Rng + ?Sized>(
    view: &GraphView,
    damping_factor: f64,
    sample_count: usize,
    rng: &mut R,
) -> RankResult<Distribution> {
    if view.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    if sample_count < 1 {
        return Err(RankError::ZeroSamples);
    }
    check_damping(damping_factor)?;

    let n = view.node_count;
    let mut visits = vec![0usize; n];
    let mut row = vec![0.0; n];

    let mut current = rng.gen_range(0..n);
    debug!(
        "Sampling {} steps over {} nodes starting at {}",
        sample_count,
        n,
        view.node_at(current)
    );

    for _ in 0..sample_count {
        visits[current] += 1;

        transition_row(view, current, damping_factor, &mut row);
        current = draw_next(view, current, &row, rng)?;
    }

    let total = sample_count as f64;
    let scores = visits.into_iter().map(|count| count as f64 / total).collect();
    Ok(Distribution::from_dense(view, scores))
}

/// Draw the next node proportionally to the whole row, not the most likely target.
///
/// Rows from `transition_row` always have a positive total; anything else
/// (all zeros, negative or NaN entries) is reported against the node `from`.
fn draw_next<R: Rng + ?Sized>(
    view: &GraphView,
    from: usize,
    row: &[f64],
    rng: &mut R,
) -> RankResult<usize> {
    let weights = WeightedIndex::new(row)
        .map_err(|_| RankError::InvalidWeights(view.node_at(from).to_string()))?;
    Ok(weights.sample(rng))
}
