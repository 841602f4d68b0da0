//! Random-surfer transition model
//!
//! With probability `d` the surfer follows one of the current node's links,
//! chosen uniformly; with probability `1 - d` it jumps to any node uniformly.
//! A sink has no links to follow, so its next step is uniform over all nodes.

use crate::common::GraphView;
use crate::distribution::Distribution;
use crate::error::{check_damping, RankError, RankResult};

/// Fill `row` with the transition probabilities out of node `idx`.
///
/// `row` must have exactly `view.node_count()` entries. Inputs are assumed
/// validated by the caller.
pub fn transition_row(view: &GraphView, idx: usize, damping_factor: f64, row: &mut [f64]) {
    let n = view.node_count as f64;
    let out_degree = view.out_degree(idx);

    if out_degree == 0 {
        row.fill(1.0 / n);
        return;
    }

    row.fill((1.0 - damping_factor) / n);
    let share = damping_factor / out_degree as f64;
    for &target in view.successors(idx) {
        row[target] += share;
    }
}

/// Probability distribution over which node the surfer visits after `current_node`.
pub fn transition(
    view: &GraphView,
    current_node: &str,
    damping_factor: f64,
) -> RankResult<Distribution> {
    if view.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    check_damping(damping_factor)?;
    let idx = view
        .index_of(current_node)
        .ok_or_else(|| RankError::NodeNotFound(current_node.to_string()))?;

    let mut row = vec![0.0; view.node_count];
    transition_row(view, idx, damping_factor, &mut row);
    Ok(Distribution::from_dense(view, row))
}
