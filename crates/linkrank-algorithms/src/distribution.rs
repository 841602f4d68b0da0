//! Rank distributions produced by the estimators

use crate::common::{GraphView, NodeId};
use std::collections::HashMap;

/// A probability distribution over the nodes of a graph.
///
/// Distributions returned by the estimators and the transition model are
/// non-negative and sum to 1.0 within floating-point tolerance. A value read
/// back through the optional serde `Deserialize` impl is taken as-is and is
/// not re-checked.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Distribution {
    scores: HashMap<NodeId, f64>,
}

impl Distribution {
    /// Map dense scores back to node identifiers
    pub(crate) fn from_dense(view: &GraphView, scores: Vec<f64>) -> Self {
        let mut result = HashMap::with_capacity(view.node_count);
        for (idx, score) in scores.into_iter().enumerate() {
            result.insert(view.index_to_node[idx].clone(), score);
        }
        Self { scores: result }
    }

    pub(crate) fn from_scores(scores: HashMap<NodeId, f64>) -> Self {
        Self { scores }
    }

    pub fn get(&self, node: &str) -> Option<f64> {
        self.scores.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(node, &score)| (node.as_str(), score))
    }

    /// Sum of all scores (1.0 up to rounding for any estimator output)
    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    /// Largest per-node absolute difference between two distributions.
    ///
    /// A node present on only one side is compared against 0.
    pub fn max_abs_diff(&self, other: &Distribution) -> f64 {
        let forward = self
            .scores
            .iter()
            .map(|(node, &score)| (score - other.get(node).unwrap_or(0.0)).abs());
        let missing = other
            .scores
            .iter()
            .filter(|(node, _)| !self.scores.contains_key(*node))
            .map(|(_, &score)| score.abs());
        forward.chain(missing).fold(0.0, f64::max)
    }

    /// Nodes sorted by descending score, ties broken by name
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    pub fn into_inner(self) -> HashMap<NodeId, f64> {
        self.scores
    }
}
