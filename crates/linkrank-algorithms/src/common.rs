//! Shared utilities for the rank estimators
//!
//! Provides a read-only, index-based view of a link graph for algorithm execution.

use crate::error::{RankError, RankResult};
use std::collections::{HashMap, HashSet};

/// Node Identifier type (an opaque page name)
pub type NodeId = String;

/// A dense, integer-indexed view of the link graph using Compressed Sparse Row (CSR) format.
///
/// Every link target is itself a node of the view and no node links to itself;
/// [`GraphView::from_links`] enforces both before handing a view out, and the
/// fields are crate-private so the view cannot be altered afterwards.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub(crate) node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub(crate) index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub(crate) node_to_index: HashMap<NodeId, usize>,

    /// Outgoing links CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub(crate) out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub(crate) out_targets: Vec<usize>,

    /// Incoming links CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub(crate) in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub(crate) in_sources: Vec<usize>,
}

impl GraphView {
    /// Build a view from `(node, out-links)` pairs.
    ///
    /// Node order follows the order in which nodes appear as keys. Repeated
    /// targets collapse into a single link. Fails with [`RankError::SelfLink`]
    /// or [`RankError::DanglingLink`] when the adjacency is not closed.
    pub fn from_links<I, N, L, T>(adjacency: I) -> RankResult<Self>
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<NodeId>,
        L: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        let mut index_to_node = Vec::new();
        let mut node_to_index: HashMap<NodeId, usize> = HashMap::new();
        let mut raw_links: Vec<Vec<NodeId>> = Vec::new();

        for (node, links) in adjacency {
            let node = node.into();
            let links: Vec<NodeId> = links.into_iter().map(Into::into).collect();
            match node_to_index.get(&node) {
                Some(&idx) => raw_links[idx].extend(links),
                None => {
                    node_to_index.insert(node.clone(), index_to_node.len());
                    index_to_node.push(node);
                    raw_links.push(links);
                }
            }
        }

        // 1. Resolve targets to indices, rejecting anything outside the graph
        let node_count = index_to_node.len();
        let mut outgoing: Vec<Vec<usize>> = Vec::with_capacity(node_count);
        for (u_idx, links) in raw_links.into_iter().enumerate() {
            let mut seen = HashSet::with_capacity(links.len());
            let mut targets = Vec::with_capacity(links.len());
            for target in links {
                let v_idx = match node_to_index.get(&target) {
                    Some(&v_idx) => v_idx,
                    None => {
                        return Err(RankError::DanglingLink {
                            from: index_to_node[u_idx].clone(),
                            to: target,
                        })
                    }
                };
                if v_idx == u_idx {
                    return Err(RankError::SelfLink(target));
                }
                if seen.insert(v_idx) {
                    targets.push(v_idx);
                }
            }
            outgoing.push(targets);
        }

        // 2. Transpose for predecessor lookups
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for (u_idx, targets) in outgoing.iter().enumerate() {
            for &v_idx in targets {
                incoming[v_idx].push(u_idx);
            }
        }

        Ok(Self::from_adjacency_list(
            index_to_node,
            node_to_index,
            outgoing,
            incoming,
        ))
    }

    /// Flatten already-resolved adjacency lists into CSR form.
    fn from_adjacency_list(
        index_to_node: Vec<NodeId>,
        node_to_index: HashMap<NodeId, usize>,
        outgoing: Vec<Vec<usize>>,
        incoming: Vec<Vec<usize>>,
    ) -> Self {
        let node_count = index_to_node.len();
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::new();

        out_offsets.push(0);
        for neighbors in outgoing {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());
        }

        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        }
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Node identifiers in dense index order
    pub fn nodes(&self) -> &[NodeId] {
        &self.index_to_node
    }

    /// Get the dense index of a node
    pub fn index_of(&self, node: &str) -> Option<usize> {
        self.node_to_index.get(node).copied()
    }

    /// Get the node stored at a dense index, if the index is in range
    pub fn get_node(&self, idx: usize) -> Option<&str> {
        self.index_to_node.get(idx).map(String::as_str)
    }

    /// Get the node stored at a dense index
    ///
    /// The index-based queries below expect `idx < node_count()` and panic
    /// otherwise, like slice indexing. Use [`GraphView::get_node`] for a
    /// checked lookup.
    pub fn node_at(&self, idx: usize) -> &str {
        &self.index_to_node[idx]
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// A sink has no outbound links
    pub fn is_sink(&self, idx: usize) -> bool {
        self.out_degree(idx) == 0
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Total number of links
    pub fn link_count(&self) -> usize {
        self.out_targets.len()
    }
}
