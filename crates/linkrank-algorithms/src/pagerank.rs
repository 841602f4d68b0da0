//! Iterative PageRank solver
//!
//! Applies the PageRank recurrence to every node at once until no node's
//! rank moves by more than the convergence threshold.

use super::common::GraphView;
use super::distribution::Distribution;
use super::error::{check_damping, RankError, RankResult};
use tracing::{debug, warn};

/// Default damping factor
pub const DEFAULT_DAMPING: f64 = 0.85;
/// Default convergence threshold (maximum per-node change between passes)
pub const DEFAULT_THRESHOLD: f64 = 0.001;
/// Default iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// PageRank configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Stop once the largest per-node change falls below this value
    pub threshold: f64,
    /// Hard cap on the number of passes
    pub max_iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> RankResult<()> {
        check_damping(self.damping_factor)?;
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(RankError::InvalidThreshold(self.threshold));
        }
        if self.max_iterations == 0 {
            return Err(RankError::ZeroIterations);
        }
        Ok(())
    }
}

/// Outcome of a solver run
#[derive(Debug, Clone)]
pub struct SolverReport {
    pub ranks: Distribution,
    /// Number of passes performed
    pub iterations: usize,
    /// Largest per-node change in the final pass
    pub max_delta: f64,
    /// Whether `max_delta` dropped below the threshold before the cap
    pub converged: bool,
}

/// Calculate PageRank with the default threshold and iteration cap
pub fn iterate_rank(view: &GraphView, damping_factor: f64) -> RankResult<Distribution> {
    let config = PageRankConfig {
        damping_factor,
        ..PageRankConfig::default()
    };
    solve(view, &config).map(|report| report.ranks)
}

/// Calculate PageRank for the graph view
pub fn solve(view: &GraphView, config: &PageRankConfig) -> RankResult<SolverReport> {
    if view.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    config.validate()?;

    let n = view.node_count;
    let n_f64 = n as f64;
    let d = config.damping_factor;
    let base_score = (1.0 - d) / n_f64;

    // 1. Initialize scores
    let mut scores = vec![1.0 / n_f64; n];
    let mut next_scores = vec![0.0; n];

    let sinks: Vec<usize> = (0..n).filter(|&idx| view.is_sink(idx)).collect();

    // 2. Iteration
    let mut iterations = 0;
    let mut max_delta = f64::INFINITY;

    while iterations < config.max_iterations {
        iterations += 1;

        // Sinks link to every node, including themselves
        let sink_mass: f64 = sinks.iter().map(|&idx| scores[idx]).sum::<f64>() / n_f64;

        max_delta = 0.0;
        for i in 0..n {
            let mut sum_incoming = sink_mass;

            // Iterate over incoming links
            for &source_idx in view.predecessors(i) {
                sum_incoming += scores[source_idx] / view.out_degree(source_idx) as f64;
            }

            next_scores[i] = base_score + d * sum_incoming;
            max_delta = f64::max(max_delta, (next_scores[i] - scores[i]).abs());
        }

        // Swap buffers
        std::mem::swap(&mut scores, &mut next_scores);

        // Check convergence
        if max_delta < config.threshold {
            break;
        }
    }

    let converged = max_delta < config.threshold;
    if converged {
        debug!(
            "PageRank converged after {} iterations (max delta {:.3e})",
            iterations, max_delta
        );
    } else {
        warn!(
            "PageRank stopped at iteration cap {} without converging (max delta {:.3e})",
            config.max_iterations, max_delta
        );
    }

    // 3. Renormalize to absorb accumulated rounding
    let total: f64 = scores.iter().sum();
    if total > 0.0 {
        for score in scores.iter_mut() {
            *score /= total;
        }
    }

    Ok(SolverReport {
        ranks: Distribution::from_dense(view, scores),
        iterations,
        max_delta,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(leaves: usize) -> GraphView {
        let mut adjacency = vec![("hub".to_string(), Vec::new())];
        for i in 0..leaves {
            adjacency.push((format!("leaf{}", i), vec!["hub".to_string()]));
        }
        GraphView::from_links(adjacency).unwrap()
    }

    #[test]
    fn test_cycle_is_uniform() {
        let view = GraphView::from_links(vec![
            ("a", vec!["b"]),
            ("b", vec!["c"]),
            ("c", vec!["d"]),
            ("d", vec!["a"]),
        ])
        .unwrap();

        let ranks = iterate_rank(&view, 0.85).unwrap();
        for (_, score) in ranks.iter() {
            assert!((score - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn test_star_hub_dominates() {
        let view = star(5);
        let ranks = iterate_rank(&view, 0.85).unwrap();
        let hub = ranks.get("hub").unwrap();
        for i in 0..5 {
            assert!(hub > ranks.get(&format!("leaf{}", i)).unwrap());
        }
        assert!((ranks.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_node() {
        let view = GraphView::from_links(vec![("only", Vec::<&str>::new())]).unwrap();
        let ranks = iterate_rank(&view, 0.85).unwrap();
        assert!((ranks.get("only").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_sinks_uniform() {
        let view = GraphView::from_links(vec![
            ("a", Vec::<&str>::new()),
            ("b", Vec::new()),
            ("c", Vec::new()),
        ])
        .unwrap();
        let report = solve(&view, &PageRankConfig::default()).unwrap();
        assert!(report.converged);
        assert_eq!(report.iterations, 1);
        for (_, score) in report.ranks.iter() {
            assert!((score - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_matches_known_corpus() {
        // 1 -> 2, 2 -> 1, 2 -> 3, 3 -> 2, 3 -> 4, 4 -> 2
        let view = GraphView::from_links(vec![
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
        .unwrap();

        let config = PageRankConfig {
            threshold: 1e-10,
            ..PageRankConfig::default()
        };
        let report = solve(&view, &config).unwrap();
        assert!(report.converged);

        let ranks = report.ranks;
        assert!((ranks.get("1.html").unwrap() - 0.2199).abs() < 1e-3);
        assert!((ranks.get("2.html").unwrap() - 0.4292).abs() < 1e-3);
        assert!((ranks.get("3.html").unwrap() - 0.2199).abs() < 1e-3);
        assert!((ranks.get("4.html").unwrap() - 0.1310).abs() < 1e-3);
    }

    #[test]
    fn test_iteration_cap() {
        let view = star(3);
        let config = PageRankConfig {
            threshold: 1e-15,
            max_iterations: 2,
            ..PageRankConfig::default()
        };
        let report = solve(&view, &config).unwrap();
        assert_eq!(report.iterations, 2);
        assert!(!report.converged);
        assert!((report.ranks.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_config() {
        let view = star(2);
        let bad_threshold = PageRankConfig {
            threshold: 0.0,
            ..PageRankConfig::default()
        };
        assert_eq!(
            solve(&view, &bad_threshold).unwrap_err(),
            RankError::InvalidThreshold(0.0)
        );

        let no_iterations = PageRankConfig {
            max_iterations: 0,
            ..PageRankConfig::default()
        };
        assert_eq!(
            solve(&view, &no_iterations).unwrap_err(),
            RankError::ZeroIterations
        );

        assert_eq!(
            iterate_rank(&view, 2.0).unwrap_err(),
            RankError::InvalidDamping(2.0)
        );

        let empty = GraphView::from_links(Vec::<(&str, Vec<&str>)>::new()).unwrap();
        assert_eq!(iterate_rank(&empty, 0.85).unwrap_err(), RankError::EmptyGraph);
    }
}
