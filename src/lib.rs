//! LinkRank
//!
//! Estimates the relative importance of pages in a directed link corpus with
//! the PageRank model, using two independent estimators:
//!
//! - a random walk over the surfer's Markov chain, tallying visits
//! - an iterative solver applying the PageRank recurrence until it settles
//!
//! The estimators themselves live in the `linkrank-algorithms` crate and work
//! on a dense [`algo::GraphView`]. This crate supplies the page corpus, the
//! configuration layer and the glue that runs both estimators.
//!
//! ## Example Usage
//!
//! ```rust
//! use linkrank::algo::rank_corpus;
//! use linkrank::config::RankConfig;
//! use linkrank::graph::Corpus;
//!
//! let (corpus, _) = Corpus::from_links(vec![
//!     ("1.html", vec!["2.html"]),
//!     ("2.html", vec!["1.html", "3.html"]),
//!     ("3.html", vec!["2.html"]),
//! ]);
//!
//! let config = RankConfig { seed: Some(7), ..RankConfig::default() };
//! let report = rank_corpus(&corpus, &config).unwrap();
//!
//! assert!((report.iterated.total() - 1.0).abs() < 1e-6);
//! assert!(report.iterated.get("2.html") > report.iterated.get("1.html"));
//! ```

pub mod algo;
pub mod config;
pub mod error;
pub mod graph;

pub use algo::{build_view, rank_corpus, RankReport};
pub use config::{ConfigError, RankConfig};
pub use error::{LinkRankError, LinkRankResult};
pub use graph::{Corpus, GraphError, PageId};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
