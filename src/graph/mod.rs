//! Link corpus data model
//!
//! Pages identified by name, each with the set of other pages it links to.
//! The corpus is built once by the caller and read by the rank estimators.

pub mod corpus;
pub mod types;

// Re-export main types
pub use corpus::{Corpus, FilterStats, GraphError, GraphResult};
pub use types::PageId;
