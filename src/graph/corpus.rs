//! In-memory link corpus
//!
//! The corpus is what the upstream crawler hands over: every page in the
//! collection and the set of other pages it links to.

use super::types::PageId;
use indexmap::{IndexMap, IndexSet};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while assembling a corpus
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Page {0} not found")]
    PageNotFound(PageId),

    #[error("Invalid link: page {0} links to itself")]
    SelfLink(PageId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Links discarded by [`Corpus::from_links`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Links from a page to itself
    pub self_links: usize,
    /// Links to pages outside the corpus
    pub external_links: usize,
}

impl FilterStats {
    pub fn dropped(&self) -> usize {
        self.self_links + self.external_links
    }
}

/// Pages and their outbound links, in insertion order.
///
/// Invariants: every link target is a page of the corpus, and no page links
/// to itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pages: IndexMap<PageId, IndexSet<PageId>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from raw crawl output.
    ///
    /// Self-links and links to pages that are not keys of `raw` are dropped
    /// and counted in the returned [`FilterStats`].
    pub fn from_links<I, P, L, T>(raw: I) -> (Self, FilterStats)
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<PageId>,
        L: IntoIterator<Item = T>,
        T: Into<PageId>,
    {
        let raw: Vec<(PageId, Vec<PageId>)> = raw
            .into_iter()
            .map(|(page, links)| (page.into(), links.into_iter().map(Into::into).collect()))
            .collect();

        let mut corpus = Corpus::new();
        for (page, _) in &raw {
            corpus.add_page(page.clone());
        }

        let mut stats = FilterStats::default();
        for (page, links) in raw {
            for target in links {
                if target == page {
                    stats.self_links += 1;
                } else if !corpus.contains(target.as_str()) {
                    stats.external_links += 1;
                } else if let Some(out) = corpus.pages.get_mut(&page) {
                    out.insert(target);
                }
            }
        }

        if stats.dropped() > 0 {
            debug!(
                "Dropped {} self-links and {} external links while building corpus",
                stats.self_links, stats.external_links
            );
        }

        (corpus, stats)
    }

    /// Add a page with no links. Returns false if it was already present.
    pub fn add_page(&mut self, page: impl Into<PageId>) -> bool {
        let page = page.into();
        if self.pages.contains_key(&page) {
            return false;
        }
        self.pages.insert(page, IndexSet::new());
        true
    }

    /// Add a link between two existing pages. Returns false if the link already existed.
    pub fn add_link(
        &mut self,
        source: impl Into<PageId>,
        target: impl Into<PageId>,
    ) -> GraphResult<bool> {
        let source = source.into();
        let target = target.into();

        if source == target {
            return Err(GraphError::SelfLink(source));
        }
        if !self.pages.contains_key(&target) {
            return Err(GraphError::PageNotFound(target));
        }
        match self.pages.get_mut(&source) {
            Some(links) => Ok(links.insert(target)),
            None => Err(GraphError::PageNotFound(source)),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn link_count(&self) -> usize {
        self.pages.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// All pages, in insertion order
    pub fn pages(&self) -> impl Iterator<Item = &PageId> {
        self.pages.keys()
    }

    /// Outbound links of a page
    pub fn links(&self, page: &str) -> Option<&IndexSet<PageId>> {
        self.pages.get(page)
    }

    /// Pages with no outbound links
    pub fn sinks(&self) -> impl Iterator<Item = &PageId> {
        self.pages
            .iter()
            .filter(|(_, links)| links.is_empty())
            .map(|(page, _)| page)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PageId, &IndexSet<PageId>)> {
        self.pages.iter()
    }
}
