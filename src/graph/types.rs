//! Core type definitions for the link corpus

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a page (e.g., "about.html")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn new(name: impl Into<String>) -> Self {
        PageId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PageId {
    fn from(s: String) -> Self {
        PageId(s)
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        PageId(s.to_string())
    }
}

impl From<&PageId> for PageId {
    fn from(id: &PageId) -> Self {
        id.clone()
    }
}

impl From<PageId> for String {
    fn from(id: PageId) -> Self {
        id.0
    }
}

impl Borrow<str> for PageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        let id = PageId::new("index.html");
        assert_eq!(id.as_str(), "index.html");
        assert_eq!(format!("{}", id), "index.html");

        let id2: PageId = "about.html".into();
        assert_eq!(String::from(id2), "about.html");
    }

    #[test]
    fn test_page_id_ordering() {
        let mut ids = vec![PageId::from("b.html"), PageId::from("a.html")];
        ids.sort();
        assert_eq!(ids[0].as_str(), "a.html");
    }
}
