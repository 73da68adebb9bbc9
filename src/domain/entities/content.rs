//! Fetched content entity

use crate::domain::value_objects::ResolvedLink;

/// Raw HTML retrieved for a link. Owned by one watch session at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedContent {
    pub link: ResolvedLink,
    pub html: String,
}

impl FetchedContent {
    pub fn new(link: ResolvedLink, html: impl Into<String>) -> Self {
        Self {
            link,
            html: html.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}
