//! Content Fetcher Port
//!
//! Retrieves the HTML a selector is developed against. No retries: a
//! failure is reported once and the caller decides what to do with it.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::FetchedContent;
use crate::domain::value_objects::{LinkError, ResolvedLink};

/// Fetch failure carrying the link and the underlying cause
#[derive(Debug, Error)]
#[error("cannot download html from {link}: {cause}")]
pub struct FetchError {
    pub link: String,
    #[source]
    pub cause: FetchCause,
}

impl FetchError {
    pub fn new(link: &ResolvedLink, cause: impl Into<FetchCause>) -> Self {
        Self {
            link: link.target.clone(),
            cause: cause.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchCause {
    /// Link could not be classified as file or URL
    #[error(transparent)]
    Link(#[from] LinkError),

    /// Local file missing or unreadable
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// Connection, TLS, or timeout failure
    #[error("{0}")]
    Transport(String),

    /// Body exceeded the fetcher's size cap
    #[error("response larger than {limit} bytes")]
    TooLarge { limit: u64 },
}

/// Trait for retrieving HTML content
///
/// Implementations:
/// - `SourceFetcher` - local files and HTTP(S) with a timeout
/// - test doubles that count calls
pub trait ContentFetcher {
    /// Fetch the content behind `link`; relative paths resolve against `base_dir`
    fn fetch(&self, link: &ResolvedLink, base_dir: Option<&Path>)
        -> Result<FetchedContent, FetchError>;
}
