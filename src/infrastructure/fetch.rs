//! HTML source fetcher
//!
//! Implements the `ContentFetcher` port for local files and HTTP(S).

use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;

use crate::config::FetchConfig;
use crate::domain::entities::FetchedContent;
use crate::domain::ports::{ContentFetcher, FetchCause, FetchError};
use crate::domain::value_objects::{LinkKind, ResolvedLink};

/// Upper bound on a remote response body
const MAX_BODY_BYTES: u64 = 32 * 1024 * 1024;

/// Fetches from disk or over HTTP(S) with a timeout
pub struct SourceFetcher {
    agent: ureq::Agent,
    max_body_bytes: u64,
}

impl SourceFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build();
        Self {
            agent,
            max_body_bytes: MAX_BODY_BYTES,
        }
    }

    /// Refuse remote bodies longer than `limit` bytes
    pub fn with_body_limit(mut self, limit: u64) -> Self {
        self.max_body_bytes = limit;
        self
    }

    fn fetch_remote(&self, link: &ResolvedLink, url: &url::Url) -> Result<String, FetchError> {
        tracing::debug!(url = %url, "fetching remote html");
        let response = self.agent.get(url.as_str()).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => FetchError::new(link, FetchCause::Status(code)),
            ureq::Error::Transport(transport) => {
                FetchError::new(link, FetchCause::Transport(transport.to_string()))
            }
        })?;

        let limit = self.max_body_bytes;
        let mut body = Vec::new();
        response
            .into_reader()
            .take(limit.saturating_add(1))
            .read_to_end(&mut body)
            .map_err(|e| FetchError::new(link, e))?;
        if body.len() as u64 > limit {
            tracing::warn!(url = %url, limit, "response body over limit");
            return Err(FetchError::new(link, FetchCause::TooLarge { limit }));
        }

        String::from_utf8(body)
            .map_err(|e| FetchError::new(link, io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

impl Default for SourceFetcher {
    fn default() -> Self {
        Self::new(&FetchConfig::default())
    }
}

impl ContentFetcher for SourceFetcher {
    fn fetch(
        &self,
        link: &ResolvedLink,
        base_dir: Option<&Path>,
    ) -> Result<FetchedContent, FetchError> {
        let kind = link.kind(base_dir).map_err(|e| FetchError::new(link, e))?;
        let html = match kind {
            LinkKind::File(path) => {
                tracing::debug!(path = %path.display(), "reading local html");
                std::fs::read_to_string(&path).map_err(|e| FetchError::new(link, e))?
            }
            LinkKind::Remote(url) => self.fetch_remote(link, &url)?,
        };
        tracing::info!(link = %link, bytes = html.len(), "html fetched");
        Ok(FetchedContent::new(link.clone(), html))
    }
}
