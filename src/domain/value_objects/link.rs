//! Resolved link value object
//!
//! A link names the HTML source a selector document is developed against.
//! It is chosen once per session and never mutated.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

/// A link found in (or passed alongside) a selector document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedLink {
    /// Bracketed label, e.g. `<list>`; `None` for bare links
    pub tag: Option<String>,
    /// URL or filesystem path
    pub target: String,
}

/// Where a link's content lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// Local file (from `file://`, an absolute path, or a relative path)
    File(PathBuf),
    /// `http`/`https` resource
    Remote(Url),
}

/// Why a link cannot be classified
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("link is empty")]
    Empty,
    #[error("unsupported scheme '{0}'")]
    UnsupportedScheme(String),
    #[error("'{0}' is not a valid file URL")]
    InvalidFileUrl(String),
}

impl ResolvedLink {
    pub fn new(tag: Option<String>, target: impl Into<String>) -> Self {
        Self {
            tag,
            target: target.into(),
        }
    }

    /// Bare link without a tag
    pub fn bare(target: impl Into<String>) -> Self {
        Self::new(None, target)
    }

    /// Tagged link, e.g. `<list> https://example.com`
    pub fn tagged(tag: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(Some(tag.into()), target)
    }

    /// Label shown in the picker: `"<tag> target"` or just the target
    pub fn label(&self) -> String {
        match &self.tag {
            Some(tag) => format!("{} {}", tag, self.target),
            None => self.target.clone(),
        }
    }

    /// Classify the link. Relative paths resolve against `base_dir` when given.
    pub fn kind(&self, base_dir: Option<&Path>) -> Result<LinkKind, LinkError> {
        let target = self.target.trim();
        if target.is_empty() {
            return Err(LinkError::Empty);
        }

        match Url::parse(target) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(LinkKind::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(LinkKind::File)
                    .map_err(|_| LinkError::InvalidFileUrl(target.to_string())),
                // `C:\pages\a.html` parses with a one-letter scheme
                scheme if scheme.len() == 1 => Ok(LinkKind::File(PathBuf::from(target))),
                scheme => Err(LinkError::UnsupportedScheme(scheme.to_string())),
            },
            Err(_) => {
                let path = PathBuf::from(target);
                match base_dir {
                    Some(base) if path.is_relative() => Ok(LinkKind::File(base.join(path))),
                    _ => Ok(LinkKind::File(path)),
                }
            }
        }
    }
}

impl fmt::Display for ResolvedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target)
    }
}
