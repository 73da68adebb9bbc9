//! Document identity value object

use std::fmt;
use std::path::Path;

/// Stable identity of a document in the editor model.
///
/// The engine never owns documents; it only compares identities when
/// routing change events and keying diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create an identity from any string the host uses (URI, path, buffer id)
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identity for a document backed by a file
    pub fn from_path(path: &Path) -> Self {
        Self(path.display().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
