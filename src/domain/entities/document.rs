//! Document snapshot entity
//!
//! A read-only copy of an editor buffer at one point in time. The editor
//! owns the live buffer; the engine only ever reads snapshots of it.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::DocumentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub id: DocumentId,
    /// Backing file, if any (untitled buffers have none)
    pub path: Option<PathBuf>,
    pub language_id: String,
    pub text: String,
}

impl DocumentSnapshot {
    pub fn new(id: DocumentId, language_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            path: None,
            language_id: language_id.into(),
            text: text.into(),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Number of lines. An empty document still has one (empty) line.
    pub fn line_count(&self) -> u32 {
        u32::try_from(self.text.split('\n').count()).unwrap_or(u32::MAX)
    }

    /// Index of the last valid line
    pub fn last_line(&self) -> u32 {
        self.line_count().saturating_sub(1)
    }

    /// Text of a line without its terminator
    pub fn line(&self, line: u32) -> Option<&str> {
        self.text
            .split('\n')
            .nth(line as usize)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }

    /// Length of a line in characters; 0 for lines past the end
    pub fn line_len(&self, line: u32) -> u32 {
        self.line(line)
            .map(|l| u32::try_from(l.chars().count()).unwrap_or(u32::MAX))
            .unwrap_or(0)
    }

    /// Directory containing the backing file
    pub fn directory(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }
}
