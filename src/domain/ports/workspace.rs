//! Workspace port - the editor's document model
//!
//! The engine reads selector text through this port and fully rewrites the
//! companion output document through it. Documents are owned by the editor.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::DocumentSnapshot;
use crate::domain::value_objects::DocumentId;

/// Result type for workspace operations
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// Document is not (or no longer) open
    #[error("document is not open: {0}")]
    NotOpen(DocumentId),

    /// Document could not be opened or created
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Edit could not be applied
    #[error("cannot write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}

/// Abstract editor document model
///
/// Implementations:
/// - `FsWorkspace` - headless, file-backed buffers
/// - editor bindings provided by the host
pub trait Workspace {
    /// Document in the focused editor, if any
    fn active_document(&self) -> Option<DocumentSnapshot>;

    /// Snapshot of an open document
    fn document(&self, id: &DocumentId) -> Option<DocumentSnapshot>;

    /// Open a document by path, creating the file if it does not exist
    fn open_document(&mut self, path: &Path) -> WorkspaceResult<DocumentId>;

    /// Whether the document is still open anywhere in the editor
    fn is_open(&self, id: &DocumentId) -> bool;

    /// Whether the document is shown in a visible editor
    fn is_visible(&self, id: &DocumentId) -> bool;

    /// Show the document in the secondary (side) column
    fn show_beside(&mut self, id: &DocumentId) -> WorkspaceResult<()>;

    /// Replace the whole content of the document in one edit
    fn replace_all(&mut self, id: &DocumentId, content: &str) -> WorkspaceResult<()>;
}
