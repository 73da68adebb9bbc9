//! File-backed workspace
//!
//! A headless editor model: buffers loaded from disk, a visible set, and an
//! active document. Mutations that an editor would announce return the
//! matching [`EditorEvent`] so the caller can feed it to the engine.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::entities::DocumentSnapshot;
use crate::domain::ports::{EditorEvent, TextChange, Workspace, WorkspaceError, WorkspaceResult};
use crate::domain::value_objects::{DocumentId, Position, Range};

/// Language id for files with no registered extension
pub const PLAIN_TEXT: &str = "plaintext";

#[derive(Debug, Clone)]
struct Buffer {
    path: PathBuf,
    language_id: String,
    text: String,
}

#[derive(Debug)]
pub struct FsWorkspace {
    buffers: BTreeMap<DocumentId, Buffer>,
    visible: Vec<DocumentId>,
    active: Option<DocumentId>,
    /// (extension, language id)
    languages: Vec<(String, String)>,
}

impl Default for FsWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl FsWorkspace {
    pub fn new() -> Self {
        Self {
            buffers: BTreeMap::new(),
            visible: Vec::new(),
            active: None,
            languages: vec![
                ("temme".to_string(), "temme".to_string()),
                ("json".to_string(), "json".to_string()),
                ("html".to_string(), "html".to_string()),
            ],
        }
    }

    /// Map a file extension (without the dot) to a language id
    pub fn with_language(mut self, extension: &str, language_id: &str) -> Self {
        self.languages.retain(|(ext, _)| ext != extension);
        self.languages
            .push((extension.to_string(), language_id.to_string()));
        self
    }

    fn language_for(&self, path: &Path) -> String {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        self.languages
            .iter()
            .find(|(e, _)| e == ext)
            .map(|(_, lang)| lang.clone())
            .unwrap_or_else(|| PLAIN_TEXT.to_string())
    }

    fn insert_buffer(&mut self, path: &Path, text: String) -> DocumentId {
        let id = DocumentId::from_path(path);
        let language_id = self.language_for(path);
        self.buffers.insert(
            id.clone(),
            Buffer {
                path: path.to_path_buf(),
                language_id,
                text,
            },
        );
        id
    }

    fn buffer(&self, id: &DocumentId) -> WorkspaceResult<&Buffer> {
        self.buffers
            .get(id)
            .ok_or_else(|| WorkspaceError::NotOpen(id.clone()))
    }

    /// Open an existing file. Unlike `open_document`, a missing file is an error.
    pub fn open_path(&mut self, path: &Path) -> WorkspaceResult<DocumentId> {
        let id = DocumentId::from_path(path);
        if self.buffers.contains_key(&id) {
            return Ok(id);
        }
        let text = fs::read_to_string(path).map_err(|source| WorkspaceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.insert_buffer(path, text))
    }

    /// Focus a document, making it visible
    pub fn set_active(&mut self, id: &DocumentId) -> WorkspaceResult<EditorEvent> {
        self.buffer(id)?;
        if !self.visible.contains(id) {
            self.visible.push(id.clone());
        }
        self.active = Some(id.clone());
        Ok(EditorEvent::ActiveEditorChanged {
            document: Some(id.clone()),
        })
    }

    /// Remove a document from the visible set without closing it
    pub fn hide(&mut self, id: &DocumentId) -> EditorEvent {
        self.visible.retain(|v| v != id);
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        EditorEvent::VisibleEditorsChanged
    }

    /// Replace a buffer's text in memory, as typing would
    ///
    /// The returned change starts at the first line that differs.
    pub fn edit(&mut self, id: &DocumentId, text: &str) -> WorkspaceResult<EditorEvent> {
        let buffer = self
            .buffers
            .get_mut(id)
            .ok_or_else(|| WorkspaceError::NotOpen(id.clone()))?;

        let change = diff_change(&buffer.text, text);
        buffer.text = text.to_string();
        Ok(EditorEvent::changed(id.clone(), vec![change]))
    }

    /// Write a buffer back to its file
    pub fn save(&self, id: &DocumentId) -> WorkspaceResult<()> {
        let buffer = self.buffer(id)?;
        write_atomic(&buffer.path, &buffer.text).map_err(|e| WorkspaceError::Write {
            path: buffer.path.clone(),
            message: e.to_string(),
        })
    }

    /// Close a document. Returns `None` if it was not open.
    pub fn close(&mut self, id: &DocumentId) -> Option<EditorEvent> {
        self.buffers.remove(id)?;
        self.visible.retain(|v| v != id);
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        Some(EditorEvent::DocumentClosed {
            document: id.clone(),
        })
    }

    /// Current in-memory text
    pub fn text(&self, id: &DocumentId) -> Option<&str> {
        self.buffers.get(id).map(|b| b.text.as_str())
    }

    pub fn visible_documents(&self) -> &[DocumentId] {
        &self.visible
    }
}

impl Workspace for FsWorkspace {
    fn active_document(&self) -> Option<DocumentSnapshot> {
        self.active.as_ref().and_then(|id| self.document(id))
    }

    fn document(&self, id: &DocumentId) -> Option<DocumentSnapshot> {
        self.buffers.get(id).map(|b| {
            DocumentSnapshot::new(id.clone(), b.language_id.clone(), b.text.clone())
                .with_path(b.path.clone())
        })
    }

    fn open_document(&mut self, path: &Path) -> WorkspaceResult<DocumentId> {
        let id = DocumentId::from_path(path);
        if self.buffers.contains_key(&id) {
            return Ok(id);
        }
        if !path.exists() {
            write_atomic(path, "").map_err(|source| WorkspaceError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        }
        self.open_path(path)
    }

    fn is_open(&self, id: &DocumentId) -> bool {
        self.buffers.contains_key(id)
    }

    fn is_visible(&self, id: &DocumentId) -> bool {
        self.visible.contains(id)
    }

    fn show_beside(&mut self, id: &DocumentId) -> WorkspaceResult<()> {
        self.buffer(id)?;
        if !self.visible.contains(id) {
            self.visible.push(id.clone());
        }
        Ok(())
    }

    fn replace_all(&mut self, id: &DocumentId, content: &str) -> WorkspaceResult<()> {
        let buffer = self
            .buffers
            .get_mut(id)
            .ok_or_else(|| WorkspaceError::NotOpen(id.clone()))?;
        write_atomic(&buffer.path, content).map_err(|e| WorkspaceError::Write {
            path: buffer.path.clone(),
            message: e.to_string(),
        })?;
        buffer.text = content.to_string();
        Ok(())
    }
}

/// Temp file in the target directory, then rename over the target
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Single change from the first differing line to the end of the old text
fn diff_change(old: &str, new: &str) -> TextChange {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();

    let first = old_lines
        .iter()
        .zip(new_lines.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let first = first.min(old_lines.len().saturating_sub(1));

    let last_line = old_lines.len().saturating_sub(1);
    let last_len = old_lines
        .last()
        .map(|l| l.chars().count())
        .unwrap_or(0);

    let range = Range::new(
        Position::new(to_u32(first), 0),
        Position::new(to_u32(last_line), to_u32(last_len)),
    );
    let text = new_lines.get(first..).map(|l| l.join("\n")).unwrap_or_default();
    TextChange::new(range, text)
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
