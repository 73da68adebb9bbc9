//! Output synchronization
//!
//! Each selector document has one companion output document next to it,
//! named after the selector file plus a suffix (`page.temme` ->
//! `page.temme.json`). Every write replaces its whole content.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::entities::DocumentSnapshot;
use crate::domain::ports::Workspace;
use crate::domain::value_objects::DocumentId;
use crate::error::LiveResult;

/// Companion path: same directory, file name plus `suffix`
pub fn companion_path(selector: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = selector
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(suffix);
    selector.with_file_name(name)
}

/// Pretty JSON with two-space indentation
pub fn render(value: &Value) -> LiveResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// An opened output document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputHandle {
    pub id: DocumentId,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct OutputSync {
    suffix: String,
}

impl OutputSync {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Companion path for a selector document. Buffers without a backing
    /// file use their identity as the path.
    pub fn path_for(&self, selector: &DocumentSnapshot) -> PathBuf {
        let base = selector
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(selector.id.as_str()));
        companion_path(&base, &self.suffix)
    }

    /// Open (creating if needed) and reveal the output beside the selector
    pub fn open<W: Workspace + ?Sized>(
        &self,
        workspace: &mut W,
        selector: &DocumentSnapshot,
    ) -> LiveResult<OutputHandle> {
        let path = self.path_for(selector);
        let id = workspace.open_document(&path)?;
        if !workspace.is_visible(&id) {
            workspace.show_beside(&id)?;
        }
        tracing::debug!(output = %path.display(), "output document ready");
        Ok(OutputHandle { id, path })
    }

    /// Replace the whole output with the pretty-printed value
    pub fn write<W: Workspace + ?Sized>(
        &self,
        workspace: &mut W,
        handle: &OutputHandle,
        value: &Value,
    ) -> LiveResult<()> {
        let content = render(value)?;
        workspace.replace_all(&handle.id, &content)?;
        Ok(())
    }
}

impl Default for OutputSync {
    fn default() -> Self {
        Self::new(".json")
    }
}
