//! Error types for temme-live
//!
//! Uses `thiserror` for library errors. Link-resolution outcomes ("no link
//! found", "picker cancelled") are not errors; they are reported as
//! [`SkipReason`](crate::application::SkipReason) values.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FetchError, WorkspaceError};
use crate::domain::value_objects::SessionState;

/// Result type alias for engine operations
pub type LiveResult<T> = Result<T, LiveError>;

/// Main error type for engine operations
#[derive(Error, Debug)]
pub enum LiveError {
    /// HTML source could not be retrieved
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The editor model rejected an operation
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// Selector text was rejected by the grammar
    #[error("syntax error: {message}")]
    Syntax { message: String },

    /// Selector parsed but evaluation against the document failed
    #[error("evaluation failed: {message}")]
    Evaluation { message: String },

    /// Another operation owns the session
    #[error("cannot start while {state}")]
    Busy { state: SessionState },

    /// Link text could not be interpreted as a file or URL
    #[error("invalid link '{link}': {reason}")]
    InvalidLink { link: String, reason: String },

    /// Result could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}
