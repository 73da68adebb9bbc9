//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal configuration warning surfaced to the host.
///
/// Produced while loading configuration, e.g. for unknown keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key (last path segment)
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}
