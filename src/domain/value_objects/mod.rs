//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod command;
mod config_warning;
mod document;
mod link;
mod position;
mod session_state;

pub use command::{Command, COMMAND_RUN_SELECTOR, COMMAND_START_WATCH, COMMAND_STOP_WATCH};
pub use config_warning::ConfigWarning;
pub use document::DocumentId;
pub use link::{LinkError, LinkKind, ResolvedLink};
pub use position::{Position, Range, SourcePoint, SourceRange};
pub use session_state::SessionState;
