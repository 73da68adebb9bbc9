//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod diagnostics;
pub mod events;
pub mod fetcher;
pub mod interaction;
pub mod selector_engine;
pub mod workspace;

pub use diagnostics::DiagnosticSink;
pub use events::{EditorEvent, EventKind, EventSource, Interest, ListenerToken, TextChange};
pub use fetcher::{ContentFetcher, FetchCause, FetchError};
pub use interaction::{LinkPicker, Notifier, StatusIndicator, StatusUpdate, SPINNER_FRAMES};
pub use selector_engine::{EngineFault, FaultLocation, SelectorEngine, SYNTAX_ERROR_NAME};
pub use workspace::{Workspace, WorkspaceError, WorkspaceResult};
