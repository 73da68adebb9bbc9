//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fetch` - HTML retrieval from disk and HTTP(S)
//! - `workspace` - File-backed editor model
//! - `events` - In-process event hub
//! - `diagnostics` - In-memory diagnostic collection
//! - `picker` - Terminal fuzzy-select link picker
//! - `console` - Notifier and status indicator over `tracing`

pub mod console;
pub mod diagnostics;
pub mod events;
pub mod fetch;
pub mod picker;
pub mod workspace;

// Re-export for convenience
pub use console::{TracingNotifier, TracingStatus};
pub use diagnostics::DiagnosticStore;
pub use events::EventHub;
pub use fetch::SourceFetcher;
pub use picker::TerminalPicker;
pub use workspace::FsWorkspace;
