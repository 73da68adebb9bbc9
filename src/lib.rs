//! temme-live - live evaluation engine for temme selector documents
//!
//! Turns edits to a selector document into positioned syntax diagnostics and
//! a continuously refreshed JSON result written next to it, while a watch
//! session keeps one HTML source loaded for the whole edit loop.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{
    CommandOutcome, DiscardReason, EvaluationReport, GrammarCheck, HandledEvent, LiveEngine,
    RunReport, SkipReason, WatchReport,
};
pub use config::LiveConfig;
pub use domain::entities::{Diagnostic, DocumentSnapshot, EvaluationOutcome, GrammarError};
pub use domain::ports::{
    ContentFetcher, DiagnosticSink, EditorEvent, EngineFault, EventSource, LinkPicker, Notifier,
    SelectorEngine, StatusIndicator, Workspace,
};
pub use domain::value_objects::{Command, DocumentId, ResolvedLink, SessionState};
pub use error::{LiveError, LiveResult};
pub use infrastructure::{DiagnosticStore, EventHub, FsWorkspace, SourceFetcher};
