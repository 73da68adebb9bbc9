//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `LiveEngine` - One-shot runs, watch sessions, and grammar diagnostics
//!
//! ## Services
//!
//! - `GrammarAnalyzer` - Normalizes engine faults and classifies outcomes
//! - `resolve_link` - Picks the link a run or watch uses
//! - `OutputSync` - Opens and rewrites the companion output document
//! - `code_actions` - Run/watch actions on tagged-link lines

pub mod code_actions;
pub mod grammar;
pub mod links;
pub mod output;
pub mod watch;

pub use code_actions::{code_actions, CodeAction};
pub use grammar::{normalize, GrammarAnalyzer};
pub use links::{resolve_link, LinkResolution, NO_LINK_CHOSEN, NO_LINK_FOUND, PICKER_PLACEHOLDER};
pub use output::{companion_path, render, OutputHandle, OutputSync};
pub use watch::{
    ActiveWatch, CommandOutcome, DiscardReason, EngineSession, EvaluationReport,
    EvaluationTicket, GrammarCheck, HandledEvent, ListenerHandles, LiveEngine, RunReport,
    SkipReason, WatchReport, NOT_SELECTOR_DOCUMENT, NO_FILE_OPENED, OUTPUT_CLOSED, RUN_SUCCEEDED,
};
