//! Watch Use Case
//!
//! Live evaluation of a selector document against a fetched HTML source.
//! It orchestrates:
//! - One-shot runs (`Ready -> Running -> Ready`)
//! - Watch sessions (`Ready -> Watching -> Ready`) that re-evaluate on every edit
//! - Grammar diagnostics for every selector document edit
//!
//! ## Architecture
//!
//! - `LiveEngine` - Main orchestrator, owns the ports and the session
//! - `EngineSession` - State, generation counter, and the active watch
//! - Reports - What each operation did (`RunReport`, `EvaluationReport`, ...)
//!
//! Evaluation is split into `begin_evaluation` (stamp a ticket) and
//! `complete_evaluation` (apply it if still current). A ticket issued under
//! an ended watch is stale; a ticket older than the latest one is superseded.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = LiveEngine::new(grammar, FsWorkspace::new(), SourceFetcher::default());
//! engine.start_watch(None)?;
//! let event = engine.workspace_mut().edit(&id, "li{text}")?;
//! engine.handle_event(&event);
//! ```

mod engine;
mod report;
mod session;


pub use engine::LiveEngine;
pub use report::{
    CommandOutcome, DiscardReason, EvaluationReport, GrammarCheck, HandledEvent, RunReport,
    SkipReason, WatchReport, NOT_SELECTOR_DOCUMENT, NO_FILE_OPENED, OUTPUT_CLOSED, RUN_SUCCEEDED,
};
pub use session::{ActiveWatch, EngineSession, EvaluationTicket, ListenerHandles};
