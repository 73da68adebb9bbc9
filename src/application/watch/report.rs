//! Outcomes reported by the live engine

use crate::application::output::OutputHandle;
use crate::domain::entities::Diagnostic;
use crate::domain::value_objects::{DocumentId, ResolvedLink};

pub const NO_FILE_OPENED: &str = "No file opened.";
pub const NOT_SELECTOR_DOCUMENT: &str = "Not a temme file.";
pub const RUN_SUCCEEDED: &str = "Success";
pub const OUTPUT_CLOSED: &str = "Output closed, watch stopped.";

/// Why a run or watch did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoActiveDocument,
    /// Active document has another language
    NotSelectorDocument,
    NoLinkFound,
    /// The picker was dismissed
    NoLinkChosen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    Completed { output: OutputHandle },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq)]
pub enum WatchReport {
    Started {
        document: DocumentId,
        link: ResolvedLink,
        output: OutputHandle,
        /// Result of the evaluation run right after subscribing
        initial: EvaluationReport,
    },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The watch the ticket was issued under has ended
    Stale,
    /// A newer ticket exists
    Superseded,
    /// The bound document is no longer open
    DocumentUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationReport {
    /// Output replaced and diagnostics cleared
    Written,
    /// Runtime failure, reported on `line`
    Failed { line: u32, message: String },
    /// Syntax failure; the grammar check reports it
    SyntaxSuppressed,
    /// Evaluation succeeded but the output could not be written
    OutputFailed { message: String },
    Discarded(DiscardReason),
}

impl EvaluationReport {
    pub fn is_written(&self) -> bool {
        matches!(self, EvaluationReport::Written)
    }
}

/// Result of the grammar check on one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarCheck {
    Clean,
    Invalid(Diagnostic),
}

/// What the engine did with one event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandledEvent {
    pub grammar: Option<GrammarCheck>,
    pub evaluation: Option<EvaluationReport>,
    /// The watch ended because its output was closed
    pub stopped: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Run(RunReport),
    Watch(WatchReport),
    /// `true` if a watch was running
    Stopped(bool),
}
