//! Evaluation outcome entity
//!
//! The result of running a selector is classified exactly once, at the
//! evaluation boundary. Everything downstream matches on the variant.

use serde_json::Value;

use crate::domain::value_objects::SourceRange;

/// Uniform error shape consumed by the diagnostic mapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
    pub message: String,
    /// Absent when the grammar cannot localize the fault
    pub range: Option<SourceRange>,
}

impl GrammarError {
    pub fn new(message: impl Into<String>, range: Option<SourceRange>) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationOutcome {
    /// Serializable result value
    Success(Value),
    /// The grammar rejected the selector text
    SyntaxFailure {
        message: String,
        range: Option<SourceRange>,
    },
    /// The selector parsed but evaluating it failed
    RuntimeFailure {
        message: String,
        range: Option<SourceRange>,
    },
}

impl EvaluationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EvaluationOutcome::Success(_))
    }

    /// Failure message, if this is a failure
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            EvaluationOutcome::Success(_) => None,
            EvaluationOutcome::SyntaxFailure { message, .. }
            | EvaluationOutcome::RuntimeFailure { message, .. } => Some(message),
        }
    }
}
