//! Grammar Analyzer
//!
//! Thin adapter over [`SelectorEngine`] that turns engine faults into the
//! uniform [`GrammarError`] shape and classifies evaluation results.

use crate::domain::entities::{EvaluationOutcome, GrammarError};
use crate::domain::ports::{EngineFault, FaultLocation, SelectorEngine};
use crate::domain::value_objects::SourceRange;

pub struct GrammarAnalyzer<'a, E: SelectorEngine> {
    engine: &'a E,
}

impl<'a, E: SelectorEngine> GrammarAnalyzer<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self { engine }
    }

    /// Parse selector text, discarding the AST
    pub fn check(&self, selector: &str) -> Result<(), GrammarError> {
        self.engine
            .parse(selector)
            .map(|_| ())
            .map_err(|fault| normalize(&fault))
    }

    /// Evaluate against a pre-parsed document and classify the result
    pub fn evaluate(&self, dom: &E::Dom, selector: &str) -> EvaluationOutcome {
        match self.engine.evaluate(dom, selector) {
            Ok(value) => EvaluationOutcome::Success(value),
            Err(fault) => {
                let GrammarError { message, range } = normalize(&fault);
                if fault.is_syntax() {
                    EvaluationOutcome::SyntaxFailure { message, range }
                } else {
                    EvaluationOutcome::RuntimeFailure { message, range }
                }
            }
        }
    }
}

/// Keep the fault's range only when both endpoints are known
pub fn normalize(fault: &EngineFault) -> GrammarError {
    GrammarError::new(fault.message.clone(), fault.location.and_then(complete_range))
}

fn complete_range(location: FaultLocation) -> Option<SourceRange> {
    Some(SourceRange::new(location.start?, location.end?))
}
