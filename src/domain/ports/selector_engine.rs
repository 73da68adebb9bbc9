//! Selector Engine Port
//!
//! The temme grammar and evaluator live outside this crate. The engine only
//! needs three calls: parse selector text, pre-parse HTML once, and evaluate
//! a selector against the pre-parsed document.

use serde_json::Value;

use crate::domain::value_objects::SourcePoint;

/// Fault name the grammar uses for parse errors
pub const SYNTAX_ERROR_NAME: &str = "SyntaxError";

/// Error as raised by the engine, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineFault {
    /// Error class, e.g. `SyntaxError`
    pub name: String,
    pub message: String,
    pub location: Option<FaultLocation>,
}

/// Possibly partial location attached to a fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaultLocation {
    pub start: Option<SourcePoint>,
    pub end: Option<SourcePoint>,
}

impl EngineFault {
    pub fn syntax(message: impl Into<String>, location: Option<FaultLocation>) -> Self {
        Self {
            name: SYNTAX_ERROR_NAME.to_string(),
            message: message.into(),
            location,
        }
    }

    pub fn runtime(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.name == SYNTAX_ERROR_NAME
    }
}

impl FaultLocation {
    pub fn span(start: SourcePoint, end: SourcePoint) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

/// Selector grammar and evaluator
pub trait SelectorEngine {
    /// Parsed selector
    type Ast;
    /// Pre-parsed HTML document
    type Dom;

    /// Parse selector text
    fn parse(&self, selector: &str) -> Result<Self::Ast, EngineFault>;

    /// Pre-parse HTML so repeated evaluations skip HTML parsing
    fn load(&self, html: &str) -> Self::Dom;

    /// Evaluate selector text against a pre-parsed document
    fn evaluate(&self, dom: &Self::Dom, selector: &str) -> Result<Value, EngineFault>;
}
