//! Domain Entities
//!
//! - `DocumentSnapshot` - read-only copy of an editor buffer
//! - `Diagnostic` - positioned annotation on a selector document
//! - `EvaluationOutcome` - classified result of running a selector
//! - `FetchedContent` - HTML retrieved for a link

mod content;
mod diagnostic;
mod document;
mod outcome;

pub use content::FetchedContent;
pub use diagnostic::{Diagnostic, Severity};
pub use document::DocumentSnapshot;
pub use outcome::{EvaluationOutcome, GrammarError};
