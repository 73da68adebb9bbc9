//! Diagnostic collection port

use crate::domain::entities::Diagnostic;
use crate::domain::value_objects::DocumentId;

/// Named diagnostic collection keyed by document
///
/// `set` replaces the whole entry for a document; an empty list clears it.
pub trait DiagnosticSink {
    fn set(&mut self, document: &DocumentId, diagnostics: Vec<Diagnostic>);

    fn clear(&mut self, document: &DocumentId);
}
