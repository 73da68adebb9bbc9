//! In-memory diagnostic collection

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::domain::entities::Diagnostic;
use crate::domain::ports::DiagnosticSink;
use crate::domain::value_objects::DocumentId;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiagnosticStore {
    entries: BTreeMap<DocumentId, Vec<Diagnostic>>,
}

impl DiagnosticStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics for a document; empty if none
    pub fn get(&self, document: &DocumentId) -> &[Diagnostic] {
        self.entries
            .get(document)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn documents(&self) -> impl Iterator<Item = &DocumentId> {
        self.entries.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DiagnosticSink for DiagnosticStore {
    fn set(&mut self, document: &DocumentId, diagnostics: Vec<Diagnostic>) {
        if diagnostics.is_empty() {
            self.entries.remove(document);
        } else {
            self.entries.insert(document.clone(), diagnostics);
        }
    }

    fn clear(&mut self, document: &DocumentId) {
        self.entries.remove(document);
    }
}

/// Shared handle, so a host can read what the engine published
impl<S: DiagnosticSink> DiagnosticSink for Rc<RefCell<S>> {
    fn set(&mut self, document: &DocumentId, diagnostics: Vec<Diagnostic>) {
        self.borrow_mut().set(document, diagnostics);
    }

    fn clear(&mut self, document: &DocumentId) {
        self.borrow_mut().clear(document);
    }
}
