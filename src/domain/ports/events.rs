//! Event Source Port
//!
//! Change and lifecycle signals from the editor. Subscriptions are owned
//! values: `subscribe` hands out a [`ListenerToken`] and the owner gives it
//! back through `unsubscribe` exactly once.

use crate::domain::value_objects::{DocumentId, Range};

/// One contiguous text replacement inside a change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    pub range: Range,
    pub text: String,
}

impl TextChange {
    pub fn new(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

/// Event delivered by the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Text of a document changed; changes are in editor order
    DocumentChanged {
        document: DocumentId,
        changes: Vec<TextChange>,
    },
    /// A document was closed
    DocumentClosed { document: DocumentId },
    /// The set of visible editors changed
    VisibleEditorsChanged,
    /// Focus moved to another editor (or to none)
    ActiveEditorChanged { document: Option<DocumentId> },
}

impl EditorEvent {
    pub fn changed(document: DocumentId, changes: Vec<TextChange>) -> Self {
        EditorEvent::DocumentChanged { document, changes }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            EditorEvent::DocumentChanged { .. } => EventKind::DocumentChanged,
            EditorEvent::DocumentClosed { .. }
            | EditorEvent::VisibleEditorsChanged
            | EditorEvent::ActiveEditorChanged { .. } => EventKind::Lifecycle,
        }
    }

    /// Document the event is about, if it names one
    pub fn document(&self) -> Option<&DocumentId> {
        match self {
            EditorEvent::DocumentChanged { document, .. }
            | EditorEvent::DocumentClosed { document } => Some(document),
            EditorEvent::ActiveEditorChanged { document } => document.as_ref(),
            EditorEvent::VisibleEditorsChanged => None,
        }
    }

    /// Start line of the first change; 0 when the event carries no ranges
    pub fn changed_line(&self) -> Option<u32> {
        match self {
            EditorEvent::DocumentChanged { changes, .. } => Some(
                changes
                    .first()
                    .map(|c| c.range.start.line)
                    .unwrap_or(0),
            ),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DocumentChanged,
    /// Close / visibility / focus signals
    Lifecycle,
}

/// What a listener wants to hear about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interest {
    pub kind: EventKind,
    /// Restrict to one document; `None` means any
    pub document: Option<DocumentId>,
}

impl Interest {
    pub fn changes_of(document: DocumentId) -> Self {
        Self {
            kind: EventKind::DocumentChanged,
            document: Some(document),
        }
    }

    pub fn lifecycle() -> Self {
        Self {
            kind: EventKind::Lifecycle,
            document: None,
        }
    }

    pub fn matches(&self, event: &EditorEvent) -> bool {
        if self.kind != event.kind() {
            return false;
        }
        match &self.document {
            Some(wanted) => event.document() == Some(wanted),
            None => true,
        }
    }
}

/// Handle for one installed subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerToken(pub u64);

/// Subscription registry fed by the editor's events
pub trait EventSource {
    /// Install a listener and return its token
    fn subscribe(&mut self, interest: Interest) -> ListenerToken;

    /// Remove a listener. Returns false if the token was not installed.
    fn unsubscribe(&mut self, token: ListenerToken) -> bool;

    /// Tokens of the listeners that should receive `event`, in install order
    fn route(&self, event: &EditorEvent) -> Vec<ListenerToken>;
}
