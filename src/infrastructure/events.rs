//! In-process event hub
//!
//! Implements the `EventSource` port. The hub only keeps interests and
//! tokens; the owner of a token decides what to do with routed events.

use crate::domain::ports::{EditorEvent, EventSource, Interest, ListenerToken};

#[derive(Debug, Default)]
pub struct EventHub {
    next_token: u64,
    listeners: Vec<(ListenerToken, Interest)>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of installed listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn is_installed(&self, token: ListenerToken) -> bool {
        self.listeners.iter().any(|(t, _)| *t == token)
    }
}

impl EventSource for EventHub {
    fn subscribe(&mut self, interest: Interest) -> ListenerToken {
        self.next_token += 1;
        let token = ListenerToken(self.next_token);
        tracing::debug!(token = token.0, kind = ?interest.kind, "listener installed");
        self.listeners.push((token, interest));
        token
    }

    fn unsubscribe(&mut self, token: ListenerToken) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(t, _)| *t != token);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::debug!(token = token.0, "listener removed");
        }
        removed
    }

    fn route(&self, event: &EditorEvent) -> Vec<ListenerToken> {
        self.listeners
            .iter()
            .filter(|(_, interest)| interest.matches(event))
            .map(|(token, _)| *token)
            .collect()
    }
}
