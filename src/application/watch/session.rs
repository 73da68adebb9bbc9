//! Engine session state
//!
//! One `EngineSession` per engine. It holds the state machine value, a
//! generation counter bumped whenever a watch starts or ends, and the active
//! watch (if any) with everything it owns.

use crate::application::output::OutputHandle;
use crate::domain::entities::FetchedContent;
use crate::domain::ports::{EventSource, ListenerToken};
use crate::domain::value_objects::{DocumentId, ResolvedLink, SessionState};

use super::report::DiscardReason;

/// Listener tokens owned by an active watch
///
/// Not `Clone`: releasing consumes the handles, so each token is given back
/// exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct ListenerHandles {
    pub change: ListenerToken,
    pub lifecycle: ListenerToken,
}

impl ListenerHandles {
    /// Unsubscribe both listeners
    pub fn release<H: EventSource + ?Sized>(self, events: &mut H) -> bool {
        let change = events.unsubscribe(self.change);
        let lifecycle = events.unsubscribe(self.lifecycle);
        change && lifecycle
    }
}

/// Everything a running watch owns
#[derive(Debug)]
pub struct ActiveWatch<D> {
    /// Session generation this watch was installed under
    pub generation: u64,
    pub document: DocumentId,
    pub link: ResolvedLink,
    pub content: FetchedContent,
    /// DOM loaded once from `content`
    pub dom: D,
    pub output: OutputHandle,
    pub listeners: ListenerHandles,
    /// Last issued evaluation revision
    pub revision: u64,
}

impl<D> ActiveWatch<D> {
    pub fn new(
        document: DocumentId,
        content: FetchedContent,
        dom: D,
        output: OutputHandle,
        listeners: ListenerHandles,
    ) -> Self {
        Self {
            generation: 0,
            document,
            link: content.link.clone(),
            content,
            dom,
            output,
            listeners,
            revision: 0,
        }
    }
}

/// Stamp for one deferred evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationTicket {
    pub generation: u64,
    pub revision: u64,
    /// Line the triggering edit started on
    pub changed_line: u32,
}

#[derive(Debug)]
pub struct EngineSession<D> {
    state: SessionState,
    generation: u64,
    watch: Option<ActiveWatch<D>>,
}

impl<D> Default for EngineSession<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> EngineSession<D> {
    pub fn new() -> Self {
        Self {
            state: SessionState::Ready,
            generation: 0,
            watch: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn watch(&self) -> Option<&ActiveWatch<D>> {
        self.watch.as_ref()
    }

    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }

    /// Set the state, returning the previous one
    pub(super) fn set_state(&mut self, next: SessionState) -> SessionState {
        std::mem::replace(&mut self.state, next)
    }

    /// Install a watch under a fresh generation. Returns the displaced
    /// watch, whose listeners the caller must release.
    pub(super) fn install(&mut self, mut watch: ActiveWatch<D>) -> Option<ActiveWatch<D>> {
        self.generation += 1;
        watch.generation = self.generation;
        watch.revision = 0;
        self.watch.replace(watch)
    }

    /// Remove the active watch; outstanding tickets become stale
    pub(super) fn take_watch(&mut self) -> Option<ActiveWatch<D>> {
        let watch = self.watch.take();
        if watch.is_some() {
            self.generation += 1;
        }
        watch
    }

    /// Issue a ticket newer than every ticket issued before it
    pub(super) fn issue_ticket(&mut self, changed_line: u32) -> Option<EvaluationTicket> {
        let watch = self.watch.as_mut()?;
        watch.revision += 1;
        Some(EvaluationTicket {
            generation: watch.generation,
            revision: watch.revision,
            changed_line,
        })
    }

    /// The watch a ticket may still apply to
    pub fn check_ticket(&self, ticket: &EvaluationTicket) -> Result<&ActiveWatch<D>, DiscardReason> {
        let watch = match &self.watch {
            Some(watch) if watch.generation == ticket.generation => watch,
            _ => return Err(DiscardReason::Stale),
        };
        if watch.revision != ticket.revision {
            return Err(DiscardReason::Superseded);
        }
        Ok(watch)
    }
}
