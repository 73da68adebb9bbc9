//! Live evaluation engine
//!
//! Orchestrates one-shot runs and watch sessions over the domain ports.
//! The engine is synchronous: the host hands it events one at a time (or in
//! batches) and every port call completes before the next event is looked at.

use crate::application::code_actions::{code_actions, CodeAction};
use crate::application::grammar::GrammarAnalyzer;
use crate::application::links::{resolve_link, LinkResolution, NO_LINK_CHOSEN, NO_LINK_FOUND};
use crate::application::output::{OutputHandle, OutputSync};
use crate::config::LiveConfig;
use crate::domain::entities::{DocumentSnapshot, EvaluationOutcome};
use crate::domain::ports::{
    ContentFetcher, DiagnosticSink, EditorEvent, EventSource, Interest, LinkPicker, Notifier,
    SelectorEngine, StatusIndicator, StatusUpdate, Workspace,
};
use crate::domain::services::{line_diagnostic, to_diagnostic};
use crate::domain::value_objects::{Command, DocumentId, ResolvedLink, SessionState};
use crate::error::{LiveError, LiveResult};
use crate::infrastructure::{
    DiagnosticStore, EventHub, TerminalPicker, TracingNotifier, TracingStatus,
};

use super::report::{
    CommandOutcome, DiscardReason, EvaluationReport, GrammarCheck, HandledEvent, RunReport,
    SkipReason, WatchReport, NOT_SELECTOR_DOCUMENT, NO_FILE_OPENED, OUTPUT_CLOSED, RUN_SUCCEEDED,
};
use super::session::{ActiveWatch, EngineSession, EvaluationTicket, ListenerHandles};

pub struct LiveEngine<E, W, F, H = EventHub>
where
    E: SelectorEngine,
    W: Workspace,
    F: ContentFetcher,
    H: EventSource,
{
    engine: E,
    workspace: W,
    fetcher: F,
    events: H,
    diagnostics: Box<dyn DiagnosticSink>,
    picker: Box<dyn LinkPicker>,
    notifier: Box<dyn Notifier>,
    status: Box<dyn StatusIndicator>,
    output: OutputSync,
    config: LiveConfig,
    session: EngineSession<E::Dom>,
}

impl<E, W, F> LiveEngine<E, W, F, EventHub>
where
    E: SelectorEngine,
    W: Workspace,
    F: ContentFetcher,
{
    pub fn new(engine: E, workspace: W, fetcher: F) -> Self {
        Self::with_event_source(engine, workspace, fetcher, EventHub::new())
    }
}

impl<E, W, F, H> LiveEngine<E, W, F, H>
where
    E: SelectorEngine,
    W: Workspace,
    F: ContentFetcher,
    H: EventSource,
{
    pub fn with_event_source(engine: E, workspace: W, fetcher: F, events: H) -> Self {
        let config = LiveConfig::default();
        Self {
            engine,
            workspace,
            fetcher,
            events,
            diagnostics: Box::new(DiagnosticStore::new()),
            picker: Box::new(TerminalPicker::new()),
            notifier: Box::new(TracingNotifier),
            status: Box::new(TracingStatus::new()),
            output: OutputSync::new(config.output_suffix.clone()),
            config,
            session: EngineSession::new(),
        }
    }

    pub fn with_config(mut self, config: LiveConfig) -> Self {
        self.output = OutputSync::new(config.output_suffix.clone());
        self.config = config;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    pub fn with_picker(mut self, picker: impl LinkPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_status(mut self, status: impl StatusIndicator + 'static) -> Self {
        self.status = Box::new(status);
        self
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn session(&self) -> &EngineSession<E::Dom> {
        &self.session
    }

    pub fn config(&self) -> &LiveConfig {
        &self.config
    }

    pub fn workspace(&self) -> &W {
        &self.workspace
    }

    pub fn workspace_mut(&mut self) -> &mut W {
        &mut self.workspace
    }

    pub fn events(&self) -> &H {
        &self.events
    }

    /// Publish the initial status and check the active document's grammar
    pub fn activate(&mut self) -> Option<GrammarCheck> {
        let state = self.session.state();
        self.transition(state);
        let active = self.workspace.active_document()?;
        self.detect_grammar_errors(&active.id)
    }

    /// Dispatch an editor command. `argument` is a link passed by a code action.
    pub fn execute(
        &mut self,
        command: Command,
        argument: Option<String>,
    ) -> LiveResult<CommandOutcome> {
        let link = match argument.map(|a| a.trim().to_string()) {
            Some(target) if !target.is_empty() => Some(self.checked_link(target)?),
            _ => None,
        };

        match command {
            Command::RunSelector => self.run_selector(link).map(CommandOutcome::Run),
            Command::StartWatch => self.start_watch(link).map(CommandOutcome::Watch),
            Command::StopWatch => Ok(CommandOutcome::Stopped(self.stop_watch())),
        }
    }

    /// A command argument must name a file or an http(s) resource
    fn checked_link(&self, target: String) -> LiveResult<ResolvedLink> {
        let link = ResolvedLink::bare(target);
        match link.kind(None) {
            Ok(_) => Ok(link),
            Err(err) => Err(self.report(LiveError::InvalidLink {
                link: link.target,
                reason: err.to_string(),
            })),
        }
    }

    /// Code actions for a line of an open document
    pub fn code_actions(&self, document: &DocumentId, line: u32) -> Vec<CodeAction> {
        match self.workspace.document(document) {
            Some(doc) => code_actions(&doc, line, &self.config.language_id),
            None => Vec::new(),
        }
    }

    /// Fetch, evaluate once, and write the output
    pub fn run_selector(&mut self, link: Option<ResolvedLink>) -> LiveResult<RunReport> {
        let state = self.session.state();
        if !state.is_ready() {
            return Err(LiveError::Busy { state });
        }

        let (document, link) = match self.prepare(link) {
            Ok(prepared) => prepared,
            Err(reason) => return Ok(RunReport::Skipped(reason)),
        };

        self.transition(SessionState::Running);
        let result = self.run_once(&document, &link);
        self.transition(SessionState::Ready);

        match result {
            Ok(output) => {
                tracing::info!(document = %document.id, output = %output.path.display(), "selector run complete");
                self.notifier.info(RUN_SUCCEEDED);
                Ok(RunReport::Completed { output })
            }
            Err(err) => Err(self.report(err)),
        }
    }

    fn run_once(&mut self, document: &DocumentSnapshot, link: &ResolvedLink) -> LiveResult<OutputHandle> {
        let content = self.fetcher.fetch(link, document.directory())?;
        let dom = self.engine.load(&content.html);

        let value = match GrammarAnalyzer::new(&self.engine).evaluate(&dom, &document.text) {
            EvaluationOutcome::Success(value) => value,
            EvaluationOutcome::SyntaxFailure { message, .. } => {
                return Err(LiveError::Syntax { message })
            }
            EvaluationOutcome::RuntimeFailure { message, .. } => {
                return Err(LiveError::Evaluation { message })
            }
        };

        let output = self.output.open(&mut self.workspace, document)?;
        self.output.write(&mut self.workspace, &output, &value)?;
        Ok(output)
    }

    /// Bind a link to the active document and keep its output current
    pub fn start_watch(&mut self, link: Option<ResolvedLink>) -> LiveResult<WatchReport> {
        let state = self.session.state();
        if state == SessionState::Running {
            return Err(LiveError::Busy { state });
        }
        self.stop_watch();

        let (document, link) = match self.prepare(link) {
            Ok(prepared) => prepared,
            Err(reason) => return Ok(WatchReport::Skipped(reason)),
        };

        let content = match self.fetcher.fetch(&link, document.directory()) {
            Ok(content) => content,
            Err(err) => return Err(self.report(err.into())),
        };
        let dom = self.engine.load(&content.html);

        let output = match self.output.open(&mut self.workspace, &document) {
            Ok(output) => output,
            Err(err) => return Err(self.report(err)),
        };

        let listeners = ListenerHandles {
            change: self.events.subscribe(Interest::changes_of(document.id.clone())),
            lifecycle: self.events.subscribe(Interest::lifecycle()),
        };
        let watch = ActiveWatch::new(document.id.clone(), content, dom, output.clone(), listeners);
        if let Some(displaced) = self.session.install(watch) {
            displaced.listeners.release(&mut self.events);
        }
        self.transition(SessionState::Watching);
        tracing::info!(document = %document.id, link = %link, "watch started");

        let initial = match self.begin_evaluation(0) {
            Some(ticket) => self.complete_evaluation(ticket),
            None => EvaluationReport::Discarded(DiscardReason::Stale),
        };

        Ok(WatchReport::Started {
            document: document.id,
            link,
            output,
            initial,
        })
    }

    /// End the watch, releasing its listeners. No-op when not watching.
    pub fn stop_watch(&mut self) -> bool {
        let Some(watch) = self.session.take_watch() else {
            return false;
        };
        watch.listeners.release(&mut self.events);
        tracing::info!(document = %watch.document, "watch stopped");
        self.transition(SessionState::Ready);
        true
    }

    /// Route one editor event
    pub fn handle_event(&mut self, event: &EditorEvent) -> HandledEvent {
        let mut handled = HandledEvent::default();
        let ticket = self.accept(event, &mut handled);
        if let Some(ticket) = ticket {
            handled.evaluation = Some(self.complete_evaluation(ticket));
        }
        handled
    }

    /// Route a batch: every edit gets a ticket first, so only the latest
    /// edit of the batch writes output
    pub fn handle_events(&mut self, events: &[EditorEvent]) -> Vec<HandledEvent> {
        let mut results = vec![HandledEvent::default(); events.len()];
        let mut pending = Vec::new();

        for (index, event) in events.iter().enumerate() {
            if let Some(ticket) = self.accept(event, &mut results[index]) {
                pending.push((index, ticket));
            }
        }
        for (index, ticket) in pending {
            results[index].evaluation = Some(self.complete_evaluation(ticket));
        }
        results
    }

    /// Grammar check, lifecycle handling, and ticket issue for one event
    fn accept(&mut self, event: &EditorEvent, handled: &mut HandledEvent) -> Option<EvaluationTicket> {
        if let EditorEvent::DocumentChanged { document, .. } = event {
            handled.grammar = self.detect_grammar_errors(document);
        }

        let (change, lifecycle) = self
            .session
            .watch()
            .map(|w| (w.listeners.change, w.listeners.lifecycle))?;
        let routed = self.events.route(event);
        tracing::debug!(kind = ?event.kind(), listeners = routed.len(), "event routed");

        let mut ticket = None;
        if routed.contains(&change) {
            ticket = self.begin_evaluation(event.changed_line().unwrap_or(0));
        }
        if routed.contains(&lifecycle) {
            handled.stopped = self.stop_if_output_closed();
        }
        ticket
    }

    fn stop_if_output_closed(&mut self) -> bool {
        let output = match self.session.watch() {
            Some(watch) => watch.output.id.clone(),
            None => return false,
        };
        if self.workspace.is_open(&output) {
            return false;
        }
        self.stop_watch();
        self.notifier.info(OUTPUT_CLOSED);
        true
    }

    /// First phase of an evaluation: stamp a ticket. `None` when not watching.
    pub fn begin_evaluation(&mut self, changed_line: u32) -> Option<EvaluationTicket> {
        self.session.issue_ticket(changed_line)
    }

    /// Second phase: evaluate the current text if the ticket is still current
    pub fn complete_evaluation(&mut self, ticket: EvaluationTicket) -> EvaluationReport {
        let watch = match self.session.check_ticket(&ticket) {
            Ok(watch) => watch,
            Err(reason) => {
                tracing::debug!(?reason, revision = ticket.revision, "evaluation discarded");
                return EvaluationReport::Discarded(reason);
            }
        };
        let Some(doc) = self.workspace.document(&watch.document) else {
            return EvaluationReport::Discarded(DiscardReason::DocumentUnavailable);
        };

        match GrammarAnalyzer::new(&self.engine).evaluate(&watch.dom, &doc.text) {
            EvaluationOutcome::Success(value) => {
                match self.output.write(&mut self.workspace, &watch.output, &value) {
                    Ok(()) => {
                        self.diagnostics.clear(&doc.id);
                        EvaluationReport::Written
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "cannot update output");
                        let message = err.to_string();
                        self.notifier.error(&message);
                        EvaluationReport::OutputFailed { message }
                    }
                }
            }
            EvaluationOutcome::SyntaxFailure { .. } => EvaluationReport::SyntaxSuppressed,
            EvaluationOutcome::RuntimeFailure { message, .. } => {
                tracing::warn!(line = ticket.changed_line, error = %message, "evaluation failed");
                let diagnostic = line_diagnostic(&doc, ticket.changed_line, message.clone());
                let line = diagnostic.range.start.line;
                self.diagnostics.set(&doc.id, vec![diagnostic]);
                EvaluationReport::Failed { line, message }
            }
        }
    }

    /// Parse a selector document and publish (or clear) its diagnostic
    pub fn detect_grammar_errors(&mut self, document: &DocumentId) -> Option<GrammarCheck> {
        let doc = self.workspace.document(document)?;
        if doc.language_id != self.config.language_id {
            return None;
        }

        match GrammarAnalyzer::new(&self.engine).check(&doc.text) {
            Ok(()) => {
                self.diagnostics.clear(&doc.id);
                Some(GrammarCheck::Clean)
            }
            Err(error) => {
                let diagnostic = to_diagnostic(&doc, &error);
                self.diagnostics.set(&doc.id, vec![diagnostic.clone()]);
                Some(GrammarCheck::Invalid(diagnostic))
            }
        }
    }

    /// Active selector document and the link to use with it
    fn prepare(
        &mut self,
        link: Option<ResolvedLink>,
    ) -> Result<(DocumentSnapshot, ResolvedLink), SkipReason> {
        let Some(document) = self.workspace.active_document() else {
            self.notifier.warn(NO_FILE_OPENED);
            return Err(SkipReason::NoActiveDocument);
        };
        if document.language_id != self.config.language_id {
            self.notifier.warn(NOT_SELECTOR_DOCUMENT);
            return Err(SkipReason::NotSelectorDocument);
        }

        if let Some(link) = link {
            return Ok((document, link));
        }
        match resolve_link(&document.text, self.picker.as_ref(), self.config.link_scan_limit) {
            LinkResolution::Resolved(link) => Ok((document, link)),
            LinkResolution::NoLinkFound => {
                self.notifier.info(NO_LINK_FOUND);
                Err(SkipReason::NoLinkFound)
            }
            LinkResolution::NoLinkChosen => {
                self.notifier.info(NO_LINK_CHOSEN);
                Err(SkipReason::NoLinkChosen)
            }
        }
    }

    /// The only place session state changes; mirrors it to the status indicator
    fn transition(&mut self, next: SessionState) {
        let previous = self.session.set_state(next);
        if previous != next {
            tracing::debug!(from = %previous, to = %next, "session state changed");
        }
        self.status.update(&StatusUpdate::for_state(next));
    }

    fn report(&self, err: LiveError) -> LiveError {
        tracing::warn!(error = %err, "operation failed");
        self.notifier.error(&err.to_string());
        err
    }
}
