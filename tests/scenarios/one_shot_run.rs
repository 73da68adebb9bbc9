//! Scenario: One-Shot Selector Run
//!
//! Journey: A user writes a selector next to a link and runs it once.
//!
//! Steps:
//! 1. User opens a selector document with a tagged link
//! 2. Runs the selector
//! 3. Reads the JSON result beside the document
//!
//! Success Criteria:
//! - Output lands in `<name>.json` as pretty JSON
//! - Every early exit tells the user why
//! - The engine is ready again afterwards

use std::fs;

use temme_live::domain::value_objects::{ResolvedLink, SessionState};
use temme_live::infrastructure::TerminalPicker;
use temme_live::{
    Command, CommandOutcome, FsWorkspace, LiveEngine, LiveError, RunReport, SkipReason,
    SourceFetcher,
};

use crate::common::*;

/// SCENARIO: Run a tagged selector against a remote page
#[test]
fn scenario_run_writes_pretty_json_beside_document() {
    let mut env = LiveEnv::builder()
        .with_example_page()
        .with_active_document("page.temme", TAGGED_SELECTOR)
        .build();

    let report = env.engine.run_selector(None).unwrap();

    let RunReport::Completed { output } = report else {
        panic!("expected a completed run, got {:?}", report);
    };
    assert_eq!(output.id, env.output_id("page.temme"));
    insta::assert_snapshot!(env.output_on_disk("page.temme").unwrap(), @r###"
    {
      "text": "Hi"
    }
    "###);
    assert_eq!(env.notices.messages(NoticeLevel::Info), vec!["Success"]);
    assert_eq!(env.engine.state(), SessionState::Ready);
    assert_eq!(env.fetches.get(), 1);
}

/// SCENARIO: The output is revealed next to the selector
#[test]
fn scenario_run_reveals_output() {
    let mut env = LiveEnv::builder()
        .with_example_page()
        .with_active_document("page.temme", TAGGED_SELECTOR)
        .build();

    env.engine.run_selector(None).unwrap();

    let output = env.output_id("page.temme");
    let visible = env.engine.workspace().visible_documents();
    assert!(visible.contains(&env.id("page.temme")));
    assert!(visible.contains(&output));
}

/// SCENARIO: Status shows running, then ready
#[test]
fn scenario_run_reports_progress_in_status() {
    let mut env = LiveEnv::builder()
        .with_example_page()
        .with_active_document("page.temme", TAGGED_SELECTOR)
        .build();

    env.engine.run_selector(None).unwrap();

    assert_eq!(env.status.texts(), vec!["temme: running", "temme: ready"]);
    let running = &env.status.updates()[0];
    assert!(running.busy);
    assert_eq!(running.cancel_command, Some(Command::StopWatch));
}

/// SCENARIO: A document without links
#[test]
fn scenario_run_without_links_tells_user() {
    let mut env = LiveEnv::builder()
        .with_example_page()
        .with_active_document("page.temme", LINKLESS_SELECTOR)
        .build();

    let report = env.engine.run_selector(None).unwrap();

    assert_eq!(report, RunReport::Skipped(SkipReason::NoLinkFound));
    assert_eq!(
        env.notices.messages(NoticeLevel::Info),
        vec!["No link is found in current file."]
    );
    assert_eq!(env.fetches.get(), 0);
    assert!(env.output_on_disk("page.temme").is_none());
    assert!(env.status.updates().is_empty());
}

/// SCENARIO: Nothing is open
#[test]
fn scenario_run_without_active_document() {
    let mut env = LiveEnv::builder().with_example_page().build();

    let report = env.engine.run_selector(None).unwrap();

    assert_eq!(report, RunReport::Skipped(SkipReason::NoActiveDocument));
    assert_eq!(env.notices.messages(NoticeLevel::Warn), vec!["No file opened."]);
}

/// SCENARIO: The focused document is not a selector document
#[test]
fn scenario_run_on_other_language_is_refused() {
    let mut env = LiveEnv::builder()
        .with_example_page()
        .with_active_document("notes.md", TAGGED_SELECTOR)
        .build();

    let report = env.engine.run_selector(None).unwrap();

    assert_eq!(report, RunReport::Skipped(SkipReason::NotSelectorDocument));
    assert_eq!(env.notices.messages(NoticeLevel::Warn), vec!["Not a temme file."]);
    assert_eq!(env.fetches.get(), 0);
}

/// SCENARIO: Several links, user picks the second
#[test]
fn scenario_run_asks_which_link() {
    let mut env = LiveEnv::builder()
        .with_example_page()
        .with_page(LIST_URL, LIST_PAGE)
        .with_active_document("list.temme", TWO_LINK_SELECTOR)
        .picking(Some(1))
        .build();

    env.engine.run_selector(None).unwrap();

    assert_eq!(
        env.picker.prompts(),
        vec![vec![
            "<example> https://example.com".to_string(),
            "<list> https://example.com/list".to_string(),
        ]]
    );
    let json: serde_json::Value =
        serde_json::from_str(&env.output_on_disk("list.temme").unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({ "item": "one" }));
}

/// SCENARIO: Several links, user dismisses the picker
#[test]
fn scenario_run_dismissed_picker_says_so() {
    let mut env = LiveEnv::builder()
        .with_example_page()
        .with_page(LIST_URL, LIST_PAGE)
        .with_active_document("list.temme", TWO_LINK_SELECTOR)
        .picking(None)
        .build();

    let report = env.engine.run_selector(None).unwrap();

    assert_eq!(report, RunReport::Skipped(SkipReason::NoLinkChosen));
    assert_eq!(env.fetches.get(), 0);
    assert_eq!(env.notices.messages(NoticeLevel::Info), vec!["No link chosen."]);
    assert!(env.notices.messages(NoticeLevel::Error).is_empty());
    assert!(env.status.updates().is_empty());
}

/// SCENARIO: The page cannot be downloaded
#[test]
fn scenario_run_reports_fetch_failure() {
    let mut env = LiveEnv::builder()
        .with_active_document("page.temme", TAGGED_SELECTOR)
        .build();

    let err = env.engine.run_selector(None).unwrap_err();

    assert!(matches!(err, LiveError::Fetch(_)));
    let errors = env.notices.messages(NoticeLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("cannot download html from https://example.com"));
    assert_eq!(env.engine.state(), SessionState::Ready);
    assert!(env.output_on_disk("page.temme").is_none());
}

/// SCENARIO: The selector fails while evaluating
#[test]
fn scenario_run_reports_evaluation_failure() {
    let mut env = LiveEnv::builder()
        .with_example_page()
        .with_active_document("page.temme", FAILING_SELECTOR)
        .build();

    let err = env.engine.run_selector(None).unwrap_err();

    assert!(matches!(err, LiveError::Evaluation { .. }));
    assert_eq!(
        env.notices.messages(NoticeLevel::Error),
        vec!["evaluation failed: fail() is not a filter"]
    );
    assert_eq!(env.engine.state(), SessionState::Ready);
}

/// SCENARIO: The code action on a tagged line runs that link
#[test]
fn scenario_code_action_runs_its_link() {
    let mut env = LiveEnv::builder()
        .with_example_page()
        .with_page(LIST_URL, LIST_PAGE)
        .with_active_document("list.temme", TWO_LINK_SELECTOR)
        .picking(None)
        .build();

    let actions = env.engine.code_actions(&env.id("list.temme"), 1);
    assert_eq!(actions.len(), 2);
    let run = &actions[0];
    assert_eq!(run.command, Command::RunSelector);

    let outcome = env
        .engine
        .execute(run.command, Some(run.argument().to_string()))
        .unwrap();

    assert!(matches!(outcome, CommandOutcome::Run(RunReport::Completed { .. })));
    // the link came with the action, so nobody was asked
    assert!(env.picker.prompts().is_empty());
    assert!(env.output_on_disk("list.temme").unwrap().contains("\"one\""));
}

/// SCENARIO: A run while watching is refused
#[test]
fn scenario_run_refused_while_watching() {
    let mut env = LiveEnv::builder()
        .with_example_page()
        .with_active_document("page.temme", TAGGED_SELECTOR)
        .build();
    env.engine.start_watch(None).unwrap();

    let err = env.engine.run_selector(None).unwrap_err();

    assert!(matches!(
        err,
        LiveError::Busy {
            state: SessionState::Watching
        }
    ));
    assert_eq!(env.engine.state(), SessionState::Watching);
}

/// SCENARIO: End-to-end with the real file fetcher and a relative link
#[test]
fn scenario_run_with_local_html_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("pages")).unwrap();
    fs::write(dir.path().join("pages/index.html"), EXAMPLE_PAGE).unwrap();
    let selector = dir.path().join("page.temme");
    fs::write(&selector, "// <local> pages/index.html\nh1{text}\np{body}").unwrap();

    let mut workspace = FsWorkspace::new();
    let id = workspace.open_path(&selector).unwrap();
    workspace.set_active(&id).unwrap();
    let mut engine = LiveEngine::new(FakeEngine::new(), workspace, SourceFetcher::default())
        .with_picker(TerminalPicker::disabled())
        .with_notifier(RecordingNotifier::default())
        .with_status(RecordingStatus::default());

    let report = engine.run_selector(None).unwrap();

    assert!(matches!(report, RunReport::Completed { .. }));
    let written = fs::read_to_string(dir.path().join("page.temme.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "text": "Hi", "body": "First paragraph" })
    );
}

/// SCENARIO: An explicit link overrides the document's links
#[test]
fn scenario_explicit_link_skips_extraction() {
    let mut env = LiveEnv::builder()
        .with_page(LIST_URL, LIST_PAGE)
        .with_active_document("list.temme", "li{item}")
        .build();

    let report = env
        .engine
        .run_selector(Some(ResolvedLink::bare(LIST_URL)))
        .unwrap();

    assert!(matches!(report, RunReport::Completed { .. }));
    assert!(env.notices.messages(NoticeLevel::Warn).is_empty());
}

/// SCENARIO: A command argument with an unknown scheme is refused up front
#[test]
fn scenario_command_with_unsupported_link() {
    let mut env = LiveEnv::builder()
        .with_example_page()
        .with_active_document("page.temme", TAGGED_SELECTOR)
        .build();

    let err = env
        .engine
        .execute(Command::StartWatch, Some("ftp://example.com/page".to_string()))
        .unwrap_err();

    assert!(matches!(err, LiveError::InvalidLink { .. }));
    assert_eq!(
        env.notices.messages(NoticeLevel::Error),
        vec!["invalid link 'ftp://example.com/page': unsupported scheme 'ftp'"]
    );
    assert_eq!(env.fetches.get(), 0);
    assert_eq!(env.engine.state(), SessionState::Ready);
}
