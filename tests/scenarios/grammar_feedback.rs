//! Scenario: Grammar Feedback While Typing
//!
//! Journey: A user types a selector and sees syntax errors as they appear.
//!
//! Steps:
//! 1. Editor starts with a selector document focused
//! 2. User types broken and fixed selectors, with no watch running
//! 3. Diagnostics follow the text
//!
//! Success Criteria:
//! - At most one diagnostic per document
//! - Positions point where the grammar says, clamped to the document
//! - Documents of other languages are left alone

use temme_live::domain::value_objects::{Position, Range};
use temme_live::GrammarCheck;

use crate::common::*;

/// SCENARIO: Activation checks the focused document
#[test]
fn scenario_activate_reports_existing_error() {
    let mut env = LiveEnv::builder()
        .with_active_document("page.temme", UNBALANCED_SELECTOR)
        .build();

    let check = env.engine.activate();

    assert!(matches!(check, Some(GrammarCheck::Invalid(_))));
    assert_eq!(env.diagnostics_for("page.temme").len(), 1);
    assert_eq!(env.status.texts(), vec!["temme: ready"]);
}

/// SCENARIO: Activation with nothing focused only publishes status
#[test]
fn scenario_activate_without_document() {
    let mut env = LiveEnv::builder().build();

    assert_eq!(env.engine.activate(), None);
    assert_eq!(env.status.texts(), vec!["temme: ready"]);
}

/// SCENARIO: Type an error, then fix it
#[test]
fn scenario_diagnostic_follows_text() {
    let mut env = LiveEnv::builder()
        .with_active_document("page.temme", "h1{text}")
        .build();

    let broken = env.edit("page.temme", "h1{text}}");
    let Some(GrammarCheck::Invalid(diagnostic)) = broken.grammar else {
        panic!("expected a diagnostic, got {:?}", broken.grammar);
    };
    assert_eq!(diagnostic.message, "Unexpected '}'");
    assert_eq!(
        diagnostic.range,
        Range::new(Position::new(0, 8), Position::new(0, 9))
    );
    assert_eq!(env.diagnostics_for("page.temme"), vec![diagnostic]);

    let fixed = env.edit("page.temme", "h1{text}");
    assert_eq!(fixed.grammar, Some(GrammarCheck::Clean));
    assert!(env.diagnostics_for("page.temme").is_empty());
}

/// SCENARIO: An error spanning lines ends at the end of its last line
#[test]
fn scenario_multiline_error_range() {
    let mut env = LiveEnv::builder()
        .with_active_document("page.temme", "a{text}")
        .build();

    let handled = env.edit("page.temme", "a{\nb{x}");

    let Some(GrammarCheck::Invalid(diagnostic)) = handled.grammar else {
        panic!("expected a diagnostic, got {:?}", handled.grammar);
    };
    assert_eq!(
        diagnostic.range,
        Range::new(Position::new(0, 1), Position::new(1, 4))
    );
}

/// SCENARIO: An error without a location covers the first line
#[test]
fn scenario_unlocated_error_marks_first_line() {
    let mut env = LiveEnv::builder()
        .with_active_document("page.temme", "h1{text}")
        .build();

    env.edit("page.temme", "h1{text} !!\np{body}");

    let diagnostics = env.diagnostics_for("page.temme");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].range,
        Range::new(Position::new(0, 0), Position::new(0, 11))
    );
}

/// SCENARIO: Only one diagnostic survives consecutive errors
#[test]
fn scenario_new_error_replaces_old() {
    let mut env = LiveEnv::builder()
        .with_active_document("page.temme", "h1{text}")
        .build();

    env.edit("page.temme", "h1{text}}");
    env.edit("page.temme", "h1{text");

    let diagnostics = env.diagnostics_for("page.temme");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Expected '}'");
}

/// SCENARIO: Other languages are not checked
#[test]
fn scenario_other_language_is_ignored() {
    let mut env = LiveEnv::builder()
        .with_active_document("notes.md", "# notes")
        .build();

    let handled = env.edit("notes.md", "{ unbalanced");

    assert_eq!(handled.grammar, None);
    assert!(env.diagnostics.borrow().is_empty());
}
