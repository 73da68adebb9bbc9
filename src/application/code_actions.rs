//! Code actions offered on tagged-link lines

use crate::domain::entities::DocumentSnapshot;
use crate::domain::services::tagged_link;
use crate::domain::value_objects::{Command, ResolvedLink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeAction {
    pub title: String,
    pub command: Command,
    pub link: ResolvedLink,
}

impl CodeAction {
    /// Argument passed to the command when the action is applied
    pub fn argument(&self) -> &str {
        &self.link.target
    }
}

/// Actions for `line` of a selector document of `language_id`
pub fn code_actions(doc: &DocumentSnapshot, line: u32, language_id: &str) -> Vec<CodeAction> {
    if doc.language_id != language_id {
        return Vec::new();
    }
    let Some(link) = doc.line(line).and_then(tagged_link) else {
        return Vec::new();
    };
    let tag = link.tag.clone().unwrap_or_default();

    vec![
        CodeAction {
            title: format!("Run selector {}", tag),
            command: Command::RunSelector,
            link: link.clone(),
        },
        CodeAction {
            title: format!("Start watching {}", tag),
            command: Command::StartWatch,
            link,
        },
    ]
}
