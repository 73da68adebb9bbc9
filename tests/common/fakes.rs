//! Test doubles for the engine's ports.
//!
//! `FakeEngine` understands a deliberately tiny selector language:
//!
//! - `tag{field}` extracts the inner text of the first `<tag>...</tag>`
//! - `fail()` parses but fails at evaluation time
//! - `!!` anywhere is a syntax error without a location
//! - lines starting with `//` are comments
//!
//! Braces must balance; the first unbalanced brace is reported with 1-based
//! line/column points the way a real grammar would.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use serde_json::{Map, Value};

use temme_live::domain::entities::FetchedContent;
use temme_live::domain::ports::{
    ContentFetcher, EngineFault, FaultLocation, FetchCause, FetchError, LinkPicker, Notifier,
    SelectorEngine, StatusIndicator, StatusUpdate,
};
use temme_live::domain::value_objects::{ResolvedLink, SourcePoint};

// === Selector engine ===

#[derive(Debug, Default)]
pub struct FakeEngine {
    loads: Rc<Cell<usize>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared counter of `load` calls
    pub fn loads(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.loads)
    }
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn check_braces(selector: &str) -> Result<(), EngineFault> {
    let mut open: Vec<SourcePoint> = Vec::new();
    let mut last = SourcePoint::new(1, 1);

    for (index, line) in selector.split('\n').enumerate() {
        let line_no = to_u32(index + 1);
        last = SourcePoint::new(line_no, to_u32(line.chars().count() + 1));
        if is_comment(line) {
            continue;
        }
        for (col, ch) in line.chars().enumerate() {
            let here = SourcePoint::new(line_no, to_u32(col + 1));
            match ch {
                '{' => open.push(here),
                '}' => {
                    if open.pop().is_none() {
                        let after = SourcePoint::new(line_no, here.column + 1);
                        return Err(EngineFault::syntax(
                            "Unexpected '}'",
                            Some(FaultLocation::span(here, after)),
                        ));
                    }
                }
                _ => {}
            }
        }
    }

    match open.first() {
        Some(start) => Err(EngineFault::syntax(
            "Expected '}'",
            Some(FaultLocation::span(*start, last)),
        )),
        None => Ok(()),
    }
}

fn inner_text(html: &str, tag: &str) -> Option<String> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let start = html.find(&open)? + open.len();
    let end = html[start..].find(&close)? + start;
    Some(html[start..end].to_string())
}

impl SelectorEngine for FakeEngine {
    type Ast = usize;
    type Dom = String;

    fn parse(&self, selector: &str) -> Result<usize, EngineFault> {
        if selector.contains("!!") {
            return Err(EngineFault::syntax("Unexpected token '!'", None));
        }
        check_braces(selector)?;
        Ok(selector.lines().filter(|l| !is_comment(l)).count())
    }

    fn load(&self, html: &str) -> String {
        self.loads.set(self.loads.get() + 1);
        html.to_string()
    }

    fn evaluate(&self, dom: &String, selector: &str) -> Result<Value, EngineFault> {
        self.parse(selector)?;

        let mut result = Map::new();
        for line in selector.lines().map(str::trim) {
            if line.is_empty() || is_comment(line) || line.contains("://") || line.contains('<') {
                continue;
            }
            if line == "fail()" {
                return Err(EngineFault::runtime("Error", "fail() is not a filter"));
            }
            let Some((tag, rest)) = line.split_once('{') else {
                continue;
            };
            let field = rest.trim_end_matches('}');
            let value = inner_text(dom, tag.trim())
                .map(Value::String)
                .unwrap_or(Value::Null);
            result.insert(field.to_string(), value);
        }
        Ok(Value::Object(result))
    }
}

// === Fetcher ===

/// Serves pages from memory and counts fetches
#[derive(Debug, Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    calls: Rc<Cell<usize>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, target: &str, html: &str) -> Self {
        self.pages.insert(target.to_string(), html.to_string());
        self
    }

    /// Shared counter of `fetch` calls
    pub fn calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl ContentFetcher for FakeFetcher {
    fn fetch(
        &self,
        link: &ResolvedLink,
        _base_dir: Option<&Path>,
    ) -> Result<FetchedContent, FetchError> {
        self.calls.set(self.calls.get() + 1);
        match self.pages.get(&link.target) {
            Some(html) => Ok(FetchedContent::new(link.clone(), html.clone())),
            None => Err(FetchError::new(link, FetchCause::Status(404))),
        }
    }
}

// === Interaction ports ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Error,
}

/// Keeps every notification in order
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<(NoticeLevel, String)>>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.borrow().clone()
    }

    pub fn messages(&self, level: NoticeLevel) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_string()));
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str) {
        self.push(NoticeLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(NoticeLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(NoticeLevel::Error, message);
    }
}

/// Keeps every status update in order
#[derive(Debug, Clone, Default)]
pub struct RecordingStatus {
    updates: Rc<RefCell<Vec<StatusUpdate>>>,
}

impl RecordingStatus {
    pub fn updates(&self) -> Vec<StatusUpdate> {
        self.updates.borrow().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.updates.borrow().iter().map(|u| u.text.clone()).collect()
    }

    pub fn last(&self) -> Option<StatusUpdate> {
        self.updates.borrow().last().cloned()
    }
}

impl StatusIndicator for RecordingStatus {
    fn update(&self, status: &StatusUpdate) {
        self.updates.borrow_mut().push(status.clone());
    }
}

/// Answers every prompt the same way and remembers what it was shown
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    answer: Option<usize>,
    shown: Rc<RefCell<Vec<Vec<String>>>>,
}

impl ScriptedPicker {
    pub fn answering(answer: Option<usize>) -> Self {
        Self {
            answer,
            shown: Rc::default(),
        }
    }

    /// Option lists, one per prompt
    pub fn prompts(&self) -> Vec<Vec<String>> {
        self.shown.borrow().clone()
    }
}

impl LinkPicker for ScriptedPicker {
    fn pick(&self, options: &[String], _placeholder: &str) -> Option<usize> {
        self.shown.borrow_mut().push(options.to_vec());
        self.answer
    }
}
