//! Diagnostic Mapper Service
//!
//! Translates grammar locations (1-based line/column) into editor ranges
//! (0-based line/character). The mapping is total: every input, including
//! out-of-range or missing locations, yields a range inside the document.
//!
//! The end of a mapped range always extends to the end of its line, so a
//! fault is highlighted from its start to the end of the line it ends on.

use crate::domain::entities::{Diagnostic, DocumentSnapshot, GrammarError};
use crate::domain::value_objects::{Position, Range, SourceRange};

/// Map a grammar error onto the document it came from
pub fn to_diagnostic(doc: &DocumentSnapshot, error: &GrammarError) -> Diagnostic {
    let range = match error.range {
        Some(source) => map_range(doc, source),
        None => Range::on_line(0, 0, doc.line_len(0)),
    };
    Diagnostic::error(range, error.message.clone())
}

/// Diagnostic spanning one whole line; the line is clamped to the document
pub fn line_diagnostic(doc: &DocumentSnapshot, line: u32, message: impl Into<String>) -> Diagnostic {
    let line = line.min(doc.last_line());
    Diagnostic::error(Range::on_line(line, 0, doc.line_len(line)), message)
}

fn map_range(doc: &DocumentSnapshot, source: SourceRange) -> Range {
    let last = doc.last_line();
    let start = Position::new(
        source.start.line.saturating_sub(1).min(last),
        source.start.column.saturating_sub(1),
    );
    let end_line = source.end.line.saturating_sub(1).min(last);
    let end = Position::new(end_line, doc.line_len(end_line));
    Range::new(start, end)
}
