//! Coordinates in the two spaces the engine translates between
//!
//! - [`Position`] / [`Range`]: 0-based editor coordinates (line, character)
//! - [`SourcePoint`] / [`SourceRange`]: 1-based grammar coordinates (line, column)

use serde::{Deserialize, Serialize};

/// 0-based editor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// 0-based editor range, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Range covering `start_char..end_char` on a single line
    pub const fn on_line(line: u32, start_char: u32, end_char: u32) -> Self {
        Self {
            start: Position::new(line, start_char),
            end: Position::new(line, end_char),
        }
    }
}

/// 1-based location reported by the selector grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePoint {
    pub line: u32,
    pub column: u32,
}

impl SourcePoint {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// 1-based source range reported by the selector grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: SourcePoint,
    pub end: SourcePoint,
}

impl SourceRange {
    pub const fn new(start: SourcePoint, end: SourcePoint) -> Self {
        Self { start, end }
    }
}
