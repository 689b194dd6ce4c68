use std::fmt;

/// 1-based location inside the mapping text.
///
/// The column is refreshed at every token match attempt and counts bytes,
/// so tabs and multi-byte characters make it approximate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// What went wrong while parsing mapping text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line matches no statement form or has trailing content.
    #[error("parse error")]
    Malformed,

    /// An integer literal reached the 32-bit limits.
    #[error("integer overflow")]
    Overflow,

    /// An index or target is out of bounds, or a range has `start > end`.
    #[error("value out of bounds: {0}")]
    BadValue(i32),

    /// Reading a line or growing the table could not get memory.
    #[error("insufficient memory")]
    OutOfMemory,

    /// The line source failed for another reason.
    #[error("read error: {0}")]
    Io(String),
}

/// A parse failure together with where it happened.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} ({pos})")]
pub struct ParseError {
    /// Failure kind.
    pub kind: ParseErrorKind,
    /// Parser position when the failure was raised.
    pub pos: Position,
}

impl ParseError {
    /// Build a [`ParseError`].
    pub fn new(kind: ParseErrorKind, pos: Position) -> Self {
        Self { kind, pos }
    }
}
