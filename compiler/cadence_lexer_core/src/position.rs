//! Source positions and the tracker that derives them.
//!
//! A [`Position`] is a `(line, column, offset)` triple:
//!
//! | Field | Base | Unit |
//! |-------|------|------|
//! | `line` | 1 | incremented on every `\n` |
//! | `column` | 0 | code points since the last line start |
//! | `offset` | 0 | bytes from the start of the input |
//!
//! Offsets are byte-based so consumers can slice the input directly;
//! columns are code-point based so diagnostics line up with what an editor
//! shows.

use std::fmt;

/// A location in the source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    /// Position of the first code point of any input.
    pub const START: Position = Position {
        line: 1,
        column: 0,
        offset: 0,
    };

    #[inline]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.line, self.column, self.offset)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The extent of a token.
///
/// `end` is *inclusive*: it is the position of the token's last code point,
/// and `end.offset` is the index of that code point's last byte. Zero-width
/// tokens (EOF, error markers) have `start == end`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }

    /// A zero-width range at `position`.
    #[inline]
    pub const fn point(position: Position) -> Self {
        Range {
            start: position,
            end: position,
        }
    }

    /// Half-open byte range covered by a non-empty token.
    ///
    /// For zero-width ranges this is the single byte at `start.offset`.
    #[inline]
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start.offset..self.end.offset + 1
    }

    /// The source text this range covers, if it lies within `input`.
    pub fn source_text<'a>(&self, input: &'a str) -> Option<&'a str> {
        input.get(self.byte_range())
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Tracks the line and column of the emission point.
///
/// The tracker never scans ahead of the scanner. On every emission it walks
/// only the emitted token's text, so the total work over a lex is linear in
/// the input length.
#[derive(Clone, Debug)]
pub struct PositionTracker {
    line: usize,
    column: usize,
}

impl PositionTracker {
    pub fn new() -> Self {
        PositionTracker { line: 1, column: 0 }
    }

    /// Position of the emission point, located at byte `offset`.
    #[inline]
    pub fn position_at(&self, offset: usize) -> Position {
        Position::new(self.line, self.column, offset)
    }

    /// Position of the last code point of `text`, which starts at the
    /// emission point (byte `offset`). Does not advance.
    ///
    /// Empty text yields the emission point itself.
    pub fn end_of(&self, text: &str, offset: usize) -> Position {
        let Some((last, _)) = text.char_indices().next_back() else {
            return self.position_at(offset);
        };
        let (line, column) = walk(self.line, self.column, &text[..last]);
        Position::new(line, column, offset + text.len() - 1)
    }

    /// Range of `text` starting at byte `offset`, advancing past it.
    pub fn consume(&mut self, text: &str, offset: usize) -> Range {
        let start = self.position_at(offset);
        let end = self.end_of(text, offset);
        match text.chars().next_back() {
            Some('\n') => {
                self.line = end.line + 1;
                self.column = 0;
            }
            Some(_) => {
                self.line = end.line;
                self.column = end.column + 1;
            }
            None => {}
        }
        Range::new(start, end)
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance `(line, column)` over every code point of `text`.
fn walk(line: usize, column: usize, text: &str) -> (usize, usize) {
    let bytes = text.as_bytes();
    match memchr::memrchr(b'\n', bytes) {
        Some(last_newline) => (
            line + memchr::memchr_iter(b'\n', bytes).count(),
            text[last_newline + 1..].chars().count(),
        ),
        None => (line, column + text.chars().count()),
    }
}

#[cfg(test)]
mod tests;
