//! Lexed tokens.
//!
//! Tokens borrow their text from the input, so a `Token` is `Copy` and the
//! token buffer never owns source text.

use std::fmt;

use cadence_lexer_core::Range;

use crate::kind::TokenKind;
use crate::lex_error::LexError;

/// A run of whitespace.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize))]
pub struct Space<'src> {
    pub text: &'src str,
    /// Whether the run crosses at least one `\n`.
    pub contains_newline: bool,
}

/// Payload of a token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize))]
pub enum TokenValue<'src> {
    /// Syntax tokens and EOF.
    None,
    /// Source text of identifiers, literals, and comments.
    Text(&'src str),
    Space(Space<'src>),
    /// Diagnostic of an `Error` token.
    Error(LexError),
}

/// A classified, positioned unit of source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize))]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub value: TokenValue<'src>,
    pub range: Range,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, value: TokenValue<'src>, range: Range) -> Self {
        Token { kind, value, range }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Source text carried by the token (text payload or space run).
    pub fn text(&self) -> Option<&'src str> {
        match self.value {
            TokenValue::Text(text) => Some(text),
            TokenValue::Space(space) => Some(space.text),
            TokenValue::None | TokenValue::Error(_) => None,
        }
    }

    /// Diagnostic of an `Error` token.
    pub fn error(&self) -> Option<LexError> {
        match self.value {
            TokenValue::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Whether the token is a space run crossing a newline.
    pub fn contains_newline(&self) -> bool {
        matches!(
            self.value,
            TokenValue::Space(Space {
                contains_newline: true,
                ..
            })
        )
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            TokenValue::None => write!(f, "{:?} @ {:?}", self.kind, self.range),
            TokenValue::Text(text) => write!(f, "{:?}({text:?}) @ {:?}", self.kind, self.range),
            TokenValue::Space(space) => write!(
                f,
                "{:?}({:?}, newline: {}) @ {:?}",
                self.kind, space.text, space.contains_newline, self.range
            ),
            TokenValue::Error(error) => {
                write!(f, "{:?}({error}) @ {:?}", self.kind, self.range)
            }
        }
    }
}

#[cfg(test)]
mod tests;
