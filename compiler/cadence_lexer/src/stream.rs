//! Cursor-based read interface over a finished token buffer.
//!
//! The buffer is an immutable `Arc<[Token]>` shared by every clone of a
//! stream. Each clone owns its own cursor, a plain index, so a parser can
//! speculate with `cursor()` and `revert()` while a diagnostic renderer walks
//! `tokens()` independently.

use std::sync::Arc;

use tracing::trace;

use crate::token::Token;

/// Opaque snapshot of a stream's read position.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TokenCursor(usize);

impl TokenCursor {
    /// Index of the next token to be returned.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Sequential reader over lexed tokens.
///
/// The last token in the buffer is always EOF. Reading past it keeps
/// returning that EOF without moving the cursor.
#[derive(Clone, Debug)]
pub struct TokenStream<'src> {
    input: &'src str,
    tokens: Arc<[Token<'src>]>,
    eof: Token<'src>,
    cursor: usize,
}

impl<'src> TokenStream<'src> {
    pub(crate) fn new(input: &'src str, tokens: Arc<[Token<'src>]>, eof: Token<'src>) -> Self {
        debug_assert!(
            tokens.last() == Some(&eof),
            "token buffer must end with its EOF token"
        );
        TokenStream {
            input,
            tokens,
            eof,
            cursor: 0,
        }
    }

    /// Return the token at the cursor and advance.
    ///
    /// Past the end, returns the EOF token again and leaves the cursor
    /// where it is.
    pub fn next(&mut self) -> Token<'src> {
        match self.tokens.get(self.cursor) {
            Some(&token) => {
                self.cursor += 1;
                token
            }
            None => self.eof,
        }
    }

    /// The token [`next()`](Self::next) would return, without advancing.
    pub fn peek(&self) -> Token<'src> {
        self.tokens.get(self.cursor).copied().unwrap_or(self.eof)
    }

    #[inline]
    pub fn cursor(&self) -> TokenCursor {
        TokenCursor(self.cursor)
    }

    /// Restore a previously observed cursor.
    pub fn revert(&mut self, cursor: TokenCursor) {
        debug_assert!(
            cursor.0 <= self.tokens.len(),
            "cursor {} is not from this stream ({} tokens)",
            cursor.0,
            self.tokens.len()
        );
        trace!(from = self.cursor, to = cursor.0, "revert");
        self.cursor = cursor.0;
    }

    /// The source text the tokens were lexed from.
    #[inline]
    pub fn input(&self) -> &'src str {
        self.input
    }

    /// All tokens, EOF included.
    #[inline]
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// Number of tokens, EOF included. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`: every stream holds at least its EOF token.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
