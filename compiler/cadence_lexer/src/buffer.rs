//! Append-only token buffer filled during a lex.

use std::sync::Arc;

use crate::lex_error::LexAbort;
use crate::token::Token;

/// Tokens in source order, bounded by a token limit.
///
/// Written only by the lexer; [`freeze`](TokenBuffer::freeze) turns it into
/// the immutable shared slice that token streams read from.
#[derive(Debug)]
pub(crate) struct TokenBuffer<'src> {
    tokens: Vec<Token<'src>>,
    limit: usize,
}

impl<'src> TokenBuffer<'src> {
    /// Create an empty buffer, reserving roughly one token per four bytes.
    pub(crate) fn with_limit(limit: usize, source_len: usize) -> Self {
        TokenBuffer {
            tokens: Vec::with_capacity((source_len / 4 + 1).min(limit)),
            limit,
        }
    }

    /// Append a token, failing once the buffer already holds `limit` tokens.
    pub(crate) fn push(&mut self, token: Token<'src>) -> Result<(), LexAbort> {
        if self.tokens.len() >= self.limit {
            return Err(LexAbort::TokenLimitReached { limit: self.limit });
        }
        self.tokens.push(token);
        Ok(())
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.tokens.len()
    }

    pub(crate) fn freeze(self) -> Arc<[Token<'src>]> {
        Arc::from(self.tokens)
    }
}
