//! Lexer configuration.

/// Default maximum number of tokens per input (`1 << 19`).
pub const DEFAULT_TOKEN_LIMIT: usize = 1 << 19;

/// Knobs for a single lex.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LexerConfig {
    /// Maximum number of tokens, EOF included. Exceeding it aborts with
    /// [`LexAbort::TokenLimitReached`](crate::LexAbort::TokenLimitReached).
    pub token_limit: usize,
}

impl LexerConfig {
    #[must_use]
    pub const fn with_token_limit(mut self, token_limit: usize) -> Self {
        self.token_limit = token_limit;
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            token_limit: DEFAULT_TOKEN_LIMIT,
        }
    }
}
