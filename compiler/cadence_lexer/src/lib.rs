//! Lexer for Cadence.
//!
//! [`lex`] turns source text into a [`TokenStream`] in one eager pass:
//!
//! ```text
//! &str ──► RuneScanner + PositionTracker ──► state machine ──► TokenBuffer
//!                                                  │                 │
//!                                           MemoryGauge         TokenStream
//! ```
//!
//! Lexical mistakes never abort: they become `Error` tokens in the stream
//! and scanning continues (except after an unrecognized character, where
//! no token boundary can be inferred). Only the memory gauge and the token
//! limit can abort a lex, via [`LexAbort`].
//!
//! # Example
//!
//! ```
//! use cadence_lexer::{lex, TokenKind, Unmetered};
//!
//! let mut stream = lex("x <-! y", &mut Unmetered).unwrap();
//! assert_eq!(stream.next().kind, TokenKind::Identifier);
//! assert_eq!(stream.next().kind, TokenKind::Space);
//! assert_eq!(stream.next().kind, TokenKind::LeftArrowExclamation);
//! ```

mod buffer;
mod config;
mod kind;
mod lex_error;
mod lexer;
mod metering;
mod state;
mod stream;
mod token;

pub use cadence_lexer_core::chars::{is_identifier_rune, is_valid_identifier};
pub use cadence_lexer_core::{Position, Range};
pub use config::{LexerConfig, DEFAULT_TOKEN_LIMIT};
pub use kind::TokenKind;
pub use lex_error::{LexAbort, LexError};
pub use metering::{MemoryGauge, MemoryKind, MemoryMeter, MemoryUsage, ResourceError, Unmetered};
pub use stream::{TokenCursor, TokenStream};
pub use token::{Space, Token, TokenValue};

use lexer::Lexer;

/// Lex `input` with the default configuration.
pub fn lex<'src>(
    input: &'src str,
    gauge: &mut dyn MemoryGauge,
) -> Result<TokenStream<'src>, LexAbort> {
    lex_with_config(input, gauge, &LexerConfig::default())
}

/// Lex `input`, charging every emitted token to `gauge`.
///
/// # Errors
///
/// - [`LexAbort::Resource`] when `gauge` refuses a charge; lexing stops at
///   the offending token.
/// - [`LexAbort::TokenLimitReached`] when the input yields more than
///   `config.token_limit` tokens.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn lex_with_config<'src>(
    input: &'src str,
    gauge: &mut dyn MemoryGauge,
    config: &LexerConfig,
) -> Result<TokenStream<'src>, LexAbort> {
    Lexer::new(input, gauge, config).run()
}
