//! Lexer driver: emission and the state loop.
//!
//! [`Lexer`] owns the scanner, the position tracker, and the token buffer
//! for one lex. The states in [`crate::state`] decide *what* to emit; the
//! methods here decide *how*: every emitted token is charged to the gauge,
//! positioned, appended to the buffer, and the scanner's emission point is
//! moved past it.

use cadence_lexer_core::{Position, PositionTracker, Range, RuneScanner};
use tracing::{debug, trace};

use crate::buffer::TokenBuffer;
use crate::config::LexerConfig;
use crate::kind::TokenKind;
use crate::lex_error::{LexAbort, LexError};
use crate::metering::{MemoryGauge, MemoryUsage};
use crate::state::State;
use crate::stream::TokenStream;
use crate::token::{Space, Token, TokenValue};

pub(crate) struct Lexer<'src, 'g> {
    pub(crate) scanner: RuneScanner<'src>,
    positions: PositionTracker,
    buffer: TokenBuffer<'src>,
    gauge: &'g mut dyn MemoryGauge,
    eof: Option<Token<'src>>,
}

impl<'src, 'g> Lexer<'src, 'g> {
    pub(crate) fn new(
        input: &'src str,
        gauge: &'g mut dyn MemoryGauge,
        config: &LexerConfig,
    ) -> Self {
        Lexer {
            scanner: RuneScanner::new(input),
            positions: PositionTracker::new(),
            buffer: TokenBuffer::with_limit(config.token_limit, input.len()),
            gauge,
            eof: None,
        }
    }

    /// Run the state machine from the root state until a terminal state.
    pub(crate) fn run(mut self) -> Result<TokenStream<'src>, LexAbort> {
        let input = self.scanner.input();
        let mut state = State::Root;
        loop {
            let offset = self.scanner.end_offset();
            let emitted = self.buffer.len();
            let Some(next) = self.step(state)? else {
                break;
            };
            debug_assert!(
                self.scanner.end_offset() > offset || self.buffer.len() > emitted,
                "{state:?} made no progress at offset {offset}"
            );
            if next != state {
                trace!(from = ?state, to = ?next, offset = self.scanner.end_offset(), "transition");
            }
            state = next;
        }

        let eof = match self.eof {
            Some(eof) => eof,
            None => self.emit_eof()?,
        };
        debug!(tokens = self.buffer.len(), "lexed");
        Ok(TokenStream::new(input, self.buffer.freeze(), eof))
    }

    // ─── Emission ───────────────────────────────────────────────

    /// Emit the pending word as a token of `kind`.
    pub(crate) fn emit(&mut self, kind: TokenKind) -> Result<(), LexAbort> {
        let end = self.scanner.end_offset();
        self.emit_until(kind, end)
    }

    /// Emit the text from the emission point up to byte `end` as a token of
    /// `kind`. The read point may already be past `end`.
    pub(crate) fn emit_until(&mut self, kind: TokenKind, end: usize) -> Result<(), LexAbort> {
        let text = self.scanner.slice(self.scanner.start_offset(), end);
        let value = if kind.carries_text() {
            TokenValue::Text(text)
        } else {
            TokenValue::None
        };
        self.record(kind, value, text)
    }

    /// Emit the pending word as a `Space` token.
    pub(crate) fn emit_space(&mut self, contains_newline: bool) -> Result<(), LexAbort> {
        let text = self.scanner.word();
        let value = TokenValue::Space(Space {
            text,
            contains_newline,
        });
        self.record(TokenKind::Space, value, text)
    }

    /// Emit a zero-width `Error` token at the last code point of the
    /// pending word. The word itself stays pending.
    pub(crate) fn emit_error(&mut self, error: LexError) -> Result<Position, LexAbort> {
        let at = self
            .positions
            .end_of(self.scanner.word(), self.scanner.start_offset());
        self.gauge
            .meter(MemoryUsage::for_token(TokenKind::Error, 0))?;
        self.push(Token::new(
            TokenKind::Error,
            TokenValue::Error(error),
            Range::point(at),
        ))?;
        Ok(at)
    }

    /// Emit the zero-width EOF token at the emission point.
    pub(crate) fn emit_eof(&mut self) -> Result<Token<'src>, LexAbort> {
        let at = self.positions.position_at(self.scanner.start_offset());
        self.emit_eof_at(at)
    }

    /// Emit the zero-width EOF token at `at`.
    pub(crate) fn emit_eof_at(&mut self, at: Position) -> Result<Token<'src>, LexAbort> {
        self.gauge.meter(MemoryUsage::for_token(TokenKind::Eof, 0))?;
        let eof = Token::new(TokenKind::Eof, TokenValue::None, Range::point(at));
        self.push(eof)?;
        self.eof = Some(eof);
        Ok(eof)
    }

    /// Charge, position, and append a token covering `text`, which starts at
    /// the emission point; then move the emission point past it.
    fn record(
        &mut self,
        kind: TokenKind,
        value: TokenValue<'src>,
        text: &'src str,
    ) -> Result<(), LexAbort> {
        self.gauge.meter(MemoryUsage::for_token(kind, text.len()))?;
        let start = self.scanner.start_offset();
        let range = self.positions.consume(text, start);
        self.scanner.consume_until(start + text.len());
        self.push(Token::new(kind, value, range))
    }

    fn push(&mut self, token: Token<'src>) -> Result<(), LexAbort> {
        trace!(
            kind = %token.kind,
            start = token.range.start.offset,
            end = token.range.end.offset,
            "emit"
        );
        self.buffer.push(token)
    }
}
