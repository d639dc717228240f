//! The lexer state machine.
//!
//! Each [`State`] is one step of the automaton. [`Lexer::step`] runs a state
//! and returns the next one, or `None` when scanning is over (EOF emitted).
//! The root state consumes one code point per step and dispatches on it;
//! the other states finish the token it started and hand control back.
//!
//! Longest match is resolved by reading ahead and backing up: the scanner
//! remembers exactly one `next()`, so every lookahead here is at most one
//! code point deep before it either commits or backs up. The only two-deep
//! case (`<-!`, `<->`) commits to `<-` before peeking again.

mod number;

use cadence_lexer_core::chars::{is_identifier_head, is_identifier_rune, is_whitespace};

use crate::kind::TokenKind;
use crate::lex_error::{LexAbort, LexError};
use crate::lexer::Lexer;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum State {
    Root,
    /// Whitespace run; `newline` is set when the entry character was `\n`.
    Space { newline: bool },
    Identifier,
    /// Number literal; `leading_zero` selects base-prefix handling.
    Number { leading_zero: bool },
    String,
    /// After `//`.
    LineComment,
    /// After `/*`; `nesting` counts the openers beyond the outermost one.
    BlockComment { nesting: u32 },
}

type Step = Result<Option<State>, LexAbort>;

impl Lexer<'_, '_> {
    pub(crate) fn step(&mut self, state: State) -> Step {
        match state {
            State::Root => self.root(),
            State::Space { newline } => self.space(newline).map(|()| Some(State::Root)),
            State::Identifier => self.identifier().map(|()| Some(State::Root)),
            State::Number { leading_zero } => self.number(leading_zero).map(|()| Some(State::Root)),
            State::String => self.string().map(|()| Some(State::Root)),
            State::LineComment => self.line_comment().map(|()| Some(State::Root)),
            State::BlockComment { nesting } => self.block_comment(nesting),
        }
    }

    // ─── Root ───────────────────────────────────────────────────

    fn root(&mut self) -> Step {
        let Some(c) = self.scanner.next() else {
            self.emit_eof()?;
            return Ok(None);
        };

        let kind = match c {
            ' ' | '\t' | '\r' => return Ok(Some(State::Space { newline: false })),
            '\n' => return Ok(Some(State::Space { newline: true })),
            '"' => return Ok(Some(State::String)),
            '/' => return self.slash(),
            '0'..='9' => {
                return Ok(Some(State::Number {
                    leading_zero: c == '0',
                }))
            }
            c if is_identifier_head(c) => return Ok(Some(State::Identifier)),

            '+' => TokenKind::Plus,
            '*' => TokenKind::Star,
            '%' => TokenKind::Percent,
            '(' => TokenKind::ParenOpen,
            ')' => TokenKind::ParenClose,
            '{' => TokenKind::BraceOpen,
            '}' => TokenKind::BraceClose,
            '[' => TokenKind::BracketOpen,
            ']' => TokenKind::BracketClose,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '.' => TokenKind::Dot,
            '^' => TokenKind::Caret,
            '@' => TokenKind::At,
            '#' => TokenKind::Pragma,

            '-' => self.either('>', TokenKind::RightArrow, TokenKind::Minus),
            '=' => self.either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '!' => self.either('=', TokenKind::NotEqual, TokenKind::ExclamationMark),
            '>' => self.either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '&' => self.either('&', TokenKind::AmpersandAmpersand, TokenKind::Ampersand),
            '|' => self.either('|', TokenKind::VerticalBarVerticalBar, TokenKind::VerticalBar),
            '?' => self.question(),
            '<' => self.less(),

            other => {
                let at = self.emit_error(LexError::UnrecognizedCharacter(other))?;
                self.emit_eof_at(at)?;
                return Ok(None);
            }
        };
        self.emit(kind)?;
        Ok(Some(State::Root))
    }

    /// `long` if the next code point is `next`, else `short`.
    fn either(&mut self, next: char, long: TokenKind, short: TokenKind) -> TokenKind {
        if self.scanner.accept_one(next) {
            long
        } else {
            short
        }
    }

    /// `??`, `?.`, or `?`.
    fn question(&mut self) -> TokenKind {
        match self.scanner.next() {
            Some('?') => TokenKind::DoubleQuestionMark,
            Some('.') => TokenKind::QuestionMarkDot,
            _ => {
                self.scanner.backup();
                TokenKind::QuestionMark
            }
        }
    }

    /// `<-!`, `<->`, `<-`, `<<`, `<=`, or `<`.
    fn less(&mut self) -> TokenKind {
        match self.scanner.next() {
            Some('-') => match self.scanner.next() {
                Some('!') => TokenKind::LeftArrowExclamation,
                Some('>') => TokenKind::Swap,
                _ => {
                    self.scanner.backup();
                    TokenKind::LeftArrow
                }
            },
            Some('<') => TokenKind::LessLess,
            Some('=') => TokenKind::LessEqual,
            _ => {
                self.scanner.backup();
                TokenKind::Less
            }
        }
    }

    /// `//`, `/*`, or `/`.
    fn slash(&mut self) -> Step {
        match self.scanner.next() {
            Some('/') => Ok(Some(State::LineComment)),
            Some('*') => {
                self.emit(TokenKind::BlockCommentStart)?;
                Ok(Some(State::BlockComment { nesting: 0 }))
            }
            _ => {
                self.scanner.backup();
                self.emit(TokenKind::Slash)?;
                Ok(Some(State::Root))
            }
        }
    }

    // ─── Space, identifiers, strings ────────────────────────────

    fn space(&mut self, newline: bool) -> Result<(), LexAbort> {
        let mut contains_newline = newline;
        self.scanner.accept_while(|c| {
            contains_newline |= c == '\n';
            is_whitespace(c)
        });
        self.emit_space(contains_newline)
    }

    fn identifier(&mut self) -> Result<(), LexAbort> {
        self.scanner.accept_while(is_identifier_rune);
        if self.scanner.word() == "as" {
            match self.scanner.next() {
                Some('?') => return self.emit(TokenKind::AsQuestionMark),
                Some('!') => return self.emit(TokenKind::AsExclamationMark),
                _ => self.scanner.backup(),
            }
        }
        self.emit(TokenKind::Identifier)
    }

    /// Scan to the closing quote. Escapes consume the following code point
    /// unchecked; a bare newline or EOF ends the string unterminated.
    fn string(&mut self) -> Result<(), LexAbort> {
        loop {
            self.scanner.skip_to_string_delimiter();
            match self.scanner.next() {
                Some('"') => break,
                Some('\\') => {
                    if matches!(self.scanner.next(), None | Some('\n')) {
                        self.scanner.backup();
                        break;
                    }
                }
                None | Some('\n') => {
                    self.scanner.backup();
                    break;
                }
                Some(_) => {}
            }
        }
        self.emit(TokenKind::String)
    }

    // ─── Comments ───────────────────────────────────────────────

    fn line_comment(&mut self) -> Result<(), LexAbort> {
        self.scanner.skip_line();
        self.emit(TokenKind::LineComment)
    }

    /// One step inside a block comment: advance to the next delimiter.
    ///
    /// Content between delimiters is emitted lazily, right before the next
    /// `/*` or `*/` token (or EOF), so empty content produces no token.
    fn block_comment(&mut self, nesting: u32) -> Step {
        self.scanner.skip_to_comment_delimiter();
        let delimiter = self.scanner.end_offset();
        match self.scanner.next() {
            None => {
                self.flush_comment_content(delimiter)?;
                self.emit_eof()?;
                Ok(None)
            }
            Some('/') if self.scanner.accept_one('*') => {
                self.flush_comment_content(delimiter)?;
                self.emit(TokenKind::BlockCommentStart)?;
                Ok(Some(State::BlockComment {
                    nesting: nesting + 1,
                }))
            }
            Some('*') if self.scanner.accept_one('/') => {
                self.flush_comment_content(delimiter)?;
                self.emit(TokenKind::BlockCommentEnd)?;
                Ok(Some(match nesting.checked_sub(1) {
                    Some(nesting) => State::BlockComment { nesting },
                    None => State::Root,
                }))
            }
            Some(_) => Ok(Some(State::BlockComment { nesting })),
        }
    }

    fn flush_comment_content(&mut self, end: usize) -> Result<(), LexAbort> {
        if end > self.scanner.start_offset() {
            self.emit_until(TokenKind::BlockCommentContent, end)?;
        }
        Ok(())
    }
}
