//! Number literal sub-automaton.
//!
//! ```text
//! 0b.. 0o.. 0x..   explicit base; "missing digits" if nothing follows
//! 0[0-9_]..        decimal or fixed-point
//! 0.               fixed-point
//! 0<letter>..      "invalid number literal prefix", then unknown-base literal
//! 0                bare zero
//! [1-9]..          decimal or fixed-point
//! ```
//!
//! Recoverable errors are emitted as zero-width `Error` tokens *before* the
//! literal they concern; the literal itself always covers what was scanned.

use cadence_lexer_core::chars::{
    is_binary_digit_or_underscore, is_decimal_digit_or_underscore, is_hex_digit_or_underscore,
    is_octal_digit_or_underscore,
};

use crate::kind::TokenKind;
use crate::lex_error::{LexAbort, LexError};
use crate::lexer::Lexer;

impl Lexer<'_, '_> {
    /// Scan a number literal whose first digit has been consumed.
    pub(super) fn number(&mut self, leading_zero: bool) -> Result<(), LexAbort> {
        if !leading_zero {
            let kind = self.decimal_or_fixed_point()?;
            return self.emit(kind);
        }

        match self.scanner.next() {
            Some('b') => self.prefixed_integer(
                is_binary_digit_or_underscore,
                TokenKind::BinaryIntegerLiteral,
            ),
            Some('o') => self.prefixed_integer(
                is_octal_digit_or_underscore,
                TokenKind::OctalIntegerLiteral,
            ),
            Some('x') => self.prefixed_integer(
                is_hex_digit_or_underscore,
                TokenKind::HexadecimalIntegerLiteral,
            ),
            Some(c) if is_decimal_digit_or_underscore(c) => {
                let kind = self.decimal_or_fixed_point()?;
                self.emit(kind)
            }
            Some('.') => {
                self.fixed_point_remainder()?;
                self.emit(TokenKind::FixedPointNumberLiteral)
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.emit_error(LexError::InvalidNumberLiteralPrefix(c))?;
                let kind = match self.decimal_or_fixed_point()? {
                    TokenKind::DecimalIntegerLiteral => TokenKind::UnknownBaseIntegerLiteral,
                    other => other,
                };
                self.emit(kind)
            }
            _ => {
                self.scanner.backup();
                self.emit(TokenKind::DecimalIntegerLiteral)
            }
        }
    }

    /// Digits after a `0b`/`0o`/`0x` prefix.
    fn prefixed_integer(
        &mut self,
        is_digit: fn(char) -> bool,
        kind: TokenKind,
    ) -> Result<(), LexAbort> {
        self.scanner.accept_while(is_digit);
        if self.scanner.word().len() <= 2 {
            self.emit_error(LexError::MissingDigits)?;
        }
        self.emit(kind)
    }

    /// Digits and `_`, then an optional fractional part.
    fn decimal_or_fixed_point(&mut self) -> Result<TokenKind, LexAbort> {
        self.scanner.accept_while(is_decimal_digit_or_underscore);
        if self.scanner.accept_one('.') {
            self.fixed_point_remainder()?;
            Ok(TokenKind::FixedPointNumberLiteral)
        } else {
            Ok(TokenKind::DecimalIntegerLiteral)
        }
    }

    /// Fractional digits after a consumed `.`; at least one is required.
    fn fixed_point_remainder(&mut self) -> Result<(), LexAbort> {
        match self.scanner.next() {
            Some(c) if is_decimal_digit_or_underscore(c) => {
                self.scanner.accept_while(is_decimal_digit_or_underscore);
            }
            _ => {
                self.scanner.backup();
                self.emit_error(LexError::MissingFractionalDigits)?;
            }
        }
        Ok(())
    }
}
