//! Lexer error types.
//!
//! Two families, handled very differently:
//!
//! - [`LexError`]: a lexical diagnostic. Recoverable; it travels as the
//!   payload of an `Error` token in the stream and lexing continues.
//! - [`LexAbort`]: a fatal condition (resource limit, token limit). Lexing
//!   stops and no stream is produced.

use crate::metering::ResourceError;

/// A lexical diagnostic carried by an `Error` token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[cfg_attr(feature = "cache", derive(serde::Serialize))]
pub enum LexError {
    /// A code point that cannot begin any token. Lexing stops here.
    #[error("unrecognized character: U+{code:04X} '{0}'", code = code_point(.0))]
    UnrecognizedCharacter(char),
    /// `0b`, `0o`, or `0x` with no digits after the prefix.
    #[error("missing digits")]
    MissingDigits,
    /// A `.` in a number literal with no digit after it.
    #[error("missing fractional digits")]
    MissingFractionalDigits,
    /// `0` followed by a letter other than `b`, `o`, or `x`.
    #[error("invalid number literal prefix: '{0}'")]
    InvalidNumberLiteralPrefix(char),
}

impl LexError {
    /// Whether lexing continues after this error.
    pub fn is_recoverable(self) -> bool {
        !matches!(self, LexError::UnrecognizedCharacter(_))
    }
}

fn code_point(c: &char) -> u32 {
    u32::from(*c)
}

/// A fatal condition that aborts lexing.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexAbort {
    /// The memory gauge refused a charge.
    #[error(transparent)]
    Resource(#[from] ResourceError),
    /// The input produced more tokens than the configured limit.
    #[error("limit of {limit} tokens exceeded")]
    TokenLimitReached { limit: usize },
}
