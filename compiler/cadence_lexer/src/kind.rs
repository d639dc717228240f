//! Token kinds.
//!
//! # Discriminant Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-1 | Sentinels (`Eof`, `Error`) |
//! | 16-23 | Value tokens (identifier, string, numeric literals) |
//! | 32-36 | Trivia (space, comments) |
//! | 64-88 | Single-width syntax |
//! | 96-106 | Double-width syntax |
//! | 112-115 | Triple-width syntax |

use std::fmt;

/// Kind of a lexed token.
///
/// The enumeration is closed: every `match` over it in this crate is
/// exhaustive, so adding a kind forces every table below to handle it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize))]
#[repr(u8)]
pub enum TokenKind {
    // === Sentinels ===
    Eof = 0,
    Error = 1,

    // === Values ===
    Identifier = 16,
    String = 17,
    DecimalIntegerLiteral = 18,
    FixedPointNumberLiteral = 19,
    BinaryIntegerLiteral = 20,
    OctalIntegerLiteral = 21,
    HexadecimalIntegerLiteral = 22,
    /// Literal with an invalid base prefix such as `0z1`.
    UnknownBaseIntegerLiteral = 23,

    // === Trivia ===
    Space = 32,
    LineComment = 33,
    BlockCommentStart = 34,
    BlockCommentContent = 35,
    BlockCommentEnd = 36,

    // === Single-width syntax ===
    Plus = 64,
    Minus = 65,
    Star = 66,
    Slash = 67,
    Percent = 68,
    ParenOpen = 69,
    ParenClose = 70,
    BraceOpen = 71,
    BraceClose = 72,
    BracketOpen = 73,
    BracketClose = 74,
    QuestionMark = 75,
    Comma = 76,
    Colon = 77,
    Dot = 78,
    Semicolon = 79,
    Less = 80,
    Greater = 81,
    Equal = 82,
    ExclamationMark = 83,
    Ampersand = 84,
    Caret = 85,
    VerticalBar = 86,
    At = 87,
    Pragma = 88,

    // === Double-width syntax ===
    DoubleQuestionMark = 96,
    QuestionMarkDot = 97,
    LeftArrow = 98,
    LessLess = 99,
    LessEqual = 100,
    GreaterEqual = 101,
    EqualEqual = 102,
    NotEqual = 103,
    AmpersandAmpersand = 104,
    VerticalBarVerticalBar = 105,
    RightArrow = 106,

    // === Triple-width syntax ===
    LeftArrowExclamation = 112,
    Swap = 113,
    AsQuestionMark = 114,
    AsExclamationMark = 115,
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 55] = [
        TokenKind::Eof,
        TokenKind::Error,
        TokenKind::Identifier,
        TokenKind::String,
        TokenKind::DecimalIntegerLiteral,
        TokenKind::FixedPointNumberLiteral,
        TokenKind::BinaryIntegerLiteral,
        TokenKind::OctalIntegerLiteral,
        TokenKind::HexadecimalIntegerLiteral,
        TokenKind::UnknownBaseIntegerLiteral,
        TokenKind::Space,
        TokenKind::LineComment,
        TokenKind::BlockCommentStart,
        TokenKind::BlockCommentContent,
        TokenKind::BlockCommentEnd,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::ParenOpen,
        TokenKind::ParenClose,
        TokenKind::BraceOpen,
        TokenKind::BraceClose,
        TokenKind::BracketOpen,
        TokenKind::BracketClose,
        TokenKind::QuestionMark,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Dot,
        TokenKind::Semicolon,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Equal,
        TokenKind::ExclamationMark,
        TokenKind::Ampersand,
        TokenKind::Caret,
        TokenKind::VerticalBar,
        TokenKind::At,
        TokenKind::Pragma,
        TokenKind::DoubleQuestionMark,
        TokenKind::QuestionMarkDot,
        TokenKind::LeftArrow,
        TokenKind::LessLess,
        TokenKind::LessEqual,
        TokenKind::GreaterEqual,
        TokenKind::EqualEqual,
        TokenKind::NotEqual,
        TokenKind::AmpersandAmpersand,
        TokenKind::VerticalBarVerticalBar,
        TokenKind::RightArrow,
        TokenKind::LeftArrowExclamation,
        TokenKind::Swap,
        TokenKind::AsQuestionMark,
        TokenKind::AsExclamationMark,
    ];

    /// Fixed source spelling, or `None` for kinds whose text varies.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Percent => Some("%"),
            TokenKind::ParenOpen => Some("("),
            TokenKind::ParenClose => Some(")"),
            TokenKind::BraceOpen => Some("{"),
            TokenKind::BraceClose => Some("}"),
            TokenKind::BracketOpen => Some("["),
            TokenKind::BracketClose => Some("]"),
            TokenKind::QuestionMark => Some("?"),
            TokenKind::Comma => Some(","),
            TokenKind::Colon => Some(":"),
            TokenKind::Dot => Some("."),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Less => Some("<"),
            TokenKind::Greater => Some(">"),
            TokenKind::Equal => Some("="),
            TokenKind::ExclamationMark => Some("!"),
            TokenKind::Ampersand => Some("&"),
            TokenKind::Caret => Some("^"),
            TokenKind::VerticalBar => Some("|"),
            TokenKind::At => Some("@"),
            TokenKind::Pragma => Some("#"),
            TokenKind::DoubleQuestionMark => Some("??"),
            TokenKind::QuestionMarkDot => Some("?."),
            TokenKind::LeftArrow => Some("<-"),
            TokenKind::LessLess => Some("<<"),
            TokenKind::LessEqual => Some("<="),
            TokenKind::GreaterEqual => Some(">="),
            TokenKind::EqualEqual => Some("=="),
            TokenKind::NotEqual => Some("!="),
            TokenKind::AmpersandAmpersand => Some("&&"),
            TokenKind::VerticalBarVerticalBar => Some("||"),
            TokenKind::RightArrow => Some("->"),
            TokenKind::BlockCommentStart => Some("/*"),
            TokenKind::BlockCommentEnd => Some("*/"),
            TokenKind::LeftArrowExclamation => Some("<-!"),
            TokenKind::Swap => Some("<->"),
            TokenKind::AsQuestionMark => Some("as?"),
            TokenKind::AsExclamationMark => Some("as!"),
            TokenKind::Eof
            | TokenKind::Error
            | TokenKind::Identifier
            | TokenKind::String
            | TokenKind::DecimalIntegerLiteral
            | TokenKind::FixedPointNumberLiteral
            | TokenKind::BinaryIntegerLiteral
            | TokenKind::OctalIntegerLiteral
            | TokenKind::HexadecimalIntegerLiteral
            | TokenKind::UnknownBaseIntegerLiteral
            | TokenKind::Space
            | TokenKind::LineComment
            | TokenKind::BlockCommentContent => None,
        }
    }

    /// Width in code points of a fixed-spelling kind (1, 2, or 3).
    #[inline]
    pub fn width(self) -> Option<usize> {
        self.lexeme().map(str::len)
    }

    /// Operators and delimiters.
    ///
    /// Block comment delimiters have a fixed spelling but are trivia, not
    /// syntax.
    #[inline]
    pub fn is_syntax(self) -> bool {
        self.lexeme().is_some() && !self.is_trivia()
    }

    /// String and numeric literals.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::DecimalIntegerLiteral
                | TokenKind::FixedPointNumberLiteral
                | TokenKind::BinaryIntegerLiteral
                | TokenKind::OctalIntegerLiteral
                | TokenKind::HexadecimalIntegerLiteral
                | TokenKind::UnknownBaseIntegerLiteral
        )
    }

    /// Numeric literals of any base.
    pub fn is_number(self) -> bool {
        self.is_literal() && self != TokenKind::String
    }

    /// Whitespace and comments, which the parser skips.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Space
                | TokenKind::LineComment
                | TokenKind::BlockCommentStart
                | TokenKind::BlockCommentContent
                | TokenKind::BlockCommentEnd
        )
    }

    /// Kinds whose token carries its source text as a payload.
    pub fn carries_text(self) -> bool {
        self.is_literal()
            || matches!(
                self,
                TokenKind::Identifier | TokenKind::LineComment | TokenKind::BlockCommentContent
            )
    }

    /// Human-readable name for diagnostics ("expected ')', found identifier").
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Error => "error",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::DecimalIntegerLiteral => "decimal integer literal",
            TokenKind::FixedPointNumberLiteral => "fixed-point number literal",
            TokenKind::BinaryIntegerLiteral => "binary integer literal",
            TokenKind::OctalIntegerLiteral => "octal integer literal",
            TokenKind::HexadecimalIntegerLiteral => "hexadecimal integer literal",
            TokenKind::UnknownBaseIntegerLiteral => "integer literal with unknown base",
            TokenKind::Space => "space",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockCommentStart => "start of block comment",
            TokenKind::BlockCommentContent => "block comment",
            TokenKind::BlockCommentEnd => "end of block comment",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::ParenOpen => "'('",
            TokenKind::ParenClose => "')'",
            TokenKind::BraceOpen => "'{'",
            TokenKind::BraceClose => "'}'",
            TokenKind::BracketOpen => "'['",
            TokenKind::BracketClose => "']'",
            TokenKind::QuestionMark => "'?'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Dot => "'.'",
            TokenKind::Semicolon => "';'",
            TokenKind::Less => "'<'",
            TokenKind::Greater => "'>'",
            TokenKind::Equal => "'='",
            TokenKind::ExclamationMark => "'!'",
            TokenKind::Ampersand => "'&'",
            TokenKind::Caret => "'^'",
            TokenKind::VerticalBar => "'|'",
            TokenKind::At => "'@'",
            TokenKind::Pragma => "'#'",
            TokenKind::DoubleQuestionMark => "'??'",
            TokenKind::QuestionMarkDot => "'?.'",
            TokenKind::LeftArrow => "'<-'",
            TokenKind::LessLess => "'<<'",
            TokenKind::LessEqual => "'<='",
            TokenKind::GreaterEqual => "'>='",
            TokenKind::EqualEqual => "'=='",
            TokenKind::NotEqual => "'!='",
            TokenKind::AmpersandAmpersand => "'&&'",
            TokenKind::VerticalBarVerticalBar => "'||'",
            TokenKind::RightArrow => "'->'",
            TokenKind::LeftArrowExclamation => "'<-!'",
            TokenKind::Swap => "'<->'",
            TokenKind::AsQuestionMark => "'as?'",
            TokenKind::AsExclamationMark => "'as!'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests;
