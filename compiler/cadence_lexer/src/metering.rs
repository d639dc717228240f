//! Memory metering at token emission.
//!
//! Token text stays alive as long as the syntax tree built from it, so a
//! metered host charges the lexer for every token it emits. The lexer
//! computes a [`MemoryUsage`] per token and hands it to a [`MemoryGauge`]
//! synchronously; a refusal aborts the lex at that token.
//!
//! # Charges
//!
//! | Token | Kind | Amount |
//! |-------|------|--------|
//! | syntax, comment delimiters | `SyntaxToken` | fixed width (1, 2, 3) |
//! | EOF | `SyntaxToken` | 1 |
//! | identifier | `Identifier` | length |
//! | string | `String` | length + 1 |
//! | numeric literal | `RawString` | length + 1 |
//! | line comment, block comment content | `Comment` | length + 1 |
//! | space | `SpaceToken` | length + 1 |
//! | error | `ErrorToken` | 1 |
//!
//! Lengths are in bytes. The `+ 1` keeps empty text from being free.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::kind::TokenKind;

/// Accounting category of a charge.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum MemoryKind {
    SyntaxToken,
    SpaceToken,
    ErrorToken,
    Identifier,
    String,
    RawString,
    Comment,
}

impl MemoryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MemoryKind::SyntaxToken => "SyntaxToken",
            MemoryKind::SpaceToken => "SpaceToken",
            MemoryKind::ErrorToken => "ErrorToken",
            MemoryKind::Identifier => "Identifier",
            MemoryKind::String => "String",
            MemoryKind::RawString => "RawString",
            MemoryKind::Comment => "Comment",
        }
    }
}

impl fmt::Display for MemoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single charge: `amount` units of `kind`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MemoryUsage {
    pub kind: MemoryKind,
    pub amount: u64,
}

impl MemoryUsage {
    #[inline]
    pub const fn new(kind: MemoryKind, amount: u64) -> Self {
        MemoryUsage { kind, amount }
    }

    /// Charge for a token of `kind` whose source text is `len` bytes.
    pub fn for_token(kind: TokenKind, len: usize) -> Self {
        let len = len as u64;
        match kind {
            TokenKind::Eof => MemoryUsage::new(MemoryKind::SyntaxToken, 1),
            TokenKind::Error => MemoryUsage::new(MemoryKind::ErrorToken, 1),
            TokenKind::Identifier => MemoryUsage::new(MemoryKind::Identifier, len),
            TokenKind::String => MemoryUsage::new(MemoryKind::String, len + 1),
            TokenKind::Space => MemoryUsage::new(MemoryKind::SpaceToken, len + 1),
            TokenKind::LineComment | TokenKind::BlockCommentContent => {
                MemoryUsage::new(MemoryKind::Comment, len + 1)
            }
            _ if kind.is_number() => MemoryUsage::new(MemoryKind::RawString, len + 1),
            _ => {
                let width = kind.width().unwrap_or(1) as u64;
                MemoryUsage::new(MemoryKind::SyntaxToken, width)
            }
        }
    }
}

/// Refusal from a [`MemoryGauge`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ResourceError {
    /// Charging would take `kind` past its limit.
    #[error("reached limit for \"{kind}\": {requested} units requested, {used} of {limit} used")]
    LimitExceeded {
        kind: MemoryKind,
        requested: u64,
        used: u64,
        limit: u64,
    },
}

/// The resource accountant billed for every emitted token.
pub trait MemoryGauge {
    /// Charge `amount` units of `kind`, or refuse.
    fn use_memory(&mut self, kind: MemoryKind, amount: u64) -> Result<(), ResourceError>;

    /// Charge a precomputed usage.
    fn meter(&mut self, usage: MemoryUsage) -> Result<(), ResourceError> {
        self.use_memory(usage.kind, usage.amount)
    }
}

impl<G: MemoryGauge + ?Sized> MemoryGauge for &mut G {
    fn use_memory(&mut self, kind: MemoryKind, amount: u64) -> Result<(), ResourceError> {
        (**self).use_memory(kind, amount)
    }
}

/// A gauge that accepts every charge.
#[derive(Copy, Clone, Debug, Default)]
pub struct Unmetered;

impl MemoryGauge for Unmetered {
    #[inline]
    fn use_memory(&mut self, _kind: MemoryKind, _amount: u64) -> Result<(), ResourceError> {
        Ok(())
    }
}

/// A gauge that totals usage per kind, with optional per-kind limits.
///
/// A refused charge is not recorded.
#[derive(Clone, Debug, Default)]
pub struct MemoryMeter {
    used: FxHashMap<MemoryKind, u64>,
    limits: FxHashMap<MemoryKind, u64>,
}

impl MemoryMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse charges that would take `kind` past `limit` units.
    #[must_use]
    pub fn with_limit(mut self, kind: MemoryKind, limit: u64) -> Self {
        self.limits.insert(kind, limit);
        self
    }

    /// Units charged so far for `kind`.
    pub fn used(&self, kind: MemoryKind) -> u64 {
        self.used.get(&kind).copied().unwrap_or(0)
    }

    /// Units charged so far across all kinds.
    pub fn total(&self) -> u64 {
        self.used.values().sum()
    }
}

impl MemoryGauge for MemoryMeter {
    fn use_memory(&mut self, kind: MemoryKind, amount: u64) -> Result<(), ResourceError> {
        let used = self.used.entry(kind).or_insert(0);
        let next = used.saturating_add(amount);
        if let Some(&limit) = self.limits.get(&kind) {
            if next > limit {
                return Err(ResourceError::LimitExceeded {
                    kind,
                    requested: amount,
                    used: *used,
                    limit,
                });
            }
        }
        *used = next;
        Ok(())
    }
}
