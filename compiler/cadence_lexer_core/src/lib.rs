//! Low-level scanning primitives for the Cadence lexer.
//!
//! This crate has no knowledge of token kinds. It provides the two leaf
//! components the lexer state machine is built on:
//!
//! - [`RuneScanner`]: decodes one code point at a time from the input,
//!   tracks the pending token's byte range, and supports exactly one step
//!   of backtracking.
//! - [`PositionTracker`]: turns byte ranges into `(line, column, offset)`
//!   triples, advancing on every token emission.
//!
//! Character classes shared by the lexer and by external tools
//! (highlighters, identifier validation) live in [`chars`].

pub mod chars;
mod position;
mod scanner;

pub use position::{Position, PositionTracker, Range};
pub use scanner::RuneScanner;
