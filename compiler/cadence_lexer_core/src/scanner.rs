//! Code-point scanner with a single-slot backup register.
//!
//! The scanner decodes the input one `char` at a time and tracks two byte
//! offsets: the *emission point* (`start`), where the pending token begins,
//! and the *read point* (`end`), one past the last consumed code point.
//! [`word()`](RuneScanner::word) is the text between the two.
//!
//! # End of Input
//!
//! Reading past the end returns `None` and moves the read point onto a
//! virtual sentinel byte at `len`. This keeps `next()`/`backup()` symmetric
//! at EOF: a state can read `None`, back up, and leave the read point at
//! `len` exactly as it would after reading any other code point.
//!
//! # Backup Discipline
//!
//! [`backup()`](RuneScanner::backup) undoes the most recent `next()`. Only
//! one step is remembered. Calling `backup()` twice without an intervening
//! `next()` means the automaton lost track of its own lookahead; the scanner
//! panics with `second backup` instead of corrupting offsets.

/// Single-pass code-point scanner over a `&str`.
#[derive(Clone, Debug)]
pub struct RuneScanner<'a> {
    input: &'a str,
    /// Byte offset where the pending token starts.
    start: usize,
    /// Byte offset one past the last consumed code point. Equals
    /// `input.len() + 1` after `next()` returned `None`.
    end: usize,
    /// Read point before the most recent `next()`.
    prev_end: usize,
    /// Whether the backup slot holds an undoable `next()`.
    can_backup: bool,
}

impl<'a> RuneScanner<'a> {
    /// Create a scanner positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            end: 0,
            prev_end: 0,
            can_backup: false,
        }
    }

    /// The full input text.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Read the next code point, or `None` at end of input.
    ///
    /// Advances the read point by the code point's UTF-8 width (one sentinel
    /// byte at EOF) and arms the backup slot.
    #[inline]
    pub fn next(&mut self) -> Option<char> {
        self.can_backup = true;
        self.prev_end = self.end;
        match self.peek() {
            Some(c) => {
                self.end += c.len_utf8();
                Some(c)
            }
            None => {
                self.end = self.input.len() + 1;
                None
            }
        }
    }

    /// The code point at the read point, without consuming it.
    ///
    /// Leaves the backup slot untouched.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.end..)?.chars().next()
    }

    /// Undo the most recent [`next()`](Self::next).
    ///
    /// # Panics
    ///
    /// Panics with `second backup` if the backup slot is empty: either no
    /// `next()` happened since the last backup, or a fast skip
    /// (`skip_line`, `skip_to_*`) invalidated it.
    #[inline]
    pub fn backup(&mut self) {
        assert!(self.can_backup, "second backup");
        self.can_backup = false;
        self.end = self.prev_end;
    }

    /// Consume the next code point if it equals `expected`.
    ///
    /// On mismatch (or EOF) the read is backed up and `false` is returned.
    pub fn accept_one(&mut self, expected: char) -> bool {
        if self.next() == Some(expected) {
            return true;
        }
        self.backup();
        false
    }

    /// Consume code points while `pred` holds.
    ///
    /// Stops at the first rejected code point or at EOF, leaving it unread.
    /// The backup slot is spent afterwards.
    pub fn accept_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        loop {
            match self.next() {
                Some(c) if pred(c) => {}
                _ => {
                    self.backup();
                    return;
                }
            }
        }
    }

    /// Text of the pending token: emission point to read point.
    #[inline]
    pub fn word(&self) -> &'a str {
        self.slice(self.start, self.end)
    }

    /// Extract `input[start..end]`, clamping `end` to the input length.
    ///
    /// # Contract
    ///
    /// Both offsets come from this scanner's own bookkeeping, so they fall
    /// on code-point boundaries. Offsets past the end yield `""`.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let end = end.min(self.input.len());
        self.input.get(start..end).unwrap_or_default()
    }

    /// Byte offset of the emission point.
    #[inline]
    pub fn start_offset(&self) -> usize {
        self.start
    }

    /// Byte offset of the read point, clamped to the input length.
    #[inline]
    pub fn end_offset(&self) -> usize {
        self.end.min(self.input.len())
    }

    /// Returns `true` once the read point has reached the end of the input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.end >= self.input.len()
    }

    /// Move the emission point to `offset` after a token was emitted.
    ///
    /// The read point is never behind the emission point afterwards.
    #[inline]
    pub fn consume_until(&mut self, offset: usize) {
        debug_assert!(
            offset <= self.input.len(),
            "emission point {offset} past end of input {}",
            self.input.len()
        );
        self.start = offset;
        self.end = self.end.max(offset);
    }

    /// Advance the read point to the next `\n` (left unread) or to EOF.
    ///
    /// Uses memchr instead of decoding each code point; line comments
    /// contain no nested structure. Invalidates the backup slot.
    pub fn skip_line(&mut self) {
        let from = self.end_offset();
        let rest = &self.input.as_bytes()[from..];
        self.end = memchr::memchr(b'\n', rest).map_or(self.input.len(), |i| from + i);
        self.can_backup = false;
    }

    /// Advance the read point to the next `/` or `*` (left unread) or to EOF.
    ///
    /// Block comment bodies only change state at these two bytes.
    /// Invalidates the backup slot.
    pub fn skip_to_comment_delimiter(&mut self) {
        let from = self.end_offset();
        let rest = &self.input.as_bytes()[from..];
        self.end = memchr::memchr2(b'/', b'*', rest).map_or(self.input.len(), |i| from + i);
        self.can_backup = false;
    }

    /// Advance the read point to the next `"`, `\`, or `\n` (left unread)
    /// or to EOF.
    ///
    /// Invalidates the backup slot.
    pub fn skip_to_string_delimiter(&mut self) {
        let from = self.end_offset();
        let rest = &self.input.as_bytes()[from..];
        self.end = memchr::memchr3(b'"', b'\\', b'\n', rest).map_or(self.input.len(), |i| from + i);
        self.can_backup = false;
    }
}

#[cfg(test)]
mod tests;
