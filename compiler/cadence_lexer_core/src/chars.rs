//! Character classes recognized by the lexer.
//!
//! All classes are ASCII-only. Non-ASCII code points are never part of an
//! identifier, number, or operator; outside of strings and comments they
//! are reported as unrecognized characters.

/// Horizontal whitespace: space, tab, carriage return.
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

/// Any whitespace that may appear in a `Space` token, including `\n`.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    is_space(c) || c == '\n'
}

/// First character of an identifier: ASCII letter or `_`.
#[inline]
pub fn is_identifier_head(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Continuation character of an identifier: ASCII letter, digit, or `_`.
#[inline]
pub fn is_identifier_rune(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` if `s` is a complete, well-formed identifier.
///
/// Contextual keywords such as `as` are valid identifiers; keyword
/// reservation is a parser concern.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(head) if is_identifier_head(head) => chars.all(is_identifier_rune),
        _ => false,
    }
}

#[inline]
pub fn is_decimal_digit_or_underscore(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

#[inline]
pub fn is_binary_digit_or_underscore(c: char) -> bool {
    matches!(c, '0' | '1' | '_')
}

#[inline]
pub fn is_octal_digit_or_underscore(c: char) -> bool {
    matches!(c, '0'..='7' | '_')
}

#[inline]
pub fn is_hex_digit_or_underscore(c: char) -> bool {
    c.is_ascii_hexdigit() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_validity() {
        assert!(is_valid_identifier("x"));
        assert!(is_valid_identifier("_"));
        assert!(is_valid_identifier("foo_Bar9"));
        assert!(is_valid_identifier("as"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("9lives"));
        assert!(!is_valid_identifier("has-dash"));
        assert!(!is_valid_identifier("caf\u{e9}"));
    }

    #[test]
    fn digit_classes_accept_underscore() {
        for c in ['0', '1', '_'] {
            assert!(is_binary_digit_or_underscore(c), "{c:?}");
        }
        assert!(!is_binary_digit_or_underscore('2'));
        assert!(is_octal_digit_or_underscore('7'));
        assert!(!is_octal_digit_or_underscore('8'));
        assert!(is_hex_digit_or_underscore('f'));
        assert!(is_hex_digit_or_underscore('F'));
        assert!(!is_hex_digit_or_underscore('g'));
        assert!(is_decimal_digit_or_underscore('9'));
        assert!(!is_decimal_digit_or_underscore('a'));
    }

    #[test]
    fn whitespace_classes() {
        assert!(is_space('\r'));
        assert!(!is_space('\n'));
        assert!(is_whitespace('\n'));
        assert!(!is_whitespace('\u{a0}'));
    }
}
