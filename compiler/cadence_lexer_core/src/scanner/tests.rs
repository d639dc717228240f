use super::*;
use pretty_assertions::assert_eq;

// === next / backup ===

#[test]
fn next_decodes_code_points_and_advances_by_width() {
    let mut s = RuneScanner::new("a\u{e4}\u{1F600}");
    assert_eq!(s.next(), Some('a'));
    assert_eq!(s.end_offset(), 1);
    assert_eq!(s.next(), Some('\u{e4}'));
    assert_eq!(s.end_offset(), 3);
    assert_eq!(s.next(), Some('\u{1F600}'));
    assert_eq!(s.end_offset(), 7);
    assert_eq!(s.next(), None);
    assert_eq!(s.end_offset(), 7);
    assert!(s.is_at_end());
}

#[test]
fn backup_reverts_most_recent_next() {
    let mut s = RuneScanner::new("\u{e4}b");
    s.next();
    s.next();
    s.backup();
    assert_eq!(s.end_offset(), 2);
    assert_eq!(s.next(), Some('b'));
}

#[test]
fn backup_after_eof_returns_to_end() {
    let mut s = RuneScanner::new("x");
    s.next();
    assert_eq!(s.next(), None);
    s.backup();
    assert_eq!(s.end_offset(), 1);
    assert_eq!(s.word(), "x");
    assert_eq!(s.next(), None);
}

#[test]
fn empty_input_is_immediately_eof() {
    let mut s = RuneScanner::new("");
    assert!(s.is_at_end());
    assert_eq!(s.peek(), None);
    assert_eq!(s.next(), None);
    assert_eq!(s.word(), "");
}

#[test]
#[should_panic(expected = "second backup")]
fn double_backup_panics() {
    let mut s = RuneScanner::new("ab");
    s.next();
    s.backup();
    s.backup();
}

#[test]
#[should_panic(expected = "second backup")]
fn backup_without_next_panics() {
    let mut s = RuneScanner::new("ab");
    s.backup();
}

#[test]
#[should_panic(expected = "second backup")]
fn backup_after_fast_skip_panics() {
    let mut s = RuneScanner::new("abc\ndef");
    s.next();
    s.skip_line();
    s.backup();
}

#[test]
fn backup_is_rearmed_by_next() {
    let mut s = RuneScanner::new("abc");
    s.next();
    s.backup();
    s.next();
    s.backup();
    assert_eq!(s.end_offset(), 0);
}

// === accept helpers ===

#[test]
fn accept_one_matches_or_backs_up() {
    let mut s = RuneScanner::new("<-");
    s.next();
    assert!(!s.accept_one('='));
    assert_eq!(s.end_offset(), 1);
    assert!(s.accept_one('-'));
    assert_eq!(s.word(), "<-");
    assert!(!s.accept_one('!'));
    assert_eq!(s.word(), "<-");
}

#[test]
fn accept_while_stops_before_rejected_code_point() {
    let mut s = RuneScanner::new("abc1 rest");
    s.accept_while(|c| c.is_ascii_alphabetic());
    assert_eq!(s.word(), "abc");
    assert_eq!(s.peek(), Some('1'));
}

#[test]
fn accept_while_stops_at_eof() {
    let mut s = RuneScanner::new("   ");
    s.accept_while(|c| c == ' ');
    assert_eq!(s.word(), "   ");
    assert_eq!(s.end_offset(), 3);
    assert_eq!(s.next(), None);
}

// === emission point ===

#[test]
fn consume_until_moves_emission_point() {
    let mut s = RuneScanner::new("foo bar");
    s.accept_while(|c| c != ' ');
    assert_eq!(s.word(), "foo");
    s.consume_until(s.end_offset());
    assert_eq!(s.start_offset(), 3);
    assert_eq!(s.word(), "");
    s.next();
    assert_eq!(s.word(), " ");
}

#[test]
fn slice_clamps_past_end() {
    let s = RuneScanner::new("abc");
    assert_eq!(s.slice(1, 10), "bc");
    assert_eq!(s.slice(3, 4), "");
}

// === fast skips ===

#[test]
fn skip_line_stops_before_newline() {
    let mut s = RuneScanner::new("// note\nnext");
    s.skip_line();
    assert_eq!(s.word(), "// note");
    assert_eq!(s.peek(), Some('\n'));
}

#[test]
fn skip_line_without_newline_reaches_eof() {
    let mut s = RuneScanner::new("// tail \u{e4}");
    s.skip_line();
    assert_eq!(s.word(), "// tail \u{e4}");
    assert!(s.is_at_end());
}

#[test]
fn skip_to_comment_delimiter_finds_slash_or_star() {
    let mut s = RuneScanner::new("abc * d / e");
    s.skip_to_comment_delimiter();
    assert_eq!(s.peek(), Some('*'));
    s.next();
    s.skip_to_comment_delimiter();
    assert_eq!(s.peek(), Some('/'));
    s.next();
    s.skip_to_comment_delimiter();
    assert!(s.is_at_end());
}

#[test]
fn skip_to_string_delimiter_finds_quote_escape_or_newline() {
    let mut s = RuneScanner::new("\"ab\\\"c\nd\"");
    s.next();
    s.skip_to_string_delimiter();
    assert_eq!(s.peek(), Some('\\'));
    s.next();
    s.next();
    s.skip_to_string_delimiter();
    assert_eq!(s.peek(), Some('\n'));
}

// === Property Tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scanner {
    use super::RuneScanner;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn next_visits_every_code_point_once(input in any::<String>()) {
            let mut s = RuneScanner::new(&input);
            let mut seen = String::new();
            while let Some(c) = s.next() {
                seen.push(c);
            }
            prop_assert_eq!(&seen, &input);
            prop_assert_eq!(s.word(), input.as_str());
        }

        #[test]
        fn next_then_backup_is_identity(input in any::<String>(), steps in 0usize..32) {
            let mut s = RuneScanner::new(&input);
            for _ in 0..steps {
                s.next();
            }
            let before = s.end_offset();
            let peeked = s.peek();
            let read = s.next();
            s.backup();
            prop_assert_eq!(s.end_offset(), before);
            prop_assert_eq!(peeked, read);
        }
    }
}
