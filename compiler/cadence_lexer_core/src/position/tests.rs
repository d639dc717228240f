use super::*;
use pretty_assertions::assert_eq;

fn pos(line: usize, column: usize, offset: usize) -> Position {
    Position::new(line, column, offset)
}

#[test]
fn tracker_starts_at_line_one_column_zero() {
    let tracker = PositionTracker::new();
    assert_eq!(tracker.position_at(0), Position::START);
}

#[test]
fn single_code_point_token_is_a_point_range() {
    let mut tracker = PositionTracker::new();
    assert_eq!(tracker.consume("1", 0), Range::point(pos(1, 0, 0)));
    assert_eq!(tracker.position_at(1), pos(1, 1, 1));
}

#[test]
fn end_is_inclusive_of_last_code_point() {
    let mut tracker = PositionTracker::new();
    let range = tracker.consume("foo", 0);
    assert_eq!(range, Range::new(pos(1, 0, 0), pos(1, 2, 2)));
    assert_eq!(range.source_text("foo bar"), Some("foo"));
}

#[test]
fn newline_inside_token_moves_end_to_next_line() {
    let mut tracker = PositionTracker::new();
    tracker.consume("1", 0);
    let range = tracker.consume(" \n  ", 1);
    assert_eq!(range, Range::new(pos(1, 1, 1), pos(2, 1, 4)));
    assert_eq!(tracker.position_at(5), pos(2, 2, 5));
}

#[test]
fn trailing_newline_moves_tracker_to_next_line() {
    let mut tracker = PositionTracker::new();
    let range = tracker.consume("\n", 0);
    assert_eq!(range, Range::point(pos(1, 0, 0)));
    assert_eq!(tracker.position_at(1), pos(2, 0, 1));
}

#[test]
fn columns_count_code_points_offsets_count_bytes() {
    let mut tracker = PositionTracker::new();
    // "\u{e4}\u{f6}" is two code points, four bytes.
    let range = tracker.consume("\u{e4}\u{f6}", 0);
    assert_eq!(range.start, pos(1, 0, 0));
    assert_eq!(range.end, pos(1, 1, 3));
    assert_eq!(range.source_text("\u{e4}\u{f6}!"), Some("\u{e4}\u{f6}"));
    assert_eq!(tracker.position_at(4), pos(1, 2, 4));
}

#[test]
fn end_of_does_not_advance() {
    let tracker = PositionTracker::new();
    assert_eq!(tracker.end_of("0b", 0), pos(1, 1, 1));
    assert_eq!(tracker.end_of("", 0), pos(1, 0, 0));
    assert_eq!(tracker.position_at(0), pos(1, 0, 0));
}

#[test]
fn multi_line_walk_counts_every_newline() {
    let mut tracker = PositionTracker::new();
    let range = tracker.consume("a\nbb\n\nccc", 0);
    assert_eq!(range.end, pos(4, 2, 8));
    assert_eq!(tracker.position_at(9), pos(4, 3, 9));
}

#[test]
fn display_and_debug() {
    let range = Range::new(pos(1, 0, 0), pos(2, 3, 9));
    assert_eq!(range.to_string(), "1:0-2:3");
    assert_eq!(format!("{range:?}"), "1:0@0..2:3@9");
}

#[test]
fn byte_range_of_point_is_one_byte() {
    let range = Range::point(pos(1, 4, 4));
    assert_eq!(range.byte_range(), 4..5);
    assert_eq!(range.source_text("abcd"), None);
}
