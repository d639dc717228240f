use super::*;
use cadence_lexer_core::Position;
use pretty_assertions::assert_eq;

fn range(start: usize, end: usize) -> Range {
    Range::new(Position::new(1, start, start), Position::new(1, end, end))
}

#[test]
fn token_is_copy_and_compact() {
    fn assert_copy<T: Copy>() {}
    assert_copy::<Token<'static>>();
    assert!(std::mem::size_of::<Token<'static>>() <= 96);
}

#[test]
fn text_of_each_payload() {
    let ident = Token::new(TokenKind::Identifier, TokenValue::Text("foo"), range(0, 2));
    assert_eq!(ident.text(), Some("foo"));

    let space = Token::new(
        TokenKind::Space,
        TokenValue::Space(Space {
            text: " \n",
            contains_newline: true,
        }),
        range(3, 4),
    );
    assert_eq!(space.text(), Some(" \n"));
    assert!(space.contains_newline());

    let plus = Token::new(TokenKind::Plus, TokenValue::None, range(5, 5));
    assert_eq!(plus.text(), None);
    assert!(!plus.contains_newline());
    assert!(plus.is(TokenKind::Plus));
}

#[test]
fn error_payload() {
    let error = Token::new(
        TokenKind::Error,
        TokenValue::Error(LexError::MissingDigits),
        range(1, 1),
    );
    assert_eq!(error.error(), Some(LexError::MissingDigits));
    assert_eq!(error.text(), None);
}

#[test]
fn debug_format() {
    let ident = Token::new(TokenKind::Identifier, TokenValue::Text("foo"), range(0, 2));
    assert_eq!(format!("{ident:?}"), "Identifier(\"foo\") @ 1:0@0..1:2@2");

    let error = Token::new(
        TokenKind::Error,
        TokenValue::Error(LexError::InvalidNumberLiteralPrefix('z')),
        range(1, 1),
    );
    assert_eq!(
        format!("{error:?}"),
        "Error(invalid number literal prefix: 'z') @ 1:1@1..1:1@1"
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        LexError::UnrecognizedCharacter('\'').to_string(),
        "unrecognized character: U+0027 '''"
    );
    assert_eq!(
        LexError::UnrecognizedCharacter('\u{e4}').to_string(),
        "unrecognized character: U+00E4 '\u{e4}'"
    );
    assert_eq!(LexError::MissingDigits.to_string(), "missing digits");
    assert_eq!(
        LexError::MissingFractionalDigits.to_string(),
        "missing fractional digits"
    );
    assert!(!LexError::UnrecognizedCharacter('$').is_recoverable());
    assert!(LexError::MissingDigits.is_recoverable());
}
