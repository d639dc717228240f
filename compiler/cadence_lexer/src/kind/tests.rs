use super::*;
use pretty_assertions::assert_eq;

// === Discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(TokenKind::Eof as u8, 0);
    assert_eq!(TokenKind::Error as u8, 1);

    assert_eq!(TokenKind::Identifier as u8, 16);
    assert_eq!(TokenKind::UnknownBaseIntegerLiteral as u8, 23);

    assert_eq!(TokenKind::Space as u8, 32);
    assert_eq!(TokenKind::BlockCommentEnd as u8, 36);

    assert_eq!(TokenKind::Plus as u8, 64);
    assert_eq!(TokenKind::Pragma as u8, 88);

    assert_eq!(TokenKind::DoubleQuestionMark as u8, 96);
    assert_eq!(TokenKind::RightArrow as u8, 106);

    assert_eq!(TokenKind::LeftArrowExclamation as u8, 112);
    assert_eq!(TokenKind::AsExclamationMark as u8, 115);
}

#[test]
fn all_is_sorted_and_unique() {
    for pair in TokenKind::ALL.windows(2) {
        assert!(pair[0] < pair[1], "{:?} listed before {:?}", pair[0], pair[1]);
    }
}

// === Lexemes and widths ===

#[test]
fn width_matches_discriminant_range() {
    for kind in TokenKind::ALL {
        let expected = match kind as u8 {
            64..=88 => Some(1),
            96..=106 => Some(2),
            112..=115 => Some(3),
            34 | 36 => Some(2),
            _ => None,
        };
        assert_eq!(kind.width(), expected, "width of {kind:?}");
    }
}

#[test]
fn lexemes_are_unique() {
    let mut lexemes: Vec<&str> = TokenKind::ALL.iter().filter_map(|k| k.lexeme()).collect();
    let total = lexemes.len();
    lexemes.sort_unstable();
    lexemes.dedup();
    assert_eq!(lexemes.len(), total);
}

#[test]
fn contextual_cast_lexemes() {
    assert_eq!(TokenKind::AsQuestionMark.lexeme(), Some("as?"));
    assert_eq!(TokenKind::AsExclamationMark.lexeme(), Some("as!"));
    assert_eq!(TokenKind::Identifier.lexeme(), None);
}

// === Categories ===

#[test]
fn categories_partition_kinds() {
    for kind in TokenKind::ALL {
        let sentinel = matches!(kind, TokenKind::Eof | TokenKind::Error);
        let categories = [
            sentinel,
            kind == TokenKind::Identifier,
            kind.is_literal(),
            kind.is_trivia(),
            kind.is_syntax(),
        ];
        let hits = categories.iter().filter(|&&hit| hit).count();
        assert_eq!(hits, 1, "{kind:?} falls into {hits} categories");
    }
}

#[test]
fn text_payload_kinds() {
    let carrying: Vec<TokenKind> = TokenKind::ALL
        .into_iter()
        .filter(|k| k.carries_text())
        .collect();
    assert_eq!(
        carrying,
        vec![
            TokenKind::Identifier,
            TokenKind::String,
            TokenKind::DecimalIntegerLiteral,
            TokenKind::FixedPointNumberLiteral,
            TokenKind::BinaryIntegerLiteral,
            TokenKind::OctalIntegerLiteral,
            TokenKind::HexadecimalIntegerLiteral,
            TokenKind::UnknownBaseIntegerLiteral,
            TokenKind::LineComment,
            TokenKind::BlockCommentContent,
        ]
    );
}

#[test]
fn numbers_exclude_strings() {
    assert!(TokenKind::HexadecimalIntegerLiteral.is_number());
    assert!(!TokenKind::String.is_number());
    assert!(TokenKind::String.is_literal());
}

// === Display ===

#[test]
fn display_names() {
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    assert_eq!(TokenKind::LeftArrowExclamation.to_string(), "'<-!'");
    assert_eq!(
        TokenKind::BlockCommentStart.to_string(),
        "start of block comment"
    );
}

#[test]
fn syntax_display_quotes_lexeme() {
    for kind in TokenKind::ALL.into_iter().filter(|k| k.is_syntax()) {
        let lexeme = kind.lexeme().unwrap_or_default();
        assert_eq!(kind.display_name(), format!("'{lexeme}'"));
    }
}
