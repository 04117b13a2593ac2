use super::*;
use pretty_assertions::assert_eq;

#[test]
fn literal_display() {
    assert_eq!(Literal::Nil.to_string(), "nil");
    assert_eq!(Literal::Bool(true).to_string(), "true");
    assert_eq!(Literal::Number(123.0).to_string(), "123");
    assert_eq!(Literal::Number(45.67).to_string(), "45.67");
    assert_eq!(Literal::Str("hi there".into()).to_string(), "hi there");
}

#[test]
fn token_display_matches_dump_format() {
    let number = Token::new(TokenKind::Number, "123.5", Literal::Number(123.5), 1);
    assert_eq!(number.to_string(), "NUMBER 123.5 123.5");

    let ident = Token::new(TokenKind::Identifier, "foo", Literal::Nil, 3);
    assert_eq!(ident.to_string(), "IDENTIFIER foo nil");

    assert_eq!(Token::eof(7).to_string(), "EOF  nil");
}

#[test]
fn discriminant_indices_are_dense() {
    assert_eq!(TokenKind::LeftParen.discriminant_index(), 0);
    assert_eq!(
        usize::from(TokenKind::Eof.discriminant_index()) + 1,
        TokenKind::COUNT
    );
    assert!(TokenKind::COUNT <= 64, "token sets are backed by a u64");
}

#[test]
fn keyword_classification() {
    assert!(TokenKind::While.is_keyword());
    assert!(TokenKind::Nil.is_keyword());
    assert!(!TokenKind::Identifier.is_keyword());
    assert!(!TokenKind::Eof.is_keyword());
}
