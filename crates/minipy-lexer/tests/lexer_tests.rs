//! Integration tests for the minipy expression lexer.

use minipy_lexer::token::TokenKind;
use minipy_lexer::{LexError, Lexer};

/// Lex operand text and return the token kinds (without the trailing Eof).
fn kinds(source: &str) -> Vec<TokenKind> {
    let tokens = Lexer::new(source, 1).lex().expect("lexing should succeed");
    let mut kinds: Vec<TokenKind> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds.pop(), Some(TokenKind::Eof), "stream must end with Eof");
    kinds
}

/// Lex operand text expecting failure.
fn lex_err(source: &str) -> LexError {
    Lexer::new(source, 1)
        .lex()
        .expect_err("lexing should fail")
}

#[test]
fn test_numbers() {
    assert_eq!(kinds("42"), vec![TokenKind::NumberLit(42.0)]);
    assert_eq!(kinds("3.14"), vec![TokenKind::NumberLit(3.14)]);
    assert_eq!(kinds("0"), vec![TokenKind::NumberLit(0.0)]);
}

#[test]
fn test_number_dot_without_digit_is_not_decimal() {
    // `1.` lexes the number, then trips on the bare dot.
    assert!(matches!(
        lex_err("1."),
        LexError::UnexpectedChar { ch: '.', .. }
    ));
}

#[test]
fn test_strings_both_quote_styles() {
    assert_eq!(kinds("'hello'"), vec![TokenKind::StringLit("hello".into())]);
    assert_eq!(
        kinds("\"hello\""),
        vec![TokenKind::StringLit("hello".into())]
    );
    assert_eq!(kinds("''"), vec![TokenKind::StringLit(String::new())]);
}

#[test]
fn test_string_ends_at_first_matching_quote() {
    // No escapes in the dialect: the second `'` terminates.
    assert_eq!(
        kinds("'a' + 'b'"),
        vec![
            TokenKind::StringLit("a".into()),
            TokenKind::Plus,
            TokenKind::StringLit("b".into()),
        ]
    );
    // The other quote style is ordinary content inside.
    assert_eq!(
        kinds("\"it's\""),
        vec![TokenKind::StringLit("it's".into())]
    );
}

#[test]
fn test_non_ascii_string_content_intact() {
    assert_eq!(kinds("'é'"), vec![TokenKind::StringLit("é".into())]);
    assert_eq!(
        kinds("\"日本語\""),
        vec![TokenKind::StringLit("日本語".into())]
    );
    assert_eq!(
        kinds("'é' + 'ü'"),
        vec![
            TokenKind::StringLit("é".into()),
            TokenKind::Plus,
            TokenKind::StringLit("ü".into()),
        ]
    );
}

#[test]
fn test_unterminated_string() {
    assert!(matches!(
        lex_err("'oops"),
        LexError::UnterminatedString { .. }
    ));
}

#[test]
fn test_identifiers() {
    assert_eq!(kinds("count"), vec![TokenKind::Identifier("count".into())]);
    assert_eq!(
        kinds("my_list2"),
        vec![TokenKind::Identifier("my_list2".into())]
    );
    assert_eq!(kinds("_x"), vec![TokenKind::Identifier("_x".into())]);
}

#[test]
fn test_arithmetic_expression() {
    assert_eq!(
        kinds("x + y * 2"),
        vec![
            TokenKind::Identifier("x".into()),
            TokenKind::Plus,
            TokenKind::Identifier("y".into()),
            TokenKind::Star,
            TokenKind::NumberLit(2.0),
        ]
    );
}

#[test]
fn test_index_brackets() {
    assert_eq!(
        kinds("fruits[1]"),
        vec![
            TokenKind::Identifier("fruits".into()),
            TokenKind::LBracket,
            TokenKind::NumberLit(1.0),
            TokenKind::RBracket,
        ]
    );
}

#[test]
fn test_parens_and_division() {
    assert_eq!(
        kinds("(a - b) / 2"),
        vec![
            TokenKind::LParen,
            TokenKind::Identifier("a".into()),
            TokenKind::Minus,
            TokenKind::Identifier("b".into()),
            TokenKind::RParen,
            TokenKind::Slash,
            TokenKind::NumberLit(2.0),
        ]
    );
}

#[test]
fn test_whitespace_ignored() {
    assert_eq!(kinds("  1   +\t2 "), kinds("1+2"));
}

#[test]
fn test_empty_operand() {
    assert_eq!(kinds(""), Vec::<TokenKind>::new());
}

#[test]
fn test_characters_outside_grammar_rejected() {
    // The closed grammar has no comparisons, commas, or calls.
    assert!(matches!(lex_err("a == b"), LexError::UnexpectedChar { ch: '=', .. }));
    assert!(matches!(lex_err("a, b"), LexError::UnexpectedChar { ch: ',', .. }));
    assert!(matches!(lex_err("a % b"), LexError::UnexpectedChar { ch: '%', .. }));
}

#[test]
fn test_spans_use_caller_line() {
    let tokens = Lexer::new("x + 1", 7).lex().unwrap();
    assert!(tokens.iter().all(|t| t.span.start_line == 7));
    assert_eq!(tokens[0].span.start_col, 1);
    assert_eq!(tokens[1].span.start_col, 3);
}
