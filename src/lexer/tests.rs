//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and string literals
//! - Operators and punctuation
//! - Comments and whitespace
//! - Illegal input and end-of-input behavior

use pretty_assertions::assert_eq;

use super::{
    lexer::{tokenize, Lexer},
    source::{TokenSource, TokenStream},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.lang".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("let fn if else return true false"),
        vec![
            TokenKind::Let,
            TokenKind::Fn,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore letter", None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    // A keyword prefix does not make a keyword
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "letter");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 838383", None);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "838383");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#, None);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= == ! != < > + - * / , ; ( ) { }"),
        vec![
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_without_whitespace() {
    assert_eq!(
        kinds("x==!y"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    assert_eq!(
        kinds("let x = 5; // trailing comment\n// whole line\nx"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_illegal_character() {
    let tokens = tokenize("let a = #;", None);

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "#");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
}

#[test]
fn test_unterminated_string_is_illegal_quote() {
    let tokens = tokenize("\"abc", None);

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "\"");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let value = 10;", None);

    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 9);
    assert_eq!(tokens[3].span.start.0, 12);
    assert_eq!(tokens[5].span.start.0, 15);
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   \n\t "), vec![TokenKind::EOF]);
}

#[test]
fn test_eof_is_repeated() {
    let mut lexer = Lexer::new("x", None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_stream_replays_then_repeats_eof() {
    let mut stream = TokenStream::new(tokenize("a + b", None));

    assert_eq!(stream.next_token().value, "a");
    assert_eq!(stream.next_token().kind, TokenKind::Plus);
    assert_eq!(stream.next_token().value, "b");
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_stream_without_eof() {
    let mut tokens = tokenize("a", None);
    tokens.pop();
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.next_token().kind, TokenKind::Identifier);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_equality_ignores_position() {
    let first = tokenize("x", None);
    let second = tokenize("   x", None);

    assert_eq!(first[0], second[0]);
    assert_ne!(first[0].span.start.0, second[0].span.start.0);
}
