//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, integer literals, operators and
//! punctuation, illegal characters and end-of-input behaviour.

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

fn lex(source: &str) -> Vec<Token> {
    tokenize(source, Some("test.monkey".to_string())).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = lex("fn let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = lex("foo bar _underscore CamelCase lets iff");

    for (token, expected) in tokens
        .iter()
        .zip(["foo", "bar", "_underscore", "CamelCase", "lets", "iff"])
    {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, expected);
    }
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = lex("abc123");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "123");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = lex("12345 0 -7");

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "12345");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Dash);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].value, "7");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = lex("= + - ! * / < > == !=");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Not,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_two_character_operators_are_greedy() {
    let tokens = lex("==");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Equals);
    assert_eq!(tokens[0].value, "==");

    let tokens = lex("!=");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::NotEquals);
    assert_eq!(tokens[0].value, "!=");

    let tokens = lex("!!=");
    assert_eq!(tokens[0].kind, TokenKind::Not);
    assert_eq!(tokens[1].kind, TokenKind::NotEquals);

    let tokens = lex("= =");
    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = lex("( ) { } , ;");

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = lex("let x = 42;");

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].value, "42");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_function_literal() {
    let tokens = lex("let add = fn(x, y) {\n  x + y;\n};");
    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, value)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.value, value);
    }
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = lex("let x = @ 5 é");

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "@");
    // Lexing carries on after an illegal character.
    assert_eq!(tokens[4].kind, TokenKind::Integer);
    assert_eq!(tokens[4].value, "5");
    assert_eq!(tokens[5].kind, TokenKind::Illegal);
    assert_eq!(tokens[5].value, "é");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = lex(" \t let \r\n  x\n=\t42  ");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = lex("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].value, "");

    let tokens = lex("   \n\t");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = tokenize("x", None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_iterator_stops_after_eof() {
    let mut lexer = tokenize("1", None);

    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Integer));
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::EOF));
    assert!(lexer.next().is_none());
}

#[test]
fn test_token_spans() {
    let tokens = lex("let ab == 10");

    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 6);
    assert_eq!(tokens[2].span.start.0, 7);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(tokens[3].span.start.0, 10);
    assert_eq!(tokens[4].span.start.0, 12);
    assert_eq!(*tokens[0].span.start.1, "test.monkey");
}

#[test]
fn test_default_file_name() {
    let token = tokenize("x", None).next_token();
    assert_eq!(*token.span.start.1, "shell");
}

#[test]
fn test_token_debug() {
    let tokens = lex("x +");
    assert_eq!(tokens[0].debug(), "Identifier (x)");
    assert_eq!(tokens[1].debug(), "Plus ()");
}
