//! Unit tests for the AST model: token accessors and rendering of nodes
//! built by hand.

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{BooleanExpr, CallExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

fn token(kind: TokenKind, value: &str) -> Token {
    let file = Rc::new(String::from("test.monkey"));
    Token {
        kind,
        value: value.to_string(),
        span: Span {
            start: Position(0, Rc::clone(&file)),
            end: Position(value.len() as u32, file),
        },
    }
}

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr {
        token: token(TokenKind::Identifier, name),
        value: name.to_string(),
    }
}

fn integer(value: i64) -> Expr {
    Expr::Integer(IntegerExpr {
        token: token(TokenKind::Integer, &value.to_string()),
        value,
    })
}

#[test]
fn test_render_let_statement() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            token: token(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: Expr::Identifier(ident("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar");
}

#[test]
fn test_render_nested_operators() {
    let expr = Expr::Infix(InfixExpr {
        token: token(TokenKind::Plus, "+"),
        left: Box::new(Expr::Prefix(PrefixExpr {
            token: token(TokenKind::Dash, "-"),
            operator: "-".to_string(),
            right: Box::new(integer(1)),
        })),
        operator: "+".to_string(),
        right: Box::new(Expr::Call(CallExpr {
            token: token(TokenKind::OpenParen, "("),
            callee: Box::new(Expr::Identifier(ident("f"))),
            arguments: vec![integer(2), integer(3)],
        })),
    });

    assert_eq!(expr.to_string(), "((-1) + f(2, 3))");
    assert_eq!(expr.token().kind, TokenKind::Plus);
}

#[test]
fn test_render_blocks_and_returns() {
    let block = BlockStmt {
        token: token(TokenKind::OpenCurly, "{"),
        body: vec![
            Stmt::Return(ReturnStmt {
                token: token(TokenKind::Return, "return"),
                value: Some(Expr::Boolean(BooleanExpr {
                    token: token(TokenKind::True, "true"),
                    value: true,
                })),
            }),
            Stmt::Return(ReturnStmt {
                token: token(TokenKind::Return, "return"),
                value: None,
            }),
        ],
    };

    assert_eq!(block.to_string(), "{ return true; return }");

    let empty = BlockStmt {
        token: token(TokenKind::OpenCurly, "{"),
        body: vec![],
    };
    assert_eq!(empty.to_string(), "{ }");
    assert_eq!(Stmt::Block(empty).token().kind, TokenKind::OpenCurly);
}

#[test]
fn test_statement_tokens() {
    let stmt = Stmt::Expression(ExpressionStmt {
        token: token(TokenKind::Identifier, "x"),
        expression: Expr::Identifier(ident("x")),
    });

    assert_eq!(stmt.token().value, "x");
    assert_eq!(stmt.to_string(), "x");
}

#[test]
fn test_empty_program_renders_nothing() {
    let program = Program::default();
    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
}
