use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

lazy_static! {
    /// Binding power of every token that can continue an expression.
    /// Tokens absent from the table bind with `BindingPower::Default`.
    pub static ref BINDING_POWER_LOOKUP: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equals, BindingPower::Equality);
        map.insert(TokenKind::NotEquals, BindingPower::Equality);
        map.insert(TokenKind::Less, BindingPower::Relational);
        map.insert(TokenKind::Greater, BindingPower::Relational);
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Dash, BindingPower::Additive);
        map.insert(TokenKind::Star, BindingPower::Multiplicative);
        map.insert(TokenKind::Slash, BindingPower::Multiplicative);
        map.insert(TokenKind::OpenParen, BindingPower::Call);
        map
    };
}

pub fn binding_power(kind: TokenKind) -> BindingPower {
    BINDING_POWER_LOOKUP
        .get(&kind)
        .copied()
        .unwrap_or(BindingPower::Default)
}

/// Statements that start with a dedicated keyword or brace. Everything else
/// is parsed as an expression statement.
pub fn stmt_handler(kind: TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Let => Some(parse_let_stmt),
        TokenKind::Return => Some(parse_return_stmt),
        TokenKind::OpenCurly => Some(parse_block_stmt),
        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Integer
        | TokenKind::CloseCurly
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::Not
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Semicolon
        | TokenKind::Comma
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Slash
        | TokenKind::Star
        | TokenKind::Fn
        | TokenKind::True
        | TokenKind::False
        | TokenKind::If
        | TokenKind::Else => None,
    }
}

/// Null denotation: tokens that can start an expression.
pub fn nud_handler(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        TokenKind::Identifier => Some(parse_identifier_expr),
        TokenKind::Integer => Some(parse_integer_expr),
        TokenKind::True | TokenKind::False => Some(parse_boolean_expr),
        TokenKind::Dash | TokenKind::Not => Some(parse_prefix_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::If => Some(parse_if_expr),
        TokenKind::Fn => Some(parse_fn_expr),
        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Semicolon
        | TokenKind::Comma
        | TokenKind::Plus
        | TokenKind::Slash
        | TokenKind::Star
        | TokenKind::Let
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}

/// Left denotation: tokens that continue an expression already on the left.
pub fn led_handler(kind: TokenKind) -> Option<LEDHandler> {
    match kind {
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash => Some(parse_binary_expr),
        TokenKind::OpenParen => Some(parse_call_expr),
        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Integer
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Not
        | TokenKind::Semicolon
        | TokenKind::Comma
        | TokenKind::Let
        | TokenKind::Fn
        | TokenKind::True
        | TokenKind::False
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}
