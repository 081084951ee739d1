use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{
        expr::parse_expr,
        lookups::{nud_handler, stmt_handler, BindingPower},
    },
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.skip(TokenKind::Semicolon);

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

// let <identifier> = <expression>;
pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance();

    let name_token = parser.expect(TokenKind::Identifier)?;
    let name = IdentifierExpr {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    parser.skip(TokenKind::Semicolon);

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance();

    // `return;`, `return }` and a bare `return` at the end carry no value.
    let value = if nud_handler(parser.current_token_kind()).is_some() {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.skip(TokenKind::Semicolon);

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let block = parse_block(parser)?;
    parser.skip(TokenKind::Semicolon);

    Ok(Stmt::Block(block))
}

/// Parses `{ ... }`. Errors inside the braces are recorded and recovered from
/// statement by statement; only a missing `{` or `}` fails the block itself.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.enter_nesting()?;
    let block = parse_block_body(parser);
    parser.leave_nesting();

    block
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.expect(TokenKind::OpenCurly)?;

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly && parser.has_tokens() {
        if let Some(stmt) = parser.parse_stmt_or_recover() {
            body.push(stmt);
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt { token, body })
}
