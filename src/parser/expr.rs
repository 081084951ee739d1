use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, led_handler, nud_handler, BindingPower},
    parser::Parser,
    stmt::parse_block,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let expr = parse_nested_expr(parser, bp);
    parser.leave_nesting();

    expr
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud = match nud_handler(parser.current_token_kind()) {
        Some(nud) => nud,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixRule { token: parser.current_token().to_string() },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than bp, keep folding it into lhs
    while binding_power(parser.current_token_kind()) > bp {
        let token_kind = parser.current_token_kind();
        let Some(led) = led_handler(token_kind) else {
            break;
        };

        left = led(parser, left, binding_power(token_kind))?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();

    Ok(Expr::Identifier(IdentifierExpr { value: token.value.clone(), token }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();

    match token.value.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerExpr { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::IntegerParseError { token: token.value.clone() },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();
    let value = token.kind == TokenKind::True;

    Ok(Expr::Boolean(BooleanExpr { token, value }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

// Parentheses only steer nesting; no node is produced for them.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

// if (<condition>) { ... } else { ... }
pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequence = parse_block(parser)?;

    let alternative = if parser.skip(TokenKind::Else) {
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

// fn(<identifier>, ...) { ... }
pub fn parse_fn_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if !parser.skip(TokenKind::CloseParen) {
        loop {
            let name = parser.expect(TokenKind::Identifier)?;
            parameters.push(IdentifierExpr { value: name.value.clone(), token: name });

            if !parser.skip(TokenKind::Comma) {
                break;
            }
        }

        parser.expect(TokenKind::CloseParen)?;
    }

    let body = parse_block(parser)?;

    Ok(Expr::Function(FunctionExpr { token, parameters, body }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let token = parser.advance();

    let mut arguments = vec![];
    if !parser.skip(TokenKind::CloseParen) {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if !parser.skip(TokenKind::Comma) {
                break;
            }
        }

        parser.expect(TokenKind::CloseParen)?;
    }

    Ok(Expr::Call(CallExpr {
        token,
        callee: Box::new(left),
        arguments,
    }))
}
