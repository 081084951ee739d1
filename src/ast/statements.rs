use std::{
    fmt::{Display, Formatter, Result},
    slice::Iter,
};

use crate::lexer::tokens::Token;

use super::{
    ast::{write_separated, Expr, Stmt},
    expressions::IdentifierExpr,
};

/// `{ ... }`. `token` is the opening brace.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub token: Token,
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.body.is_empty() {
            return f.write_str("{ }");
        }

        f.write_str("{ ")?;
        write_separated(f, &self.body, "; ")?;
        f.write_str(" }")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expr,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.expression, f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: IdentifierExpr,
    pub value: Expr,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "let {} = {}", self.name, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.value {
            Some(value) => write!(f, "return {}", value),
            None => f.write_str("return"),
        }
    }
}
