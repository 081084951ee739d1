use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

/// A parse diagnostic: what went wrong and where.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// `expected` was required but `found` was seen instead.
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.into(),
                found: found.to_string(),
            },
            found.span.start.clone(),
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixRule { .. } => "NoPrefixRule",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected `{}`, found `{}`", expected, found))
            }
            ErrorImpl::NoPrefixRule { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                token
            )),
            ErrorImpl::IntegerParseError { .. } => {
                ErrorTip::Suggestion(String::from("integer literals must fit in 64 bits"))
            }
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

#[derive(Debug, PartialEq)]
pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: String, found: String },
    #[error("no parsing rule for {token} found")]
    NoPrefixRule { token: String },
    #[error("could not parse {token:?} as integer")]
    IntegerParseError { token: String },
    #[error("input nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
}
