//! Parser state and the program-level entry points.
//!
//! The parser pulls tokens from the lexer one at a time and keeps only the
//! current (next unconsumed) token. Statement and expression handlers live in
//! `stmt` and `expr`; dispatch and binding powers live in `lookups`.
//!
//! Handlers return `Result` and bail out with `?` on the first problem. The
//! statement loops catch that error, record it and resynchronise, so one pass
//! reports every independent error in the source.

use std::mem;

use log::{debug, trace};

use crate::{
    ast::ast::{Program, Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_stmt;

/// Open expressions and blocks allowed before parsing gives up on a statement.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source
    lexer: Lexer,
    /// Next token to be consumed
    current: Token,
    /// Number of tokens consumed so far
    consumed: usize,
    /// Diagnostics recorded so far, in source order
    errors: Vec<Error>,
    /// Expressions and blocks currently open
    depth: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();

        Parser {
            lexer,
            current,
            consumed: 0,
            errors: Vec::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        self.consumed += 1;
        mem::replace(&mut self.current, next)
    }

    /// Consumes the current token if it is of `expected_kind`.
    ///
    /// Returns an `UnexpectedToken` error naming both tokens otherwise. The
    /// offending token is left in place.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(Error::unexpected(expected_kind.symbol(), &self.current));
        }

        Ok(self.advance())
    }

    /// Consumes the current token if it is of `kind`.
    pub fn skip(&mut self, kind: TokenKind) -> bool {
        if self.current.kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true until the current token is EOF.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Opens one nesting level, failing once `MAX_NESTING_DEPTH` are open.
    /// Every successful call must be paired with [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_NESTING_DEPTH },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth -= 1;
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    fn record_error(&mut self, error: Error) {
        debug!("parse error at {}: {}", error.get_position().0, error);
        self.errors.push(error);
    }

    /// Parses one statement. On failure the error is recorded and the parser
    /// skips to the start of the next statement.
    pub fn parse_stmt_or_recover(&mut self) -> Option<Stmt> {
        let start = self.consumed;

        match parse_stmt(self) {
            Ok(stmt) => {
                trace!("parsed statement: {}", stmt);
                Some(stmt)
            }
            Err(error) => {
                self.record_error(error);
                self.synchronize(start);
                None
            }
        }
    }

    /// Skips past the next `;`, or up to the next `let`, `return`, `}` or
    /// end of input. Braces skipped on the way are matched, so only those
    /// tokens outside any skipped block end the skip.
    ///
    /// A statement that failed on its very first token only drops that token,
    /// so a stray token does not swallow the statement after it. A dropped
    /// `{` takes the rest of its block with it.
    fn synchronize(&mut self, start: usize) {
        let mut depth = 0usize;

        if self.consumed == start {
            let skipped = self.advance();
            debug!("skipped {}", skipped.debug());

            if skipped.kind != TokenKind::OpenCurly {
                return;
            }
            depth = 1;
        }

        loop {
            match self.current.kind {
                TokenKind::EOF => break,
                TokenKind::CloseCurly | TokenKind::Let | TokenKind::Return if depth == 0 => break,
                TokenKind::Semicolon if depth == 0 => {
                    self.advance();
                    break;
                }
                TokenKind::OpenCurly => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::CloseCurly => {
                    depth -= 1;
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }

        debug!("resynchronised at {}", self.current.debug());
    }

    /// Parses statements until end of input.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while self.has_tokens() {
            if let Some(stmt) = self.parse_stmt_or_recover() {
                statements.push(stmt);
            }
        }

        Program { statements }
    }

    /// Consumes the parser, returning the accumulated diagnostics.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

/// Parses a source unit into a syntax tree.
///
/// The program is returned together with every diagnostic found. An empty
/// diagnostic list is the only signal of success: the program may hold the
/// statements that did parse even when errors were reported.
///
/// # Arguments
///
/// * `source` - Source text to parse
/// * `file` - Name used in positions, `"shell"` when absent
pub fn parse(source: &str, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
