use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Every pattern is anchored at the current position. Order matters: the two
// character operators must be tried before their one character prefixes.
lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^[ \t\n\r]+").unwrap();
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_]+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
    ];
}

/// Pull-based scanner over one source unit.
///
/// Each call to [`Lexer::next_token`] scans exactly one token. Once the
/// input is exhausted every further call returns an `EOF` token.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: String::from(source),
            pos: 0,
            file: file_name,
            finished: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Span covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn skip_whitespace(&mut self) {
        if let Some(end) = WHITESPACE.find(self.remainder()).map(|m| m.end()) {
            self.advance_n(end);
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(0));
        }

        for pattern in PATTERNS.iter() {
            if pattern.regex.is_match(self.remainder()) {
                return (pattern.handler)(self, &pattern.regex);
            }
        }

        illegal_handler(self)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token, including a single trailing `EOF`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }

        Some(token)
    }
}

fn integer_handler(lexer: &mut Lexer, regex: &Regex) -> Token {
    let Some(matched) = regex.find(lexer.remainder()).map(|m| m.as_str().to_string()) else {
        return illegal_handler(lexer);
    };

    let token = MK_TOKEN!(TokenKind::Integer, matched.clone(), lexer.span_of(matched.len()));
    lexer.advance_n(matched.len());
    token
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Token {
    let Some(value) = regex.find(lexer.remainder()).map(|m| m.as_str().to_string()) else {
        return illegal_handler(lexer);
    };

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let token = MK_TOKEN!(kind, value.clone(), lexer.span_of(value.len()));
    lexer.advance_n(value.len());
    token
}

fn illegal_handler(lexer: &mut Lexer) -> Token {
    let character = lexer.remainder().chars().next().unwrap_or('\0');
    let len = character.len_utf8();

    trace!("illegal character {:?} at {}", character, lexer.pos);

    let token = MK_TOKEN!(TokenKind::Illegal, character.to_string(), lexer.span_of(len));
    lexer.advance_n(len);
    token
}

/// Starts lexing `source`. Lexing again means calling this again.
pub fn tokenize(source: &str, file: Option<String>) -> Lexer {
    Lexer::new(source, file)
}
