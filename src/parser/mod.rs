//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! Pulls tokens from the lexer and builds a `Program`. Statements are parsed
//! by recursive descent; expressions use a Pratt parser with NUD (null
//! denotation) and LED (left denotation) handlers and a binding power per
//! infix token.
//!
//! Syntax errors never abort the parse: they are collected and the parser
//! resumes at the next statement.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
