//! Lexical analysis.
//!
//! Converts source text into tokens on demand. It handles:
//!
//! - Keywords, identifiers and integer literals
//! - One and two character operators (`=` / `==`, `!` / `!=`)
//! - Token position tracking for error reporting
//! - Unrecognised characters, which become `Illegal` tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
