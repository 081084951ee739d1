#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use ast::ast::Program;
pub use lexer::lexer::tokenize;
pub use parser::parser::parse;

/// Byte offset into a source unit, tagged with the source's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. A position at or past the end of the source
/// resolves to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // Past the final character: point just after the last line.
    match source.split_inclusive('\n').last() {
        Some(last) if !last.ends_with('\n') => {
            (line_number - 1, last.to_string(), last.len())
        }
        _ => (line_number, String::new(), 0),
    }
}


/// Renders a diagnostic with its source line and a caret under the
/// offending token.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> shell
           |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let header = match error.get_tip() {
        ErrorTip::None => error.get_error_name().to_string(),
        tip => format!("{} ({})", error.get_error_name(), tip),
    };

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    format!(
        "Error: {}\n-> {}\n{:>padding$}\n{} | {}\n{:>padding$} {:->arrows$}\n",
        header,
        position.1,
        "|",
        line_string,
        line_text_removed.trim_end(),
        "|",
        "^",
    )
}

pub fn display_error(error: &Error, source: &str) {
    print!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
