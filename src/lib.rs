#![allow(clippy::module_inception)]

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorTip},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}, col {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses Ael source text into its abstract syntax tree.
///
/// Tokenization and parsing run back to back; the first failure in either
/// stage aborts the whole call with a positioned error and no partial tree.
pub fn parse(source: &str) -> Result<Program, Error> {
    let tokens = lexer::lexer::tokenize(source)?;
    parser::parser::parse(tokens)
}

pub fn get_line_at_position(source: &str, position: Position) -> String {
    source
        .lines()
        .nth(position.line as usize - 1)
        .unwrap_or("")
        .to_string()
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        error: message
        -> program.ael
           |
         2 | x * 5
           | --^
    */

    let position = *error.get_position();
    let line_text = get_line_at_position(source, position);

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}: {}", error.get_error_name(), error);
    } else {
        println!(
            "Error: {}: {} ({})",
            error.get_error_name(),
            error,
            error.get_tip()
        );
    }
    println!("-> {}", file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, Position};

    #[test]
    fn test_get_line_at_position() {
        let source = "let one = 1\nprint one\n";

        let line = get_line_at_position(source, Position { line: 1, column: 5 });
        assert_eq!(line, "let one = 1");

        let line = get_line_at_position(source, Position { line: 2, column: 1 });
        assert_eq!(line, "print one");
    }

    #[test]
    fn test_get_line_past_end_is_empty() {
        let line = get_line_at_position("print 1", Position { line: 3, column: 1 });
        assert_eq!(line, "");
    }

    #[test]
    fn test_position_display() {
        let position = Position { line: 2, column: 14 };
        assert_eq!(position.to_string(), "Line 2, col 14");
    }
}
