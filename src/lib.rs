#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position::new(1, 1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line ending.
pub fn get_source_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_source_line() {
        let source = "program demo;\n  x := 1;\r\n\nend.";

        assert_eq!(super::get_source_line(source, 1), Some("program demo;"));
        assert_eq!(super::get_source_line(source, 2), Some("  x := 1;"));
        assert_eq!(super::get_source_line(source, 3), Some(""));
        assert_eq!(super::get_source_line(source, 4), Some("end."));
        assert_eq!(super::get_source_line(source, 5), None);
        assert_eq!(super::get_source_line(source, 0), None);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (text, removed) = super::remove_starting_whitespace("   x # y");
        assert_eq!(text, "x # y");
        assert_eq!(removed, 3);

        let (text, removed) = super::remove_starting_whitespace("\tx");
        assert_eq!(text, "x");
        assert_eq!(removed, 1);
    }
}

pub fn display_error(error: &Error, file: &Path, source: &str) {
    /*
        Error: InvalidCharacter (character `#` is not valid here)
        -> program.pas
          |
        1 | x # y
          | --^
    */

    let position = error.get_position();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}:{}", file.as_os_str().to_string_lossy(), position);
    println!("{:>padding$}", "|");

    let Some(line_text) = get_source_line(source, position.line) else {
        return;
    };

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
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
