#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path, rc::Rc};

use colored::Colorize;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Line and column of the lexer inside a source, both counted from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(file: Rc<String>) -> Self {
        Position {
            line: 0,
            column: 0,
            file,
        }
    }

    pub fn null() -> Self {
        Position::new(Rc::new(String::from("<null>")))
    }

    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    pub fn next_char(&mut self) {
        self.column += 1;
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line + 1, self.column + 1)
    }
}

/// Returns the text of the zero-based `line` of `source`, without its line ending.
pub fn get_line_at_position(source: &str, line: usize) -> Option<&str> {
    source
        .split('\n')
        .nth(line)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, Position};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\n\nlocal x = y;\r\nTesting { }\n";

        assert_eq!(get_line_at_position(source, 0), Some("Hello, world!"));
        assert_eq!(get_line_at_position(source, 1), Some(""));
        assert_eq!(get_line_at_position(source, 2), Some("local x = y;"));
        assert_eq!(get_line_at_position(source, 3), Some("Testing { }"));
        assert_eq!(get_line_at_position(source, 5), None);
    }

    #[test]
    fn test_position_counters() {
        let mut pos = Position::null();
        pos.next_char();
        pos.next_char();
        assert_eq!((pos.line, pos.column), (0, 2));

        pos.next_line();
        assert_eq!((pos.line, pos.column), (1, 0));
        assert_eq!(pos.to_string(), "<null>:2:1");
    }
}

pub fn display_error(error: &Error, source: &str, file: &Path) {
    /*
        error: message
        -> config.jsonnet
           |
        20 | local a = `;
           | ----------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or("");

    let line_string = (position.line + 1).to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("{}: {}", "Error".red().bold(), error.get_error_name());
    } else {
        println!(
            "{}: {} ({})",
            "Error".red().bold(),
            error.get_error_name(),
            error.get_tip()
        );
    }
    println!("{} {}", "->".blue().bold(), file.as_os_str().to_string_lossy());
    println!("{}", format!("{:>padding$}", "|").blue());

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} {} {}", line_string.blue().bold(), "|".blue(), line_text_removed.trim_end());

    let arrows = position.column.saturating_sub(removed_whitespace) + 1;

    println!(
        "{} {}",
        format!("{:>padding$}", "|").blue(),
        format!("{:->arrows$}", "^").red().bold()
    );
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
