#![allow(clippy::module_inception)]

use std::rc::Rc;

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Resolves a byte offset into `(line number, line text, offset within line)`.
///
/// Returns `None` when the offset lies past the end of `content`; an offset
/// equal to the length (the EOF token) maps onto the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // Offset sits at the very end of the input
    let last = content.lines().last().unwrap_or("");
    let line_number = content.lines().count().max(1);
    let line_pos = if content.ends_with('\n') { 0 } else { last.len() };
    Some((line_number, last.to_string(), line_pos))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nlet a = 1;\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("let x", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        assert!(super::get_line_at_position("let x", 6).is_none());
    }
}
