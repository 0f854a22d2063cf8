#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

extern crate regex;

pub use crate::parser::{options::ParseOptions, parser::parse_translation_unit};

/// Byte offset into the source plus the file name it belongs to.
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

/// Returns the 1-based line number, the text of that line and the 0-based
/// column for a byte offset into `source`.
///
/// Offsets past the end are clamped, so an error reported at end of input
/// points just after the last character.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        last_line = (line_number, line.to_string(), end - start);
        start = end;
        line_number += 1;
    }

    if source.is_empty() || source.ends_with('\n') {
        (line_number, String::new(), 0)
    } else {
        last_line
    }
}


/// Renders an error together with the offending source line:
///
/// ```text
/// Error: UnexpectedToken (Expected identifier, found '{')
/// -> clamp.k
///   |
/// 3 | fn clamp(value, {
///   | ----------------^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);

    (String::from(trimmed), string.len() - trimmed.len())
}
