//! The single reporting primitive shared by lexing and parsing.
//!
//! Every failure becomes exactly one line of the form
//! `file:line:column: message`, logged at `error` level.

use tracing::error;

use crate::get_line_at_position;

use super::errors::Error;

/// Formats `error` as a single diagnostic line. Line and column are 1-based.
pub fn render(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, _, column) = get_line_at_position(source, position.0);

    format!("{}:{}:{}: {}", position.1, line, column + 1, error)
}

/// Writes the diagnostic for `error` to the diagnostic stream.
pub fn emit(error: &Error, source: &str) {
    error!(kind = ?error.kind(), name = error.get_error_name(), "{}", render(error, source));
}
