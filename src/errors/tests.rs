//! Unit tests for error handling.
//!
//! This module contains tests for error types and diagnostic rendering.

use crate::errors::diagnostics::render;
use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn unexpected(expected: &str, found: &str, offset: u32) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
        },
        Position(offset, Rc::new("test.k".to_string())),
    )
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::MalformedNumber {
            token: "3.2.3".to_string(),
        },
        Position(10, Rc::new("test.k".to_string())),
    );

    assert_eq!(error.get_error_name(), "MalformedNumber");
    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_syntax_error_kinds() {
    let position = Position(0, Rc::new("test.k".to_string()));

    let errors = [
        unexpected("';'", "'}'", 0),
        Error::new(ErrorImpl::UnknownExpression { token: "'fn'".to_string() }, position.clone()),
        Error::new(ErrorImpl::ExpectedExpression { after: "'+'".to_string() }, position.clone()),
        Error::new(ErrorImpl::NestingTooDeep { limit: 4 }, position),
    ];

    for error in errors {
        assert_eq!(error.kind(), ErrorKind::Syntax);
    }
}

#[test]
fn test_structural_error() {
    let error = Error::new(
        ErrorImpl::EmptyCompoundStatement {
            context: "function `f`".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.kind(), ErrorKind::Structural);
    assert_eq!(error.to_string(), "function `f` has an empty body");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_display_is_single_line() {
    let error = unexpected("identifier", "'{'", 8);

    assert_eq!(error.to_string(), "expected identifier, found '{'");
    assert!(!error.to_string().contains('\n'));
}

#[test]
fn test_error_tip_suggestion() {
    match unexpected("')'", "';'", 0).get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected ')', found ';'"),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_render_reports_line_and_column() {
    let source = "extern sub(a, b);\nfn f(a, {";
    let error = unexpected("identifier", "'{'", 26);

    assert_eq!(render(&error, source), "test.k:2:9: expected identifier, found '{'");
}

#[test]
fn test_render_at_end_of_input() {
    let source = "sum(1, 2)";
    let error = unexpected("';'", "end of input", 9);

    assert_eq!(render(&error, source), "test.k:1:10: expected ';', found end of input");
}
