use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Which phase produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    /// Raised by consumers of the tree, never by the parser
    Structural,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_inner(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::MalformedNumber { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnknownExpression { .. }
            | ErrorImpl::ExpectedExpression { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Syntax,
            ErrorImpl::EmptyCompoundStatement { .. } => ErrorKind::Structural,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnknownExpression { .. } => "UnknownExpression",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::EmptyCompoundStatement { .. } => "EmptyCompoundStatement",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a number may contain at most one `.`",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found {}", expected, found))
            }
            ErrorImpl::UnknownExpression { .. } => ErrorTip::Suggestion(String::from(
                "Expressions start with a number, an identifier or `(`",
            )),
            ErrorImpl::ExpectedExpression { after } => {
                ErrorTip::Suggestion(format!("Missing expression after {}", after))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Nesting is limited to {} levels, split the expression up",
                limit
            )),
            ErrorImpl::EmptyCompoundStatement { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("malformed number: {token:?}")]
    MalformedNumber { token: String },
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("unknown expression format: {token}")]
    UnknownExpression { token: String },
    #[error("expected expression after {after}")]
    ExpectedExpression { after: String },
    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("{context} has an empty body")]
    EmptyCompoundStatement { context: String },
}
