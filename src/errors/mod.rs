//! Error types and error reporting for the front end.
//!
//! This module defines the error types shared by the lexer and the parser:
//!
//! - Error structures with source position information
//! - The lexical / syntax / structural taxonomy
//! - Helpful error messages and suggestions
//! - The single-line diagnostic primitive

pub mod diagnostics;
pub mod errors;

#[cfg(test)]
mod tests;
