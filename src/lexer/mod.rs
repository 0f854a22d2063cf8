//! Lexical analysis module for the front end.
//!
//! The lexer is pull-based: the parser asks for one token at a time and may
//! peek one token ahead. It handles:
//!
//! - Keywords (`fn`, `extern`, `return`, `if`, `else`, `for`) and identifiers
//! - Floating point literals, including the malformed-number marker
//! - `#` line comments and whitespace
//! - Single-character punctuation and operators

pub mod lexer;
pub mod tokens;
