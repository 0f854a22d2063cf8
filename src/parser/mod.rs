//! Parser module for building the syntax tree.
//!
//! This module contains the parser that pulls tokens from the lexer and
//! builds a `TranslationUnit`. Binary expressions use precedence climbing
//! driven by the binding power table; everything else is plain recursive
//! descent:
//!
//! - Declarations (`extern` prototypes, `fn` definitions, top-level runs)
//! - Statements (assignments, `return`, `if` chains, `for` loops)
//! - Expressions (numbers, variables, calls, parenthesised and binary)
//!
//! The first error aborts the parse; there is no recovery.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod options;
pub mod parser;
pub mod stmt;
