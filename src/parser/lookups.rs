use std::collections::HashMap;

use crate::{ast::ast::{Expr, Stmt}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, weakest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Relational
    parser.binary(TokenKind::Char('<'), BindingPower::Relational);
    parser.binary(TokenKind::Char('>'), BindingPower::Relational);

    // Additive and multiplicative
    parser.binary(TokenKind::Char('+'), BindingPower::Additive);
    parser.binary(TokenKind::Char('-'), BindingPower::Additive);
    parser.binary(TokenKind::Char('*'), BindingPower::Multiplicative);
    parser.binary(TokenKind::Char('/'), BindingPower::Multiplicative);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_number_expr);
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Char('('), parse_paren_expr);

    // Statements
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
}

// Lookup tables inside parser struct, so every parser owns its own
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
