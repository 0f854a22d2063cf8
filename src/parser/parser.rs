//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the translation unit
//! entry point. Tokens are pulled from the lexer one at a time; the parser
//! only ever looks at the current token and, for assignments and `else if`,
//! one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers keyed by their leading keyword
//! - NUD (null denotation) handlers for primary expressions
//! - Binding powers for binary operator precedence

use std::{collections::HashMap, rc::Rc};

use tracing::{debug, debug_span, trace};

use crate::{
    ast::declarations::TranslationUnit,
    errors::{
        diagnostics,
        errors::{Error, ErrorImpl},
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    decl::{parse_definition, parse_extern, parse_top_level},
    lookups::{create_token_lookups, BPLookup, BindingPower, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    options::ParseOptions,
};

/// The main parser structure that maintains parsing state.
///
/// A parser is single use: it owns its lexer and is consumed token by token
/// while producing one translation unit.
pub struct Parser {
    /// Source of tokens, pulled on demand
    lexer: Lexer,
    /// The token under the cursor
    current: Token,
    options: ParseOptions,
    /// How many nested expressions and statement lists are open
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (primary) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for binary operator binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `source` with the first token already loaded.
    ///
    /// # Errors
    ///
    /// Fails when the very first token is a malformed number.
    pub fn new(source: &str, options: ParseOptions) -> Result<Self, Error> {
        let mut lexer = Lexer::new(source, options.file_name.clone());
        let current = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            options,
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser.check_current()?;
        Ok(parser)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the token after the current one without consuming it.
    pub fn peek_token_kind(&mut self) -> TokenKind {
        self.lexer.peek_token().kind
    }

    /// Name of the current identifier token. Read it before advancing.
    pub fn current_identifier(&self) -> &str {
        self.lexer.current_identifier()
    }

    /// Value of the current number token. Read it before advancing.
    pub fn current_number(&self) -> f64 {
        self.lexer.current_number()
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// # Errors
    ///
    /// A malformed number becoming the current token is a lexical error.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token();
        let previous = std::mem::replace(&mut self.current, next);
        self.check_current()?;
        Ok(previous)
    }

    fn check_current(&self) -> Result<(), Error> {
        if self.current.kind == TokenKind::MalformedNumber {
            return Err(Error::new(
                ErrorImpl::MalformedNumber {
                    token: self.current.value.clone(),
                },
                self.get_position(),
            ));
        }

        Ok(())
    }

    /// Builds the error for a current token that is not what the grammar wants.
    pub fn unexpected(&self, expected: impl Into<String>) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.into(),
                found: self.current.describe(),
            },
            self.get_position(),
        )
    }

    /// Expects a token of the specified kind, naming `expected` in the error.
    ///
    /// # Returns
    ///
    /// The consumed token if it matches, otherwise an `UnexpectedToken` error
    /// positioned at the current token.
    pub fn expect_error(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(self.unexpected(expected));
        }

        self.advance()
    }

    /// Expects a token of the specified kind with the default description.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, &expected_kind.describe())
    }

    /// Expects the single character `c`.
    pub fn expect_char(&mut self, c: char) -> Result<Token, Error> {
        self.expect(TokenKind::Char(c))
    }

    /// Consumes an identifier and returns its name.
    pub fn expect_identifier(&mut self, expected: &str) -> Result<String, Error> {
        if self.current.kind != TokenKind::Identifier {
            return Err(self.unexpected(expected));
        }

        let name = self.current_identifier().to_string();
        self.advance()?;
        Ok(name)
    }

    /// Runs `parse` one nesting level deeper, failing once the configured
    /// maximum depth is reached.
    pub fn nested<T>(&mut self, parse: impl FnOnce(&mut Parser) -> Result<T, Error>) -> Result<T, Error> {
        if self.depth >= self.options.max_nesting_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.options.max_nesting_depth,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;

        result
    }

    pub fn get_options(&self) -> &ParseOptions {
        &self.options
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a binary operator and its binding power.
    pub fn binary(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a null denotation (primary) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    pub fn get_file(&self) -> Rc<String> {
        self.lexer.get_file()
    }

    /// Parses declarations until end of input.
    ///
    /// `extern` declarations become prototypes, `fn` definitions and every
    /// run of top-level statements become functions. Stray `;` between
    /// declarations are skipped.
    pub fn parse_translation_unit(&mut self) -> Result<TranslationUnit, Error> {
        let _span = debug_span!("translation_unit", unit = %self.options.unit_name, file = %self.get_file()).entered();

        let mut prototypes = vec![];
        let mut functions = vec![];

        loop {
            match self.current_token_kind() {
                TokenKind::EOF => break,
                TokenKind::Char(';') => {
                    self.advance()?;
                }
                TokenKind::Extern => {
                    let prototype = parse_extern(self)?;
                    trace!(name = prototype.get_name(), "parsed extern");
                    prototypes.push(prototype);
                }
                TokenKind::Definition => {
                    let function = parse_definition(self)?;
                    trace!(name = function.get_name(), "parsed definition");
                    functions.push(function);
                }
                _ => {
                    let function = parse_top_level(self)?;
                    trace!(statements = function.get_body().len(), "parsed top-level statements");
                    functions.push(function);
                }
            }
        }

        debug!(prototypes = prototypes.len(), functions = functions.len(), "parsed translation unit");

        Ok(TranslationUnit::new(self.options.unit_name.clone(), prototypes, functions))
    }
}

/// Parses a whole source text into a translation unit.
///
/// This is the main entry point for parsing. Parsing stops at the first
/// error: no partial tree is returned, and the error is reported once to
/// the diagnostic stream before being handed back.
pub fn parse_translation_unit(source: &str, options: &ParseOptions) -> Result<TranslationUnit, Error> {
    debug!(bytes = source.len(), "parsing");

    let result = Parser::new(source, options.clone()).and_then(|mut parser| parser.parse_translation_unit());

    if let Err(error) = &result {
        diagnostics::emit(error, source);
    }

    result
}
