use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the text a pattern matched at the cursor (already consumed).
/// Returning `None` discards the text and scanning continues.
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<TokenKind>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t\n\r\x0B\x0C]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^#[^\n\r]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[A-Za-z][A-Za-z0-9]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9][0-9.]*").unwrap(), handler: number_handler },
    ];
}

/// Everything `peek_token` has to put back.
#[derive(Debug, Clone)]
struct ScanState {
    pos: usize,
    identifier: String,
    number: f64,
}

/// Pull-style tokenizer with one token of lookahead.
///
/// Only the payload of the most recent token is kept (`current_identifier` /
/// `current_number`); there is no token history.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Rc<str>,
    file: Rc<String>,
    state: ScanState,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: Rc::from(source),
            file: file_name,
            state: ScanState {
                pos: 0,
                identifier: String::new(),
                number: 0.0,
            },
        }
    }

    /// Consumes and returns the next token. Keeps returning EOF once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.scan()
    }

    /// Returns what `next_token` would return, leaving position and payload untouched.
    pub fn peek_token(&mut self) -> Token {
        let snapshot = self.state.clone();
        let token = self.scan();
        self.state = snapshot;
        token
    }

    pub fn current_identifier(&self) -> &str {
        &self.state.identifier
    }

    pub fn current_number(&self) -> f64 {
        self.state.number
    }

    pub fn get_position(&self) -> Position {
        Position(self.state.pos as u32, Rc::clone(&self.file))
    }

    pub fn get_source(&self) -> &str {
        &self.source
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn advance_n(&mut self, n: usize) {
        self.state.pos += n;
    }

    fn scan(&mut self) -> Token {
        self.state.identifier.clear();
        let source = Rc::clone(&self.source);

        loop {
            let start = self.state.pos;
            let remainder = &source[start..];

            let Some(c) = remainder.chars().next() else {
                return self.make_token(TokenKind::EOF, start);
            };

            let matched = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remainder).map(|m| (pattern.handler, m.as_str())));

            match matched {
                Some((handler, text)) => {
                    self.advance_n(text.len());
                    if let Some(kind) = handler(self, text) {
                        return self.make_token(kind, start);
                    }
                }
                None => {
                    self.advance_n(c.len_utf8());
                    return self.make_token(TokenKind::Char(c), start);
                }
            }
        }
    }

    fn make_token(&self, kind: TokenKind, start: usize) -> Token {
        let end = self.state.pos;
        Token::new(
            kind,
            String::from(&self.source[start..end]),
            Span {
                start: Position(start as u32, Rc::clone(&self.file)),
                end: Position(end as u32, Rc::clone(&self.file)),
            },
        )
    }
}

fn skip_handler(_lexer: &mut Lexer, _text: &str) -> Option<TokenKind> {
    None
}

fn symbol_handler(lexer: &mut Lexer, text: &str) -> Option<TokenKind> {
    lexer.state.identifier = String::from(text);

    Some(RESERVED_LOOKUP.get(text).copied().unwrap_or(TokenKind::Identifier))
}

fn number_handler(lexer: &mut Lexer, text: &str) -> Option<TokenKind> {
    // the whole run is consumed either way, so `3.2.3` never becomes `3.2`
    if text.matches('.').count() > 1 {
        return Some(TokenKind::MalformedNumber);
    }

    match text.parse::<f64>() {
        Ok(value) => {
            lexer.state.number = value;
            Some(TokenKind::Number)
        }
        Err(_) => Some(TokenKind::MalformedNumber),
    }
}

/// Drains a lexer up to and including EOF.
///
/// Fails on the first malformed number; the pull-based parser does not need this,
/// it exists for tooling that wants the whole token stream at once.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();

        if token.kind == TokenKind::MalformedNumber {
            return Err(Error::new(
                ErrorImpl::MalformedNumber { token: token.value.clone() },
                token.span.start.clone(),
            ));
        }

        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
