use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Definition);
        map.insert("extern", TokenKind::Extern);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    Number,
    /// A numeric run with more than one decimal point, e.g. `3.2.3`
    MalformedNumber,

    /// Any other single character, returned verbatim
    Char(char),

    // Reserved
    Definition,
    Extern,
    Return,
    If,
    Else,
    For,
}

impl TokenKind {
    /// Describes the token kind the way diagnostics refer to it.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::EOF => String::from("end of input"),
            TokenKind::Identifier => String::from("identifier"),
            TokenKind::Number => String::from("number"),
            TokenKind::MalformedNumber => String::from("malformed number"),
            TokenKind::Char(c) => format!("'{}'", c),
            TokenKind::Definition => String::from("'fn'"),
            TokenKind::Extern => String::from("'extern'"),
            TokenKind::Return => String::from("'return'"),
            TokenKind::If => String::from("'if'"),
            TokenKind::Else => String::from("'else'"),
            TokenKind::For => String::from("'for'"),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Char(c) => write!(f, "Char({})", c),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// The lexeme as it appeared in the source
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number | TokenKind::MalformedNumber => {
                write!(f, "{} ({})", self.kind, self.value)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: String, span: Span) -> Self {
        Token { kind, value, span }
    }

    pub fn is_char(&self, c: char) -> bool {
        self.kind == TokenKind::Char(c)
    }

    /// What diagnostics print for the token that was found instead of the expected one.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier => format!("identifier '{}'", self.value),
            TokenKind::Number | TokenKind::MalformedNumber => format!("number '{}'", self.value),
            _ => self.kind.describe(),
        }
    }
}
