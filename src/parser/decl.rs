use crate::{
    ast::declarations::{FunctionDecl, PrototypeDecl},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    parser::Parser,
    stmt::{parse_block, parse_stmts},
};

/// `name(a, b, c)`
pub fn parse_prototype(parser: &mut Parser) -> Result<PrototypeDecl, Error> {
    let name = parser.expect_identifier("function name")?;
    parser.expect_char('(')?;

    let mut parameters = vec![];
    if !parser.current_token().is_char(')') {
        loop {
            parameters.push(parser.expect_identifier("identifier")?);

            if !parser.current_token().is_char(',') {
                break;
            }
            parser.advance()?;
        }
    }

    parser.expect_error(TokenKind::Char(')'), "')' or ','")?;

    Ok(PrototypeDecl::new(name, parameters))
}

/// `extern name(params);`
pub fn parse_extern(parser: &mut Parser) -> Result<PrototypeDecl, Error> {
    parser.expect(TokenKind::Extern)?;
    let prototype = parse_prototype(parser)?;
    parser.expect_char(';')?;

    Ok(prototype)
}

/// `fn name(params) { body }`
pub fn parse_definition(parser: &mut Parser) -> Result<FunctionDecl, Error> {
    parser.expect(TokenKind::Definition)?;
    let prototype = parse_prototype(parser)?;
    let body = parse_block(parser)?;

    Ok(FunctionDecl::new(prototype, body))
}

/// Wraps a run of top-level statements in a parameterless function named
/// after the configured anonymous name. Every run gets its own function.
pub fn parse_top_level(parser: &mut Parser) -> Result<FunctionDecl, Error> {
    let body = parse_stmts(parser)?;

    if body.is_empty() {
        return Err(parser.unexpected("statement or declaration"));
    }

    let prototype = PrototypeDecl::new(parser.get_options().anonymous_name.clone(), vec![]);
    Ok(FunctionDecl::new(prototype, body))
}
