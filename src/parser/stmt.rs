use crate::{
    ast::{
        ast::Stmt,
        expressions::VariableExpr,
        statements::{AssignStmt, CompoundStmt, ForStmt, IfStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_required_expr},
    parser::Parser,
};

/// Parses one statement.
///
/// Returns `Ok(None)` when the current token cannot start a statement but
/// legitimately ends a statement list, in which case nothing is consumed.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let token_kind = parser.current_token_kind();

    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&token_kind).copied() {
        return stmt_fn(parser).map(Some);
    }

    // `x = ...` is only an assignment when the `=` directly follows the name
    if token_kind == TokenKind::Identifier && parser.peek_token_kind() == TokenKind::Char('=') {
        return parse_assign_stmt(parser).map(Some);
    }

    let Some(expr) = parse_expr(parser)? else {
        return Ok(None);
    };
    parser.expect_char(';')?;

    Ok(Some(Stmt::Expression(expr)))
}

/// Parses statements until one of `}`, `)`, `;`, end of input or a
/// declaration keyword is reached. The terminator is left unconsumed.
pub fn parse_stmts(parser: &mut Parser) -> Result<CompoundStmt, Error> {
    parser.nested(|parser| {
        let mut statements = vec![];

        while !matches!(parser.current_token_kind(), TokenKind::Definition | TokenKind::Extern) {
            match parse_stmt(parser)? {
                Some(stmt) => statements.push(stmt),
                None => break,
            }
        }

        Ok(CompoundStmt::new(statements))
    })
}

/// `{ statements }`
pub fn parse_block(parser: &mut Parser) -> Result<CompoundStmt, Error> {
    parser.expect_char('{')?;
    let body = parse_stmts(parser)?;
    parser.expect_char('}')?;

    Ok(body)
}

/// `a = b = value;` with every target collected left to right.
pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let mut targets = vec![];

    while parser.current_token_kind() == TokenKind::Identifier && parser.peek_token_kind() == TokenKind::Char('=') {
        targets.push(VariableExpr::new(parser.current_identifier()));
        parser.advance()?;
        parser.advance()?;
    }

    let value = parse_required_expr(parser, "'='")?;
    parser.expect_char(';')?;

    Ok(Stmt::Assign(AssignStmt::new(targets, value)))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;
    let value = parse_required_expr(parser, "'return'")?;
    parser.expect_char(';')?;

    Ok(Stmt::Return(ReturnStmt::new(value)))
}

fn parse_single_if(parser: &mut Parser) -> Result<IfStmt, Error> {
    parser.expect(TokenKind::If)?;
    let condition = parse_required_expr(parser, "'if'")?;
    let body = parse_block(parser)?;

    Ok(IfStmt::new(condition, body))
}

/// `if c { } else if c { } ... else { }`
///
/// Each `else if` hangs off the previous link, so the chain is built
/// iteratively however long it gets.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let mut head = parse_single_if(parser)?;
    let mut tail = &mut head;

    while parser.current_token_kind() == TokenKind::Else {
        if parser.peek_token_kind() == TokenKind::If {
            parser.advance()?;
            let next = parse_single_if(parser)?;
            tail = tail.attach_else_if(next);
        } else {
            parser.advance()?;
            tail.attach_else(parse_block(parser)?);
            break;
        }
    }

    Ok(Stmt::If(head))
}

/// `for (i = initial; condition; step) { body }`
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;
    parser.expect_char('(')?;

    let variable = parser.expect_identifier("identifier")?;
    parser.expect_char('=')?;
    let initial = parse_required_expr(parser, "'='")?;
    parser.expect_char(';')?;

    let condition = parse_required_expr(parser, "';'")?;
    parser.expect_char(';')?;

    let step = parse_required_expr(parser, "';'")?;
    parser.expect_char(')')?;

    let body = parse_block(parser)?;

    Ok(Stmt::For(ForStmt::new(variable, initial, condition, step, body)))
}
