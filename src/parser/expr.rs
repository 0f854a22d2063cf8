use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, BinaryOperator, CallExpr, NumberExpr, VariableExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses a full expression.
///
/// Returns `Ok(None)` without consuming anything when the current token
/// closes a construct (`}`, `)`, `;`) or input has ended.
pub fn parse_expr(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    parser.nested(|parser| {
        let Some(lhs) = parse_primary(parser)? else {
            return Ok(None);
        };

        parse_bin_op_rhs(parser, BindingPower::Default, lhs).map(Some)
    })
}

/// Parses an expression that must be present, reporting what it should follow.
pub fn parse_required_expr(parser: &mut Parser, after: &str) -> Result<Expr, Error> {
    match parse_expr(parser)? {
        Some(expr) => Ok(expr),
        None => Err(expected_expression(parser, after)),
    }
}

fn expected_expression(parser: &Parser, after: &str) -> Error {
    Error::new(
        ErrorImpl::ExpectedExpression {
            after: after.to_string(),
        },
        parser.get_position(),
    )
}

pub fn parse_primary(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let token_kind = parser.current_token_kind();

    if let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() {
        return nud_fn(parser).map(Some);
    }

    match token_kind {
        TokenKind::Char('}') | TokenKind::Char(')') | TokenKind::Char(';') | TokenKind::EOF => Ok(None),
        _ => Err(Error::new(
            ErrorImpl::UnknownExpression {
                token: parser.current_token().describe(),
            },
            parser.get_position(),
        )),
    }
}

fn binary_operator(parser: &Parser) -> Option<(BinaryOperator, BindingPower)> {
    let token_kind = parser.current_token_kind();
    let binding_power = parser.get_bp_lookup().get(&token_kind).copied()?;

    match token_kind {
        TokenKind::Char(c) => BinaryOperator::from_char(c).map(|operator| (operator, binding_power)),
        _ => None,
    }
}

/// Folds binary operators binding at least as tightly as `min_bp` onto `lhs`.
///
/// Operators of equal precedence associate to the left; a tighter operator
/// after the right operand takes that operand as its own left side first.
pub fn parse_bin_op_rhs(parser: &mut Parser, min_bp: BindingPower, mut lhs: Expr) -> Result<Expr, Error> {
    loop {
        let Some((operator, bp)) = binary_operator(parser) else {
            return Ok(lhs);
        };

        if bp < min_bp {
            return Ok(lhs);
        }

        parser.advance()?;

        let mut rhs = match parse_primary(parser)? {
            Some(rhs) => rhs,
            None => return Err(expected_expression(parser, &format!("'{}'", operator))),
        };

        while let Some((_, next_bp)) = binary_operator(parser) {
            if next_bp <= bp {
                break;
            }

            rhs = parse_bin_op_rhs(parser, next_bp, rhs)?;
        }

        lhs = Expr::Binary(BinaryExpr::new(operator, lhs, rhs));
    }
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let value = parser.current_number();
    parser.advance()?;

    Ok(Expr::Number(NumberExpr::new(value)))
}

/// `name` or `name(args)`.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.current_identifier().to_string();
    parser.advance()?;

    if !parser.current_token().is_char('(') {
        return Ok(Expr::Variable(VariableExpr::new(name)));
    }

    parser.advance()?;

    let mut args = vec![];
    if let Some(first) = parse_expr(parser)? {
        args.push(first);

        while parser.current_token().is_char(',') {
            parser.advance()?;
            args.push(parse_required_expr(parser, "','")?);
        }

        parser.expect_error(TokenKind::Char(')'), "')' or ','")?;
    } else {
        parser.expect_char(')')?;
    }

    Ok(Expr::Call(CallExpr::new(name, args)))
}

pub fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;
    let expr = parse_required_expr(parser, "'('")?;
    parser.expect_char(')')?;

    Ok(expr)
}
