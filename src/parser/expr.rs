use crate::{
    ast::expressions::{BinaryOp, Expr, UnaryOp},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses a full expression, `<additive> ("==" <additive>)?`.
///
/// At most one comparison per expression: `a == b == c` fails on the
/// second `==` rather than associating either way.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_additive_expr(parser)?;

    if parser.current_token_kind() == TokenKind::Equals {
        parser.advance();
        let right = parse_additive_expr(parser)?;

        let token = parser.current_token();
        if token.kind == TokenKind::Equals {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: String::from("comparisons cannot be chained"),
                },
                token.span.start,
            ));
        }

        return Ok(Expr::binary(BinaryOp::Equal, left, right));
    }

    Ok(left)
}

/// Parses `<negation> (("+" | "-") <negation>)*`, left associative.
pub fn parse_additive_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_negation_expr(parser)?;

    loop {
        let op = match parser.current_token_kind() {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Dash => BinaryOp::Sub,
            _ => break,
        };

        parser.advance();
        let right = parse_negation_expr(parser)?;
        left = Expr::binary(op, left, right);
    }

    Ok(left)
}

/// Parses `("-")? <multiplicative>`.
///
/// A term admits one leading minus, and it wraps the whole multiplicative
/// chain: `-3 ** 5 % 2` is `-((3 ** 5) % 2)`. A second minus (`- -2`)
/// does not parse; parenthesise the inner negation instead.
pub fn parse_negation_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.current_token_kind() == TokenKind::Dash {
        parser.advance();
        let operand = parse_multiplicative_expr(parser)?;
        return Ok(Expr::unary(UnaryOp::Neg, operand));
    }

    parse_multiplicative_expr(parser)
}

/// Parses `<power> (("*" | "/" | "%") <power>)*`, left associative.
pub fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_power_expr(parser)?;

    loop {
        let op = match parser.current_token_kind() {
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Mod,
            _ => break,
        };

        parser.advance();
        let right = parse_power_expr(parser)?;
        left = Expr::binary(op, left, right);
    }

    Ok(left)
}

/// Parses `<primary> ("**" <power>)?`, right associative through the
/// recursion on the right operand.
pub fn parse_power_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_primary_expr(parser)?;

    if parser.current_token_kind() == TokenKind::StarStar {
        parser.advance();
        let right = parse_power_expr(parser)?;
        return Ok(Expr::binary(BinaryOp::Pow, left, right));
    }

    Ok(left)
}

/// Parses a primary expression: a number, an identifier, a parenthesised
/// expression, or `abs`/`sqrt` applied to a power operand.
///
/// The builtin operand is a power chain, so `sqrt 4 ** 2` reads the whole
/// `4 ** 2` while `sqrt 4 * 2` stops before the `*`.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.current_token().clone();
            match token.value.parse() {
                Ok(value) => {
                    parser.advance();
                    Ok(Expr::literal(value))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                )),
            }
        }
        TokenKind::Identifier => Ok(Expr::identifier(parser.advance().value.clone())),
        TokenKind::OpenParen => {
            parser.advance();
            let expr = parse_expr(parser)?;

            parser.expect(TokenKind::CloseParen)?;

            Ok(expr)
        }
        TokenKind::Abs => {
            parser.advance();
            let operand = parse_power_expr(parser)?;
            Ok(Expr::unary(UnaryOp::Abs, operand))
        }
        TokenKind::Sqrt => {
            parser.advance();
            let operand = parse_power_expr(parser)?;
            Ok(Expr::unary(UnaryOp::Sqrt, operand))
        }
        TokenKind::EOF => Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput,
            parser.current_token().span.start,
        )),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.current_token().span.start,
        )),
    }
}
