use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Dispatches on the current token to the matching statement parser.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_declaration_stmt(parser),
        TokenKind::Print => parse_print_stmt(parser),
        TokenKind::Identifier => parse_assignment_stmt(parser),
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: String::from(
                        "statements start with `let`, `print`, or an assignment",
                    ),
                },
                token.span.start,
            ))
        }
    }
}

/// Parses `let <id> = <expr>`.
pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected a variable name after `let`"),
        },
        parser.current_token().span.start,
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::Assignment)?;

    let initializer = parse_expr(parser)?;

    Ok(Stmt::Declaration { name, initializer })
}

/// Parses `<id> = <expr>`.
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let target = Expr::identifier(parser.advance().value.clone());

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected `=` after the assignment target"),
        },
        parser.current_token().span.start,
    );
    parser.expect_error(TokenKind::Assignment, Some(error))?;

    let source = parse_expr(parser)?;

    Ok(Stmt::Assignment { target, source })
}

/// Parses `print <expr>`.
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let expression = parse_expr(parser)?;

    Ok(Stmt::Print { expression })
}
