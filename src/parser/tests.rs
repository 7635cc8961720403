//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Declarations, assignments, and print statements
//! - Precedence and associativity of the arithmetic operators
//! - Unary negation and the `abs`/`sqrt` builtins
//! - The single, non-chaining `==` comparison
//! - Error cases and their reported positions

use super::parser::{parse, Parser};
use crate::{
    ast::{
        expressions::{BinaryOp, Expr, UnaryOp},
        statements::{Program, Stmt},
    },
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    Position,
};

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source).unwrap();
    parse(tokens)
}

/// Parses `source` as the expression of a print statement and returns it.
fn parse_expression(source: &str) -> Expr {
    let program = parse_source(&format!("print {}", source)).unwrap();
    match program.statements.into_iter().next() {
        Some(Stmt::Print { expression }) => expression,
        other => panic!("expected a print statement, got {:?}", other),
    }
}

#[test]
fn test_parse_declaration() {
    let program = parse_source("let x = 42").unwrap();

    assert_eq!(
        program.statements,
        vec![Stmt::Declaration {
            name: String::from("x"),
            initializer: Expr::literal(42.0),
        }]
    );
}

#[test]
fn test_parse_assignment() {
    let program = parse_source("x = 2").unwrap();

    assert_eq!(
        program.statements,
        vec![Stmt::Assignment {
            target: Expr::identifier("x"),
            source: Expr::literal(2.0),
        }]
    );
}

#[test]
fn test_parse_print_statement() {
    let program = parse_source("print dozen").unwrap();

    assert_eq!(
        program.statements,
        vec![Stmt::Print {
            expression: Expr::identifier("dozen"),
        }]
    );
}

#[test]
fn test_parse_multiple_statements() {
    let program = parse_source("let x = 1\nx = x + 1\nprint x").unwrap();

    assert_eq!(program.statements.len(), 3);
    assert!(matches!(program.statements[0], Stmt::Declaration { .. }));
    assert!(matches!(program.statements[1], Stmt::Assignment { .. }));
    assert!(matches!(program.statements[2], Stmt::Print { .. }));
}

#[test]
fn test_parse_keyword_prefix_assignment() {
    // `lets` is an identifier, not `let` followed by `s`.
    let program = parse_source("lets = 2").unwrap();

    assert_eq!(
        program.statements,
        vec![Stmt::Assignment {
            target: Expr::identifier("lets"),
            source: Expr::literal(2.0),
        }]
    );
}

#[test]
fn test_parse_number_literal_value() {
    assert_eq!(parse_expression("101.3"), Expr::literal(101.3));
}

#[test]
fn test_parse_additive_left_associative() {
    assert_eq!(
        parse_expression("1 - 2 - 3"),
        Expr::binary(
            BinaryOp::Sub,
            Expr::binary(BinaryOp::Sub, Expr::literal(1.0), Expr::literal(2.0)),
            Expr::literal(3.0),
        )
    );
}

#[test]
fn test_parse_multiplicative_left_associative() {
    assert_eq!(
        parse_expression("5 * 4 / 3 % 2 * 1"),
        Expr::binary(
            BinaryOp::Mul,
            Expr::binary(
                BinaryOp::Mod,
                Expr::binary(
                    BinaryOp::Div,
                    Expr::binary(BinaryOp::Mul, Expr::literal(5.0), Expr::literal(4.0)),
                    Expr::literal(3.0),
                ),
                Expr::literal(2.0),
            ),
            Expr::literal(1.0),
        )
    );
}

#[test]
fn test_parse_power_right_associative() {
    assert_eq!(
        parse_expression("2 ** 3 ** 2"),
        Expr::binary(
            BinaryOp::Pow,
            Expr::literal(2.0),
            Expr::binary(BinaryOp::Pow, Expr::literal(3.0), Expr::literal(2.0)),
        )
    );
}

#[test]
fn test_parse_precedence_mul_over_add() {
    assert_eq!(
        parse_expression("1 + 2 * 3"),
        Expr::binary(
            BinaryOp::Add,
            Expr::literal(1.0),
            Expr::binary(BinaryOp::Mul, Expr::literal(2.0), Expr::literal(3.0)),
        )
    );
}

#[test]
fn test_parse_precedence_pow_over_mul() {
    assert_eq!(
        parse_expression("2 * 3 ** 2"),
        Expr::binary(
            BinaryOp::Mul,
            Expr::literal(2.0),
            Expr::binary(BinaryOp::Pow, Expr::literal(3.0), Expr::literal(2.0)),
        )
    );
}

#[test]
fn test_parse_negation_wraps_multiplicative_chain() {
    // The one leading minus binds looser than `%` and `**`.
    assert_eq!(
        parse_expression("-3 ** 5 % 2"),
        Expr::unary(
            UnaryOp::Neg,
            Expr::binary(
                BinaryOp::Mod,
                Expr::binary(BinaryOp::Pow, Expr::literal(3.0), Expr::literal(5.0)),
                Expr::literal(2.0),
            ),
        )
    );
}

#[test]
fn test_parse_negation_stops_at_additive() {
    assert_eq!(
        parse_expression("-1 + 2"),
        Expr::binary(
            BinaryOp::Add,
            Expr::unary(UnaryOp::Neg, Expr::literal(1.0)),
            Expr::literal(2.0),
        )
    );
}

#[test]
fn test_parse_negation_per_additive_operand() {
    assert_eq!(
        parse_expression("1 + -2"),
        Expr::binary(
            BinaryOp::Add,
            Expr::literal(1.0),
            Expr::unary(UnaryOp::Neg, Expr::literal(2.0)),
        )
    );
}

#[test]
fn test_parse_equality() {
    assert_eq!(
        parse_expression("a == b"),
        Expr::binary(
            BinaryOp::Equal,
            Expr::identifier("a"),
            Expr::identifier("b"),
        )
    );
}

#[test]
fn test_parse_equality_not_chainable() {
    let error = parse_source("print a == b == c").unwrap_err();

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(
        *error.get_position(),
        Position {
            line: 1,
            column: 14
        }
    );
}

#[test]
fn test_parse_sqrt_binds_power_operand() {
    assert_eq!(
        parse_expression("sqrt 4 ** 2"),
        Expr::unary(
            UnaryOp::Sqrt,
            Expr::binary(BinaryOp::Pow, Expr::literal(4.0), Expr::literal(2.0)),
        )
    );
}

#[test]
fn test_parse_sqrt_releases_multiplication() {
    assert_eq!(
        parse_expression("sqrt 4 * 2"),
        Expr::binary(
            BinaryOp::Mul,
            Expr::unary(UnaryOp::Sqrt, Expr::literal(4.0)),
            Expr::literal(2.0),
        )
    );
}

#[test]
fn test_parse_abs_builtin() {
    assert_eq!(
        parse_expression("abs 2 ** 2"),
        Expr::unary(
            UnaryOp::Abs,
            Expr::binary(BinaryOp::Pow, Expr::literal(2.0), Expr::literal(2.0)),
        )
    );
}

#[test]
fn test_parse_parenthesised_expression() {
    assert_eq!(
        parse_expression("(1 + 2) * 3"),
        Expr::binary(
            BinaryOp::Mul,
            Expr::binary(BinaryOp::Add, Expr::literal(1.0), Expr::literal(2.0)),
            Expr::literal(3.0),
        )
    );
}

#[test]
fn test_parse_double_negation_is_error() {
    let error = parse_source("print - -2").unwrap_err();

    assert_eq!(*error.get_position(), Position { line: 1, column: 9 });
}

#[test]
fn test_parse_negative_exponent_is_error() {
    let error = parse_source("print 2 ** -4").unwrap_err();

    assert_eq!(
        *error.get_position(),
        Position {
            line: 1,
            column: 12
        }
    );
}

#[test]
fn test_parse_empty_program_is_error() {
    let error = parse_source("").unwrap_err();

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(*error.get_position(), Position { line: 1, column: 1 });
}

#[test]
fn test_parse_empty_token_vector_is_error() {
    // Direct callers can hand over a vector with no EOF token at all.
    let error = parse(vec![]).unwrap_err();

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(*error.get_position(), Position { line: 1, column: 1 });
}

#[test]
fn test_parse_whitespace_only_program_is_error() {
    let error = parse_source("  \n  ").unwrap_err();

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(*error.get_position(), Position { line: 2, column: 3 });
}

#[test]
fn test_parse_trailing_tokens_are_an_error() {
    let error = parse_source("print 1 5").unwrap_err();

    assert_eq!(*error.get_position(), Position { line: 1, column: 9 });
}

#[test]
fn test_parse_statement_cannot_start_with_operator() {
    let error = parse_source("x * 5").unwrap_err();

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(*error.get_position(), Position { line: 1, column: 3 });
}

#[test]
fn test_parse_error_position_on_later_line() {
    let error = parse_source("print 5\nx * 5").unwrap_err();

    assert_eq!(*error.get_position(), Position { line: 2, column: 3 });
}

#[test]
fn test_parse_close_paren_cannot_start_statement() {
    let error = parse_source("print 5\n) * 5").unwrap_err();

    assert_eq!(*error.get_position(), Position { line: 2, column: 1 });
}

#[test]
fn test_parse_declaration_requires_expression() {
    let error = parse_source("let x = * 71").unwrap_err();

    assert_eq!(*error.get_position(), Position { line: 1, column: 9 });
}

#[test]
fn test_parse_declaration_requires_name() {
    let error = parse_source("let = 42").unwrap_err();

    assert_eq!(*error.get_position(), Position { line: 1, column: 5 });
}

#[test]
fn test_parse_incomplete_expression_at_eof() {
    let error = parse_source("print 5 -").unwrap_err();

    assert_eq!(
        *error.get_position(),
        Position {
            line: 1,
            column: 10
        }
    );
    assert!(error.to_string().starts_with("Line 1, col 10:"));
}

#[test]
fn test_parse_unclosed_paren_at_eof() {
    let error = parse_source("print (5").unwrap_err();

    assert_eq!(*error.get_position(), Position { line: 1, column: 9 });
}

#[test]
fn test_parse_expr_directly() {
    let tokens = tokenize("1 + 2").unwrap();
    let mut parser = Parser::new(tokens);

    let expr = super::expr::parse_expr(&mut parser).unwrap();

    assert_eq!(
        expr,
        Expr::binary(BinaryOp::Add, Expr::literal(1.0), Expr::literal(2.0))
    );
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
}

#[test]
fn test_parse_is_deterministic() {
    let source = "let one = 5 % 4\nprint -3 ** 5 % 2 == one";

    let first = parse_source(source).unwrap();
    let second = parse_source(source).unwrap();

    assert_eq!(first, second);
}
