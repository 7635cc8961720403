//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It is a recursive descent parser with
//! one function per grammar rule and handles:
//!
//! - Statement parsing (declarations, assignments, print statements)
//! - Expression parsing (comparison, arithmetic, negation, builtins)
//! - Error reporting with the position of the offending token
//!
//! Precedence lives in the call chain: each rule parses its operands by
//! calling the next tighter rule, loops encode left associativity and
//! recursion on the right operand encodes right associativity.

pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
