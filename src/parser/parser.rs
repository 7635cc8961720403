//! Parser state and the top level parsing entry point.
//!
//! The [`Parser`] owns the token stream and a cursor into it. Grammar
//! rules live in `stmt` and `expr` and drive the cursor through the
//! methods here.

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and tracks the current position in
/// it, providing methods for token inspection and consumption.
pub struct Parser {
    /// The list of tokens to parse, always terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    /// Creates a new Parser instance over a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    ///
    /// No rule advances past the trailing EOF token, so the cursor always
    /// points at a token.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        &self.tokens[self.pos - 1]
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// The consumed token if the current token matches. Otherwise the
    /// supplied error, or a default error at the offending token's
    /// position.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return match error {
                Some(error) => Err(error),
                None if token.kind == TokenKind::EOF => Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput,
                    token.span.start,
                )),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start,
                )),
            };
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    ///
    /// Returns true if there are more tokens and the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len() && self.current_token_kind() != TokenKind::EOF
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. Statements are parsed until
/// the EOF token; the first failure aborts the parse. A program with no
/// statements at all is an error too.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);

    let mut statements = vec![];

    while parser.has_tokens() {
        statements.push(parse_stmt(&mut parser)?);
    }

    if statements.is_empty() {
        // A caller-built token vector may not carry the trailing EOF token.
        let position = match parser.tokens.get(parser.pos) {
            Some(token) => token.span.start,
            None => Position { line: 1, column: 1 },
        };
        return Err(Error::new(ErrorImpl::EmptyProgram, position));
    }

    Ok(Program { statements })
}
