use super::expressions::Expr;

/// The root of the AST, the program's statements in source order.
///
/// The parser rejects an empty token stream, so the list is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// Statement nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Represents a `let` declaration in the AST.
    Declaration { name: String, initializer: Expr },
    /// Represents an assignment statement in the AST. `target` is always an
    /// `Expr::Identifier`, built from the token that starts the statement.
    Assignment { target: Expr, source: Expr },
    /// Represents a `print` statement in the AST.
    Print { expression: Expr },
}
