use std::fmt::Display;

/// Expression nodes.
///
/// Binary and unary nodes own their children through `Box`, so every
/// expression is a self-contained tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Represents a numeric literal in the AST. The value is always
    /// non-negative, a leading minus becomes a `Unary` node around it.
    Literal { value: f64 },
    /// Represents a variable reference in the AST.
    Identifier { name: String },
    /// Represents a binary operation between two expressions in the AST.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Represents a unary operation on an expression in the AST.
    Unary { op: UnaryOp, operand: Box<Expr> },
}

impl Expr {
    pub fn literal(value: f64) -> Expr {
        Expr::Literal { value }
    }

    pub fn identifier(name: impl Into<String>) -> Expr {
        Expr::Identifier { name: name.into() }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Expr {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Equal,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOp {
    /// The operator's source spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Equal => "==",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOp {
    Neg,
    Abs,
    Sqrt,
}

impl UnaryOp {
    /// The operator's source spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Abs => "abs",
            UnaryOp::Sqrt => "sqrt",
        }
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
