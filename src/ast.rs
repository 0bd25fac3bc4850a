/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct the grammar can produce, from literals and
/// identifiers to unary and binary operations, function calls, and
/// parenthesized groups. Number literals keep their source text so the
/// evaluator decides how to interpret them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A real number literal, kept as its source text.
    Number(String),
    /// An imaginary number literal, kept as its coefficient text. The bare
    /// unit `i` keeps an empty coefficient.
    Imaginary(String),
    /// Reference to a named constant.
    Identifier(String),
    /// A unary operation (e.g. negation).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
    },
    /// A parenthesized group.
    Group(Box<Self>),
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}
