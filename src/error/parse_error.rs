use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream into an
/// expression tree.
pub enum ParseError {
    /// The scanner rejected the source text before a token could be formed.
    Lex(LexError),
    /// Found a leftover token after the expression ended.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// A closing parenthesis `)` was expected after a group but not found.
    ExpectedClosingParen,
    /// A closing parenthesis `)` was expected after a function's arguments
    /// but not found.
    ExpectedClosingParenInCall {
        /// The name of the function being called.
        name: String,
    },
    /// Reached the end of input in the middle of an expression.
    UnexpectedEndOfExpression,
    /// Found a token that cannot start an operand.
    UnprocessableToken {
        /// The token encountered.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),

            Self::UnexpectedToken { token } => {
                write!(f, "Unexpected token {token}")
            },

            Self::ExpectedClosingParen => write!(f, "Expecting )"),

            Self::ExpectedClosingParenInCall { name } => {
                write!(f, "Expecting ) in a function call \"{name}\"")
            },

            Self::UnexpectedEndOfExpression => {
                write!(f, "Unexpected termination of expression")
            },

            Self::UnprocessableToken { token } => {
                write!(f, "Parse error, can not process token {token}")
            },
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}
