/// Scanning errors.
///
/// Defines all error types that can occur while scanning source text into
/// tokens, such as malformed number literals or characters that cannot start
/// any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// an expression tree, such as leftover tokens, missing closing parentheses,
/// or premature end of input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating an
/// expression tree. Evaluation errors include division by zero, invalid
/// root orders, unknown identifiers, and bad argument counts.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq)]
/// The top-level error type: everything that can go wrong between source
/// text and a final value.
pub enum Error {
    /// The source text could not be scanned or parsed.
    Parse(ParseError),
    /// The expression tree could not be evaluated.
    Eval(EvalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Eval(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Parse(ParseError::Lex(error))
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}
