#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can be raised while evaluating an expression
/// tree.
pub enum EvalError {
    /// An identifier did not name a known constant.
    UnknownIdentifier,
    /// A call named a function that does not exist.
    UnknownFunction {
        /// The name used in the call.
        name: String,
    },
    /// A single-parameter function was called with some other number of
    /// arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        name: String,
    },
    /// `log` was called without its base argument.
    LogWithoutBase,
    /// The order of a root had a nonzero imaginary part.
    ImaginaryRootOrder,
    /// The order of a root was not an integer of at least 2.
    InvalidRootOrder {
        /// The order that was given.
        order: f64,
    },
    /// Tried to take a root of zero.
    ZeroRootBase,
    /// Tried to divide by zero.
    DivisionByZero,
    /// Tried to raise zero to the power of zero.
    ZeroToTheZero,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier => write!(f, "Unknown identifier"),

            Self::UnknownFunction { name } => write!(f, "Unknown function {name}"),

            Self::ArgumentCountMismatch { name } => {
                write!(f, "{name} function can have only one parameter")
            },

            Self::LogWithoutBase => write!(f, "log function must have two parameters"),

            Self::ImaginaryRootOrder => write!(f,
                                               "Complex number cannot have imaginary part. Use `power` instead"),

            Self::InvalidRootOrder { order } => write!(f,
                                                       "The parameter has to be a integer bigger than 1. Got '{order}' instead."),

            Self::ZeroRootBase => write!(f, "Complex number can't be zero"),

            Self::DivisionByZero => write!(f, "You cannot devide by 0"),

            Self::ZeroToTheZero => write!(f, "You cannot rise 0 to the power of 0"),
        }
    }
}

impl std::error::Error for EvalError {}
