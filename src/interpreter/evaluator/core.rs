use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{Error, EvalError},
    interpreter::{evaluator::function::Function, parser, value::Complex},
    util::num::parse_float_prefix,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates expression trees against the table of named constants.
///
/// The constants are `PI` (also spelled `Pi` and `pi`), `E`, and the two
/// logarithm bridges `LOGEI` (`ln i` = iπ/2) and `LOGIE` (its reciprocal,
/// -2i/π).
///
/// An `Evaluator` holds no mutable state, so one instance can serve any
/// number of evaluations.
///
/// ## Example
/// ```
/// use argand::{Complex, interpreter::evaluator::core::Evaluator};
///
/// let evaluator = Evaluator::new();
/// let value = evaluator.evaluate("(3 + i) ^ 2").unwrap();
///
/// assert_eq!(value.to_string(), "8.000000000000002+6.000000000000001i");
/// ```
pub struct Evaluator {
    /// A mapping from constant names to their values.
    constants: HashMap<String, Complex>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with the builtin constant table.
    #[must_use]
    pub fn new() -> Self {
        let pi = Complex::new(std::f64::consts::PI, 0.0);
        let constants = HashMap::from([
            ("E".to_string(), Complex::new(std::f64::consts::E, 0.0)),
            ("LOGEI".to_string(), Complex::new(0.0, std::f64::consts::FRAC_PI_2)),
            ("LOGIE".to_string(), Complex::new(0.0, -2.0 / std::f64::consts::PI)),
            ("pi".to_string(), pi),
            ("Pi".to_string(), pi),
            ("PI".to_string(), pi),
        ]);

        Self { constants }
    }

    /// Parses and evaluates a source expression.
    ///
    /// # Parameters
    /// - `source`: The expression text.
    ///
    /// # Returns
    /// The resulting complex value.
    ///
    /// # Errors
    /// Any scanning, parsing, or evaluation error, wrapped in the top-level
    /// [`Error`].
    pub fn evaluate(&self, source: &str) -> Result<Complex, Error> {
        let expr = parser::parse(source)?;

        Ok(self.eval(&expr)?)
    }

    /// Evaluates an expression tree and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the expression variant: literals,
    /// identifiers, unary and binary operations, function calls, and
    /// groups.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed complex value.
    ///
    /// # Errors
    /// Propagates any evaluation error from the kernel or from name and
    /// arity resolution.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Complex> {
        match expr {
            Expr::Number(text) => Ok(Complex::new(parse_float_prefix(text), 0.0)),

            Expr::Imaginary(text) => {
                let coefficient = if text.is_empty() { 1.0 } else { parse_float_prefix(text) };
                Ok(Complex::new(0.0, coefficient))
            },

            Expr::Identifier(name) => {
                self.constants.get(name).copied().ok_or(EvalError::UnknownIdentifier)
            },

            Expr::Unary { op, expr } => {
                let value = self.eval(expr)?;
                Ok(match op {
                    UnaryOperator::Plus => value,
                    UnaryOperator::Negate => -value,
                })
            },

            Expr::Binary { left, op, right } => {
                Self::eval_binary(*op, self.eval(left)?, self.eval(right)?)
            },

            Expr::FunctionCall { name, arguments } => self.eval_function_call(name, arguments),

            Expr::Group(expr) => self.eval(expr),
        }
    }

    /// Dispatches a binary operation to the kernel.
    fn eval_binary(op: BinaryOperator, left: Complex, right: Complex) -> EvalResult<Complex> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => left.divide(right),
            BinaryOperator::Pow => left.power(right),
        }
    }

    /// Evaluates a function call.
    ///
    /// The name must resolve to a builtin. One-argument calls apply the
    /// builtin directly; `log` and `root` additionally accept a first
    /// parameter argument with the receiver in second position, so
    /// `log(2, 4)` is the base-2 logarithm of 4. Arguments beyond the
    /// second are ignored.
    ///
    /// # Parameters
    /// - `name`: Function name from the call site.
    /// - `arguments`: Unevaluated argument expressions.
    ///
    /// # Returns
    /// The function result.
    ///
    /// # Errors
    /// - `UnknownFunction` if the name does not resolve.
    /// - `ArgumentCountMismatch` or `LogWithoutBase` on bad arity.
    /// - Propagates any evaluation error from the arguments or the kernel.
    fn eval_function_call(&self, name: &str, arguments: &[Expr]) -> EvalResult<Complex> {
        let Some(function) = Function::from_name(name) else {
            return Err(EvalError::UnknownFunction { name: name.to_string() });
        };

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.eval(argument)?);
        }

        match values.as_slice() {
            [] => Err(match function {
                Function::Log => EvalError::LogWithoutBase,
                _ => EvalError::ArgumentCountMismatch { name: name.to_string() },
            }),

            [value] => function.apply(*value),

            [parameter, receiver, ..] => match function {
                Function::Log => receiver.log(*parameter),
                Function::Root => receiver.principal_root(*parameter),
                _ => Err(EvalError::ArgumentCountMismatch { name: name.to_string() }),
            },
        }
    }
}
