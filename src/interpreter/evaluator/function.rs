use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Complex},
};

/// Defines the builtin functions by generating the `Function` enum and its
/// name lookup.
///
/// Each entry maps a call name to an enum variant. The macro produces:
/// - the `Function` enum itself,
/// - `Function::from_name` for call-site resolution.
macro_rules! functions {
    ( $( $name:literal => $variant:ident ),* $(,)? ) => {
        /// A builtin function, resolved from its call name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Function {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl Function {
            /// Resolves a call name to its builtin.
            ///
            /// # Example
            /// ```
            /// use argand::interpreter::evaluator::function::Function;
            ///
            /// assert_eq!(Function::from_name("sin"), Some(Function::Sin));
            /// assert_eq!(Function::from_name("sin2"), None);
            /// ```
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

functions! {
    "abs"   => Abs,
    "acos"  => Acos,
    "acosh" => Acosh,
    "acot"  => Acot,
    "acoth" => Acoth,
    "acsc"  => Acsc,
    "acsch" => Acsch,
    "asec"  => Asec,
    "asech" => Asech,
    "asin"  => Asin,
    "asinh" => Asinh,
    "atan"  => Atan,
    "atanh" => Atanh,
    "cos"   => Cos,
    "cosh"  => Cosh,
    "cot"   => Cot,
    "coth"  => Coth,
    "csc"   => Csc,
    "csch"  => Csch,
    "log"   => Log,
    "ln"    => Ln,
    "root"  => Root,
    "sec"   => Sec,
    "sech"  => Sech,
    "sin"   => Sin,
    "sinh"  => Sinh,
    "tan"   => Tan,
    "tanh"  => Tanh,
}

impl Function {
    /// Applies the one-argument form of the builtin to `value`.
    ///
    /// `abs` returns its real magnitude as a real value, `root` defaults the
    /// order to 2, and `log` has no one-argument form.
    ///
    /// # Errors
    /// - `LogWithoutBase` for `log`.
    /// - Propagates any domain error from the kernel.
    pub fn apply(self, value: Complex) -> EvalResult<Complex> {
        match self {
            Self::Abs => Ok(Complex::new(value.abs(), 0.0)),
            Self::Acos => value.acos(),
            Self::Acosh => value.acosh(),
            Self::Acot => value.acot(),
            Self::Acoth => value.acoth(),
            Self::Acsc => value.acsc(),
            Self::Acsch => value.acsch(),
            Self::Asec => value.asec(),
            Self::Asech => value.asech(),
            Self::Asin => value.asin(),
            Self::Asinh => value.asinh(),
            Self::Atan => Ok(value.atan()),
            Self::Atanh => Ok(value.atanh()),
            Self::Cos => Ok(value.cos()),
            Self::Cosh => Ok(value.cosh()),
            Self::Cot => value.cot(),
            Self::Coth => value.coth(),
            Self::Csc => value.csc(),
            Self::Csch => value.csch(),
            Self::Log => Err(EvalError::LogWithoutBase),
            Self::Ln => Ok(value.ln()),
            Self::Root => value.principal_root(Complex::new(2.0, 0.0)),
            Self::Sec => value.sec(),
            Self::Sech => value.sech(),
            Self::Sin => Ok(value.sin()),
            Self::Sinh => Ok(value.sinh()),
            Self::Tan => value.tan(),
            Self::Tanh => value.tanh(),
        }
    }
}
