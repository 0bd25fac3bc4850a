use std::{
    fmt::Display,
    iter::{Product, Sum},
    ops,
    str::FromStr,
};

use ordered_float::OrderedFloat;

use crate::{
    error::{Error, EvalError},
    interpreter::evaluator::core::{EvalResult, Evaluator},
    util::num::f64_to_usize_checked,
};

/// `0` as a complex number.
pub const ZERO: Complex = Complex::new(0.0, 0.0);
/// `1` as a complex number.
pub const ONE: Complex = Complex::new(1.0, 0.0);
/// The imaginary unit `i`.
pub const I: Complex = Complex::new(0.0, 1.0);

/// A complex number with double-precision real and imaginary parts.
///
/// Every operation is pure: operands are taken by value and a fresh value is
/// returned. Equality is exact component-wise float equality, with no
/// epsilon.
///
/// # Example
/// ```
/// use argand::Complex;
///
/// let z = Complex::new(3.0, 4.0);
/// assert_eq!(z.abs(), 5.0);
/// assert_eq!(z.conj().parts(), (3.0, -4.0));
/// assert_eq!(z.to_string(), "3+4i");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Complex {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Complex {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use argand::Complex;
    ///
    /// let z = Complex::new(5.0, -1.0);
    /// assert_eq!(z.real, 5.0);
    /// assert_eq!(z.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns the real and imaginary parts as a pair.
    #[must_use]
    pub const fn parts(self) -> (f64, f64) {
        (self.real, self.imaginary)
    }

    /// Returns the absolute value (magnitude) of the complex number,
    /// computed with `hypot` to avoid intermediate overflow.
    ///
    /// # Example
    /// ```
    /// use argand::Complex;
    ///
    /// assert_eq!(Complex::new(3.0, 4.0).abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the argument (phase angle) in radians, the `atan2`-based
    /// principal value in `(-π, π]`.
    ///
    /// # Example
    /// ```
    /// use argand::Complex;
    ///
    /// let z = Complex::new(0.0, 1.0);
    /// assert_eq!(z.arg(), std::f64::consts::FRAC_PI_2);
    /// ```
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Returns the complex conjugate of the number.
    ///
    /// # Example
    /// ```
    /// use argand::Complex;
    ///
    /// assert_eq!(Complex::new(1.0, 5.0).conj(), Complex::new(1.0, -5.0));
    /// ```
    #[must_use]
    pub const fn conj(self) -> Self {
        Self { real:      self.real,
               imaginary: -self.imaginary, }
    }

    /// Divides by another complex number in polar form: the quotient of the
    /// magnitudes at the difference of the arguments.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when the divisor's magnitude is zero.
    ///
    /// # Example
    /// ```
    /// use argand::{Complex, interpreter::value::ZERO};
    ///
    /// let q = Complex::new(4.0, 5.0).divide(Complex::new(2.0, 1.0)).unwrap();
    /// assert_eq!(q.to_string(), "2.6+1.2i");
    ///
    /// assert!(Complex::new(3.0, 0.0).divide(ZERO).is_err());
    /// ```
    pub fn divide(self, divisor: Self) -> EvalResult<Self> {
        let magnitude = divisor.abs();
        if magnitude == 0.0 {
            return Err(EvalError::DivisionByZero);
        }

        let r = self.abs() / magnitude;
        let theta = self.arg() - divisor.arg();

        Ok(Self::new(r * theta.cos(), r * theta.sin()))
    }

    /// Raises the complex number to a complex power.
    ///
    /// Dispatches on whether the base and the exponent are real:
    /// - both real: plain `powf` on the real parts;
    /// - complex base, real exponent `n`: `|z|^n` at `n` times the argument;
    /// - complex exponent `(i, j)`: magnitude `e^(-j·arg z) · |z|^i` at the
    ///   combined angle `j·ln|z| + i·arg z`.
    ///
    /// # Errors
    /// [`EvalError::ZeroToTheZero`] when both base and exponent are zero.
    ///
    /// # Example
    /// ```
    /// use argand::{Complex, interpreter::value::ZERO};
    ///
    /// let p = Complex::new(4.0, 0.0).power(Complex::new(2.0, 0.0)).unwrap();
    /// assert_eq!(p.to_string(), "16");
    ///
    /// assert!(ZERO.power(ZERO).is_err());
    /// ```
    pub fn power(self, exponent: Self) -> EvalResult<Self> {
        let (x, y) = self.parts();
        let (i, j) = exponent.parts();

        if j == 0.0 {
            if y == 0.0 {
                if x == 0.0 && i == 0.0 {
                    return Err(EvalError::ZeroToTheZero);
                }
                return Ok(Self::new(x.powf(i), 0.0));
            }

            let theta = y.atan2(x) * i;
            let magnitude = x.hypot(y).powf(i);
            return Ok(Self::new(theta.cos() * magnitude, theta.sin() * magnitude));
        }

        let magnitude = std::f64::consts::E.powf(-j * y.atan2(x)) * x.hypot(y).powf(i);
        let angle = j * x.hypot(y).ln() + y.atan2(x) * i;

        Ok(Self::new(magnitude * angle.cos(), magnitude * angle.sin()))
    }

    /// Computes the full set of `n`-th roots, ordered by branch index
    /// `k = 0..n-1`: magnitude `|z|^(1/n)` at angle `(arg z + 2πk)/n`.
    /// Index 0 is the principal root.
    ///
    /// # Errors
    /// - [`EvalError::ImaginaryRootOrder`] when the order has a nonzero
    ///   imaginary part.
    /// - [`EvalError::InvalidRootOrder`] when the order is not an integer of
    ///   at least 2.
    /// - [`EvalError::ZeroRootBase`] when `self` is zero.
    ///
    /// # Example
    /// ```
    /// use argand::Complex;
    ///
    /// let roots = Complex::new(4.0, 0.0).root(Complex::new(2.0, 0.0)).unwrap();
    /// assert_eq!(roots.len(), 2);
    /// assert_eq!(roots[0].to_string(), "2");
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn root(self, order: Self) -> EvalResult<Vec<Self>> {
        if order.imaginary != 0.0 {
            return Err(EvalError::ImaginaryRootOrder);
        }

        let n = order.real;
        if n.fract() != 0.0 || n < 2.0 {
            return Err(EvalError::InvalidRootOrder { order: n });
        }
        if self.real == 0.0 && self.imaginary == 0.0 {
            return Err(EvalError::ZeroRootBase);
        }

        let count = f64_to_usize_checked(n, EvalError::InvalidRootOrder { order: n })?;
        let angle = self.arg();
        let radius = self.abs().powf(1.0 / n);

        let mut roots = Vec::with_capacity(count);
        for k in 0..count {
            let theta = (angle + 2.0 * k as f64 * std::f64::consts::PI) / n;
            roots.push(Self::new(radius * theta.cos(), radius * theta.sin()));
        }

        Ok(roots)
    }

    /// Returns the principal (branch index 0) `n`-th root.
    ///
    /// # Errors
    /// Same conditions as [`Complex::root`].
    pub fn principal_root(self, order: Self) -> EvalResult<Self> {
        // root() rejects any order below 2, so the set is never empty.
        Ok(self.root(order)?[0])
    }

    /// Returns the natural logarithm: `ln|z|` plus `i` times the principal
    /// argument.
    ///
    /// # Example
    /// ```
    /// use argand::Complex;
    ///
    /// assert_eq!(Complex::new(1.0, 0.0).ln().to_string(), "0");
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }

    /// Computes the logarithm with respect to an arbitrary complex base:
    /// `ln(z) / ln(base)`, shortcut to [`Complex::ln`] when the base is `e`.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when `ln(base)` is zero (base 1).
    ///
    /// # Example
    /// ```
    /// use argand::Complex;
    ///
    /// let r = Complex::new(4.0, 0.0).log(Complex::new(2.0, 0.0)).unwrap();
    /// assert_eq!(r.to_string(), "2");
    /// ```
    pub fn log(self, base: Self) -> EvalResult<Self> {
        if base.imaginary == 0.0 && base.real == std::f64::consts::E {
            return Ok(self.ln());
        }

        self.ln().divide(base.ln())
    }

    /// Returns the sine of the complex number.
    ///
    /// # Example
    /// ```
    /// use argand::Complex;
    ///
    /// assert_eq!(Complex::new(0.0, 0.0).sin().to_string(), "0");
    /// ```
    #[must_use]
    pub fn sin(self) -> Self {
        Self::new(self.real.sin() * self.imaginary.cosh(),
                  self.real.cos() * self.imaginary.sinh())
    }

    /// Returns the cosine of the complex number.
    #[must_use]
    pub fn cos(self) -> Self {
        Self::new(self.real.cos() * self.imaginary.cosh(),
                  -self.real.sin() * self.imaginary.sinh())
    }

    /// Returns the tangent, as the quotient of sine and cosine.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when the cosine is zero.
    pub fn tan(self) -> EvalResult<Self> {
        self.sin().divide(self.cos())
    }

    /// Returns the cotangent, as the quotient of cosine and sine.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when the sine is zero.
    pub fn cot(self) -> EvalResult<Self> {
        self.cos().divide(self.sin())
    }

    /// Returns the secant, the reciprocal of the cosine.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when the cosine is zero.
    pub fn sec(self) -> EvalResult<Self> {
        ONE.divide(self.cos())
    }

    /// Returns the cosecant, the reciprocal of the sine.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when the sine is zero.
    pub fn csc(self) -> EvalResult<Self> {
        ONE.divide(self.sin())
    }

    /// Returns the hyperbolic sine of the complex number.
    #[must_use]
    pub fn sinh(self) -> Self {
        Self::new(self.imaginary.cos() * self.real.sinh(),
                  self.imaginary.sin() * self.real.cosh())
    }

    /// Returns the hyperbolic cosine of the complex number.
    #[must_use]
    pub fn cosh(self) -> Self {
        Self::new(self.imaginary.cos() * self.real.cosh(),
                  self.imaginary.sin() * self.real.sinh())
    }

    /// Returns the hyperbolic tangent.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when the hyperbolic cosine is zero.
    pub fn tanh(self) -> EvalResult<Self> {
        self.sinh().divide(self.cosh())
    }

    /// Returns the hyperbolic cotangent.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when the hyperbolic sine is zero.
    pub fn coth(self) -> EvalResult<Self> {
        self.cosh().divide(self.sinh())
    }

    /// Returns the hyperbolic secant, the reciprocal of the hyperbolic
    /// cosine.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when the hyperbolic cosine is zero.
    pub fn sech(self) -> EvalResult<Self> {
        ONE.divide(self.cosh())
    }

    /// Returns the hyperbolic cosecant, the reciprocal of the hyperbolic
    /// sine.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when the hyperbolic sine is zero.
    pub fn csch(self) -> EvalResult<Self> {
        ONE.divide(self.sinh())
    }

    /// Returns the arcsine, by the principal-branch identity
    /// `asin z = ln(iz + sqrt(1 - z²)) / i`.
    ///
    /// # Errors
    /// Propagates from the final quotient by `i` (never triggered for finite
    /// inputs, since `|i| = 1`).
    pub fn asin(self) -> EvalResult<Self> {
        let (x, y) = self.parts();
        let w = Self::new(y * y - x * x + 1.0, -2.0 * x * y).power(Self::new(0.5, 0.0))?;

        (w + Self::new(-y, x)).ln().divide(I)
    }

    /// Returns the arccosine, as `π/2 - asin z`.
    ///
    /// # Errors
    /// Same conditions as [`Complex::asin`].
    pub fn acos(self) -> EvalResult<Self> {
        Ok(Self::new(std::f64::consts::FRAC_PI_2, 0.0) - self.asin()?)
    }

    /// Returns the arctangent, by the principal-branch identity
    /// `atan z = (i/2) · (ln(1 - iz) - ln(1 + iz))`.
    #[must_use]
    pub fn atan(self) -> Self {
        let (x, y) = self.parts();
        let lhs = Self::new(y + 1.0, -x).ln();
        let rhs = Self::new(-y + 1.0, x).ln();

        Self::new(0.0, 0.5) * (lhs - rhs)
    }

    /// Returns the arccotangent, the arctangent of the reciprocal.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when `self` is zero.
    pub fn acot(self) -> EvalResult<Self> {
        Ok(self.reciprocal()?.atan())
    }

    /// Returns the arcsecant, the arccosine of the reciprocal.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when `self` is zero.
    pub fn asec(self) -> EvalResult<Self> {
        self.reciprocal()?.acos()
    }

    /// Returns the arccosecant, the arcsine of the reciprocal.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when `self` is zero.
    pub fn acsc(self) -> EvalResult<Self> {
        self.reciprocal()?.asin()
    }

    /// Returns the inverse hyperbolic sine, by
    /// `asinh z = ln(z + sqrt(z² + 1))`.
    ///
    /// # Errors
    /// Propagates from the intermediate square root (never triggered for
    /// finite inputs).
    pub fn asinh(self) -> EvalResult<Self> {
        let w = (self * self + ONE).power(Self::new(0.5, 0.0))?;

        Ok((w + self).ln())
    }

    /// Returns the inverse hyperbolic cosine, by
    /// `acosh z = ln(z + sqrt(z² - 1))`.
    ///
    /// # Errors
    /// Propagates from the intermediate square root (never triggered for
    /// finite inputs).
    pub fn acosh(self) -> EvalResult<Self> {
        let (x, y) = self.parts();
        let w = Self::new(x * x - y * y - 1.0, 2.0 * x * y).power(Self::new(0.5, 0.0))?;

        Ok((w + self).ln())
    }

    /// Returns the inverse hyperbolic tangent, by
    /// `atanh z = (ln(1 + z) - ln(1 - z)) / 2`.
    #[must_use]
    pub fn atanh(self) -> Self {
        let (x, y) = self.parts();
        let lhs = Self::new(x + 1.0, y).ln();
        let rhs = Self::new(1.0 - x, -y).ln();

        (lhs - rhs) * Self::new(0.5, 0.0)
    }

    /// Returns the inverse hyperbolic cotangent, the inverse hyperbolic
    /// tangent of the reciprocal.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when `self` is zero.
    pub fn acoth(self) -> EvalResult<Self> {
        Ok(self.reciprocal()?.atanh())
    }

    /// Returns the inverse hyperbolic secant, the inverse hyperbolic cosine
    /// of the reciprocal.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when `self` is zero.
    pub fn asech(self) -> EvalResult<Self> {
        self.reciprocal()?.acosh()
    }

    /// Returns the inverse hyperbolic cosecant, the inverse hyperbolic sine
    /// of the reciprocal.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when `self` is zero.
    pub fn acsch(self) -> EvalResult<Self> {
        self.reciprocal()?.asinh()
    }

    /// The reciprocal as the conjugate over the squared magnitude, going
    /// through the polar [`Complex::divide`] so a zero input reports the
    /// same error as the other quotients.
    fn reciprocal(self) -> EvalResult<Self> {
        let denominator = self.real * self.real + self.imaginary * self.imaginary;

        self.conj().divide(Self::new(denominator, 0.0))
    }
}

/// Renders the canonical text form:
///
/// - a real value prints its real part alone;
/// - a pure imaginary prints `i` with the coefficient omitted when it is
///   `1`, or reduced to a bare minus sign when it is `-1`;
/// - otherwise both parts, joined by `+` for a positive imaginary part and
///   by the imaginary part's own minus sign for a negative one.
///
/// # Example
/// ```
/// use argand::Complex;
///
/// assert_eq!(Complex::new(0.0, 0.0).to_string(), "0");
/// assert_eq!(Complex::new(1.0, -2.0).to_string(), "1-2i");
/// assert_eq!(Complex::new(4.0, -1.0).to_string(), "4-i");
/// assert_eq!(Complex::new(0.0, 1.0).to_string(), "i");
/// ```
impl Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Negative zero renders as plain 0.
        let real = if self.real == 0.0 { 0.0 } else { self.real };
        let imaginary = if self.imaginary == 0.0 { 0.0 } else { self.imaginary };
        if imaginary == 0.0 {
            return write!(f, "{real}");
        }
        if real == 0.0 {
            return match imaginary {
                1.0 => write!(f, "i"),
                -1.0 => write!(f, "-i"),
                _ => write!(f, "{imaginary}i"),
            };
        }
        match imaginary {
            1.0 => write!(f, "{real}+i"),
            -1.0 => write!(f, "{real}-i"),
            _ if imaginary > 0.0 => write!(f, "{real}+{imaginary}i"),
            _ => write!(f, "{real}{imaginary}i"),
        }
    }
}

impl ops::Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imaginary)
    }
}

impl ops::Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl ops::Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl ops::Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.real * rhs.real - self.imaginary * rhs.imaginary,
                  self.real * rhs.imaginary + self.imaginary * rhs.real)
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ZERO, ops::Add::add)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ONE, ops::Mul::mul)
    }
}

impl From<f64> for Complex {
    fn from(value: f64) -> Self {
        Self::new(value, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Parses and evaluates a source expression, taking the resulting value.
///
/// # Example
/// ```
/// use argand::Complex;
///
/// let z: Complex = "3+i-2i*2".parse().unwrap();
/// assert_eq!(z.to_string(), "3-3i");
/// ```
impl FromStr for Complex {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Evaluator::new().evaluate(source)
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for Complex {}
