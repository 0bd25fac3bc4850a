/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_F64_INT: f64 = 9_007_199_254_740_991.0;

/// Safely converts an `f64` to `usize` if the value is finite, non-negative,
/// not fractional, and exactly representable.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, negative, fractional, or too large
/// values.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use argand::util::num::{MAX_SAFE_F64_INT, f64_to_usize_checked};
///
/// // Works for safe values
/// let result = f64_to_usize_checked(42.0, "not an index!");
/// assert_eq!(result.unwrap(), 42);
///
/// // Fails for values outside the safe range
/// assert!(f64_to_usize_checked(MAX_SAFE_F64_INT * 2.0, "not an index!").is_err());
/// assert!(f64_to_usize_checked(1.5, "not an index!").is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_usize_checked<E>(value: f64, error: E) -> Result<usize, E> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_F64_INT || value.fract() != 0.0 {
        return Err(error);
    }

    Ok(value as usize)
}

/// Parses the longest prefix of `text` that forms a valid `f64`, falling
/// back to NaN when no prefix parses. Literal tokens admit shapes such as
/// `3.` or `3e+` whose full text `f64::from_str` rejects.
///
/// ## Example
/// ```
/// use argand::util::num::parse_float_prefix;
///
/// assert_eq!(parse_float_prefix("3.5"), 3.5);
/// assert_eq!(parse_float_prefix("3e+"), 3.0);
/// assert!(parse_float_prefix(".").is_nan());
/// ```
#[must_use]
pub fn parse_float_prefix(text: &str) -> f64 {
    for end in (1..=text.len()).rev() {
        if let Ok(value) = text[..end].parse() {
            return value;
        }
    }

    f64::NAN
}
