/// Numeric conversion helpers.
///
/// This module provides safe functions for converting floating-point values
/// to integer types without risking silent data loss or rounding errors.
///
/// All functions return a `Result`, which is `Ok` if the conversion is
/// lossless and valid, or the caller-supplied error if the value is out of
/// range or not an integer.
pub mod num;
