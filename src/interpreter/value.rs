/// Complex number support.
///
/// Defines the [`Complex`](complex::Complex) type: a pure-value arithmetic
/// kernel with real and imaginary parts. Includes the basic arithmetic
/// operators, division and powers with their principal branch cuts, roots,
/// logarithms, and the full trigonometric and hyperbolic families with their
/// inverses.
///
/// Values render through `Display` in a canonical text form, such as `3-3i`
/// or `i`.
pub mod complex;

pub use complex::{Complex, I, ONE, ZERO};
