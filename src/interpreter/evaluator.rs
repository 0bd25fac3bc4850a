/// Core evaluation logic.
///
/// Contains the main evaluation engine, the constant table, and error
/// propagation.
pub mod core;

/// Function evaluation.
///
/// Resolves builtin function names and applies their one-argument forms.
pub mod function;

pub use core::Evaluator;
