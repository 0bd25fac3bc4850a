/// Core parsing logic.
///
/// Contains the parse entry point and the binary precedence levels of the
/// grammar.
pub mod core;

/// Unary and primary parsing.
///
/// Handles unary signs, literals, identifiers, function calls, and
/// parenthesized groups.
pub mod unary;

pub use core::parse;
