//! # argand
//!
//! argand is a complex-number expression evaluator written in Rust.
//! It parses and evaluates expressions over the complex plane, with the
//! full trigonometric and hyperbolic families, principal roots, powers,
//! and logarithms to arbitrary bases.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::Evaluator;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and operator types for all language constructs.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for scanning, parsing, and evaluation.
///
/// This module defines all errors that can be raised while turning source
/// text into a value. It standardizes error reporting and carries the exact
/// human-readable message for each failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, the complex value
/// type, and error handling to provide a complete runtime for expression
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and the
///   value type.
/// - Provides entry points for parsing and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and literal parsing.
///
/// This module provides reusable helpers used throughout the interpreter,
/// such as safe float-to-integer conversion and prefix-tolerant float
/// parsing for literal tokens.
pub mod util;

pub use crate::{error::Error, interpreter::value::Complex};

/// Evaluates an expression and renders the result in its canonical text
/// form.
///
/// This is the primary entry point: it parses `source`, evaluates the
/// expression tree, and stringifies the resulting complex value.
///
/// # Errors
/// Returns the scanning, parsing, or evaluation error, whose `Display`
/// carries the exact failure message.
///
/// # Examples
/// ```
/// use argand::evaluate;
///
/// assert_eq!(evaluate("3+i-2i*2").unwrap(), "3-3i");
/// assert_eq!(evaluate("log(2, 4)").unwrap(), "2");
///
/// let error = evaluate("3 / 0").unwrap_err();
/// assert_eq!(error.to_string(), "You cannot devide by 0");
/// ```
pub fn evaluate(source: &str) -> Result<String, Error> {
    let value = Evaluator::new().evaluate(source)?;

    Ok(value.to_string())
}
