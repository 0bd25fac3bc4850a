/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, dispatches
/// arithmetic to the complex kernel, resolves constants and function names,
/// and produces the final value.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves the builtin constants and functions.
/// - Reports evaluation errors such as division by zero or bad arity.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as number
/// literals, identifiers, operators, and delimiters. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Validates number literals, including imaginary and exponent forms.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the
/// expression.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax.
/// - Supports arithmetic, unary signs, function calls, and grouping.
pub mod parser;
/// The value module defines the runtime data type for evaluation.
///
/// This module declares the complex number type every expression evaluates
/// to, along with its arithmetic kernel and canonical text rendering.
///
/// # Responsibilities
/// - Defines the `Complex` type.
/// - Implements the arithmetic, trigonometric, and hyperbolic operations.
/// - Renders values in their canonical text form.
pub mod value;
