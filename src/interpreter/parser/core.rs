use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::unary::parse_unary,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a source string into a single expression tree.
///
/// This is the entry point for parsing. After the expression ends, the
/// token stream must be exhausted; any leftover token is an error.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedToken` if tokens remain after the expression.
/// - Propagates any errors from scanning or sub-expression parsing.
pub fn parse(source: &str) -> ParseResult<Expr> {
    let mut lexer = Lexer::new(source);
    let expr = parse_expression(&mut lexer)?;

    if let Some(token) = lexer.next()? {
        return Err(ParseError::UnexpectedToken { token: token.to_string() });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// It begins at the lowest-precedence level, the additive operators, and
/// recursively descends through the precedence hierarchy. Chains of `+` and
/// `-` associate to the left.
///
/// Grammar: `expression := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `lexer`: The token stream.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Propagates any errors from scanning or sub-expression parsing.
pub fn parse_expression(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut expr = parse_multiplicative(lexer)?;

    while let Some(token) = lexer.peek()? {
        let op = match token {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Sub,
            _ => break,
        };
        lexer.next()?;

        expr = Expr::Binary { left:  Box::new(expr),
                              op,
                              right: Box::new(parse_multiplicative(lexer)?), };
    }

    Ok(expr)
}

/// Parses the multiplicative precedence level.
///
/// `*`, `/` and `^` share one level and associate to the left, so
/// `2 ^ 3 ^ 2` parses as `(2 ^ 3) ^ 2`.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "^") unary)*`
///
/// # Parameters
/// - `lexer`: The token stream.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Propagates any errors from scanning or sub-expression parsing.
pub fn parse_multiplicative(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut expr = parse_unary(lexer)?;

    while let Some(token) = lexer.peek()? {
        let op = match token {
            Token::Star => BinaryOperator::Mul,
            Token::Slash => BinaryOperator::Div,
            Token::Caret => BinaryOperator::Pow,
            _ => break,
        };
        lexer.next()?;

        expr = Expr::Binary { left:  Box::new(expr),
                              op,
                              right: Box::new(parse_unary(lexer)?), };
    }

    Ok(expr)
}
