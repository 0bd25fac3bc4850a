use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses the unary precedence level.
///
/// Unary `+` and `-` nest recursively, so `- -3` and `3 + +2` parse the way
/// they read.
///
/// Grammar: `unary := ("+" | "-") unary | primary`
///
/// # Parameters
/// - `lexer`: The token stream.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Propagates any errors from scanning or sub-expression parsing.
pub fn parse_unary(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let op = match lexer.peek()? {
        Some(Token::Plus) => Some(UnaryOperator::Plus),
        Some(Token::Minus) => Some(UnaryOperator::Negate),
        _ => None,
    };

    if let Some(op) = op {
        lexer.next()?;

        return Ok(Expr::Unary { op,
                                expr: Box::new(parse_unary(lexer)?), });
    }

    parse_primary(lexer)
}

/// Parses a primary expression: a literal, an identifier, a function call,
/// or a parenthesized group.
///
/// Grammar: `primary := number | identifier | identifier "(" arguments ")" |
/// "(" expression ")"`
///
/// # Parameters
/// - `lexer`: The token stream.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedEndOfExpression` if the input ends where an operand is
///   required.
/// - `ExpectedClosingParen` if a group is not closed.
/// - `UnprocessableToken` if the token cannot start an operand.
pub fn parse_primary(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let Some(token) = lexer.next()? else {
        return Err(ParseError::UnexpectedEndOfExpression);
    };

    match token {
        Token::Number(literal) if literal.imaginary => Ok(Expr::Imaginary(literal.text)),

        Token::Number(literal) => Ok(Expr::Number(literal.text)),

        Token::Identifier(name) => {
            if matches!(lexer.peek()?, Some(Token::LParen)) {
                lexer.next()?;

                return parse_function_call(lexer, name);
            }

            Ok(Expr::Identifier(name))
        },

        Token::LParen => {
            let expr = parse_expression(lexer)?;

            if !matches!(lexer.next()?, Some(Token::RParen)) {
                return Err(ParseError::ExpectedClosingParen);
            }

            Ok(Expr::Group(Box::new(expr)))
        },

        token => Err(ParseError::UnprocessableToken { token: token.to_string() }),
    }
}

/// Parses a function call, positioned just after the opening parenthesis.
///
/// An empty argument list is allowed at this stage; arity is checked during
/// evaluation.
///
/// Grammar: `call := identifier "(" (expression ("," expression)*)? ")"`
///
/// # Parameters
/// - `lexer`: The token stream.
/// - `name`: The function name already consumed.
///
/// # Returns
/// An `Expr::FunctionCall` node.
///
/// # Errors
/// - `ExpectedClosingParenInCall` if the argument list is not closed.
/// - Propagates any errors from argument parsing.
pub fn parse_function_call(lexer: &mut Lexer<'_>, name: String) -> ParseResult<Expr> {
    let mut arguments = Vec::new();

    if !matches!(lexer.peek()?, Some(Token::RParen)) {
        arguments = parse_argument_list(lexer)?;
    }

    if !matches!(lexer.next()?, Some(Token::RParen)) {
        return Err(ParseError::ExpectedClosingParenInCall { name });
    }

    Ok(Expr::FunctionCall { name, arguments })
}

/// Parses a comma-separated argument list.
fn parse_argument_list(lexer: &mut Lexer<'_>) -> ParseResult<Vec<Expr>> {
    let mut arguments = vec![parse_expression(lexer)?];

    while matches!(lexer.peek()?, Some(Token::Comma)) {
        lexer.next()?;
        arguments.push(parse_expression(lexer)?);
    }

    Ok(arguments)
}
