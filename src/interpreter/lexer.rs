use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\u{00A0}]+")]
#[logos(error(LexError, unknown_token))]
pub enum Token {
    /// Number literal tokens, real or imaginary, such as `3.14`, `.5`,
    /// `2.1e-10`, `2i` or the bare unit `i`.
    #[regex(r"([0-9i]+(\.[0-9i]*)?|\.[0-9i]*)(e[+-]?[0-9]*i?)?", scan_number, priority = 10)]
    Number(NumberLiteral),
    /// Identifier tokens; constant or function names such as `PI` or `sin`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(literal) => write!(f, "{literal}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
        }
    }
}

/// The validated text of a number literal.
///
/// Imaginary literals carry their coefficient with the `i` marker already
/// stripped; the bare unit `i` keeps an empty coefficient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    /// The literal text, without the `i` marker.
    pub text:      String,
    /// Whether the literal denotes an imaginary value.
    pub imaginary: bool,
}

impl std::fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.imaginary { "i" } else { "" };
        write!(f, "{}{marker}", self.text)
    }
}

/// Validates a number literal from the current token slice.
///
/// The exponent marker must be followed by a sign or a digit, a lone dot
/// carries no digits to read, and the `i` marker is only allowed as the
/// final character.
fn scan_number(lex: &mut logos::Lexer<Token>) -> Result<NumberLiteral, LexError> {
    let slice = lex.slice();

    if let Some((_, exponent)) = slice.split_once('e') {
        let signed = exponent.starts_with(['+', '-']);
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);

        if digits.is_empty() && !signed {
            return Err(LexError::MalformedExponent { found: lex.remainder().chars().next() });
        }
        if let Some(first) = digits.chars().next()
            && !first.is_ascii_digit()
        {
            return Err(LexError::MalformedExponent { found: Some(first) });
        }
    }

    if slice == "." {
        return Err(LexError::ExpectingDecimalDigits);
    }

    if let Some(position) = slice.find('i') {
        if position != slice.len() - 1 {
            return Err(LexError::TrailingImaginaryDigits);
        }
        return Ok(NumberLiteral { text:      slice[..position].to_string(),
                                  imaginary: true, });
    }

    Ok(NumberLiteral { text:      slice.to_string(),
                       imaginary: false, })
}

/// Builds the error for a character no token can start from.
fn unknown_token(lex: &mut logos::Lexer<Token>) -> LexError {
    LexError::UnknownToken { character: lex.slice().chars().next().unwrap_or('\u{0}') }
}

/// A token stream with single-token lookahead over a source expression.
pub struct Lexer<'source> {
    inner:  logos::Lexer<'source, Token>,
    peeked: Option<Option<Result<Token, LexError>>>,
}

impl<'source> Lexer<'source> {
    /// Creates a token stream over `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner:  Token::lexer(source),
               peeked: None, }
    }

    /// Takes the next token, or `None` at the end of input.
    ///
    /// ## Errors
    /// Returns the scanning error when the source text cannot form a token.
    pub fn next(&mut self) -> Result<Option<Token>, LexError> {
        match self.peeked.take() {
            Some(entry) => entry.transpose(),
            None => self.inner.next().transpose(),
        }
    }

    /// Looks at the next token without consuming it.
    ///
    /// ## Errors
    /// Returns the scanning error when the source text cannot form a token.
    pub fn peek(&mut self) -> Result<Option<&Token>, LexError> {
        let entry = self.peeked.get_or_insert_with(|| self.inner.next());
        match entry {
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(error)) => Err(error.clone()),
            None => Ok(None),
        }
    }
}
