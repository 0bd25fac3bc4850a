#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text into
/// tokens.
pub enum LexError {
    /// A number literal ended with a dot but no decimal digits followed it.
    ExpectingDecimalDigits,
    /// Digits appeared after the `i` marker of an imaginary literal.
    TrailingImaginaryDigits,
    /// The exponent marker `e` was not followed by decimal digits.
    MalformedExponent {
        /// The character found instead, if the input did not simply end.
        found: Option<char>,
    },
    /// A character that cannot start any token.
    UnknownToken {
        /// The offending character.
        character: char,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectingDecimalDigits => {
                write!(f, "Expecting decimal digits after the dot sign")
            },

            Self::TrailingImaginaryDigits => {
                write!(f, "Unexpected numbers after imaginary part")
            },

            Self::MalformedExponent { found: Some(character) } => {
                write!(f, "Unexpected character {character} after the exponent sign")
            },

            Self::MalformedExponent { found: None } => {
                write!(f, "Unexpected <end> after the exponent sign")
            },

            Self::UnknownToken { character } => {
                write!(f, "Unknown token from character {character}")
            },
        }
    }
}

impl std::error::Error for LexError {}

// The scanner's error type must carry a default; the null character stands
// in until the real offender is known.
impl Default for LexError {
    fn default() -> Self {
        Self::UnknownToken { character: '\u{0}' }
    }
}
