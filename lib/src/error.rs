//! Error types for the Fourier engine
//!
//! Every failure is returned to the caller as a typed value; nothing in the
//! library logs or swallows an error.

use thiserror::Error;

/// Errors raised while tokenizing or parsing a function expression.
///
/// Offsets are byte positions into the source string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("Unknown identifier '{name}' at position {pos}")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("Malformed number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("Unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("Unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("Unbalanced '{bracket}' at position {pos}")]
    UnbalancedBracket { bracket: char, pos: usize },

    #[error("Expression nested too deeply at position {pos}")]
    TooDeep { pos: usize },

    #[error("Empty expression")]
    Empty,
}

/// Errors raised by the engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Signal length must be {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid function: {0}")]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_converts() {
        let err: Error = ParseError::Empty.into();
        assert_eq!(err, Error::Parse(ParseError::Empty));
        assert_eq!(err.to_string(), "Invalid function: Empty expression");
    }

    #[test]
    fn test_messages_carry_position() {
        let err = ParseError::UnknownIdentifier {
            name: "foo".to_string(),
            pos: 3,
        };
        assert_eq!(err.to_string(), "Unknown identifier 'foo' at position 3");

        let err = Error::LengthMismatch {
            expected: 8,
            actual: 7,
        };
        assert_eq!(err.to_string(), "Signal length must be 8, got 7");
    }
}
