//! Error types for JSON parsing.

use thiserror::Error;

/// Errors that can occur while parsing JSON text.
///
/// Every variant carries the byte offset into the input at which the error
/// was detected. Parsing stops at the first error; no partial value is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended where a value, key, or separator was required.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// A character that cannot start or continue the expected construct.
    #[error("unexpected character at offset {offset}, expected {expected}")]
    UnexpectedChar { offset: usize, expected: &'static str },

    /// The input ended inside a string literal.
    #[error("string not closed at offset {offset}")]
    UnterminatedString { offset: usize },

    /// The input ended inside an array or object.
    /// The offset points just past the opening bracket.
    #[error("{container} at offset {offset} is not closed")]
    UnterminatedContainer {
        container: &'static str,
        offset: usize,
    },

    /// The same key appeared twice in one object.
    /// The offset points just past the object's opening brace.
    #[error("key '{key}' already exists in object at offset {offset}")]
    DuplicateKey { key: String, offset: usize },

    /// A backslash followed by a character that is not a valid escape.
    #[error("invalid escape sequence at offset {offset}")]
    InvalidEscape { offset: usize },

    /// A `\u` escape with non-hex digits, truncated input, or a lone or
    /// mismatched surrogate half.
    #[error("invalid unicode escape at offset {offset}")]
    InvalidUnicodeEscape { offset: usize },

    /// A numeric literal that violates the number grammar.
    #[error("malformed number at offset {offset}: {reason}")]
    MalformedNumber { offset: usize, reason: &'static str },

    /// An integer literal outside the range of `i64`.
    #[error("integer at offset {offset} does not fit in 64 bits")]
    IntegerOverflow { offset: usize },

    /// Non-whitespace input remained after the root value.
    #[error("forbidden second root element at offset {offset}")]
    TrailingContent { offset: usize },
}

impl ParseError {
    /// Byte offset into the input at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedEof { offset }
            | ParseError::UnexpectedChar { offset, .. }
            | ParseError::UnterminatedString { offset }
            | ParseError::UnterminatedContainer { offset, .. }
            | ParseError::DuplicateKey { offset, .. }
            | ParseError::InvalidEscape { offset }
            | ParseError::InvalidUnicodeEscape { offset }
            | ParseError::MalformedNumber { offset, .. }
            | ParseError::IntegerOverflow { offset }
            | ParseError::TrailingContent { offset } => *offset,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParseError>;
