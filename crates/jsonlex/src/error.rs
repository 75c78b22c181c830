use alloc::{format, string::String};
use core::fmt;

use thiserror::Error;

/// A lexical error together with the position at which it was detected.
///
/// Scanning stops at the first error; the error is delivered to the caller as
/// the final [`TokenKind::Error`](crate::TokenKind::Error) token and is also
/// retained by the lexer (see [`Lexer::error`](crate::Lexer::error)).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexicalError,
    /// 1-based line of the offending character.
    pub line: usize,
    /// 1-based column of the offending character, counted in code points.
    pub column: usize,
}

/// The character (or end of input) found where something else was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// A character that does not fit the grammar at this point.
    Char(char),
    /// The input ended early.
    EndOfInput,
}

impl From<Option<char>> for Found {
    fn from(c: Option<char>) -> Self {
        c.map_or(Found::EndOfInput, Found::Char)
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "'{}'", format_char(*c)),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Every way the scanner can reject its input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalError {
    /// The first character of the document is not `{`.
    #[error("document must begin with '{{', found {0}")]
    MissingOpeningBrace(Found),
    /// The input ended inside an object.
    #[error("unclosed object")]
    UnclosedObject,
    /// The input ended inside an array.
    #[error("unclosed array")]
    UnclosedArray,
    /// A member name does not start with an ASCII letter.
    #[error("identifier must begin with a letter, found {0}")]
    MalformedIdentifier(Found),
    /// A member name is not followed by `:`.
    #[error("identifier must end with ':', found {0}")]
    MissingColon(Found),
    /// Nothing that can start a value follows `:`.
    #[error("missing value after ':', found {0}")]
    MissingValue(Found),
    /// A sign was not followed by any digit.
    #[error("number must contain at least one digit, found {0}")]
    MalformedNumber(Found),
    /// The input ended before the closing `"`.
    #[error("unterminated string")]
    UnterminatedString,
    /// A string contains a character outside `[A-Za-z0-9]`.
    #[error("invalid character {0} in string")]
    InvalidStringChar(Found),
    /// Something other than a value or `]` follows `[`.
    #[error("invalid element inside array, found {0}")]
    InvalidArrayElement(Found),
    /// A lexeme is followed by something the grammar does not allow.
    #[error("invalid element after {after}, found {found}")]
    InvalidAfter {
        /// The lexeme that was just scanned.
        after: &'static str,
        /// What followed it.
        found: Found,
    },
    /// A closing delimiter does not match the innermost open container.
    #[error("mismatched {found}, expected '{expected}'")]
    MismatchedClose {
        /// The delimiter that closes the innermost open container.
        expected: char,
        /// The closing delimiter actually found.
        found: Found,
    },
    /// Content follows the closing `}` of the document.
    #[error("invalid trailing content {0} after document")]
    TrailingContent(Found),
}

impl LexError {
    /// Renders the diagnostic carried by an `Error` token.
    pub(crate) fn render(&self, name: &str) -> String {
        format!("{name}: {self}")
    }
}

fn format_char(c: char) -> String {
    match c {
        '\'' => "\\'".into(),
        '\\' => "\\\\".into(),
        '\n' => "\\n".into(),
        '\r' => "\\r".into(),
        '\t' => "\\t".into(),
        '\0' => "\\0".into(),
        c if c.is_control() => format!("\\u{:04X}", c as u32),
        c if c.is_whitespace() && !c.is_ascii_whitespace() => format!("\\u{:04X}", c as u32),
        c => c.into(),
    }
}
