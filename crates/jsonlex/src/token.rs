use alloc::{borrow::Cow, string::String};
use core::fmt;

/// Identifies the class of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub enum TokenKind {
    /// A lexical error; the token text is the diagnostic message.
    Error,
    /// Free text preceding the document (only with `allow_leading_text`).
    Text,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// An unquoted member name.
    Identifier,
    /// A number in its textual form.
    Number,
    /// A string, quotes included.
    String,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// Clean end of the stream. Always has empty text.
    EndOfInput,
}

impl TokenKind {
    /// A stable, human-readable name for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Error => "Error",
            TokenKind::Text => "Text",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::LeftBracket => "LeftBracket",
            TokenKind::RightBracket => "RightBracket",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Comma => "Comma",
            TokenKind::Colon => "Colon",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Null => "Null",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    /// Returns `true` for the kinds that end a token stream.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TokenKind::Error | TokenKind::EndOfInput)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexeme produced by the scanner.
///
/// The text borrows from the scanned input, except for `Error` tokens whose
/// text is an owned diagnostic message. Use [`Token::into_owned`] to detach a
/// token from the input's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub struct Token<'src> {
    /// The class of the lexeme.
    pub kind: TokenKind,
    /// The raw source text of the lexeme, or the message of an `Error`.
    pub text: Cow<'src, str>,
}

impl<'src> Token<'src> {
    pub(crate) fn borrowed(kind: TokenKind, text: &'src str) -> Self {
        Self {
            kind,
            text: Cow::Borrowed(text),
        }
    }

    pub(crate) fn error(message: String) -> Self {
        Self {
            kind: TokenKind::Error,
            text: Cow::Owned(message),
        }
    }

    /// The token text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if this token ends the stream.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// Detaches the token from the input buffer.
    #[must_use]
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            text: Cow::Owned(self.text.into_owned()),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => f.write_str("EOF"),
            TokenKind::Error => f.write_str(&self.text),
            _ => match self.text.char_indices().nth(10) {
                Some((cut, _)) => write!(f, "{:?}...", &self.text[..cut]),
                None => write!(f, "{:?}", self.text),
            },
        }
    }
}
