//! The transition function: one arm per [`LexState`].

use super::{Frame, LexState, Lexer};
use crate::{
    error::{Found, LexicalError},
    token::TokenKind,
};

const SIGNS: &str = "+-";
const DIGITS: &str = "0123456789";
const HEX_DIGITS: &str = "0123456789abcdefABCDEF";
const NUMERIC_START: &str = "+-0123456789";
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const WHITESPACE: &str = " \t\r\n";

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

impl Lexer<'_> {
    #[allow(clippy::too_many_lines, clippy::enum_glob_use)]
    pub(super) fn step(&mut self, state: LexState) -> LexState {
        use LexState::*;
        match state {
            Done | Failed => state,

            Init => {
                if self.options.allow_leading_text {
                    return LeadingText;
                }
                self.skip_whitespace();
                match self.cursor.peek() {
                    Some('{') => LeftBrace,
                    found => self.fail(LexicalError::MissingOpeningBrace(found.into())),
                }
            }

            LeadingText => {
                while !self.cursor.match_exact("{") && self.cursor.next().is_some() {}
                if !self.cursor.pending().is_empty() {
                    self.emit(TokenKind::Text);
                }
                if self.cursor.is_at_end() {
                    // No document: report a clean end after the text.
                    OutsideObject
                } else {
                    LeftBrace
                }
            }

            // -------------------------- OBJECTS -----------------------------
            LeftBrace => {
                self.consume_delimiter("{");
                self.frames.push(Frame::Object);
                self.emit(TokenKind::LeftBrace);
                InsideObject
            }

            InsideObject => {
                self.skip_whitespace();
                match self.cursor.peek() {
                    Some('}') => RightBrace,
                    Some(c) if is_identifier_start(c) => Identifier,
                    None => self.fail(LexicalError::UnclosedObject),
                    found => self.fail(LexicalError::MalformedIdentifier(found.into())),
                }
            }

            Identifier => {
                if !self.cursor.accept(LETTERS) {
                    return self.fail(LexicalError::MalformedIdentifier(self.found()));
                }
                self.cursor.accept_run(ALPHANUMERIC);
                self.emit(TokenKind::Identifier);
                self.skip_whitespace();
                if self.cursor.peek() == Some(':') {
                    Colon
                } else {
                    self.fail(LexicalError::MissingColon(self.found()))
                }
            }

            Colon => {
                self.consume_delimiter(":");
                self.emit(TokenKind::Colon);
                self.skip_whitespace();
                match self.dispatch_value() {
                    Ok(next) => next,
                    Err(found) => self.fail(LexicalError::MissingValue(found)),
                }
            }

            RightBrace => {
                self.consume_delimiter("}");
                self.frames.pop();
                self.emit(TokenKind::RightBrace);
                OutsideObject
            }

            OutsideObject => self.after_value("'}'"),

            // -------------------------- ARRAYS ------------------------------
            LeftBracket => {
                self.consume_delimiter("[");
                self.frames.push(Frame::Array);
                self.emit(TokenKind::LeftBracket);
                InsideArray
            }

            InsideArray => {
                self.skip_whitespace();
                if self.cursor.peek() == Some(']') {
                    return RightBracket;
                }
                match self.dispatch_value() {
                    Ok(next) => next,
                    Err(Found::EndOfInput) => self.fail(LexicalError::UnclosedArray),
                    Err(found) => self.fail(LexicalError::InvalidArrayElement(found)),
                }
            }

            RightBracket => {
                self.consume_delimiter("]");
                self.frames.pop();
                self.emit(TokenKind::RightBracket);
                OutsideArray
            }

            OutsideArray => self.after_value("']'"),

            Comma => {
                self.consume_delimiter(",");
                self.emit(TokenKind::Comma);
                self.skip_whitespace();
                let next = match self.frames.last() {
                    Some(Frame::Array) => self.dispatch_value(),
                    _ => match self.cursor.peek() {
                        Some(c) if is_identifier_start(c) => Ok(Identifier),
                        found => Err(found.into()),
                    },
                };
                match next {
                    Ok(next) => next,
                    Err(found) => self.fail(LexicalError::InvalidAfter { after: "','", found }),
                }
            }

            // -------------------------- SCALARS -----------------------------
            Number => {
                self.cursor.accept(SIGNS);
                let mut digits = 0;
                let alphabet = if self.cursor.accept("0") {
                    digits += 1;
                    self.cursor.accept("xX");
                    HEX_DIGITS
                } else if self.cursor.accept("xX") {
                    HEX_DIGITS
                } else {
                    DIGITS
                };
                digits += self.cursor.accept_run(alphabet);
                if digits == 0 {
                    return self.fail(LexicalError::MalformedNumber(self.found()));
                }
                if self.cursor.accept(".") {
                    self.cursor.accept_run(DIGITS);
                }
                self.emit(TokenKind::Number);
                self.after_value("number")
            }

            String => {
                self.consume_delimiter("\"");
                self.cursor.accept_run(ALPHANUMERIC);
                match self.cursor.peek() {
                    Some('"') => {
                        self.consume_delimiter("\"");
                        self.emit(TokenKind::String);
                        self.after_value("string")
                    }
                    None => self.fail(LexicalError::UnterminatedString),
                    found => self.fail(LexicalError::InvalidStringChar(found.into())),
                }
            }

            True => self.literal("true", TokenKind::True),
            False => self.literal("false", TokenKind::False),
            Null => self.literal("null", TokenKind::Null),
        }
    }

    /// Picks the state for a value starting at the read position.
    ///
    /// Priority: number, string, object, array, then the three literals.
    fn dispatch_value(&self) -> Result<LexState, Found> {
        match self.cursor.peek() {
            Some(c) if NUMERIC_START.contains(c) => Ok(LexState::Number),
            Some('"') => Ok(LexState::String),
            Some('{') => Ok(LexState::LeftBrace),
            Some('[') => Ok(LexState::LeftBracket),
            _ if self.cursor.match_exact("true") => Ok(LexState::True),
            _ if self.cursor.match_exact("false") => Ok(LexState::False),
            _ if self.cursor.match_exact("null") => Ok(LexState::Null),
            found => Err(found.into()),
        }
    }

    /// Picks the state after a complete value, using the innermost open
    /// container to decide which delimiters are legal.
    fn after_value(&mut self, after: &'static str) -> LexState {
        self.skip_whitespace();
        let found = self.cursor.peek();
        match (self.frames.last().copied(), found) {
            (None, None) => {
                self.emit(TokenKind::EndOfInput);
                LexState::Done
            }
            (None, Some(_)) => self.fail(LexicalError::TrailingContent(found.into())),
            (Some(_), Some(',')) => LexState::Comma,
            (Some(Frame::Object), Some('}')) => LexState::RightBrace,
            (Some(Frame::Array), Some(']')) => LexState::RightBracket,
            (Some(frame), Some('}' | ']')) => self.fail(LexicalError::MismatchedClose {
                expected: frame.closer(),
                found: found.into(),
            }),
            (Some(Frame::Object), None) => self.fail(LexicalError::UnclosedObject),
            (Some(Frame::Array), None) => self.fail(LexicalError::UnclosedArray),
            (Some(_), Some(_)) => self.fail(LexicalError::InvalidAfter {
                after,
                found: found.into(),
            }),
        }
    }

    fn literal(&mut self, literal: &'static str, kind: TokenKind) -> LexState {
        let matched = self.cursor.accept_exact(literal);
        debug_assert!(matched, "dispatched to {kind} without `{literal}` ahead");
        self.emit(kind);
        self.after_value(literal)
    }

    // Consume a delimiter the dispatching state has already peeked.
    fn consume_delimiter(&mut self, delimiter: &str) {
        let matched = self.cursor.accept(delimiter);
        debug_assert!(matched, "expected {delimiter:?} at {}", self.cursor.pos());
    }

    fn skip_whitespace(&mut self) {
        if self.options.allow_whitespace {
            self.cursor.accept_run(WHITESPACE);
            self.cursor.ignore();
        }
    }
}
