//! Cursor: the position-tracking reader over one scan's input.
//!
//! The cursor owns three positions over an immutable `&'src str`:
//! - `start`: byte offset where the pending (not yet emitted) lexeme begins,
//! - `pos`: byte offset of the next unread character,
//! - `width`: UTF‑8 length of the character most recently returned by
//!   [`Cursor::next`], or `0` when there is nothing to back up over.
//!
//! Invariants
//! - `start <= pos <= input.len()`, and both always sit on char boundaries.
//! - `start` moves only through [`Cursor::emit`] and [`Cursor::ignore`].
//! - At most one [`Cursor::backup`] per [`Cursor::next`]: `backup` clears
//!   `width`, so a second call without an intervening `next` does nothing.
//!
//! Character classes are passed as `&str` sets, e.g. `cursor.accept("+-")`.

use crate::token::{Token, TokenKind};

/// Char-by-char reader with single-step backtracking and lexeme slicing.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    input: &'src str,
    start: usize,
    pos: usize,
    width: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the beginning of `input`.
    #[must_use]
    pub fn new(input: &'src str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            width: 0,
        }
    }

    /// Reads the next character and advances past it.
    ///
    /// Returns `None` at end of input without advancing; a following
    /// `backup` is then a no-op.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let Some((ch, len)) = Self::decode_from(self.input, self.pos) else {
            self.width = 0;
            return None;
        };
        self.width = len;
        self.pos += len;
        Some(ch)
    }

    /// Steps back over the character returned by the last `next`.
    pub fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        Self::decode_from(self.input, self.pos).map(|(ch, _)| ch)
    }

    /// Consumes one character if it belongs to `valid`.
    pub fn accept(&mut self, valid: &str) -> bool {
        match self.next() {
            Some(c) if valid.contains(c) => true,
            _ => {
                self.backup();
                false
            }
        }
    }

    /// Consumes a maximal run of characters from `valid`. Returns how many
    /// characters were consumed.
    pub fn accept_run(&mut self, valid: &str) -> usize {
        let mut n = 0;
        while self.accept(valid) {
            n += 1;
        }
        n
    }

    /// Tests whether the unread input begins with `literal`. Never moves the
    /// cursor.
    #[must_use]
    pub fn match_exact(&self, literal: &str) -> bool {
        self.input[self.pos..].starts_with(literal)
    }

    /// Consumes `literal` if the unread input begins with it.
    pub fn accept_exact(&mut self, literal: &str) -> bool {
        if !self.match_exact(literal) {
            return false;
        }
        self.pos += literal.len();
        self.width = 0;
        true
    }

    /// Produces a token spanning the pending lexeme and starts a new one.
    pub fn emit(&mut self, kind: TokenKind) -> Token<'src> {
        let token = Token::borrowed(kind, self.pending());
        self.start = self.pos;
        token
    }

    /// Discards the pending lexeme.
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// The consumed but not yet emitted text.
    #[must_use]
    pub fn pending(&self) -> &'src str {
        &self.input[self.start..self.pos]
    }

    /// Byte offset of the pending lexeme.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` once every character has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// 1-based line and column of `pos`. Columns count code points.
    #[must_use]
    pub fn line_col(&self) -> (usize, usize) {
        let consumed = &self.input[..self.pos];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        let column = consumed[line_start..].chars().count() + 1;
        (line, column)
    }

    // Decode the scalar starting at byte `offset`.
    fn decode_from(s: &str, offset: usize) -> Option<(char, usize)> {
        if offset >= s.len() {
            return None;
        }
        let (ch, len) = bstr::decode_utf8(&s.as_bytes()[offset..]);
        if len == 0 {
            return None;
        }
        Some((ch.unwrap_or('\u{FFFD}'), len))
    }
}
