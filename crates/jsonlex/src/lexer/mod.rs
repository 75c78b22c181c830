//! Scan driver: runs the lexer state machine and delivers tokens in order.
//!
//! Overview
//! - [`Lexer`] owns a [`Cursor`] over the input, the current [`LexState`],
//!   the stack of open containers, and a small outbox of emitted tokens.
//! - Each call to [`Lexer::transition`] runs exactly one state. A state
//!   consumes zero or more characters, pushes the tokens it emits into the
//!   outbox, and returns the next state. The state graph is a closed enum
//!   dispatched through one `match` (see `states.rs`), driven by an explicit
//!   loop so nesting depth never grows the call stack.
//! - [`Lexer`] is a pull-based iterator: `next()` drains the outbox and runs
//!   transitions until a token is available or the machine has terminated.
//!
//! Lexeme boundaries
//! - Decision states only `peek`; they never consume. Lexeme states consume
//!   exactly their lexeme and emit it, then pick the successor by looking at
//!   the next character.
//! - A clean scan ends with one `EndOfInput` token; a failed scan ends with
//!   one `Error` token. Nothing follows either.
//!
//! Tracing
//! - Every transition is reported as a `tracing` TRACE event with the fields
//!   `scan`, `from`, `to` and `pos`; failures and cancellations are reported
//!   at DEBUG. Nothing is recorded unless the caller installs a subscriber.

mod states;

use alloc::{
    collections::{VecDeque, vec_deque},
    string::String,
    vec::Vec,
};
use core::iter::FusedIterator;

use crate::{
    cursor::Cursor,
    error::{Found, LexError, LexicalError},
    options::ScanOptions,
    token::{Token, TokenKind},
};

/// The named states of the scanner, plus the two terminal conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexState {
    /// Expects the opening `{` of the document.
    Init,
    /// Collects free text before the document.
    LeadingText,
    /// Consumes `{`.
    LeftBrace,
    /// Expects a member name or `}`.
    InsideObject,
    /// Consumes a member name.
    Identifier,
    /// Consumes `:` and picks the value state.
    Colon,
    /// Consumes `}`.
    RightBrace,
    /// Expects `,`, a closing delimiter, or the end of input.
    OutsideObject,
    /// Consumes `[`.
    LeftBracket,
    /// Expects a value or `]`.
    InsideArray,
    /// Consumes `]`.
    RightBracket,
    /// Expects `,` or a closing delimiter.
    OutsideArray,
    /// Consumes `,` and picks the next member or element state.
    Comma,
    /// Consumes a number.
    Number,
    /// Consumes a string.
    String,
    /// Consumes `true`.
    True,
    /// Consumes `false`.
    False,
    /// Consumes `null`.
    Null,
    /// The scan ended cleanly and `EndOfInput` was emitted.
    Done,
    /// The scan failed and an `Error` token was emitted.
    Failed,
}

impl LexState {
    /// Returns `true` for `Done` and `Failed`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, LexState::Done | LexState::Failed)
    }
}

/// How a scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The whole document was scanned and `EndOfInput` emitted.
    Completed,
    /// Scanning stopped at a lexical error; an `Error` token was emitted.
    Failed(LexError),
    /// Scanning was stopped by the caller; no `Error` token was emitted.
    Cancelled,
}

/// An open container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Object,
    Array,
}

impl Frame {
    fn closer(self) -> char {
        match self {
            Frame::Object => '}',
            Frame::Array => ']',
        }
    }
}

/// The scan driver and token stream for one input.
///
/// Created by [`scan`] or [`scan_with_options`]. Iterating yields tokens in
/// emission order; the last token is always `EndOfInput` or `Error`, after
/// which the iterator is exhausted.
///
/// # Examples
///
/// ```rust
/// use jsonlex::{TokenKind, scan};
///
/// let kinds: Vec<TokenKind> = scan("doc", "{a:1}").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::LeftBrace,
///         TokenKind::Identifier,
///         TokenKind::Colon,
///         TokenKind::Number,
///         TokenKind::RightBrace,
///         TokenKind::EndOfInput,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    name: String,
    cursor: Cursor<'src>,
    state: LexState,
    frames: Vec<Frame>,
    outbox: VecDeque<Token<'src>>,
    options: ScanOptions,
    error: Option<LexError>,
    cancelled: bool,
}

/// Starts scanning `input` with default options.
///
/// `name` is used only in diagnostic messages.
#[must_use]
pub fn scan<'src>(name: &str, input: &'src str) -> Lexer<'src> {
    Lexer::new(name, input, ScanOptions::default())
}

/// Starts scanning `input` with the given options.
#[must_use]
pub fn scan_with_options<'src>(name: &str, input: &'src str, options: ScanOptions) -> Lexer<'src> {
    Lexer::new(name, input, options)
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `input` in [`LexState::Init`].
    #[must_use]
    pub fn new(name: &str, input: &'src str, options: ScanOptions) -> Self {
        Self {
            name: name.into(),
            cursor: Cursor::new(input),
            state: LexState::Init,
            frames: Vec::new(),
            outbox: VecDeque::with_capacity(2),
            options,
            error: None,
            cancelled: false,
        }
    }

    /// The name given to [`scan`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The state the next transition will run.
    #[must_use]
    pub fn state(&self) -> LexState {
        self.state
    }

    /// Number of containers currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// 1-based line and column of the read position.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        self.cursor.line_col()
    }

    /// The error that stopped the scan, if any.
    #[must_use]
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// Returns `true` once no further transitions will run.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cancelled || self.state.is_terminal()
    }

    /// How the scan ended, or `None` while it is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<ScanOutcome> {
        if self.cancelled {
            return Some(ScanOutcome::Cancelled);
        }
        match self.state {
            LexState::Done => Some(ScanOutcome::Completed),
            LexState::Failed => self.error.clone().map(ScanOutcome::Failed),
            _ => None,
        }
    }

    /// Stops the scan before the next transition.
    ///
    /// Tokens already emitted are still delivered; no `Error` token is
    /// produced. Has no effect on a scan that has already terminated.
    pub fn cancel(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        tracing::debug!(scan = %self.name, state = ?self.state, "scan cancelled");
        self.cancelled = true;
    }

    /// Runs exactly one state and returns the state that will run next.
    ///
    /// Does nothing once the lexer is finished.
    pub fn transition(&mut self) -> LexState {
        if self.is_finished() {
            return self.state;
        }
        let from = self.state;
        let to = self.step(from);
        tracing::trace!(
            scan = %self.name,
            from = ?from,
            to = ?to,
            pos = self.cursor.pos(),
            "transition"
        );
        self.state = to;
        to
    }

    /// Removes and yields the tokens emitted so far but not yet delivered.
    pub fn drain_emitted(&mut self) -> vec_deque::Drain<'_, Token<'src>> {
        self.outbox.drain(..)
    }

    fn emit(&mut self, kind: TokenKind) {
        let token = self.cursor.emit(kind);
        self.outbox.push_back(token);
    }

    // Report `kind` at the read position, emit the `Error` token and stop.
    fn fail(&mut self, kind: LexicalError) -> LexState {
        let (line, column) = self.cursor.line_col();
        let err = LexError { kind, line, column };
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{}", err.render(&self.name));
        tracing::debug!(scan = %self.name, error = %err, "scan failed");
        self.outbox.push_back(Token::error(err.render(&self.name)));
        self.error = Some(err);
        LexState::Failed
    }

    fn found(&self) -> Found {
        self.cursor.peek().into()
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.outbox.pop_front() {
                return Some(token);
            }
            if self.is_finished() {
                return None;
            }
            self.transition();
        }
    }
}

impl FusedIterator for Lexer<'_> {}
