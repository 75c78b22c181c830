//! Background producer: scans on its own thread and hands tokens over a
//! bounded channel.
//!
//! The producer blocks whenever the channel is full, so a slow consumer
//! throttles the scan instead of losing tokens. Tokens arrive in emission
//! order. The scan can be cancelled cooperatively: the producer checks the
//! flag before every state transition and stops without emitting an `Error`
//! token. A consumer that drops its [`TokenReceiver`] cancels the scan the
//! same way.

use std::{
    string::String,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{self, Receiver, SyncSender},
    },
    thread::{self, JoinHandle},
};

use crate::{Lexer, ScanOptions, ScanOutcome, Token};

/// Channel capacity used when callers have no better figure.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 2;

/// Control side of a background scan.
#[derive(Debug)]
pub struct ScanHandle {
    cancel: Arc<AtomicBool>,
    thread: JoinHandle<ScanOutcome>,
}

impl ScanHandle {
    /// Asks the producer to stop before its next transition.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Release);
    }

    /// Returns `true` once the producer thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Waits for the producer and returns how the scan ended.
    ///
    /// The receiver must be drained or dropped first, otherwise a producer
    /// blocked on a full channel never exits.
    ///
    /// # Panics
    ///
    /// Re-raises a panic from the producer thread.
    #[must_use]
    pub fn join(self) -> ScanOutcome {
        self.thread
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    }
}

/// Consumer side of a background scan. Yields tokens in emission order and
/// ends after the terminal token, or early if the scan was cancelled.
#[derive(Debug)]
pub struct TokenReceiver {
    rx: Receiver<Token<'static>>,
}

impl Iterator for TokenReceiver {
    type Item = Token<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rx.recv().ok()
    }
}

/// Starts scanning `input` on a new thread.
///
/// At most `capacity` tokens are buffered between producer and consumer; a
/// capacity of zero makes every hand-off a rendezvous.
///
/// # Examples
///
/// ```rust
/// use jsonlex::{ScanOptions, ScanOutcome, TokenKind, spawn_scan};
///
/// let (handle, tokens) = spawn_scan("doc", "{a:[1,2]}", ScanOptions::default(), 2);
/// let kinds: Vec<TokenKind> = tokens.map(|t| t.kind).collect();
/// assert_eq!(kinds.last(), Some(&TokenKind::EndOfInput));
/// assert_eq!(handle.join(), ScanOutcome::Completed);
/// ```
///
/// # Panics
///
/// Panics if the operating system refuses to create a thread.
pub fn spawn_scan(
    name: impl Into<String>,
    input: impl Into<String>,
    options: ScanOptions,
    capacity: usize,
) -> (ScanHandle, TokenReceiver) {
    let name = name.into();
    let input = input.into();
    let cancel = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::sync_channel(capacity);

    let flag = Arc::clone(&cancel);
    let thread = thread::spawn(move || produce(&name, &input, options, &flag, &tx));

    (ScanHandle { cancel, thread }, TokenReceiver { rx })
}

fn produce(
    name: &str,
    input: &str,
    options: ScanOptions,
    cancel: &AtomicBool,
    tx: &SyncSender<Token<'static>>,
) -> ScanOutcome {
    let mut lexer = Lexer::new(name, input, options);
    loop {
        for token in lexer.drain_emitted() {
            if tx.send(token.into_owned()).is_err() {
                tracing::debug!(scan = %name, "receiver dropped");
                return ScanOutcome::Cancelled;
            }
        }
        if let Some(outcome) = lexer.outcome() {
            return outcome;
        }
        if cancel.load(Ordering::Acquire) {
            lexer.cancel();
            return ScanOutcome::Cancelled;
        }
        lexer.transition();
    }
}
