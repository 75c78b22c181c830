//! A state-machine lexer for a restricted JSON-like dialect.
//!
//! The dialect has objects with unquoted member names, arrays, numbers
//! (including a hexadecimal form), alphanumeric strings without escapes, and
//! the literals `true`, `false` and `null`:
//!
//! ```text
//! {name:"abc",size:0x1F,tags:[1,-2.5,true,null],nested:{}}
//! ```
//!
//! Scanning only classifies lexemes. Tokens carry the raw source text; no
//! values are interpreted. The first lexical error ends the stream with a
//! single [`TokenKind::Error`] token.
//!
//! # Examples
//!
//! ```rust
//! use jsonlex::{TokenKind, scan};
//!
//! let tokens: Vec<_> = scan("example", "{a:[1,true]}").collect();
//! assert_eq!(tokens[1].kind, TokenKind::Identifier);
//! assert_eq!(tokens[1].as_str(), "a");
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
//!
//! let last = scan("example", "{a:}").last().unwrap();
//! assert_eq!(last.kind, TokenKind::Error);
//! assert!(last.as_str().contains("missing value after ':'"));
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod cursor;
mod error;
mod lexer;
mod options;
mod token;

#[cfg(feature = "std")]
mod threaded;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use error::{Found, LexError, LexicalError};
pub use lexer::{LexState, Lexer, ScanOutcome, scan, scan_with_options};
pub use options::ScanOptions;
#[cfg(feature = "std")]
pub use threaded::{DEFAULT_CHANNEL_CAPACITY, ScanHandle, TokenReceiver, spawn_scan};
pub use token::{Token, TokenKind};
