//! Snapshot tests pinning the exact token stream for a few representative
//! documents. They catch unintended changes to lexeme boundaries, token
//! rendering and error messages.

use alloc::{string::String, vec::Vec};
use core::fmt::Write;

// Enable the `yaml` feature for a more human-readable snapshot format.
use insta::{assert_snapshot, assert_yaml_snapshot};

use crate::{TokenKind, scan};

fn render(input: &str) -> String {
    let mut out = String::new();
    for token in scan("doc", input) {
        writeln!(out, "{} {}", token.kind, token).unwrap();
    }
    out
}

#[test]
fn snapshot_mixed_document() {
    assert_snapshot!(render("{name:\"abc\",size:0x1F,tags:[1,-2.5,true,null],nested:{}}"), @r#"
    LeftBrace "{"
    Identifier "name"
    Colon ":"
    String "\"abc\""
    Comma ","
    Identifier "size"
    Colon ":"
    Number "0x1F"
    Comma ","
    Identifier "tags"
    Colon ":"
    LeftBracket "["
    Number "1"
    Comma ","
    Number "-2.5"
    Comma ","
    True "true"
    Comma ","
    Null "null"
    RightBracket "]"
    Comma ","
    Identifier "nested"
    Colon ":"
    LeftBrace "{"
    RightBrace "}"
    RightBrace "}"
    EndOfInput EOF
    "#);
}

#[test]
fn snapshot_failed_document() {
    assert_snapshot!(render("{a:[1,}"), @r#"
    LeftBrace "{"
    Identifier "a"
    Colon ":"
    LeftBracket "["
    Number "1"
    Comma ","
    Error doc: invalid element after ',', found '}' at 1:7
    "#);
}

#[test]
fn snapshot_long_lexemes_are_truncated() {
    assert_snapshot!(render("{abcdefghijklmno:\"pqrstuvwxyz\"}"), @r#"
    LeftBrace "{"
    Identifier "abcdefghij"...
    Colon ":"
    String "\"pqrstuvwx"...
    RightBrace "}"
    EndOfInput EOF
    "#);
}

#[test]
fn snapshot_kinds_yaml() {
    let kinds: Vec<TokenKind> = scan("doc", "{a:[1,\"s\"]}").map(|t| t.kind).collect();
    assert_yaml_snapshot!(kinds, @r"
    - LeftBrace
    - Identifier
    - Colon
    - LeftBracket
    - Number
    - Comma
    - String
    - RightBracket
    - RightBrace
    - EndOfInput
    ");
}
