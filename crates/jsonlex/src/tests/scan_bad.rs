use alloc::vec::Vec;

use crate::{LexicalError, ScanOutcome, TokenKind, scan};

fn outcome_of(input: &str) -> ScanOutcome {
    let mut lexer = scan("bad", input);
    let tokens: Vec<_> = lexer.by_ref().collect();
    let terminal: Vec<_> = tokens.iter().filter(|t| t.is_terminal()).collect();
    assert_eq!(terminal.len(), 1, "exactly one terminal token for {input:?}");
    assert!(
        tokens.last().is_some_and(|t| t.is_terminal()),
        "terminal token must come last for {input:?}"
    );
    lexer.outcome().expect("scan must have finished")
}

fn error_kind(input: &str) -> LexicalError {
    match outcome_of(input) {
        ScanOutcome::Failed(err) => err.kind,
        other => panic!("expected {input:?} to fail, got {other:?}"),
    }
}

#[test]
fn every_proper_prefix_is_rejected() {
    let input = "{a:[1,-2.5,0x1F,\"s\",true,false,null,{}],b:{c:[]}}";
    for end in 0..input.len() {
        let prefix = &input[..end];
        assert!(
            matches!(outcome_of(prefix), ScanOutcome::Failed(_)),
            "prefix {prefix:?} must not scan cleanly"
        );
    }
    assert_eq!(outcome_of(input), ScanOutcome::Completed);
}

#[test]
fn truncated_literals() {
    for input in ["{a:t}", "{a:fals}", "{a:nul}", "{a:[tru]}"] {
        assert!(
            matches!(
                error_kind(input),
                LexicalError::MissingValue(_) | LexicalError::InvalidArrayElement(_)
            ),
            "{input:?}"
        );
    }
}

#[test]
fn quoted_member_names_are_rejected() {
    assert!(matches!(
        error_kind("{\"a\":1}"),
        LexicalError::MalformedIdentifier(_)
    ));
}

#[test]
fn error_message_is_the_token_text() {
    let last = scan("bad", "{a:[1}").last().expect("error token");
    assert_eq!(last.kind, TokenKind::Error);
    assert_eq!(last.as_str(), "bad: mismatched '}', expected ']' at 1:6");
}

#[test]
fn control_characters_are_escaped_in_messages() {
    let last = scan("bad", "{a:\"x\ty\"}").last().expect("error token");
    assert_eq!(last.as_str(), "bad: invalid character '\\t' in string at 1:6");
}
