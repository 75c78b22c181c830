#![allow(missing_docs)]
#![cfg(feature = "std")]

use std::time::Duration;

use jsonlex::{
    DEFAULT_CHANNEL_CAPACITY, LexicalError, ScanOptions, ScanOutcome, Token, TokenKind, scan,
    spawn_scan,
};
use rstest::rstest;

fn deep_document(levels: usize) -> String {
    let mut input = "{a:".repeat(levels);
    input.push_str("{}");
    input.push_str(&"}".repeat(levels));
    input
}

#[rstest]
#[case::rendezvous(0)]
#[case::default_capacity(DEFAULT_CHANNEL_CAPACITY)]
#[case::roomy(64)]
#[timeout(Duration::from_secs(10))]
fn background_scan_matches_iterator(#[case] capacity: usize) {
    let input = "{a:[1,-2.5,0x1F],b:{c:\"d\"},e:null}";
    let expected: Vec<Token<'static>> = scan("bg", input).map(Token::into_owned).collect();

    let (handle, tokens) = spawn_scan("bg", input, ScanOptions::default(), capacity);
    let received: Vec<_> = tokens.collect();

    assert_eq!(received, expected);
    assert_eq!(handle.join(), ScanOutcome::Completed);
}

#[rstest]
#[timeout(Duration::from_secs(10))]
fn background_scan_reports_failure() {
    let (handle, tokens) = spawn_scan("bg", "{a:}", ScanOptions::default(), 1);
    let last = tokens.last().expect("error token");
    assert_eq!(last.kind, TokenKind::Error);

    match handle.join() {
        ScanOutcome::Failed(err) => {
            assert!(matches!(err.kind, LexicalError::MissingValue(_)));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[rstest]
#[timeout(Duration::from_secs(10))]
fn cancel_stops_the_producer() {
    let levels = 50_000;
    let (handle, mut tokens) =
        spawn_scan("bg", deep_document(levels), ScanOptions::default(), 0);

    assert_eq!(tokens.next().map(|t| t.kind), Some(TokenKind::LeftBrace));
    handle.cancel();
    let rest: Vec<_> = tokens.collect();

    assert!(rest.len() < levels * 4, "scan should stop early");
    assert!(rest.iter().all(|t| !t.is_terminal()));
    assert_eq!(handle.join(), ScanOutcome::Cancelled);
}

#[rstest]
#[timeout(Duration::from_secs(10))]
fn dropping_the_receiver_cancels() {
    let (handle, mut tokens) =
        spawn_scan("bg", deep_document(50_000), ScanOptions::default(), 0);
    assert!(tokens.next().is_some());
    drop(tokens);
    assert_eq!(handle.join(), ScanOutcome::Cancelled);
}
