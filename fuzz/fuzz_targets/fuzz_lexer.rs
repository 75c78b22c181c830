#![no_main]

use arbitrary::Arbitrary;
use jsonlex::{ScanOptions, ScanOutcome, TokenKind, scan_with_options};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    allow_whitespace: bool,
    allow_leading_text: bool,
    text: &'a str,
}

fn lexer(input: &Input<'_>) {
    let options = ScanOptions {
        allow_whitespace: input.allow_whitespace,
        allow_leading_text: input.allow_leading_text,
        panic_on_error: false,
    };
    let mut lexer = scan_with_options("fuzz", input.text, options);
    let tokens: Vec<_> = lexer.by_ref().collect();

    // Exactly one terminal token, and it comes last.
    let (last, rest) = tokens.split_last().expect("stream is never empty");
    assert!(last.is_terminal());
    assert!(rest.iter().all(|t| !t.is_terminal()));

    match lexer.outcome() {
        Some(ScanOutcome::Completed) => assert_eq!(last.kind, TokenKind::EndOfInput),
        Some(ScanOutcome::Failed(_)) => assert_eq!(last.kind, TokenKind::Error),
        other => panic!("unexpected outcome {other:?}"),
    }

    // Without skipped whitespace the lexemes tile a prefix of the input.
    if !input.allow_whitespace {
        let joined: String = rest.iter().map(|t| t.as_str()).collect();
        assert!(input.text.starts_with(&joined));
    }
}

fuzz_target!(|input: Input<'_>| lexer(&input));
