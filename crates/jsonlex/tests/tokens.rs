#![allow(missing_docs)]

use jsonlex::{LexicalError, ScanOptions, ScanOutcome, Token, TokenKind, scan, scan_with_options};
use quickcheck_macros::quickcheck;

#[test]
fn public_api_scans_a_document() {
    let tokens: Vec<Token<'_>> = scan("api", "{a:[1,\"x\"],b:true}").collect();
    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "\"{\"", "\"a\"", "\":\"", "\"[\"", "\"1\"", "\",\"", "\"\\\"x\\\"\"", "\"]\"", "\",\"",
            "\"b\"", "\":\"", "\"true\"", "\"}\"", "EOF",
        ]
    );
}

#[test]
fn owned_tokens_outlive_the_input() {
    let owned: Vec<Token<'static>> = {
        let input = String::from("{a:null}");
        scan("api", &input).map(Token::into_owned).collect()
    };
    assert_eq!(owned[3].kind, TokenKind::Null);
    assert_eq!(owned[3].as_str(), "null");
}

#[test]
fn error_is_structured_and_rendered() {
    let mut lexer = scan("api", "{a:1,,}");
    let last = lexer.by_ref().last().expect("terminal token");
    let err = lexer.error().expect("scan failed");
    assert!(matches!(err.kind, LexicalError::InvalidAfter { after: "','", .. }));
    assert_eq!(last.as_str(), format!("api: {err}"));
    assert_eq!(lexer.outcome(), Some(ScanOutcome::Failed(err.clone())));
}

#[test]
fn options_compose() {
    let options = ScanOptions {
        allow_whitespace: true,
        allow_leading_text: true,
        ..ScanOptions::default()
    };
    let kinds: Vec<TokenKind> = scan_with_options("api", "result:\n{ ok : true }\n", options)
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Text,
            TokenKind::LeftBrace,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::True,
            TokenKind::RightBrace,
            TokenKind::EndOfInput,
        ]
    );
}

/// Arbitrary input never panics and always ends in exactly one terminal token.
#[quickcheck]
fn any_input_ends_with_one_terminal_token(input: String, whitespace: bool) -> bool {
    let options = ScanOptions {
        allow_whitespace: whitespace,
        ..ScanOptions::default()
    };
    let tokens: Vec<_> = scan_with_options("qc", &input, options).collect();
    let terminals = tokens.iter().filter(|t| t.is_terminal()).count();
    terminals == 1 && tokens.last().is_some_and(Token::is_terminal)
}
