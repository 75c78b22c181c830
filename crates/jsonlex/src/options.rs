/// Configuration options for the lexer.
///
/// The recognized dialect has no whitespace and requires the input to start
/// with `{`. These options relax those two rules; neither changes how
/// lexemes inside the document are classified.
///
/// # Examples
///
/// ```rust
/// use jsonlex::{ScanOptions, TokenKind, scan_with_options};
///
/// let options = ScanOptions {
///     allow_whitespace: true,
///     ..Default::default()
/// };
/// let kinds: Vec<_> = scan_with_options("doc", "{ a: 1 }", options)
///     .map(|t| t.kind)
///     .collect();
/// assert_eq!(kinds.last(), Some(&TokenKind::EndOfInput));
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Whether to skip ASCII whitespace (space, tab, carriage return, line
    /// feed) between lexemes.
    ///
    /// Skipped whitespace is discarded and never appears in any token.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_whitespace: bool,

    /// Whether input may carry free text before the document.
    ///
    /// When `true`, everything up to the first `{` is emitted as a single
    /// [`TokenKind::Text`](crate::TokenKind::Text) token and scanning then
    /// continues with the document. Input without any `{` scans as one
    /// `Text` token followed by `EndOfInput`.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_leading_text: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on lexical errors instead of emitting an `Error` token.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces.
    pub panic_on_error: bool,
}
