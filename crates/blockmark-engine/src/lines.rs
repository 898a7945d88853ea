//! Source line positions for token streams.
//!
//! Consumers that lay tokens out in a gutter or jump to a line need the line
//! each token starts on without re-scanning the source.

use blockmark_syntax::Token;

/// Reports the 1-based source line each token starts on.
///
/// Lines are counted from `\n` characters in the token texts consumed so
/// far, so the numbering follows the source, not the rendered output.
pub fn token_lines(tokens: &[Token<'_>]) -> Vec<usize> {
    let mut line = 1;
    tokens
        .iter()
        .map(|token| {
            let start_line = line;
            line += token.newlines();
            start_line
        })
        .collect()
}
