//! # Tokenizer - Splitting Block Markup into Styled Spans
//!
//! [`tokenize`] walks the source once, switching between plain text, HTML
//! tags and WordPress block comments.
//!
//! ## The Lossless Guarantee
//!
//! **Every byte in the input appears in exactly one token**, and tokens are
//! emitted in source order without gaps:
//!
//! ```
//! use blockmark_syntax::tokenize;
//!
//! let input = "<!-- wp:paragraph --><p>Hi</p><!-- /wp:paragraph -->\n";
//! let tokens = tokenize(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! assert_eq!(tokens.first().map(|t| t.start), Some(0));
//! assert_eq!(tokens.last().map(|t| t.end), Some(input.len()));
//! ```
//!
//! ## Malformed Input
//!
//! Tokenizing never fails. A construct that cannot be closed is emitted as a
//! single `ERROR` token and scanning resumes in text mode after a recovery
//! point: the next `-->` for block comments, the next `>` (or just before the
//! next `<`) for tags, otherwise the end of input. Recovery only moves
//! forward, so tokenizing is linear in the input length.
//!
//! ## Coalescing
//!
//! Construct scanners produce pieces; the sink drops empty pieces and merges
//! adjacent pieces of the same kind within one construct, which is why `<p>`
//! comes out as one `HTML_TAG` token rather than `<p` and `>`. Neighbouring
//! constructs are never merged: `<p></p>` is two tokens.

use std::ops::Range;

use serde::Serialize;

use crate::block_comment;
use crate::cursor::Cursor;
use crate::syntax_kind::SyntaxKind;
use crate::tag;

/// A token with its kind, source text and byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Token<'_> {
    /// The byte range covered by this token.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of line breaks inside this token.
    pub fn newlines(&self) -> usize {
        self.text.bytes().filter(|&b| b == b'\n').count()
    }
}

/// Outcome of scanning one tag or block comment.
pub(crate) enum Scan {
    /// The construct closed; pieces cover it completely.
    Complete(Vec<(SyntaxKind, Range<usize>)>),
    /// The construct failed: `pieces` are kept, then `error` becomes one
    /// `ERROR` token. Scanning resumes at `error.end`.
    Malformed {
        pieces: Vec<(SyntaxKind, Range<usize>)>,
        error: Range<usize>,
    },
}

/// Collects tokens, skipping empty ranges. Adjacent pieces of the same kind
/// within one construct are merged into a single token.
pub(crate) struct TokenSink<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenSink<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, kind: SyntaxKind, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.tokens.push(Token {
            kind,
            text: &self.source[range.clone()],
            start: range.start,
            end: range.end,
        });
    }

    /// Commits a scanned construct and returns where scanning resumes.
    pub(crate) fn commit(&mut self, scan: Scan) -> usize {
        let (pieces, error) = match scan {
            Scan::Complete(pieces) => (pieces, None),
            Scan::Malformed { pieces, error } => (pieces, Some(error)),
        };
        let first = self.tokens.len();
        let mut end = 0;

        let error = error.map(|range| (SyntaxKind::ERROR, range));
        for (kind, range) in pieces.into_iter().chain(error) {
            end = range.end;
            if range.is_empty() {
                continue;
            }
            if self.tokens.len() > first
                && let Some(last) = self.tokens.last_mut()
                && last.kind == kind
                && last.end == range.start
            {
                last.end = range.end;
                last.text = &self.source[last.start..last.end];
                continue;
            }
            self.push(kind, range);
        }

        end
    }

    pub(crate) fn finish(self) -> Vec<Token<'a>> {
        self.tokens
    }
}

/// Tokenize block markup.
///
/// Total: any input yields a token sequence that concatenates back to the
/// input, with contiguous offsets and no empty tokens.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut sink = TokenSink::new(source);
    let mut cur = Cursor::at(source, 0);
    let mut text_start = 0;

    while let Some(lt) = cur.find("<") {
        let scan = if let Some((delimiter, marker_end)) = block_comment::detect(source, lt) {
            block_comment::scan(source, lt, delimiter, marker_end)
        } else if tag::starts_at(source, lt) {
            tag::scan(source, lt)
        } else {
            // A `<` that starts nothing stays text.
            cur = Cursor::at(source, lt + 1);
            continue;
        };

        sink.push(SyntaxKind::TEXT, text_start..lt);
        let resume = sink.commit(scan);
        text_start = resume;
        cur = Cursor::at(source, resume);
    }

    sink.push(SyntaxKind::TEXT, text_start..source.len());
    sink.finish()
}
