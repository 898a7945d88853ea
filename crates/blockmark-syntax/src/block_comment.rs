//! WordPress block comment delimiters.
//!
//! ```text
//! <!-- wp:core/image {"id":7} -->     opening, with attributes
//! <!-- wp:spacer /-->                 opening, self-closing
//! <!-- /wp:core/image -->             closing
//! ```
//!
//! An opening comment becomes `BLOCK_COMMENT_OPEN("<!-- wp:")`,
//! `BLOCK_NAME`, an optional `BLOCK_ATTRIBUTES` preceded by its whitespace
//! as a delimiter fragment, and a trailing delimiter fragment holding the
//! whitespace and `-->`. Closing comments follow the same shape with
//! `BLOCK_COMMENT_CLOSE` and never carry attributes.

use std::sync::OnceLock;

use regex::Regex;

use crate::braces;
use crate::cursor::Cursor;
use crate::lexer::Scan;
use crate::syntax_kind::SyntaxKind;

const COMMENT_START: &[u8] = b"<!--";
const COMMENT_END: &str = "-->";
const SELF_CLOSING_END: &str = "/-->";

/// Which side of a block a comment delimits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
    Open,
    Close,
}

impl Delimiter {
    fn kind(self) -> SyntaxKind {
        match self {
            Self::Open => SyntaxKind::BLOCK_COMMENT_OPEN,
            Self::Close => SyntaxKind::BLOCK_COMMENT_CLOSE,
        }
    }
}

/// Recognizes `<!--`, optional whitespace, then `wp:` or `/wp:` at `at`.
///
/// Returns the delimiter and the offset just past the marker.
pub(crate) fn detect(source: &str, at: usize) -> Option<(Delimiter, usize)> {
    let mut cur = Cursor::at(source, at);
    if !cur.eat(COMMENT_START) {
        return None;
    }
    cur.eat_whitespace();
    if cur.eat(b"wp:") {
        Some((Delimiter::Open, cur.pos()))
    } else if cur.eat(b"/wp:") {
        Some((Delimiter::Close, cur.pos()))
    } else {
        None
    }
}

/// Scans the block comment starting at `start`, whose marker ends at
/// `marker_end` (as returned by [`detect`]).
pub(crate) fn scan(source: &str, start: usize, delimiter: Delimiter, marker_end: usize) -> Scan {
    let delimiter_kind = delimiter.kind();
    let mut pieces = vec![(delimiter_kind, start..marker_end)];
    let mut cur = Cursor::at(source, marker_end);

    let name_start = cur.pos();
    while !cur.eof() && !at_name_end(&cur) {
        cur.bump();
    }
    pieces.push((SyntaxKind::BLOCK_NAME, name_start..cur.pos()));

    let mut trailing_start = cur.pos();
    cur.eat_whitespace();

    if delimiter == Delimiter::Open && cur.peek() == Some(b'{') {
        let attributes_start = cur.pos();
        pieces.push((delimiter_kind, trailing_start..attributes_start));
        match braces::attribute_span(source, attributes_start) {
            Ok(end) => {
                pieces.push((SyntaxKind::BLOCK_ATTRIBUTES, attributes_start..end));
                cur = Cursor::at(source, end);
            }
            Err(err) => {
                return Scan::Malformed {
                    pieces,
                    error: attributes_start..recovery_point(source, err.stopped_at()),
                };
            }
        }
        trailing_start = cur.pos();
        cur.eat_whitespace();
    }

    if cur.eat(COMMENT_END.as_bytes())
        || (delimiter == Delimiter::Open && cur.eat(SELF_CLOSING_END.as_bytes()))
    {
        pieces.push((delimiter_kind, trailing_start..cur.pos()));
        return Scan::Complete(pieces);
    }

    if cur.eof() {
        // Cut off before the comment closed: the whole construct is malformed.
        return Scan::Malformed {
            pieces: Vec::new(),
            error: start..source.len(),
        };
    }

    let unexpected = cur.pos();
    pieces.push((delimiter_kind, trailing_start..unexpected));
    Scan::Malformed {
        pieces,
        error: unexpected..recovery_point(source, unexpected),
    }
}

/// The block name ends at whitespace, `{`, `-->` or `/-->`.
fn at_name_end(cur: &Cursor<'_>) -> bool {
    cur.peek().is_some_and(|b| b.is_ascii_whitespace() || b == b'{')
        || cur.starts_with(COMMENT_END.as_bytes())
        || cur.starts_with(SELF_CLOSING_END.as_bytes())
}

/// Just past the next `-->` at or after `failed_at`, or the end of input.
fn recovery_point(source: &str, failed_at: usize) -> usize {
    Cursor::at(source, failed_at)
        .find(COMMENT_END)
        .map_or(source.len(), |at| at + COMMENT_END.len())
}

/// Returns true if `name` has the canonical `namespace/name` shape:
/// lowercase ASCII segments starting with a letter, with an optional
/// namespace. Block names outside this shape still tokenize as `BLOCK_NAME`.
pub fn is_canonical_block_name(name: &str) -> bool {
    static BLOCK_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    BLOCK_NAME_REGEX
        .get_or_init(|| {
            Regex::new(r"^[a-z][a-z0-9-]*(/[a-z][a-z0-9-]*)?$").expect("Invalid block name regex")
        })
        .is_match(name)
}
