//! HTML tag scanning.
//!
//! Once the tokenizer sees `<` followed by a letter (or `</` and a letter) it
//! hands over to [`scan`]. The tag interior is split into pieces by a small
//! [Logos] lexer; attribute values after `=` are read by hand because an
//! unquoted value may legally contain `/` and `=`.
//!
//! [Logos]: https://docs.rs/logos

use std::ops::Range;

use logos::Logos;
use thiserror::Error;

use crate::cursor::Cursor;
use crate::lexer::Scan;
use crate::syntax_kind::SyntaxKind;

/// Pieces of a tag interior.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagPiece {
    #[regex(r"\s+")]
    Whitespace,

    /// Bare attribute name
    #[regex(r#"[^\s"'=<>/]+"#)]
    Name,

    /// Quoted string; a quoted attribute name when it appears outside a value
    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    Quoted,

    #[token("=")]
    Equals,

    /// A `/` that does not close the tag
    #[token("/")]
    Slash,

    #[token("/>")]
    SelfClose,

    #[token(">")]
    Close,

    /// Start of another tag before this one closed
    #[token("<")]
    Open,
}

/// Why a tag could not be closed.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TagFault {
    #[error("input ended inside a tag")]
    Unterminated,

    #[error("unterminated quote at byte {at}")]
    UnterminatedQuote { at: usize },

    #[error("`<` at byte {at} inside a tag")]
    NestedOpen { at: usize },
}

impl TagFault {
    fn failed_at(&self, len: usize) -> usize {
        match self {
            Self::Unterminated => len,
            Self::UnterminatedQuote { at } | Self::NestedOpen { at } => *at,
        }
    }
}

/// Returns true if an HTML tag starts at `at`.
pub(crate) fn starts_at(source: &str, at: usize) -> bool {
    let cur = Cursor::at(source, at);
    if !cur.starts_with(b"<") {
        return false;
    }
    match cur.peek_nth(1) {
        Some(b'/') => cur.peek_nth(2).is_some_and(|b| b.is_ascii_alphabetic()),
        Some(b) => b.is_ascii_alphabetic(),
        None => false,
    }
}

/// Scans the tag starting at `start`. The caller has checked [`starts_at`].
pub(crate) fn scan(source: &str, start: usize) -> Scan {
    match scan_pieces(source, start) {
        Ok(pieces) => Scan::Complete(pieces),
        Err(fault) => Scan::Malformed {
            pieces: Vec::new(),
            error: start..recovery_point(source, fault.failed_at(source.len())),
        },
    }
}

fn scan_pieces(source: &str, start: usize) -> Result<Vec<(SyntaxKind, Range<usize>)>, TagFault> {
    let mut cur = Cursor::at(source, start + 1);
    cur.eat(b"/");
    cur.eat_while(is_tag_name_byte);

    let mut pieces = vec![(SyntaxKind::HTML_TAG, start..cur.pos())];
    // Whitespace is held back and absorbed into whatever piece follows it.
    let mut pending: Option<usize> = None;
    let mut after_attribute = false;

    loop {
        let (piece, span) = next_piece(source, cur.pos()).ok_or(TagFault::Unterminated)?;
        let piece = piece.map_err(|()| TagFault::UnterminatedQuote { at: span.start })?;
        let lead = pending.take().unwrap_or(span.start);
        cur = Cursor::at(source, span.end);

        match piece {
            TagPiece::Whitespace => pending = Some(lead),
            TagPiece::Name | TagPiece::Quoted => {
                pieces.push((SyntaxKind::HTML_ATTRIBUTE, lead..span.end));
                after_attribute = true;
            }
            TagPiece::Equals if after_attribute => {
                let end = value_end(source, span.end)?;
                pieces.push((SyntaxKind::HTML_VALUE, lead..end));
                cur = Cursor::at(source, end);
                after_attribute = false;
            }
            TagPiece::Equals => {
                pieces.push((SyntaxKind::HTML_ATTRIBUTE, lead..span.end));
                after_attribute = false;
            }
            TagPiece::Slash => {
                pieces.push((SyntaxKind::HTML_TAG, lead..span.end));
                after_attribute = false;
            }
            TagPiece::SelfClose | TagPiece::Close => {
                pieces.push((SyntaxKind::HTML_TAG, lead..span.end));
                return Ok(pieces);
            }
            TagPiece::Open => return Err(TagFault::NestedOpen { at: span.start }),
        }
    }
}

/// Lexes the single tag piece starting at `at`, with absolute offsets.
fn next_piece(source: &str, at: usize) -> Option<(Result<TagPiece, ()>, Range<usize>)> {
    let mut lexer = TagPiece::lexer(source.get(at..)?);
    let piece = lexer.next()?;
    let span = lexer.span();
    Some((piece, at + span.start..at + span.end))
}

/// Reads the value following `=`; returns the offset just past it.
///
/// A `>` straight after `=` leaves the value empty.
fn value_end(source: &str, after_equals: usize) -> Result<usize, TagFault> {
    let mut cur = Cursor::at(source, after_equals);
    cur.eat_whitespace();
    match cur.peek() {
        None => Err(TagFault::Unterminated),
        Some(quote @ (b'"' | b'\'')) => {
            let open = cur.pos();
            cur.bump();
            let close = cur
                .find(if quote == b'"' { "\"" } else { "'" })
                .ok_or(TagFault::UnterminatedQuote { at: open })?;
            Ok(close + 1)
        }
        Some(b'>') => Ok(cur.pos()),
        Some(_) => {
            cur.eat_while(|b| !b.is_ascii_whitespace() && b != b'>');
            Ok(cur.pos())
        }
    }
}

/// Where scanning resumes after a malformed tag: just past the next `>`, or
/// just before the next `<`, whichever comes first at or after `failed_at`.
fn recovery_point(source: &str, failed_at: usize) -> usize {
    source
        .as_bytes()
        .get(failed_at..)
        .and_then(|rest| rest.iter().position(|&b| b == b'>' || b == b'<'))
        .map(|offset| {
            let at = failed_at + offset;
            if source.as_bytes()[at] == b'>' { at + 1 } else { at }
        })
        .unwrap_or(source.len())
}

fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b':' | b'_' | b'.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pieces(source: &str) -> Vec<(SyntaxKind, &str)> {
        match scan(source, 0) {
            Scan::Complete(pieces) => pieces
                .into_iter()
                .map(|(kind, range)| (kind, &source[range]))
                .collect(),
            Scan::Malformed { error, .. } => panic!("malformed tag, error span {error:?}"),
        }
    }

    fn error_span(source: &str) -> &str {
        match scan(source, 0) {
            Scan::Malformed { pieces, error } => {
                assert!(pieces.is_empty());
                &source[error]
            }
            Scan::Complete(_) => panic!("tag unexpectedly closed"),
        }
    }

    #[test]
    fn detects_tag_starts() {
        assert!(starts_at("<p>", 0));
        assert!(starts_at("</p>", 0));
        assert!(starts_at("a <b>", 2));
        assert!(!starts_at("< p>", 0));
        assert!(!starts_at("</ p>", 0));
        assert!(!starts_at("<3", 0));
        assert!(!starts_at("<!-- x -->", 0));
        assert!(!starts_at("<", 0));
        assert!(!starts_at("</", 0));
    }

    #[test]
    fn bare_tag() {
        assert_eq!(
            pieces("<p>"),
            vec![(SyntaxKind::HTML_TAG, "<p"), (SyntaxKind::HTML_TAG, ">")]
        );
    }

    #[test]
    fn attributes_absorb_punctuation() {
        assert_eq!(
            pieces(r#"<a href="x" target = '_blank' hidden>"#),
            vec![
                (SyntaxKind::HTML_TAG, "<a"),
                (SyntaxKind::HTML_ATTRIBUTE, " href"),
                (SyntaxKind::HTML_VALUE, r#"="x""#),
                (SyntaxKind::HTML_ATTRIBUTE, " target"),
                (SyntaxKind::HTML_VALUE, " = '_blank'"),
                (SyntaxKind::HTML_ATTRIBUTE, " hidden"),
                (SyntaxKind::HTML_TAG, ">"),
            ]
        );
    }

    #[test]
    fn unquoted_value_keeps_slashes() {
        assert_eq!(
            pieces("<a href=/docs/a=b>"),
            vec![
                (SyntaxKind::HTML_TAG, "<a"),
                (SyntaxKind::HTML_ATTRIBUTE, " href"),
                (SyntaxKind::HTML_VALUE, "=/docs/a=b"),
                (SyntaxKind::HTML_TAG, ">"),
            ]
        );
    }

    #[test]
    fn self_closing_tag() {
        assert_eq!(
            pieces(r#"<img src="a.png" />"#),
            vec![
                (SyntaxKind::HTML_TAG, "<img"),
                (SyntaxKind::HTML_ATTRIBUTE, " src"),
                (SyntaxKind::HTML_VALUE, r#"="a.png""#),
                (SyntaxKind::HTML_TAG, " />"),
            ]
        );
    }

    #[test]
    fn quoted_value_may_contain_angle_brackets() {
        assert_eq!(
            pieces(r#"<a title="1 > 0">"#),
            vec![
                (SyntaxKind::HTML_TAG, "<a"),
                (SyntaxKind::HTML_ATTRIBUTE, " title"),
                (SyntaxKind::HTML_VALUE, r#"="1 > 0""#),
                (SyntaxKind::HTML_TAG, ">"),
            ]
        );
    }

    #[test]
    fn quoted_attribute_name() {
        assert_eq!(
            pieces(r#"<x "odd"="1">"#),
            vec![
                (SyntaxKind::HTML_TAG, "<x"),
                (SyntaxKind::HTML_ATTRIBUTE, r#" "odd""#),
                (SyntaxKind::HTML_VALUE, r#"="1""#),
                (SyntaxKind::HTML_TAG, ">"),
            ]
        );
    }

    #[test]
    fn empty_value_before_close() {
        assert_eq!(
            pieces("<a b=>"),
            vec![
                (SyntaxKind::HTML_TAG, "<a"),
                (SyntaxKind::HTML_ATTRIBUTE, " b"),
                (SyntaxKind::HTML_VALUE, "="),
                (SyntaxKind::HTML_TAG, ">"),
            ]
        );
    }

    #[test]
    fn unterminated_tag_runs_to_end() {
        assert_eq!(error_span("<div class"), "<div class");
        assert_eq!(error_span("<div class="), "<div class=");
    }

    #[test]
    fn unterminated_quote_recovers_at_next_close() {
        let source = r#"<a title="oops>rest"#;
        assert_eq!(error_span(source), r#"<a title="oops>"#);
    }

    #[test]
    fn nested_open_recovers_before_new_tag() {
        assert_eq!(error_span("<div <p>"), "<div ");
    }

    #[test]
    fn recovery_point_prefers_first_delimiter() {
        assert_eq!(recovery_point("ab>c<d", 0), 3);
        assert_eq!(recovery_point("ab<c>d", 0), 2);
        assert_eq!(recovery_point("abc", 0), 3);
        assert_eq!(recovery_point("abc", 3), 3);
    }
}
