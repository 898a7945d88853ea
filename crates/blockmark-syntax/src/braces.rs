//! Boundary scan for the JSON attribute payload of a block comment.
//!
//! Block attributes are a JSON object sitting between the block name and the
//! closing `-->`. Finding where the object ends is a small parsing job of its
//! own: braces are counted, but braces inside double-quoted strings (with
//! backslash escapes) do not count. A `-->` anywhere, even inside a string,
//! closes the HTML comment, so reaching one first means the comment closed
//! before the object did.
//!
//! ```
//! use blockmark_syntax::braces::{attribute_span, balanced_object_end};
//!
//! let src = r#"{"a":{"b":"}"}} -->"#;
//! assert_eq!(balanced_object_end(src, 0), Ok(15));
//! assert!(attribute_span(src, 0).is_ok());
//! ```

use serde::de::IgnoredAny;
use thiserror::Error;

/// Why an attribute payload could not become a `block-attributes` token.
#[derive(Debug, Error)]
pub enum AttributeError {
    #[error("unbalanced braces in block attributes (scan stopped at byte {stopped_at})")]
    Unbalanced { stopped_at: usize },

    #[error("block attributes ending at byte {end} are not valid JSON: {source}")]
    Invalid {
        end: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl AttributeError {
    /// Offset where the scan stopped; error recovery searches forward from here.
    pub fn stopped_at(&self) -> usize {
        match self {
            Self::Unbalanced { stopped_at } => *stopped_at,
            Self::Invalid { end, .. } => *end,
        }
    }
}

/// Finds the end of the brace-balanced object starting at `start`.
///
/// `source[start]` must be `{`. Returns the offset just past the matching
/// `}`, or `Err(offset)` where the scan stopped: the start of the first
/// `-->`, or the end of input.
pub fn balanced_object_end(source: &str, start: usize) -> Result<usize, usize> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut i = start;

    while i < bytes.len() {
        if bytes[i..].starts_with(b"-->") {
            return Err(i);
        }
        let b = bytes[i];
        if in_string {
            match b {
                // An escape never hides the comment end.
                b'\\' if !bytes[i + 1..].starts_with(b"-->") => i += 1,
                b'"' => in_string = false,
                _ => {}
            }
        } else {
            match b {
                b'"' => in_string = true,
                b'{' => depth += 1,
                b'}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Ok(i + 1);
                    }
                }
                _ => {}
            }
        }
        i += 1;
    }

    Err(bytes.len())
}

/// Finds the attribute object starting at `start` and checks it is valid JSON.
///
/// Returns the end offset of the object on success.
pub fn attribute_span(source: &str, start: usize) -> Result<usize, AttributeError> {
    let end = balanced_object_end(source, start)
        .map_err(|stopped_at| AttributeError::Unbalanced { stopped_at })?;
    serde_json::from_str::<IgnoredAny>(&source[start..end])
        .map_err(|source| AttributeError::Invalid { end, source })?;
    Ok(end)
}
