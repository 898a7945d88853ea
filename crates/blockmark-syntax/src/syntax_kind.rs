//! SyntaxKind enum for every token the block-markup tokenizer emits.
//!
//! The set is closed: consumers that map kinds to visual styles can match
//! exhaustively and rely on [`SyntaxKind::as_str`] as the styling contract.

use serde::{Serialize, Serializer};

/// All token kinds produced by [`crate::tokenize`].
///
/// We use SCREAMING_CASE following the rust-analyzer convention for SyntaxKind.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    /// `<!-- wp:` and the trailing ` -->` / ` /-->` of an opening block comment
    BLOCK_COMMENT_OPEN,
    /// `<!-- /wp:` and the trailing ` -->` of a closing block comment
    BLOCK_COMMENT_CLOSE,
    /// Block name after the marker, e.g. `paragraph` or `core/image`
    BLOCK_NAME,
    /// JSON object payload of an opening block comment
    BLOCK_ATTRIBUTES,
    /// Tag name with its `<`, `</`, `>` and `/>` punctuation
    HTML_TAG,
    /// Attribute name, with any whitespace before it
    HTML_ATTRIBUTE,
    /// `=` and the quoted or unquoted value
    HTML_VALUE,
    /// Plain text content
    TEXT,
    /// Malformed construct
    ERROR,
}

impl SyntaxKind {
    /// Every kind, in declaration order.
    pub const ALL: [SyntaxKind; 9] = [
        Self::BLOCK_COMMENT_OPEN,
        Self::BLOCK_COMMENT_CLOSE,
        Self::BLOCK_NAME,
        Self::BLOCK_ATTRIBUTES,
        Self::HTML_TAG,
        Self::HTML_ATTRIBUTE,
        Self::HTML_VALUE,
        Self::TEXT,
        Self::ERROR,
    ];

    /// The kebab-case style name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BLOCK_COMMENT_OPEN => "block-comment-open",
            Self::BLOCK_COMMENT_CLOSE => "block-comment-close",
            Self::BLOCK_NAME => "block-name",
            Self::BLOCK_ATTRIBUTES => "block-attributes",
            Self::HTML_TAG => "html-tag",
            Self::HTML_ATTRIBUTE => "html-attribute",
            Self::HTML_VALUE => "html-value",
            Self::TEXT => "text",
            Self::ERROR => "error",
        }
    }

    /// Returns true for the delimiter kinds of WordPress block comments.
    pub fn is_block_delimiter(self) -> bool {
        matches!(self, Self::BLOCK_COMMENT_OPEN | Self::BLOCK_COMMENT_CLOSE)
    }

    /// Returns true for kinds that only occur inside an HTML tag.
    pub fn is_html(self) -> bool {
        matches!(
            self,
            Self::HTML_TAG | Self::HTML_ATTRIBUTE | Self::HTML_VALUE
        )
    }
}

impl Serialize for SyntaxKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
