//! # blockmark-engine
//!
//! Turns the token stream of [`blockmark_syntax`] into display markup that
//! is safe to embed as trusted HTML.
//!
//! ```
//! use blockmark_engine::{RenderOptions, highlight};
//!
//! let html = highlight("<!-- wp:spacer /-->", &RenderOptions::default());
//! assert!(html.starts_with(r#"<span class="bm-block-comment-open">&lt;!-- wp:</span>"#));
//! ```
//!
//! Every token's text goes through [`escape`] before it is wrapped; no kind
//! is treated as trusted, since attribute payloads and error spans carry
//! arbitrary input.

pub mod escape;
pub mod lines;
pub mod render;
pub mod stylesheet;

// Re-export key types for easier usage
pub use blockmark_syntax::{SyntaxKind, Token, tokenize};
pub use escape::escape;
pub use lines::token_lines;
pub use render::{
    DEFAULT_CLASS_PREFIX, RenderOptions, RenderedLine, highlight, render, render_lines,
};
pub use stylesheet::stylesheet;
