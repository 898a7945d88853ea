//! # blockmark-syntax
//!
//! A lossless tokenizer for WordPress block markup: HTML interleaved with
//! block comments such as `<!-- wp:paragraph {"align":"center"} -->`.
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → tokenize → Vec<Token>
//!                 │
//!                 ├── block_comment  <!-- wp:name {json} --> / <!-- /wp:name -->
//!                 │     └── braces   quote-aware brace scan + JSON check
//!                 └── tag            <name attr="value"> (Logos piece lexer)
//! ```
//!
//! The tokenizer is a pure function of its input. It never fails: malformed
//! constructs come out as `ERROR` tokens, and every byte of the input lands
//! in exactly one token.
//!
//! ## Module Structure
//!
//! ```text
//! blockmark-syntax/
//! ├── lib.rs           # This file - public API and snapshot tests
//! ├── syntax_kind.rs   # SyntaxKind enum (the nine token kinds)
//! ├── lexer.rs         # Token, sink, main scanning loop
//! ├── block_comment.rs # Block comment delimiters and names
//! ├── braces.rs        # Attribute payload boundary scan
//! ├── tag.rs           # HTML tag scanning
//! └── cursor.rs        # Byte cursor
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use blockmark_syntax::{tokenize, SyntaxKind};
//!
//! let tokens = tokenize("<!-- wp:spacer /-->");
//! assert_eq!(tokens[1].kind, SyntaxKind::BLOCK_NAME);
//! assert_eq!(tokens[1].text, "spacer");
//! ```

pub mod braces;
pub mod lexer;
pub mod syntax_kind;

mod block_comment;
mod cursor;
mod tag;

pub use block_comment::is_canonical_block_name;
pub use lexer::{Token, tokenize};
pub use syntax_kind::SyntaxKind;
