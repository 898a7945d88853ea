//! Token stream → display markup.
//!
//! Each token becomes `<span class="{prefix}{kind}">{escaped text}</span>`.
//! The kind names are the fixed vocabulary from [`SyntaxKind::as_str`], so a
//! stylesheet keyed on those classes styles any output of this module.

use blockmark_syntax::{SyntaxKind, Token, tokenize};
use serde::Serialize;

use crate::escape::escape;

/// Default prefix put in front of every class name.
pub const DEFAULT_CLASS_PREFIX: &str = "bm-";

/// Options controlling the display markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix for every class name, e.g. `bm-` gives `bm-html-tag`.
    pub class_prefix: String,
    /// Wrap each source line in a numbered line marker.
    pub line_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            line_numbers: false,
        }
    }
}

/// One source line of rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    /// 1-based source line number.
    pub number: usize,
    /// Display markup for the line, without its line break.
    pub markup: String,
}

/// Render tokens to display markup.
///
/// With `line_numbers` set, every source line is wrapped in
/// `<span class="{prefix}line" data-line="N">` and followed by a line break.
pub fn render(tokens: &[Token<'_>], options: &RenderOptions) -> String {
    if options.line_numbers {
        let prefix = escape(&options.class_prefix);
        let mut out = String::new();
        for line in render_lines(tokens, options) {
            out.push_str(&format!(
                "<span class=\"{prefix}line\" data-line=\"{}\">{}</span>\n",
                line.number, line.markup
            ));
        }
        return out;
    }

    let mut out = String::new();
    for token in tokens {
        push_fragment(&mut out, &options.class_prefix, token.kind, token.text);
    }
    out
}

/// Render tokens split at source line breaks.
///
/// A token spanning several lines is closed at each `\n` and re-opened on
/// the next line, so every line's markup is balanced on its own. A final
/// empty line after a trailing `\n` is not reported.
pub fn render_lines(tokens: &[Token<'_>], options: &RenderOptions) -> Vec<RenderedLine> {
    let mut lines = Vec::new();
    if tokens.is_empty() {
        return lines;
    }

    let mut current = String::new();
    for token in tokens {
        let mut segments = token.text.split('\n');
        if let Some(first) = segments.next() {
            push_fragment(&mut current, &options.class_prefix, token.kind, first);
        }
        for segment in segments {
            lines.push(RenderedLine {
                number: lines.len() + 1,
                markup: std::mem::take(&mut current),
            });
            push_fragment(&mut current, &options.class_prefix, token.kind, segment);
        }
    }

    let ends_with_newline = tokens.last().is_some_and(|t| t.text.ends_with('\n'));
    if !ends_with_newline {
        lines.push(RenderedLine {
            number: lines.len() + 1,
            markup: current,
        });
    }
    lines
}

/// Tokenize and render in one step.
pub fn highlight(source: &str, options: &RenderOptions) -> String {
    render(&tokenize(source), options)
}

fn push_fragment(out: &mut String, prefix: &str, kind: SyntaxKind, text: &str) {
    if text.is_empty() {
        return;
    }
    out.push_str(&format!(
        r#"<span class="{}{}">{}</span>"#,
        escape(prefix),
        kind.as_str(),
        escape(text)
    ));
}
