use blockmark_syntax::SyntaxKind;

/// A default stylesheet for the classes produced by [`crate::render`].
///
/// `prefix` must match the `class_prefix` the markup was rendered with.
pub fn stylesheet(prefix: &str) -> String {
    let mut css = format!(
        ".{prefix}line {{ display: block; }}\n\
         .{prefix}line::before {{ content: attr(data-line); display: inline-block; \
         width: 3em; margin-right: 1em; text-align: right; color: #8b949e; }}\n"
    );
    for kind in SyntaxKind::ALL {
        css.push_str(&format!(".{prefix}{} {{ {} }}\n", kind.as_str(), declarations(kind)));
    }
    css
}

fn declarations(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::BLOCK_COMMENT_OPEN | SyntaxKind::BLOCK_COMMENT_CLOSE => "color: #6a737d;",
        SyntaxKind::BLOCK_NAME => "color: #005cc5; font-weight: bold;",
        SyntaxKind::BLOCK_ATTRIBUTES => "color: #e36209;",
        SyntaxKind::HTML_TAG => "color: #22863a;",
        SyntaxKind::HTML_ATTRIBUTE => "color: #6f42c1;",
        SyntaxKind::HTML_VALUE => "color: #032f62;",
        SyntaxKind::TEXT => "color: inherit;",
        SyntaxKind::ERROR => {
            "color: #cb2431; text-decoration: underline wavy #cb2431;"
        }
    }
}
