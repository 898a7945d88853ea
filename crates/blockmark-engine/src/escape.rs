use std::borrow::Cow;

/// Escapes `text` for embedding in HTML, both as element content and inside
/// a quoted attribute.
///
/// `&`, `<`, `>`, `"`, `'` and `/` are replaced with character references.
/// Every token is passed through here before it is wrapped, whatever its kind.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_safe(text)
}
