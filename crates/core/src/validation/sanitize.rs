//! Trimming and HTML escaping applied to every submitted form field.
//!
//! Escaping happens before storage, so stored text never carries markup and
//! can be emitted into pages verbatim.

/// Trim surrounding whitespace from a raw form value.
pub fn trim(raw: &str) -> String {
    raw.trim().to_string()
}

/// Escape the characters that are significant in HTML.
///
/// Covers `&`, `<`, `>`, `"`, `'`, `/`, `\` and the backtick.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            other => escaped.push(other),
        }
    }
    escaped
}
