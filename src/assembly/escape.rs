//! Escaping for interpolated text and URLs

/// Escape text for HTML element content and double- or single-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "data:", "vbscript:"];

/// Whether a URL uses a scheme that can run script. Whitespace and control characters are
/// ignored the way browsers ignore them when parsing the scheme.
pub fn is_unsafe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .flat_map(char::to_lowercase)
        .collect();
    BLOCKED_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}

/// An escaped URL for an `href`/`src` attribute, or `#` for script-capable schemes.
pub fn safe_url(url: &str) -> String {
    if is_unsafe_url(url) {
        "#".to_string()
    } else {
        escape_html(url.trim())
    }
}

/// Neutralize a URL that is already HTML-escaped.
pub(crate) fn safe_escaped_url(url: &str) -> &str {
    if is_unsafe_url(url) {
        "#"
    } else {
        url
    }
}
