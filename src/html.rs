//! HTML fragment cleanup for table cell values

use html_escape::decode_html_entities;

/// Decode HTML entities, strip all tags, and trim surrounding whitespace.
///
/// Malformed markup is tolerated and best-effort stripped; this never fails.
pub fn clean_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let decoded = decode_html_entities(text);

    let mut out = String::with_capacity(decoded.len());
    let mut in_tag = false;
    for ch in decoded.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    out.trim().to_string()
}
