//! Input sanitization
//!
//! Entity-escaping of the five HTML-significant characters, not a general
//! HTML sanitizer: it neutralizes tag/attribute breakout but does not parse
//! or strip markup structure.

/// Escape `&`, `<`, `>`, `"` and `'` as character references, then trim
/// surrounding whitespace. An absent value yields the empty string; this
/// function never fails.
///
/// `&` must be escaped first, otherwise the entities produced by the later
/// replacements would themselves be re-escaped. The function is not
/// idempotent on input containing `&`: re-escaping already-escaped text is
/// expected behavior.
pub fn sanitize_input(value: Option<&str>) -> String {
    let raw = match value {
        Some(v) => v,
        None => return String::new(),
    };

    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .trim()
        .to_string()
}
