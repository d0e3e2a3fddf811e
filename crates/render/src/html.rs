//! Shared HTML building blocks: escaping, the page shell, and the CSS class
//! mappings for method badges and status codes.

use std::fmt::Write;

/// Escape text for interpolation into HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a body in the full page shell: doctype, head with escaped title and
/// the variant stylesheet, body.
pub fn page_shell(title: &str, css: &str, body: &str) -> String {
    let mut page = String::with_capacity(body.len() + css.len() + 256);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = write!(page, "<title>{}</title>\n", escape_html(title));
    let _ = write!(page, "<style>{css}</style>\n");
    page.push_str("</head>\n<body>\n");
    page.push_str(body);
    page.push_str("</body>\n</html>\n");
    page
}

/// CSS class for an HTTP method badge. GET/POST/PUT/DELETE each get a fixed
/// color; anything else gets the neutral class.
pub fn method_class(method: &str) -> &'static str {
    match method.to_ascii_lowercase().as_str() {
        "get" => "get",
        "post" => "post",
        "put" => "put",
        "delete" => "delete",
        _ => "other",
    }
}

/// A color-coded method badge, uppercased.
pub fn method_badge(method: &str) -> String {
    format!(
        "<span class=\"method {}\">{}</span>",
        method_class(method),
        escape_html(&method.to_ascii_uppercase())
    )
}

/// CSS class for a response status code: 2xx green, 4xx red, anything else
/// neutral.
pub fn status_class(code: &str) -> &'static str {
    match code.as_bytes().first() {
        Some(b'2') => "success",
        Some(b'4') => "error",
        _ => "neutral",
    }
}

/// Deterministic pretty-printed JSON for `<pre>` blocks, HTML-escaped.
/// Decoded objects preserve key order, so the dump is stable byte-for-byte.
pub fn json_block(value: &serde_json::Value) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    format!("<pre>{}</pre>", escape_html(&pretty))
}
