//! Markdown → HTML conversion.
//!
//! Markdown uploads are normalized to HTML at parse time, not deferred to
//! the renderer. The input is trusted (uploaded by an authenticated user for
//! their own viewing), so no sanitization pass is applied.

use pulldown_cmark::{html, Options, Parser};

/// Render Markdown source to HTML with standard semantics: headings, code
/// fences, lists, blockquotes, plus tables and strikethrough.
pub fn to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
