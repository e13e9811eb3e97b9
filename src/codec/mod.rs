//! Netscape bookmark HTML codec.
//!
//! Converts between the in-memory record set and the Netscape Bookmark
//! file format, the de facto interchange format understood by Chrome,
//! Edge, and Firefox. Export and import are pure string transformations;
//! file I/O lives in the application layer.

pub mod export;
pub mod import;

pub use export::{export_bookmarks, export_filename};
pub use import::{parse_bookmarks, ParsedImport};

/// Escapes user-supplied text for embedding in bookmark HTML.
///
/// Only titles and category names pass through here. URLs and icon
/// references are embedded verbatim, matching the original exporter; see
/// the module tests for the flagged consequences.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Reverses [`escape_html`], plus the `&apos;` spelling some exporters use.
///
/// Unknown entities are left as-is.
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        let mut matched = false;
        for (entity, ch) in [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#39;", '\''),
            ("&apos;", '\''),
        ] {
            if rest.starts_with(entity) {
                out.push(ch);
                rest = &rest[entity.len()..];
                matched = true;
                break;
            }
        }
        if !matched {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}
