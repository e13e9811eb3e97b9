//! Netscape bookmark HTML parsing.
//!
//! Tolerant tag scanner rather than a full HTML parser: browser-exported
//! bookmark files are flat enough that tracking `<H3>` folders, `<A>`
//! anchors, and `</DL>` closers recovers the whole structure. Unknown
//! markup is skipped.

use chrono::Utc;
use uuid::Uuid;

use crate::codec::unescape_html;
use crate::types::record::{Category, Link, DEFAULT_CATEGORY_ID};

/// Icon assigned to categories created from imported folders.
pub const IMPORTED_CATEGORY_ICON: &str = "folder";

/// Result of parsing an uploaded bookmark file: new records ready to be
/// merged into the current state by the state manager.
#[derive(Debug, Default)]
pub struct ParsedImport {
    pub links: Vec<Link>,
    pub categories: Vec<Category>,
}

/// Parses a Netscape bookmark HTML document into new links and categories.
///
/// Every `<H3>` folder becomes a category with a fresh id; anchors inside a
/// folder are bound to it, anchors outside any folder fall back to
/// [`DEFAULT_CATEGORY_ID`]. Nested folders are flattened: each folder still
/// becomes its own category, and `</DL>` pops back to the enclosing one.
/// `ADD_DATE` seconds are widened back to milliseconds; anchors without
/// one, or whose value would overflow the widening, get the current time.
/// Anchors without an `HREF` are skipped.
///
/// Never fails: unrecognized input simply yields fewer records. Titles and
/// folder names are trimmed of surrounding whitespace, so like icons and
/// descriptions they are not guaranteed to round-trip byte-for-byte.
pub fn parse_bookmarks(html: &str) -> ParsedImport {
    // ASCII-uppercased copy for case-insensitive searching. Byte indices
    // stay aligned with the original because only ASCII letters change.
    let upper = html.to_ascii_uppercase();

    let mut parsed = ParsedImport::default();
    let mut folder_stack: Vec<String> = Vec::new();
    let mut pos = 0;

    while let Some(off) = upper[pos..].find('<') {
        let start = pos + off;
        let rest = &upper[start..];

        if rest.starts_with("<H3") {
            match scan_element(html, &upper, start, "</H3>") {
                Some(element) => {
                    let id = Uuid::new_v4().to_string();
                    parsed.categories.push(Category {
                        id: id.clone(),
                        name: unescape_html(element.text.trim()),
                        icon: IMPORTED_CATEGORY_ICON.to_string(),
                        password: None,
                    });
                    folder_stack.push(id);
                    pos = element.end;
                }
                None => pos = start + 3,
            }
        } else if rest.starts_with("<A ") || rest.starts_with("<A>") || rest.starts_with("<A\t") {
            match scan_element(html, &upper, start, "</A>") {
                Some(element) => {
                    if let Some(link) = anchor_to_link(&element, folder_stack.last()) {
                        parsed.links.push(link);
                    }
                    pos = element.end;
                }
                None => pos = start + 2,
            }
        } else if rest.starts_with("</DL>") {
            // The outermost <DL> has no folder on the stack; pop is a no-op there.
            folder_stack.pop();
            pos = start + 5;
        } else {
            pos = start + 1;
        }
    }

    parsed
}

/// A scanned element: the raw open tag (for attributes), the inner text,
/// and the byte offset just past the closing tag.
struct Element<'a> {
    open_tag: &'a str,
    text: &'a str,
    end: usize,
}

/// Scans one element starting at `start` (which points at `<`). Returns
/// `None` when the open tag or the closing tag never terminates.
fn scan_element<'a>(
    html: &'a str,
    upper: &str,
    start: usize,
    close_tag: &str,
) -> Option<Element<'a>> {
    let open_end = start + upper[start..].find('>')?;
    let close_at = open_end + upper[open_end..].find(close_tag)?;
    Some(Element {
        open_tag: &html[start..open_end],
        text: &html[open_end + 1..close_at],
        end: close_at + close_tag.len(),
    })
}

fn anchor_to_link(element: &Element, folder: Option<&String>) -> Option<Link> {
    let url = attr_value(element.open_tag, "HREF")?;
    if url.is_empty() {
        return None;
    }

    let created_at = attr_value(element.open_tag, "ADD_DATE")
        .and_then(|v| v.parse::<i64>().ok())
        .and_then(|secs| secs.checked_mul(1000))
        .unwrap_or_else(|| Utc::now().timestamp_millis());

    Some(Link {
        id: Uuid::new_v4().to_string(),
        title: unescape_html(element.text.trim()),
        url: url.to_string(),
        icon: attr_value(element.open_tag, "ICON").map(str::to_string),
        description: None,
        category_id: folder
            .cloned()
            .unwrap_or_else(|| DEFAULT_CATEGORY_ID.to_string()),
        created_at,
        pinned: false,
    })
}

/// Extracts a double-quoted attribute value from a raw open tag,
/// case-insensitively. The name must start at a whitespace boundary, so
/// `DATA-HREF` is not mistaken for `HREF`. Values are taken verbatim (no
/// unescaping), matching how the exporter embeds URLs and icons.
fn attr_value<'a>(open_tag: &'a str, name: &str) -> Option<&'a str> {
    let upper = open_tag.to_ascii_uppercase();
    let pattern = format!("{}=\"", name);

    let mut from = 0;
    while let Some(off) = upper[from..].find(&pattern) {
        let at = from + off;
        let boundary = upper[..at]
            .chars()
            .last()
            .map_or(false, |c| c.is_ascii_whitespace());
        if boundary {
            let value_start = at + pattern.len();
            let value_len = open_tag[value_start..].find('"')?;
            return Some(&open_tag[value_start..value_start + value_len]);
        }
        from = at + pattern.len();
    }
    None
}
