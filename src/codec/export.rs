//! Netscape bookmark HTML generation.
//!
//! Emits one `<H3>` folder per category, in the order the categories are
//! given, followed by a trailing folder for links whose category id matches
//! no known category.

use chrono::NaiveDate;

use crate::codec::escape_html;
use crate::types::record::{Category, Link};

/// Fixed Netscape bookmark file header.
pub const HEADER: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
<!-- This is an automatically generated file.\n\
     It will be read and overwritten.\n\
     DO NOT EDIT! -->\n\
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n\
<TITLE>Bookmarks</TITLE>\n\
<H1>Bookmarks</H1>\n";

/// Folder name for links whose category id matches no known category.
pub const UNCATEGORIZED_FOLDER: &str = "Uncategorized";

/// Generates a Netscape bookmark HTML document from the full record set.
///
/// Category order defines folder emission order. Every link appears exactly
/// once: under its category's folder, or under the trailing
/// [`UNCATEGORIZED_FOLDER`] when its category id is dangling. Titles and
/// category names are HTML-escaped; URLs and icon references are embedded
/// verbatim. Link descriptions are not emitted, so the format round-trip is
/// lossy for them.
///
/// Pure function: no I/O. Writing the result to disk is the application
/// layer's job.
pub fn export_bookmarks(links: &[Link], categories: &[Category]) -> String {
    let mut out = String::from(HEADER);
    out.push_str("<DL><p>\n");

    for category in categories {
        let members: Vec<&Link> = links
            .iter()
            .filter(|l| l.category_id == category.id)
            .collect();
        push_folder(&mut out, &category.name, &members);
    }

    let dangling: Vec<&Link> = links
        .iter()
        .filter(|l| !categories.iter().any(|c| c.id == l.category_id))
        .collect();
    if !dangling.is_empty() {
        push_folder(&mut out, UNCATEGORIZED_FOLDER, &dangling);
    }

    out.push_str("</DL><p>\n");
    out
}

/// Returns the download filename for an export performed on `date`:
/// `bookmarks_<YYYY-MM-DD>.html`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("bookmarks_{}.html", date.format("%Y-%m-%d"))
}

fn push_folder(out: &mut String, name: &str, members: &[&Link]) {
    out.push_str("    <DT><H3>");
    out.push_str(&escape_html(name));
    out.push_str("</H3>\n");
    out.push_str("    <DL><p>\n");
    for link in members {
        push_anchor(out, link);
    }
    out.push_str("    </DL><p>\n");
}

fn push_anchor(out: &mut String, link: &Link) {
    // ADD_DATE is in seconds; created_at is stored in milliseconds.
    let add_date = link.created_at / 1000;
    out.push_str("        <DT><A HREF=\"");
    out.push_str(&link.url);
    out.push_str("\" ADD_DATE=\"");
    out.push_str(&add_date.to_string());
    out.push('"');
    if let Some(icon) = &link.icon {
        out.push_str(" ICON=\"");
        out.push_str(icon);
        out.push('"');
    }
    out.push('>');
    out.push_str(&escape_html(&link.title));
    out.push_str("</A>\n");
}
