//! Property-based tests for the bookmark codec round-trip.
//!
//! For any record set, exporting to Netscape HTML and parsing the result
//! must recover every link's title, URL, and category-folder membership.
//! Icons are optional and descriptions are dropped by the format, so the
//! round-trip is checked only for the guaranteed fields.

use proptest::prelude::*;

use cloudnav::codec::export::{export_bookmarks, UNCATEGORIZED_FOLDER};
use cloudnav::codec::parse_bookmarks;
use cloudnav::types::record::{Category, Link};

/// Titles exercising the escaped characters alongside ordinary text.
/// Trimmed because the parser trims anchor text, and the original UI
/// never stores surrounding whitespace.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9&<>'\" ]{1,24}"
        .prop_map(|s| s.trim().to_string())
        .prop_filter("titles must be non-empty after trimming", |s| !s.is_empty())
}

fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,12}",
        prop_oneof![Just(".com"), Just(".org"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,8}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// A record set: 1-4 categories with unique names, 0-8 links spread over
/// the categories plus an occasional dangling reference.
fn arb_record_set() -> impl Strategy<Value = (Vec<Link>, Vec<Category>)> {
    (
        proptest::collection::vec(arb_title(), 1..4),
        proptest::collection::vec((arb_title(), arb_url(), 0usize..5, any::<bool>()), 0..8),
    )
        .prop_map(|(names, raw_links)| {
            let categories: Vec<Category> = names
                .iter()
                .enumerate()
                .map(|(i, name)| Category {
                    id: format!("cat-{}", i),
                    // Suffix keeps names unique and distinct from the
                    // uncategorized folder, so folder names identify
                    // categories unambiguously after parsing.
                    name: format!("{} #{}", name, i),
                    icon: "folder".to_string(),
                    password: None,
                })
                .collect();

            let links: Vec<Link> = raw_links
                .into_iter()
                .enumerate()
                .map(|(i, (title, url, pick, dangle))| {
                    let category_id = if dangle {
                        "no-such-category".to_string()
                    } else {
                        categories[pick % categories.len()].id.clone()
                    };
                    Link {
                        id: format!("link-{}", i),
                        // Unique suffix so (title, url) identifies a link
                        // unambiguously when checking recovered membership.
                        title: format!("{} #{}", title, i),
                        url,
                        icon: None,
                        description: None,
                        category_id,
                        created_at: 1_700_000_000_000 + i as i64 * 1000,
                        pinned: false,
                    }
                })
                .collect();

            (links, categories)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // For all link sets L and category sets C, parse(export(L, C)) recovers
    // every link's title, URL, and category-folder membership.
    #[test]
    fn roundtrip_recovers_titles_urls_and_membership((links, categories) in arb_record_set()) {
        let html = export_bookmarks(&links, &categories);
        let parsed = parse_bookmarks(&html);

        prop_assert_eq!(parsed.links.len(), links.len());

        for original in &links {
            let expected_folder = categories
                .iter()
                .find(|c| c.id == original.category_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| UNCATEGORIZED_FOLDER.to_string());

            let recovered = parsed
                .links
                .iter()
                .find(|l| l.url == original.url && l.title == original.title);
            prop_assert!(
                recovered.is_some(),
                "link '{}' ({}) not recovered",
                original.title,
                original.url
            );

            let recovered = recovered.unwrap();
            let folder = parsed
                .categories
                .iter()
                .find(|c| c.id == recovered.category_id)
                .map(|c| c.name.as_str());
            prop_assert_eq!(folder, Some(expected_folder.as_str()));
        }
    }

    // ADD_DATE survives the seconds conversion at second precision.
    #[test]
    fn roundtrip_preserves_timestamp_seconds((links, categories) in arb_record_set()) {
        let html = export_bookmarks(&links, &categories);
        let parsed = parse_bookmarks(&html);

        for original in &links {
            let recovered = parsed
                .links
                .iter()
                .find(|l| l.url == original.url && l.title == original.title)
                .unwrap();
            prop_assert_eq!(
                recovered.created_at / 1000,
                original.created_at / 1000
            );
        }
    }

    // A dangling link appears exactly once in the document, under the
    // uncategorized folder and nowhere else.
    #[test]
    fn dangling_links_export_exactly_once((links, categories) in arb_record_set()) {
        let html = export_bookmarks(&links, &categories);

        for link in &links {
            let occurrences = html.matches(&format!("HREF=\"{}\"", link.url)).count();
            let same_url = links.iter().filter(|l| l.url == link.url).count();
            prop_assert_eq!(occurrences, same_url);
        }
    }

    // Escaping round-trip: a title containing the special characters is
    // emitted escaped and read back as the original literal string.
    #[test]
    fn escaped_titles_read_back_literally(title in arb_title()) {
        let links = vec![Link {
            id: "l".to_string(),
            title: title.clone(),
            url: "https://example.com".to_string(),
            icon: None,
            description: None,
            category_id: "c".to_string(),
            created_at: 1_700_000_000_000,
            pinned: false,
        }];
        let categories = vec![Category {
            id: "c".to_string(),
            name: "C".to_string(),
            icon: "folder".to_string(),
            password: None,
        }];

        let parsed = parse_bookmarks(&export_bookmarks(&links, &categories));
        prop_assert_eq!(&parsed.links[0].title, &title);
    }
}
