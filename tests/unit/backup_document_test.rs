//! Unit tests for BackupDocument parsing and serialization.

use cloudnav::types::backup::BackupDocument;
use cloudnav::types::record::{Category, Link};

const VALID_PAYLOAD: &str = r#"{
    "links": [
        {
            "id": "l1",
            "title": "Rust",
            "url": "https://rust-lang.org",
            "icon": null,
            "description": "the language",
            "categoryId": "c1",
            "createdAt": 1700000000000,
            "pinned": true
        }
    ],
    "categories": [
        {"id": "c1", "name": "Dev", "icon": "code", "password": null}
    ]
}"#;

#[test]
fn test_from_json_accepts_well_formed_payload() {
    let doc = BackupDocument::from_json(VALID_PAYLOAD).expect("payload should parse");
    assert_eq!(doc.links.len(), 1);
    assert_eq!(doc.categories.len(), 1);
    assert_eq!(doc.links[0].category_id, "c1");
    assert_eq!(doc.links[0].created_at, 1_700_000_000_000);
    assert!(doc.links[0].pinned);
}

#[test]
fn test_from_json_accepts_empty_arrays() {
    let doc = BackupDocument::from_json(r#"{"links": [], "categories": []}"#).unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_from_json_rejects_invalid_json() {
    assert!(BackupDocument::from_json("not json at all").is_none());
    assert!(BackupDocument::from_json("").is_none());
}

#[test]
fn test_from_json_rejects_missing_fields() {
    assert!(BackupDocument::from_json(r#"{"links": []}"#).is_none());
    assert!(BackupDocument::from_json(r#"{"categories": []}"#).is_none());
    assert!(BackupDocument::from_json(r#"{}"#).is_none());
}

#[test]
fn test_from_json_rejects_non_array_fields() {
    assert!(BackupDocument::from_json(r#"{"links": {}, "categories": []}"#).is_none());
    assert!(BackupDocument::from_json(r#"{"links": [], "categories": "nope"}"#).is_none());
    assert!(BackupDocument::from_json(r#"{"links": null, "categories": []}"#).is_none());
}

#[test]
fn test_from_json_rejects_non_object_top_level() {
    assert!(BackupDocument::from_json(r#"[1, 2, 3]"#).is_none());
    assert!(BackupDocument::from_json(r#""a string""#).is_none());
}

#[test]
fn test_from_json_rejects_malformed_records() {
    // Array shape is right but the record is missing required fields.
    let payload = r#"{"links": [{"id": "l1"}], "categories": []}"#;
    assert!(BackupDocument::from_json(payload).is_none());
}

/// Missing `pinned` defaults to false so older snapshots stay readable.
#[test]
fn test_from_json_tolerates_missing_pinned() {
    let payload = r#"{
        "links": [{
            "id": "l1",
            "title": "t",
            "url": "u",
            "icon": null,
            "description": null,
            "categoryId": "c1",
            "createdAt": 0
        }],
        "categories": []
    }"#;
    let doc = BackupDocument::from_json(payload).unwrap();
    assert!(!doc.links[0].pinned);
}

/// The wire shape uses camelCase field names on records.
#[test]
fn test_to_json_uses_camel_case_keys() {
    let doc = BackupDocument {
        links: vec![Link {
            id: "l1".to_string(),
            title: "t".to_string(),
            url: "u".to_string(),
            icon: None,
            description: None,
            category_id: "c1".to_string(),
            created_at: 42,
            pinned: false,
        }],
        categories: vec![Category {
            id: "c1".to_string(),
            name: "n".to_string(),
            icon: "folder".to_string(),
            password: None,
        }],
    };

    let json = doc.to_json().unwrap();
    assert!(json.contains("\"categoryId\":\"c1\""));
    assert!(json.contains("\"createdAt\":42"));
    assert!(!json.contains("category_id"));
    assert!(!json.contains("created_at"));
}

#[test]
fn test_roundtrip_through_json() {
    let doc = BackupDocument::from_json(VALID_PAYLOAD).unwrap();
    let reparsed = BackupDocument::from_json(&doc.to_json().unwrap()).unwrap();
    assert_eq!(reparsed.links[0].title, doc.links[0].title);
    assert_eq!(reparsed.categories[0].name, doc.categories[0].name);
}
