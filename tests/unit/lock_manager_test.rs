//! Unit tests for the LockManager visibility gate.

use cloudnav::managers::lock_manager::{LockManager, LockManagerTrait};
use cloudnav::types::errors::LockError;
use cloudnav::types::record::{Category, Link};

fn category(id: &str, password: Option<&str>) -> Category {
    Category {
        id: id.to_string(),
        name: format!("cat-{}", id),
        icon: "folder".to_string(),
        password: password.map(|p| p.to_string()),
    }
}

fn link(id: &str, category_id: &str) -> Link {
    Link {
        id: id.to_string(),
        title: format!("link-{}", id),
        url: format!("https://example.com/{}", id),
        icon: None,
        description: None,
        category_id: category_id.to_string(),
        created_at: 0,
        pinned: false,
    }
}

#[test]
fn test_unlock_with_correct_password() {
    let mut locks = LockManager::new();
    let locked = category("c1", Some("hunter2"));

    assert!(!locks.is_unlocked(Some(&locked)));
    locks.unlock(&locked, "hunter2").unwrap();
    assert!(locks.is_unlocked(Some(&locked)));
}

#[test]
fn test_unlock_with_wrong_password_fails() {
    let mut locks = LockManager::new();
    let locked = category("c1", Some("hunter2"));

    let err = locks.unlock(&locked, "guess").unwrap_err();
    assert!(matches!(err, LockError::WrongPassword));
    assert!(!locks.is_unlocked(Some(&locked)));
}

#[test]
fn test_unlock_unlocked_category_is_error() {
    let mut locks = LockManager::new();
    let open = category("c1", None);

    let err = locks.unlock(&open, "anything").unwrap_err();
    assert!(matches!(err, LockError::NotLocked(_)));
}

#[test]
fn test_password_comparison_is_exact() {
    let mut locks = LockManager::new();
    let locked = category("c1", Some("Secret"));

    assert!(locks.unlock(&locked, "secret").is_err());
    assert!(locks.unlock(&locked, "Secret ").is_err());
    assert!(locks.unlock(&locked, "Secret").is_ok());
}

#[test]
fn test_lock_reverses_unlock() {
    let mut locks = LockManager::new();
    let locked = category("c1", Some("pw"));

    locks.unlock(&locked, "pw").unwrap();
    locks.lock("c1");
    assert!(!locks.is_unlocked(Some(&locked)));
}

#[test]
fn test_passwordless_category_always_unlocked() {
    let locks = LockManager::new();
    assert!(locks.is_unlocked(Some(&category("c1", None))));
}

#[test]
fn test_dangling_category_counts_as_visible() {
    let locks = LockManager::new();
    assert!(locks.is_unlocked(None));
}

#[test]
fn test_visible_links_filters_locked_categories() {
    let mut locks = LockManager::new();
    let categories = vec![category("open", None), category("locked", Some("pw"))];
    let links = vec![
        link("a", "open"),
        link("b", "locked"),
        link("c", "missing"),
    ];

    let visible: Vec<&str> = locks
        .visible_links(&links, &categories)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(visible, vec!["a", "c"]);

    locks.unlock(&categories[1], "pw").unwrap();
    let visible: Vec<&str> = locks
        .visible_links(&links, &categories)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(visible, vec!["a", "b", "c"]);
}
