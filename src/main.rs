//! CloudNav, a personal bookmark manager.
//!
//! Entry point: runs an interactive console demo exercising each component
//! against an in-memory database. The transports are shown configured but
//! are not called here so the demo works offline.

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                CloudNav v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║      Bookmark manager with HTML import/export + backup      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_cache();
    demo_state();
    demo_export();
    demo_import();
    demo_locks();
    demo_backup_validation();
    demo_transports();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database() {
    use cloudnav::app::App;
    use cloudnav::database::connection::Database;
    section("Database Layer");

    println!("  Default database path: {}", App::default_db_path().display());
    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_cache() {
    use cloudnav::database::connection::Database;
    use cloudnav::managers::cache_manager::{CacheManager, CacheManagerTrait};
    use cloudnav::types::backup::BackupDocument;
    use std::sync::Arc;

    section("Local Cache");

    let db = Arc::new(Database::open_in_memory().expect("Failed to open database"));
    let cache = CacheManager::new(db);

    cache.save_snapshot(&BackupDocument::default()).unwrap();
    let loaded = cache.load_snapshot().unwrap().unwrap();
    println!("  Snapshot round-trip: {} links, {} categories", loaded.links.len(), loaded.categories.len());

    cache.save_credential("demo-token").unwrap();
    println!("  Credential stored: {:?}", cache.load_credential().unwrap());
    cache.clear_credential().unwrap();
    println!("  Credential cleared: {:?}", cache.load_credential().unwrap());
    println!("  ✓ CacheManager OK");
    println!();
}

fn demo_state() {
    use cloudnav::managers::state_manager::{StateManager, StateManagerTrait};
    use cloudnav::types::record::DEFAULT_CATEGORY_ID;

    section("State Manager");

    let mut state = StateManager::new();
    state.ensure_default_category();

    let dev = state.add_category("Development", "code", None);
    let link = state.add_link("Rust", "https://rust-lang.org", None, None, &dev);
    state.set_pinned(&link, true).unwrap();
    println!("  {} categories, {} links", state.categories().len(), state.links().len());

    state.remove_category(&dev).unwrap();
    let moved = state.get_link(&link).unwrap();
    println!("  Deleted category; link reassigned to '{}'", moved.category_id);
    assert_eq!(moved.category_id, DEFAULT_CATEGORY_ID);
    println!("  ✓ StateManager OK (cascade-reassign, never cascade-delete)");
    println!();
}

fn demo_export() {
    use cloudnav::codec::export_bookmarks;
    use cloudnav::managers::state_manager::{StateManager, StateManagerTrait};

    section("Bookmark Export");

    let mut state = StateManager::new();
    let news = state.add_category("News & <Tech>", "rss", None);
    state.add_link("Hacker \"News\"", "https://news.ycombinator.com", None, None, &news);
    state.add_link("Orphan", "https://example.com", None, None, "gone");

    let html = export_bookmarks(state.links(), state.categories());
    println!("  Exported {} bytes of Netscape bookmark HTML", html.len());
    println!("  Escaped folder: {}", html.lines().find(|l| l.contains("H3")).unwrap().trim());
    println!("  Dangling link went to the Uncategorized folder: {}", html.contains("Uncategorized"));
    println!("  ✓ Export codec OK");
    println!();
}

fn demo_import() {
    use cloudnav::codec::parse_bookmarks;

    section("Bookmark Import");

    let file = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<DL><p>
    <DT><H3>Tools</H3>
    <DL><p>
        <DT><A HREF="https://crates.io" ADD_DATE="1700000000">crates.io</A>
    </DL><p>
</DL><p>"#;
    let parsed = parse_bookmarks(file);
    println!("  Parsed {} categories, {} links", parsed.categories.len(), parsed.links.len());
    let link = &parsed.links[0];
    println!("  {} -> {} (created_at {} ms)", link.title, link.url, link.created_at);
    println!("  ✓ Import codec OK");
    println!();
}

fn demo_locks() {
    use cloudnav::managers::lock_manager::{LockManager, LockManagerTrait};
    use cloudnav::managers::state_manager::{StateManager, StateManagerTrait};

    section("Category Locks");

    let mut state = StateManager::new();
    let private = state.add_category("Private", "lock", Some("hunter2"));
    state.add_link("Secret", "https://example.com/secret", None, None, &private);

    let mut locks = LockManager::new();
    let visible = locks.visible_links(state.links(), state.categories());
    println!("  Before unlock: {} visible links", visible.len());

    let category = state.get_category(&private).unwrap().clone();
    assert!(locks.unlock(&category, "wrong").is_err());
    locks.unlock(&category, "hunter2").unwrap();
    let visible = locks.visible_links(state.links(), state.categories());
    println!("  After unlock:  {} visible links", visible.len());
    println!("  ✓ LockManager OK (visibility gate, in-memory only)");
    println!();
}

fn demo_backup_validation() {
    use cloudnav::types::backup::BackupDocument;

    section("Backup Document Validation");

    let good = r#"{"links": [], "categories": []}"#;
    let bad = r#"{"links": {}, "categories": []}"#;
    println!("  {:>5}: accepted = {}", "good", BackupDocument::from_json(good).is_some());
    println!("  {:>5}: accepted = {}", "bad", BackupDocument::from_json(bad).is_some());
    println!("  ✓ Non-array top-level fields are rejected as malformed");
    println!();
}

fn demo_transports() {
    use cloudnav::services::store_sync::StoreSyncService;
    use cloudnav::services::webdav_backup::WebDavBackup;

    section("Backup Transports (configured, not called)");

    let sync = StoreSyncService::new("https://nav.example.com/");
    println!("  Store endpoint:  {}", sync.storage_url());
    println!("  Backup document: {}", WebDavBackup::backup_url("https://dav.example.com/remote.php/webdav"));
    println!("  Probe accepts 207/200: {} {}", WebDavBackup::is_probe_success(207), WebDavBackup::is_probe_success(200));
    println!("  ✓ Transports OK");
    println!();
}

fn demo_app_core() {
    use cloudnav::app::App;
    use cloudnav::database::connection::Database;
    use cloudnav::managers::state_manager::StateManagerTrait;
    use std::sync::Arc;

    section("App Core");

    let db = Arc::new(Database::open_in_memory().expect("Failed to open database"));
    let mut app = App::with_database(db, "https://nav.example.com").expect("App init failed");
    app.startup();

    app.state.add_link("Docs", "https://docs.rs", None, None, "default");
    println!("  {} links after add; snapshot mirrored to cache by observer", app.state.links().len());

    let outcome = app.sync_now();
    println!("  sync_now without credential: {:?}", outcome);

    app.shutdown();
    println!("  ✓ App core OK");
    println!();
}
