//! App Core for CloudNav.
//!
//! Central struct wiring the database, managers, and transports. All record
//! mutations go through the state manager; cache mirroring and opportunistic
//! remote sync are observers of state-change events rather than side effects
//! inside the handlers themselves.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::codec::{export_bookmarks, export_filename, parse_bookmarks};
use crate::database::connection::Database;
use crate::managers::cache_manager::{CacheManager, CacheManagerTrait};
use crate::managers::lock_manager::LockManager;
use crate::managers::state_manager::{StateEvent, StateManager, StateManagerTrait, StateObserver};
use crate::services::store_sync::{StoreSyncService, StoreSyncTrait};
use crate::services::webdav_backup::{WebDavBackup, WebDavBackupTrait};
use crate::types::backup::BackupDocument;
use crate::types::config::RemoteBackupConfig;
use crate::types::errors::{BackupError, CacheError, SyncError, TransferError};
use crate::types::sync::SyncOutcome;

/// Observer that mirrors every snapshot to the local cache.
struct CacheObserver {
    cache: CacheManager,
}

impl StateObserver for CacheObserver {
    fn state_changed(&mut self, _event: &StateEvent, snapshot: &BackupDocument) {
        // Cache mirroring is best-effort; a failed write must not block the mutation.
        let _ = self.cache.save_snapshot(snapshot);
    }
}

/// Observer that opportunistically pushes the snapshot to the generic store
/// whenever a credential is cached. A 401 clears the credential and raises
/// the reauth flag; every other failure is dropped without retry, and the
/// next mutation simply tries again.
struct RemoteSyncObserver {
    sync: StoreSyncService,
    cache: CacheManager,
    needs_reauth: Arc<AtomicBool>,
}

impl StateObserver for RemoteSyncObserver {
    fn state_changed(&mut self, _event: &StateEvent, snapshot: &BackupDocument) {
        let credential = match self.cache.load_credential() {
            Ok(Some(c)) => c,
            _ => return,
        };
        match self.sync.upload(snapshot, &credential) {
            Ok(()) => {}
            Err(SyncError::Unauthorized) => {
                let _ = self.cache.clear_credential();
                self.needs_reauth.store(true, Ordering::Relaxed);
            }
            Err(_) => {}
        }
    }
}

/// Central application struct holding the record set and all services.
pub struct App {
    pub db: Arc<Database>,
    pub cache: CacheManager,
    pub state: StateManager,
    pub locks: LockManager,
    store_sync: StoreSyncService,
    webdav: WebDavBackup,
    needs_reauth: Arc<AtomicBool>,
}

impl App {
    /// Default location of the CloudNav database: `<data dir>/cloudnav.db`.
    pub fn default_db_path() -> PathBuf {
        crate::platform::get_data_dir().join("cloudnav.db")
    }

    /// Creates a new App against a database path and the generic store's
    /// base URL, and subscribes the cache and remote-sync observers.
    pub fn new(db_path: &str, store_base_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        Self::with_database(db, store_base_url)
    }

    /// Like [`App::new`], but over an already-open database. Used by tests
    /// with `Database::open_in_memory`.
    pub fn with_database(
        db: Arc<Database>,
        store_base_url: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let needs_reauth = Arc::new(AtomicBool::new(false));

        let mut state = StateManager::new();
        state.subscribe(Box::new(CacheObserver {
            cache: CacheManager::new(db.clone()),
        }));
        state.subscribe(Box::new(RemoteSyncObserver {
            sync: StoreSyncService::new(store_base_url),
            cache: CacheManager::new(db.clone()),
            needs_reauth: needs_reauth.clone(),
        }));

        Ok(Self {
            cache: CacheManager::new(db.clone()),
            state,
            locks: LockManager::new(),
            store_sync: StoreSyncService::new(store_base_url),
            webdav: WebDavBackup::new(),
            needs_reauth,
            db,
        })
    }

    /// Startup sequence: hydrate the record set from the local cache and
    /// seed the default category on a fresh install.
    ///
    /// Hydration does not notify observers; it is not a user mutation.
    pub fn startup(&mut self) {
        if let Ok(Some(doc)) = self.cache.load_snapshot() {
            self.state.hydrate(doc);
        }
        self.state.ensure_default_category();
    }

    /// Shutdown sequence: mirror the final record set to the cache.
    pub fn shutdown(&self) {
        let _ = self.cache.save_snapshot(&self.state.snapshot());
    }

    // === Generic store sync ===

    /// Pushes the current snapshot to the generic store.
    pub fn sync_now(&mut self) -> SyncOutcome {
        let credential = match self.cache.load_credential() {
            Ok(Some(c)) => c,
            _ => return SyncOutcome::NoCredential,
        };
        match self.store_sync.upload(&self.state.snapshot(), &credential) {
            Ok(()) => SyncOutcome::Synced,
            Err(err) => self.record_sync_failure(err),
        }
    }

    /// Pulls the stored snapshot from the generic store and replaces the
    /// current record set with it. A malformed payload is a plain failure.
    pub fn restore_from_store(&mut self) -> SyncOutcome {
        let credential = match self.cache.load_credential() {
            Ok(Some(c)) => c,
            _ => return SyncOutcome::NoCredential,
        };
        match self.store_sync.download(&credential) {
            Ok(Some(doc)) => {
                self.state.replace_all(doc);
                SyncOutcome::Synced
            }
            Ok(None) => SyncOutcome::Failed,
            Err(err) => self.record_sync_failure(err),
        }
    }

    /// Collapses a transport error to its app-level outcome. 401 clears the
    /// cached credential and raises the reauth flag; the caller must not
    /// retry with the same credential. Everything else is a bare failure.
    pub fn record_sync_failure(&mut self, err: SyncError) -> SyncOutcome {
        match err {
            SyncError::Unauthorized => {
                let _ = self.cache.clear_credential();
                self.needs_reauth.store(true, Ordering::Relaxed);
                SyncOutcome::NeedsReauth
            }
            _ => SyncOutcome::Failed,
        }
    }

    /// Whether a 401 has invalidated the credential since the flag was last
    /// taken. The UI uses this to surface a re-authentication prompt.
    pub fn take_needs_reauth(&self) -> bool {
        self.needs_reauth.swap(false, Ordering::Relaxed)
    }

    pub fn set_credential(&self, credential: &str) -> Result<(), CacheError> {
        self.cache.save_credential(credential)
    }

    pub fn credential(&self) -> Result<Option<String>, CacheError> {
        self.cache.load_credential()
    }

    // === Remote-document backup ===

    pub fn set_remote_config(&self, config: &RemoteBackupConfig) -> Result<(), CacheError> {
        self.cache.save_remote_config(config)
    }

    pub fn remote_config(&self) -> Result<Option<RemoteBackupConfig>, CacheError> {
        self.cache.load_remote_config()
    }

    /// Metadata-only connectivity probe against the configured base URL.
    pub fn check_backup_connection(&self) -> Result<(), BackupError> {
        let config = self.loaded_remote_config()?;
        self.webdav.check_connection(&config)
    }

    /// Overwrites the remote backup document with the current snapshot.
    pub fn backup_now(&self) -> Result<(), BackupError> {
        let config = self.loaded_remote_config()?;
        self.webdav.upload(&config, &self.state.snapshot())
    }

    /// Restores the record set from the remote backup document.
    ///
    /// Returns `Ok(false)` when the document was rejected as malformed.
    pub fn restore_backup(&mut self) -> Result<bool, BackupError> {
        let config = self.loaded_remote_config()?;
        match self.webdav.download(&config)? {
            Some(doc) => {
                self.state.replace_all(doc);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn loaded_remote_config(&self) -> Result<RemoteBackupConfig, BackupError> {
        match self.cache.load_remote_config() {
            Ok(Some(config)) => Ok(config),
            _ => Err(BackupError::NotConfigured),
        }
    }

    // === Bookmark file import/export ===

    /// Renders the current record set as a Netscape bookmark document.
    pub fn export_html(&self) -> String {
        export_bookmarks(self.state.links(), self.state.categories())
    }

    /// Writes the bookmark document into `dir` under the dated filename
    /// `bookmarks_<YYYY-MM-DD>.html` and returns the full path.
    pub fn export_to_file(&self, dir: &Path) -> Result<PathBuf, TransferError> {
        let path = dir.join(export_filename(Utc::now().date_naive()));
        std::fs::write(&path, self.export_html())
            .map_err(|e| TransferError::IoError(e.to_string()))?;
        Ok(path)
    }

    /// Parses bookmark HTML and merges it into the current state.
    /// Returns `(links_added, categories_added)`.
    pub fn import_html(&mut self, html: &str) -> (usize, usize) {
        self.state.merge_import(parse_bookmarks(html))
    }

    /// Reads and imports an uploaded bookmark file.
    pub fn import_from_file(&mut self, path: &Path) -> Result<(usize, usize), TransferError> {
        let html =
            std::fs::read_to_string(path).map_err(|e| TransferError::IoError(e.to_string()))?;
        Ok(self.import_html(&html))
    }
}
