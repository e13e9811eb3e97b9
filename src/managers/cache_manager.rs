//! Local cache for CloudNav.
//!
//! Implements `CacheManagerTrait`: fixed-key JSON documents in the
//! `local_store` table, backed by SQLite via `rusqlite`. Three keys exist:
//! the record-set snapshot, the store credential, and the remote backup
//! configuration.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;

use crate::database::connection::Database;
use crate::types::backup::BackupDocument;
use crate::types::config::RemoteBackupConfig;
use crate::types::errors::CacheError;

/// Key holding the `{links, categories}` snapshot.
pub const DATA_KEY: &str = "cloudnav_data";
/// Key holding the generic-store credential string.
pub const CREDENTIAL_KEY: &str = "cloudnav_token";
/// Key holding the remote backup configuration.
pub const REMOTE_CONFIG_KEY: &str = "cloudnav_webdav_config";

/// Trait defining local cache operations.
pub trait CacheManagerTrait {
    fn save_snapshot(&self, doc: &BackupDocument) -> Result<(), CacheError>;
    fn load_snapshot(&self) -> Result<Option<BackupDocument>, CacheError>;
    fn save_credential(&self, credential: &str) -> Result<(), CacheError>;
    fn load_credential(&self) -> Result<Option<String>, CacheError>;
    fn clear_credential(&self) -> Result<(), CacheError>;
    fn save_remote_config(&self, config: &RemoteBackupConfig) -> Result<(), CacheError>;
    fn load_remote_config(&self) -> Result<Option<RemoteBackupConfig>, CacheError>;
}

/// Cache manager backed by the shared SQLite database.
pub struct CacheManager {
    db: Arc<Database>,
}

impl CacheManager {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Writes a raw value under a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO local_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, value, Self::now()],
            )
            .map_err(|e| CacheError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// Reads the raw value under a key, if present.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let result = self.db.connection().query_row(
            "SELECT value FROM local_store WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(CacheError::DatabaseError(e.to_string())),
        }
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.db
            .connection()
            .execute("DELETE FROM local_store WHERE key = ?1", params![key])
            .map_err(|e| CacheError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

impl CacheManagerTrait for CacheManager {
    /// Mirrors the full record set to the cache, overwriting the previous snapshot.
    fn save_snapshot(&self, doc: &BackupDocument) -> Result<(), CacheError> {
        let json = doc
            .to_json()
            .map_err(|e| CacheError::SerializationError(e.to_string()))?;
        self.set(DATA_KEY, &json)
    }

    /// Loads the cached record set. Returns `None` on a fresh install.
    ///
    /// A cached document that no longer parses is a serialization error,
    /// not silently discarded data.
    fn load_snapshot(&self) -> Result<Option<BackupDocument>, CacheError> {
        match self.get(DATA_KEY)? {
            Some(json) => {
                let doc = serde_json::from_str(&json)
                    .map_err(|e| CacheError::SerializationError(e.to_string()))?;
                Ok(Some(doc))
            }
            None => Ok(None),
        }
    }

    fn save_credential(&self, credential: &str) -> Result<(), CacheError> {
        self.set(CREDENTIAL_KEY, credential)
    }

    fn load_credential(&self) -> Result<Option<String>, CacheError> {
        self.get(CREDENTIAL_KEY)
    }

    /// Removes the cached credential. Called when the store answers 401.
    fn clear_credential(&self) -> Result<(), CacheError> {
        self.delete(CREDENTIAL_KEY)
    }

    fn save_remote_config(&self, config: &RemoteBackupConfig) -> Result<(), CacheError> {
        let json = serde_json::to_string(config)
            .map_err(|e| CacheError::SerializationError(e.to_string()))?;
        self.set(REMOTE_CONFIG_KEY, &json)
    }

    fn load_remote_config(&self) -> Result<Option<RemoteBackupConfig>, CacheError> {
        match self.get(REMOTE_CONFIG_KEY)? {
            Some(json) => {
                let config = serde_json::from_str(&json)
                    .map_err(|e| CacheError::SerializationError(e.to_string()))?;
                Ok(Some(config))
            }
            None => Ok(None),
        }
    }
}
