use std::fmt;

// === StateError ===

/// Errors related to record-set mutations.
#[derive(Debug)]
pub enum StateError {
    /// Link with the given ID was not found.
    LinkNotFound(String),
    /// Category with the given ID was not found.
    CategoryNotFound(String),
    /// The default category cannot be removed; it is the reassignment
    /// target for deleted categories.
    DefaultCategoryImmutable,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::LinkNotFound(id) => write!(f, "Link not found: {}", id),
            StateError::CategoryNotFound(id) => write!(f, "Category not found: {}", id),
            StateError::DefaultCategoryImmutable => {
                write!(f, "The default category cannot be removed")
            }
        }
    }
}

impl std::error::Error for StateError {}

// === CacheError ===

/// Errors related to the local cache (key/value store).
#[derive(Debug)]
pub enum CacheError {
    /// Database operation failed.
    DatabaseError(String),
    /// Failed to serialize or deserialize a cached document.
    SerializationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::DatabaseError(msg) => write!(f, "Cache database error: {}", msg),
            CacheError::SerializationError(msg) => {
                write!(f, "Cache serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for CacheError {}

// === SyncError ===

/// Errors from the generic authenticated store transport.
#[derive(Debug)]
pub enum SyncError {
    /// The store returned 401; the credential is no longer valid.
    Unauthorized,
    /// A network error occurred while talking to the store.
    NetworkError(String),
    /// The store returned a non-success status other than 401.
    ServerError(u16),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Unauthorized => write!(f, "Store rejected credential (401)"),
            SyncError::NetworkError(msg) => write!(f, "Store network error: {}", msg),
            SyncError::ServerError(status) => write!(f, "Store returned status {}", status),
        }
    }
}

impl std::error::Error for SyncError {}

// === BackupError ===

/// Errors from the remote-document (WebDAV) backup transport.
#[derive(Debug)]
pub enum BackupError {
    /// No remote backup URL has been configured.
    NotConfigured,
    /// Remote backup is configured but disabled.
    Disabled,
    /// A network error occurred while talking to the remote store.
    NetworkError(String),
    /// The remote store returned a non-success status.
    ServerError(u16),
}

impl fmt::Display for BackupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackupError::NotConfigured => write!(f, "Remote backup is not configured"),
            BackupError::Disabled => write!(f, "Remote backup is disabled"),
            BackupError::NetworkError(msg) => write!(f, "Backup network error: {}", msg),
            BackupError::ServerError(status) => {
                write!(f, "Backup server returned status {}", status)
            }
        }
    }
}

impl std::error::Error for BackupError {}

// === LockError ===

/// Errors related to category lock operations.
#[derive(Debug)]
pub enum LockError {
    /// The category has no password, so there is nothing to unlock.
    NotLocked(String),
    /// The supplied password does not match.
    WrongPassword,
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::NotLocked(id) => write!(f, "Category is not locked: {}", id),
            LockError::WrongPassword => write!(f, "Wrong category password"),
        }
    }
}

impl std::error::Error for LockError {}

// === TransferError ===

/// Errors related to bookmark file import/export on disk.
#[derive(Debug)]
pub enum TransferError {
    /// An I/O error occurred while reading or writing the bookmark file.
    IoError(String),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::IoError(msg) => write!(f, "Bookmark file I/O error: {}", msg),
        }
    }
}

impl std::error::Error for TransferError {}
