//! SQLite connection handling for the CloudNav local cache.

use std::path::Path;

use rusqlite::Connection;

use super::migrations;

/// Owns the SQLite connection backing the local cache.
///
/// Opening a database runs all pending migrations, so a `Database` is
/// always at the current schema once constructed. The single connection is
/// shared by the cache manager via `Arc<Database>`; the application is
/// single-threaded, so no pooling is needed.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the cache database at `path` and migrates it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens a throwaway in-memory database, used by tests and the demo.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, rusqlite::Error> {
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    /// The underlying connection, for the managers that query it.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
