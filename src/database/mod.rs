//! CloudNav local persistence layer.
//!
//! SQLite connection management and schema migrations. The local cache is
//! a single key/value table holding JSON documents under fixed keys, the
//! desktop analog of the original browser-local-storage cache.
//!
//! ```no_run
//! use cloudnav::database::Database;
//!
//! let db = Database::open("cloudnav.db").expect("failed to open database");
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
