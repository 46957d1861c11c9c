//! SQLite-backed record store
//!
//! The store owns the single database connection for the life of the
//! process: opened at startup, schema created if missing, released on drop.
//! Every operation is one synchronous statement against the connection.

mod error;
mod queries;
mod schema;

pub use error::StoreError;

use std::path::Path;

use rusqlite::Connection;

/// The record store backed by SQLite
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open (or create) the database at the given path
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }
}
