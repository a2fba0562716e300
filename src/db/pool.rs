//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::kv::{SqliteStore, StorageScope};
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Key-value view over the `local_storage` table.
    pub fn local_store(&self) -> SqliteStore<'_> {
        SqliteStore::new(&self.conn, StorageScope::Local)
    }

    /// Key-value view over the `session_storage` table.
    pub fn session_store(&self) -> SqliteStore<'_> {
        SqliteStore::new(&self.conn, StorageScope::Session)
    }
}
