//! SQLite-backed key-value store, one table per storage scope.

use crate::errors::AppResult;
use crate::store::KeyValueStore;
use rusqlite::{Connection, OptionalExtension, params};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageScope {
    /// Survives logout (events, deletion markers).
    Local,
    /// Cleared on logout (signed-in user).
    Session,
}

impl StorageScope {
    pub fn table(&self) -> &'static str {
        match self {
            StorageScope::Local => "local_storage",
            StorageScope::Session => "session_storage",
        }
    }
}

pub struct SqliteStore<'c> {
    conn: &'c Connection,
    scope: StorageScope,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection, scope: StorageScope) -> Self {
        Self { conn, scope }
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT value FROM {} WHERE key = ?1",
            self.scope.table()
        ))?;
        let value = stmt
            .query_row(params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "INSERT INTO {} (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            self.scope.table()
        ))?;
        stmt.execute(params![key, value])?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "DELETE FROM {} WHERE key = ?1",
            self.scope.table()
        ))?;
        stmt.execute(params![key])?;
        Ok(())
    }
}
