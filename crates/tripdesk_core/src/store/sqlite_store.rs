//! SQLite-backed key-value store.
//!
//! # Invariants
//! - The connection has migrations applied (see `db::open_db`).
//! - One row per key in `kv_entries`; writes upsert the full value.

use super::{KeyValueStore, StoreResult};
use crate::db::{open_db, open_db_in_memory};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (creating if needed) a store file.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps an already migrated connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        debug!(
            "event=kv_set module=store status=ok key={} bytes={}",
            key,
            value.len()
        );
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}
