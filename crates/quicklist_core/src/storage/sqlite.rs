//! SQLite-backed key-value storage.
//!
//! # Responsibility
//! - Implement the storage contract over the `kv` table.
//! - Keep SQL details inside the storage boundary.

use super::{KeyValueStorage, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Key-value storage over an open SQLite connection.
///
/// The connection must come from `db::open_db` / `db::open_db_in_memory`
/// so migrations are guaranteed to have run.
pub struct SqliteKeyValueStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStorage for SqliteKeyValueStorage<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
