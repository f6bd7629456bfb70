//! Key-value storage boundary for persisted state.
//!
//! # Responsibility
//! - Define the `get`/`set` contract the persistence layer writes through.
//! - Keep backend details (SQLite, in-memory) behind one trait.
//!
//! # Invariants
//! - Values are opaque UTF-8 strings; storage never inspects them.
//! - A missing key reads as `None`, never as an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKeyValueStorage;
pub use sqlite::SqliteKeyValueStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Backend failure while reading or writing a key.
///
/// Callers in the persistence layer recover locally: a failed read
/// degrades to an absent key, a failed write is logged and swallowed.
#[derive(Debug)]
pub enum StorageError {
    /// Database-level failure.
    Db(DbError),
    /// Backend rejected the operation (host storage unavailable).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable key-value service the to-do list persists through.
pub trait KeyValueStorage {
    /// Reads the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
