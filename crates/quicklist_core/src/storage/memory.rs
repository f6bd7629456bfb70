//! In-memory key-value storage.
//!
//! Used by tests and throwaway sessions; contents are lost on drop.

use super::{KeyValueStorage, StorageResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// Map-backed storage with the same contract as the durable backend.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryKeyValueStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|poison| poison.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|poison| poison.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
