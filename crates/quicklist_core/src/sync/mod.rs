//! Persistence bridge between the in-memory list and durable storage.
//!
//! # Responsibility
//! - Hydrate the list once at startup from the fixed storage key.
//! - Mirror every list snapshot back to storage after mutations.
//!
//! # Invariants
//! - Hydration never fails the caller: read or parse errors degrade to an
//!   empty list and are only logged.
//! - Persist failures are logged and swallowed; the in-memory list stays
//!   the source of truth for the running session, with no retry.
//! - Every write is a full snapshot under one key, so racing writes
//!   resolve as last-write-wins without partial merges.

use crate::model::todo::TodoItem;
use crate::storage::KeyValueStorage;
use log::{error, info, warn};

/// Fixed key the whole list serializes under. Kept identical to the
/// original app's key so existing installs hydrate their data.
pub const STORAGE_KEY: &str = "@todo_list";

/// One-key mirror of the to-do list onto a key-value backend.
pub struct PersistenceSync<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> PersistenceSync<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads the persisted list, called exactly once before the UI
    /// accepts input.
    ///
    /// Absent key, read failure and parse failure all yield an empty
    /// list; only the failures are logged. Parsed records are trusted
    /// verbatim, with no re-validation of prior writes.
    pub fn hydrate(&self) -> Vec<TodoItem> {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("event=hydrate module=sync status=ok count=0 source=absent");
                return Vec::new();
            }
            Err(err) => {
                warn!("event=hydrate module=sync status=error stage=read error={err}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<TodoItem>>(&raw) {
            Ok(items) => {
                info!(
                    "event=hydrate module=sync status=ok count={} source=stored",
                    items.len()
                );
                items
            }
            Err(err) => {
                warn!("event=hydrate module=sync status=error stage=parse error={err}");
                Vec::new()
            }
        }
    }

    /// Writes the full snapshot under the fixed key.
    ///
    /// Fire-and-forget: a failed write never rolls back the in-memory
    /// mutation and is never retried.
    pub fn persist(&self, snapshot: &[TodoItem]) {
        let serialized = match serde_json::to_string(snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                error!("event=persist module=sync status=error stage=encode error={err}");
                return;
            }
        };

        match self.storage.set(STORAGE_KEY, &serialized) {
            Ok(()) => info!(
                "event=persist module=sync status=ok count={}",
                snapshot.len()
            ),
            Err(err) => {
                error!("event=persist module=sync status=error stage=write error={err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PersistenceSync, STORAGE_KEY};
    use crate::model::todo::TodoItem;
    use crate::storage::{KeyValueStorage, MemoryKeyValueStorage};

    #[test]
    fn hydrate_returns_empty_list_when_key_is_absent() {
        let sync = PersistenceSync::new(MemoryKeyValueStorage::new());
        assert!(sync.hydrate().is_empty());
    }

    #[test]
    fn hydrate_degrades_to_empty_list_on_corrupt_payload() {
        let storage = MemoryKeyValueStorage::new();
        storage.set(STORAGE_KEY, "{not json").unwrap();

        let sync = PersistenceSync::new(storage);
        assert!(sync.hydrate().is_empty());
    }

    #[test]
    fn persist_then_hydrate_roundtrips_exactly() {
        let sync = PersistenceSync::new(MemoryKeyValueStorage::new());
        let items = vec![
            TodoItem {
                id: "2".to_string(),
                text: "walk dog".to_string(),
                done: false,
            },
            TodoItem {
                id: "1".to_string(),
                text: "buy milk".to_string(),
                done: true,
            },
        ];

        sync.persist(&items);
        assert_eq!(sync.hydrate(), items);
    }

    #[test]
    fn persisted_records_use_wire_field_names() {
        let storage = MemoryKeyValueStorage::new();
        {
            let sync = PersistenceSync::new(&storage);
            sync.persist(&[TodoItem {
                id: "9".to_string(),
                text: "t".to_string(),
                done: false,
            }]);
        }
        let raw = storage.get(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"id":"9","text":"t","done":false}]"#);
    }
}
