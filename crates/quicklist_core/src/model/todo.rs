//! Todo item record and id generation.
//!
//! # Responsibility
//! - Define the `{id, text, done}` record persisted under the storage key.
//! - Assign creation-time-derived ids that stay unique under rapid adds.
//!
//! # Invariants
//! - `id` is stable for the item lifetime and unique within a list.
//! - `done` starts as `false` at creation.
//! - Serde field names (`id`, `text`, `done`) are the persisted wire names
//!   and must not change without a storage migration.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Opaque unique item identifier in string form.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = String;

// Last issued id value. Ids derive from the creation epoch-millis; when two
// items are created inside the same millisecond the counter bumps past the
// clock so uniqueness still holds.
static LAST_ISSUED_ID: AtomicU64 = AtomicU64::new(0);

/// One to-do list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Stable identifier assigned at creation time.
    pub id: TodoId,
    /// Display text. Non-empty and trimmed when created through the store;
    /// hydrated values are trusted verbatim.
    pub text: String,
    /// Completion flag.
    pub done: bool,
}

impl TodoItem {
    /// Creates a new item with a freshly generated id and `done = false`.
    ///
    /// Callers are expected to pass already-trimmed, non-empty text; the
    /// store enforces that contract before constructing items.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: next_todo_id(),
            text: text.into(),
            done: false,
        }
    }
}

/// Issues the next creation-timestamp-derived id.
///
/// # Invariants
/// - Strictly increasing within one process, so ids are unique even when
///   the clock resolution cannot separate two creations.
pub fn next_todo_id() -> TodoId {
    let now_millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);

    let mut issued = 0;
    let _ = LAST_ISSUED_ID.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        issued = now_millis.max(last + 1);
        Some(issued)
    });

    issued.to_string()
}
