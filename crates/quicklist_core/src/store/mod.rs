//! Canonical to-do list state and its mutation operations.
//!
//! # Responsibility
//! - Own the ordered item list and the transient edit-mode state.
//! - Enforce input validation before any list mutation.
//!
//! # Invariants
//! - Item ids in the list are unique.
//! - No item ever holds empty or whitespace-only text.
//! - Insertion order is newest-first; no operation reorders survivors.
//! - Operations are synchronous and touch nothing beyond in-memory state.

use crate::model::todo::{TodoId, TodoItem};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed user-facing notice surfaced for a rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    /// Short dialog title.
    pub title: &'static str,
    /// Dialog body text.
    pub message: &'static str,
}

/// Notice shown when add or edit input is empty after trimming.
pub const EMPTY_TEXT_NOTICE: Notice = Notice {
    title: "Empty Todo",
    message: "Enter todo text",
};

/// Input validation failure. Recovered locally; never mutates the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Submitted text was empty or whitespace-only after trimming.
    EmptyText,
}

impl ValidationError {
    /// Returns the fixed notice the UI presents for this rejection.
    pub fn notice(&self) -> Notice {
        match self {
            Self::EmptyText => EMPTY_TEXT_NOTICE,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "todo text is empty"),
        }
    }
}

impl Error for ValidationError {}

/// Transient edit-mode state: which item is being edited and the
/// provisional text buffer captured when editing began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Id of the item in edit mode.
    pub id: TodoId,
    /// Provisional text, seeded from the item's current text.
    pub buffer: String,
}

/// Owner of the canonical to-do list.
///
/// Confirmation gating for destructive operations lives in the service
/// layer; the store itself stays pure so every operation here is a plain
/// state transition.
#[derive(Debug, Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    edit: Option<EditSession>,
}

impl TodoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store initialized from previously persisted items.
    ///
    /// Hydrated records are trusted verbatim; validation applies only to
    /// new input, never retroactively to prior writes.
    pub fn hydrated(items: Vec<TodoItem>) -> Self {
        Self { items, edit: None }
    }

    /// Current list snapshot, newest first.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Active edit session, if any.
    pub fn editing(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Prepends a new item built from `raw`.
    ///
    /// # Errors
    /// - `ValidationError::EmptyText` when `raw` trims to nothing; the
    ///   list is left untouched and the caller surfaces the notice.
    pub fn add(&mut self, raw: &str) -> Result<&TodoItem, ValidationError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        self.items.insert(0, TodoItem::new(text));
        Ok(&self.items[0])
    }

    /// Flips the completion flag of the matching item.
    ///
    /// Unknown ids are a harmless no-op (a toggle may race with a delete);
    /// returns whether anything changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.done = !item.done;
                true
            }
            None => false,
        }
    }

    /// Enters edit mode for the matching item, seeding the provisional
    /// buffer from its current text. No-op when the id is unknown.
    ///
    /// Pure UI-state transition: the list itself is untouched and no
    /// persistence is triggered.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.items.iter().find(|item| item.id == id) {
            Some(item) => {
                self.edit = Some(EditSession {
                    id: item.id.clone(),
                    buffer: item.text.clone(),
                });
                true
            }
            None => false,
        }
    }

    /// Leaves edit mode, discarding the provisional buffer.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Replaces the matching item's text with the trimmed `raw` value and
    /// exits edit mode. Id, completion flag and position are preserved.
    ///
    /// When the id no longer exists (deleted while editing) the list is
    /// unchanged but edit mode still ends; returns whether text changed.
    ///
    /// # Errors
    /// - `ValidationError::EmptyText` when `raw` trims to nothing; the
    ///   list is unchanged and edit mode is retained.
    pub fn commit_edit(&mut self, id: &str, raw: &str) -> Result<bool, ValidationError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let changed = match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = text.to_string();
                true
            }
            None => false,
        };
        self.edit = None;
        Ok(changed)
    }

    /// Removes the matching item, keeping survivor order intact.
    ///
    /// Returns whether an item was removed; unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Resets the list to empty. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{TodoStore, ValidationError, EMPTY_TEXT_NOTICE};

    #[test]
    fn add_trims_input_and_prepends() {
        let mut store = TodoStore::new();
        store.add("  first  ").unwrap();
        store.add("second").unwrap();

        assert_eq!(store.items()[0].text, "second");
        assert_eq!(store.items()[1].text, "first");
    }

    #[test]
    fn empty_add_is_rejected_with_notice() {
        let mut store = TodoStore::new();
        let err = store.add("   ").unwrap_err();
        assert_eq!(err, ValidationError::EmptyText);
        assert_eq!(err.notice(), EMPTY_TEXT_NOTICE);
        assert!(store.is_empty());
    }

    #[test]
    fn begin_edit_seeds_buffer_from_current_text() {
        let mut store = TodoStore::new();
        let id = store.add("draft").unwrap().id.clone();

        assert!(store.begin_edit(&id));
        let session = store.editing().unwrap();
        assert_eq!(session.id, id);
        assert_eq!(session.buffer, "draft");

        store.cancel_edit();
        assert!(store.editing().is_none());
    }

    #[test]
    fn commit_edit_with_empty_text_keeps_edit_mode() {
        let mut store = TodoStore::new();
        let id = store.add("keep me").unwrap().id.clone();
        store.begin_edit(&id);

        let err = store.commit_edit(&id, " \t ").unwrap_err();
        assert_eq!(err, ValidationError::EmptyText);
        assert!(store.editing().is_some());
        assert_eq!(store.items()[0].text, "keep me");
    }

    #[test]
    fn commit_edit_for_deleted_item_still_exits_edit_mode() {
        let mut store = TodoStore::new();
        let id = store.add("doomed").unwrap().id.clone();
        store.begin_edit(&id);
        store.remove(&id);

        let changed = store.commit_edit(&id, "too late").unwrap();
        assert!(!changed);
        assert!(store.editing().is_none());
        assert!(store.is_empty());
    }
}
