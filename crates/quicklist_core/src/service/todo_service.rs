//! To-do list use-case service.
//!
//! # Responsibility
//! - Compose the store, the persistence mirror and the confirmation
//!   strategy into the single object hosts interact with.
//! - Persist after every successful list mutation, and only those.
//!
//! # Invariants
//! - Hydration runs exactly once, inside `open`, before any mutation.
//! - Destructive operations consult the injected strategy first; a
//!   declined prompt abandons the operation silently.
//! - Edit-mode transitions (begin/cancel) never trigger persistence.

use crate::confirm::{ConfirmationPrompt, ConfirmationStrategy};
use crate::model::todo::{TodoId, TodoItem};
use crate::store::{EditSession, TodoStore, ValidationError};
use crate::storage::KeyValueStorage;
use crate::sync::PersistenceSync;
use log::info;

/// Host-facing service owning the canonical list for one session.
pub struct TodoService<S: KeyValueStorage> {
    store: TodoStore,
    sync: PersistenceSync<S>,
    confirmation: Box<dyn ConfirmationStrategy>,
}

impl<S: KeyValueStorage> TodoService<S> {
    /// Hydrates from storage and returns a ready service.
    ///
    /// The confirmation strategy is chosen once here, per host
    /// capability, and never swapped mid-session.
    pub fn open(storage: S, confirmation: Box<dyn ConfirmationStrategy>) -> Self {
        let sync = PersistenceSync::new(storage);
        let store = TodoStore::hydrated(sync.hydrate());
        Self {
            store,
            sync,
            confirmation,
        }
    }

    /// Current list snapshot, newest first.
    pub fn items(&self) -> &[TodoItem] {
        self.store.items()
    }

    /// Active edit session, if any.
    pub fn editing(&self) -> Option<&EditSession> {
        self.store.editing()
    }

    /// Adds a new item and persists the new snapshot.
    ///
    /// # Errors
    /// - `ValidationError::EmptyText` when the input trims to nothing;
    ///   nothing is mutated or persisted.
    pub fn add(&mut self, raw: &str) -> Result<TodoId, ValidationError> {
        let id = self.store.add(raw)?.id.clone();
        self.sync.persist(self.store.items());
        Ok(id)
    }

    /// Toggles completion of the matching item; persists when changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        let changed = self.store.toggle(id);
        if changed {
            self.sync.persist(self.store.items());
        }
        changed
    }

    /// Enters edit mode for the matching item. UI-state only, no persist.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        self.store.begin_edit(id)
    }

    /// Leaves edit mode without changes. UI-state only, no persist.
    pub fn cancel_edit(&mut self) {
        self.store.cancel_edit();
    }

    /// Commits edited text; persists when the item's text changed.
    ///
    /// # Errors
    /// - `ValidationError::EmptyText` when the input trims to nothing;
    ///   the list is unchanged and edit mode is retained.
    pub fn commit_edit(&mut self, id: &str, raw: &str) -> Result<bool, ValidationError> {
        let changed = self.store.commit_edit(id, raw)?;
        if changed {
            self.sync.persist(self.store.items());
        }
        Ok(changed)
    }

    /// Deletes the matching item after confirmation.
    ///
    /// Returns whether the list changed. A declined prompt abandons the
    /// deletion silently; on auto-accept hosts no prompt appears at all.
    pub fn delete(&mut self, id: &str) -> bool {
        if !self.confirmation.confirm(&ConfirmationPrompt::delete_item()) {
            info!("event=confirm module=service status=declined op=delete");
            return false;
        }

        let changed = self.store.remove(id);
        if changed {
            self.sync.persist(self.store.items());
        }
        changed
    }

    /// Clears the whole list after confirmation.
    ///
    /// An already-empty list is a no-op and does not prompt. Returns
    /// whether the list changed.
    pub fn clear_all(&mut self) -> bool {
        if self.store.is_empty() {
            return false;
        }

        let prompt = ConfirmationPrompt::clear_all(self.store.len());
        if !self.confirmation.confirm(&prompt) {
            info!("event=confirm module=service status=declined op=clear_all");
            return false;
        }

        let changed = self.store.clear();
        if changed {
            self.sync.persist(self.store.items());
        }
        changed
    }
}
