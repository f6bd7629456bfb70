//! Core domain logic for QuickList, a local single-screen to-do list.
//! This crate is the single source of truth for list-mutation invariants
//! and their persistence to local storage.

pub mod confirm;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;
pub mod sync;

pub use confirm::{
    AutoAcceptConfirmation, CallbackConfirmation, ConfirmationPrompt, ConfirmationStrategy,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{TodoId, TodoItem};
pub use service::todo_service::TodoService;
pub use storage::{
    KeyValueStorage, MemoryKeyValueStorage, SqliteKeyValueStorage, StorageError, StorageResult,
};
pub use store::{EditSession, Notice, TodoStore, ValidationError, EMPTY_TEXT_NOTICE};
pub use sync::{PersistenceSync, STORAGE_KEY};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
