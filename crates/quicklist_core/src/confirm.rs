//! Confirmation strategy boundary for destructive operations.
//!
//! # Responsibility
//! - Describe the prompt a host presents before delete / clear-all.
//! - Abstract over host confirmation capability behind one trait.
//!
//! # Invariants
//! - The strategy is selected once at startup, never branched per call.
//! - Auto-accept hosts perform destructive operations without any prompt.

/// Prompt content for one destructive operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    /// Dialog title.
    pub title: String,
    /// Dialog body; may interpolate the current item count.
    pub message: String,
    /// Label of the non-destructive dismiss action.
    pub cancel_label: String,
    /// Label of the destructive accept action.
    pub confirm_label: String,
}

impl ConfirmationPrompt {
    /// Prompt shown before deleting a single item.
    pub fn delete_item() -> Self {
        Self {
            title: "Delete Todo".to_string(),
            message: "Are you sure you want to delete this todo?".to_string(),
            cancel_label: "Cancel".to_string(),
            confirm_label: "Delete".to_string(),
        }
    }

    /// Prompt shown before clearing the whole list of `count` items.
    pub fn clear_all(count: usize) -> Self {
        Self {
            title: "Delete All".to_string(),
            message: format!("Delete all {count} todos?"),
            cancel_label: "Cancel".to_string(),
            confirm_label: "Delete All".to_string(),
        }
    }
}

/// Host confirmation capability, injected into the service at startup.
pub trait ConfirmationStrategy {
    /// Returns `true` when the destructive operation may proceed.
    ///
    /// A declined prompt abandons the operation silently; no error is
    /// raised and no state changes.
    fn confirm(&self, prompt: &ConfirmationPrompt) -> bool;
}

/// Strategy for hosts without a blocking dialog surface (the web variant):
/// every destructive operation proceeds unconditionally, no prompt shown.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoAcceptConfirmation;

impl ConfirmationStrategy for AutoAcceptConfirmation {
    fn confirm(&self, _prompt: &ConfirmationPrompt) -> bool {
        true
    }
}

/// Strategy for hosts with a blocking dialog surface: the registered
/// closure presents the prompt and reports the user's choice.
pub struct CallbackConfirmation {
    handler: Box<dyn Fn(&ConfirmationPrompt) -> bool + Send + Sync>,
}

impl CallbackConfirmation {
    /// Wraps a host dialog callback.
    pub fn new(handler: impl Fn(&ConfirmationPrompt) -> bool + Send + Sync + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }
}

impl ConfirmationStrategy for CallbackConfirmation {
    fn confirm(&self, prompt: &ConfirmationPrompt) -> bool {
        (self.handler)(prompt)
    }
}

impl std::fmt::Debug for CallbackConfirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackConfirmation").finish_non_exhaustive()
    }
}
