//! FFI use-case API for the Flutter-facing to-do screen.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Map the host confirmation surface onto the core's two host
//!   variants: auto-accept (web) and prompt-first (native dialogs).
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - On the prompt-first host, destructive endpoints mutate nothing and
//!   return the prompt payload; the `_confirmed` variants perform the
//!   accepted operation. On the auto-accept host they mutate directly.

use quicklist_core::db::open_db;
use quicklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AutoAcceptConfirmation, ConfirmationPrompt, SqliteKeyValueStorage, TodoItem, TodoService,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "quicklist.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static HOST_PROFILE: OnceLock<HostProfile> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostProfile {
    /// Host presents blocking dialogs before destructive operations.
    Prompt,
    /// Host has no confirmation surface; destructive operations proceed
    /// unconditionally.
    AutoAccept,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and an error message
///   on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Selects the confirmation host profile once per process.
///
/// Accepted values: `native` (blocking dialogs) and `web` (auto-accept).
/// Unconfigured processes default to `native`.
///
/// # FFI contract
/// - First accepted value wins; repeating it is idempotent.
/// - Never panics; returns empty string on success and an error message
///   on conflict or unknown profile.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_host(profile: String) -> String {
    let parsed = match profile.trim().to_ascii_lowercase().as_str() {
        "native" => HostProfile::Prompt,
        "web" => HostProfile::AutoAccept,
        other => return format!("unknown host profile `{other}`; expected native|web"),
    };

    let active = *HOST_PROFILE.get_or_init(|| parsed);
    if active != parsed {
        return format!("host profile already configured as {active:?}");
    }
    String::new()
}

/// One list entry as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemDto {
    pub id: String,
    pub text: String,
    pub done: bool,
}

/// Confirmation dialog payload for the prompt-first host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPromptDto {
    pub title: String,
    pub message: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

/// Generic action response envelope for to-do operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    /// Whether the operation mutated the list.
    pub ok: bool,
    /// Current list snapshot after the call, newest first.
    pub items: Vec<TodoItemDto>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Blocking notice for rejected input (title), when applicable.
    pub notice_title: Option<String>,
    /// Blocking notice for rejected input (message), when applicable.
    pub notice_message: Option<String>,
    /// Prompt the host must present before retrying with `_confirmed`.
    pub confirmation: Option<ConfirmationPromptDto>,
}

/// Returns the current persisted list, newest first.
///
/// # FFI contract
/// - Never panics; storage failures yield `ok = false` with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_list() -> TodoActionResponse {
    with_service(|service| success("listed", service.items()))
}

/// Adds a new item from raw user input.
///
/// Empty or whitespace-only input is rejected with the fixed blocking
/// notice; the list is unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(text: String) -> TodoActionResponse {
    with_service(|service| match service.add(&text) {
        Ok(_) => success("added", service.items()),
        Err(err) => {
            let notice = err.notice();
            TodoActionResponse {
                ok: false,
                items: to_dtos(service.items()),
                message: err.to_string(),
                notice_title: Some(notice.title.to_string()),
                notice_message: Some(notice.message.to_string()),
                confirmation: None,
            }
        }
    })
}

/// Toggles completion of the matching item; unknown ids are a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(id: String) -> TodoActionResponse {
    with_service(|service| {
        let changed = service.toggle(&id);
        let message = if changed { "toggled" } else { "not found" };
        success_with(changed, message, service.items())
    })
}

/// Replaces the matching item's text with edited input.
///
/// Empty input is rejected with the fixed blocking notice and the item
/// keeps its previous text.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_edit(id: String, text: String) -> TodoActionResponse {
    with_service(|service| match service.commit_edit(&id, &text) {
        Ok(changed) => {
            let message = if changed { "edited" } else { "not found" };
            success_with(changed, message, service.items())
        }
        Err(err) => {
            let notice = err.notice();
            TodoActionResponse {
                ok: false,
                items: to_dtos(service.items()),
                message: err.to_string(),
                notice_title: Some(notice.title.to_string()),
                notice_message: Some(notice.message.to_string()),
                confirmation: None,
            }
        }
    })
}

/// Deletes the matching item, honoring the configured host profile.
///
/// Prompt-first host: mutates nothing and returns the dialog payload;
/// the UI calls `todo_delete_confirmed` on accept and nothing on cancel.
/// Auto-accept host: deletes immediately, no prompt.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: String) -> TodoActionResponse {
    if host_profile() == HostProfile::Prompt {
        return with_service(|service| {
            needs_confirmation(ConfirmationPrompt::delete_item(), service.items())
        });
    }
    todo_delete_confirmed(id)
}

/// Deletes the matching item after the host dialog was accepted.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete_confirmed(id: String) -> TodoActionResponse {
    with_service(|service| {
        let changed = service.delete(&id);
        let message = if changed { "deleted" } else { "not found" };
        success_with(changed, message, service.items())
    })
}

/// Clears the whole list, honoring the configured host profile.
///
/// An empty list is always a no-op and never prompts, on either host.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_clear_all() -> TodoActionResponse {
    if host_profile() == HostProfile::Prompt {
        return with_service(|service| {
            if service.items().is_empty() {
                return success_with(false, "already empty", service.items());
            }
            needs_confirmation(
                ConfirmationPrompt::clear_all(service.items().len()),
                service.items(),
            )
        });
    }
    todo_clear_all_confirmed()
}

/// Clears the whole list after the host dialog was accepted.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_clear_all_confirmed() -> TodoActionResponse {
    with_service(|service| {
        let changed = service.clear_all();
        let message = if changed { "cleared" } else { "already empty" };
        success_with(changed, message, service.items())
    })
}

fn host_profile() -> HostProfile {
    HOST_PROFILE.get().copied().unwrap_or(HostProfile::Prompt)
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("QUICKLIST_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_service(
    f: impl FnOnce(&mut TodoService<SqliteKeyValueStorage<'_>>) -> TodoActionResponse,
) -> TodoActionResponse {
    let db_path = resolve_db_path();
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            log::warn!("event=ffi_open module=ffi status=error error={err}");
            return TodoActionResponse {
                ok: false,
                items: Vec::new(),
                message: format!("storage open failed: {err}"),
                notice_title: None,
                notice_message: None,
                confirmation: None,
            };
        }
    };

    // Confirmation is resolved in this layer (prompt payloads above), so
    // the per-call service always runs with auto-accept.
    let mut service = TodoService::open(
        SqliteKeyValueStorage::new(&conn),
        Box::new(AutoAcceptConfirmation),
    );
    f(&mut service)
}

fn success(message: &str, items: &[TodoItem]) -> TodoActionResponse {
    success_with(true, message, items)
}

fn success_with(ok: bool, message: &str, items: &[TodoItem]) -> TodoActionResponse {
    TodoActionResponse {
        ok,
        items: to_dtos(items),
        message: message.to_string(),
        notice_title: None,
        notice_message: None,
        confirmation: None,
    }
}

fn needs_confirmation(prompt: ConfirmationPrompt, items: &[TodoItem]) -> TodoActionResponse {
    TodoActionResponse {
        ok: false,
        items: to_dtos(items),
        message: "confirmation required".to_string(),
        notice_title: None,
        notice_message: None,
        confirmation: Some(ConfirmationPromptDto {
            title: prompt.title,
            message: prompt.message,
            cancel_label: prompt.cancel_label,
            confirm_label: prompt.confirm_label,
        }),
    }
}

fn to_dtos(items: &[TodoItem]) -> Vec<TodoItemDto> {
    items
        .iter()
        .map(|item| TodoItemDto {
            id: item.id.clone(),
            text: item.text.clone(),
            done: item.done,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        configure_host, core_version, init_logging, ping, todo_add, todo_clear_all,
        todo_clear_all_confirmed, todo_delete, todo_delete_confirmed, todo_edit, todo_list,
        todo_toggle,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn configure_host_rejects_unknown_profile() {
        let error = configure_host("desktop".to_string());
        assert!(error.contains("unknown host profile"));
    }

    // All to-do endpoints share one process-global database, so the whole
    // flow lives in a single sequential test.
    #[test]
    fn prompt_host_flow_covers_add_edit_toggle_delete_and_clear() {
        assert!(configure_host("native".to_string()).is_empty());
        todo_clear_all_confirmed();

        let rejected = todo_add("   ".to_string());
        assert!(!rejected.ok);
        assert_eq!(rejected.notice_title.as_deref(), Some("Empty Todo"));
        assert_eq!(rejected.notice_message.as_deref(), Some("Enter todo text"));

        let added = todo_add("  Buy milk  ".to_string());
        assert!(added.ok, "{}", added.message);
        assert_eq!(added.items[0].text, "Buy milk");
        let milk_id = added.items[0].id.clone();

        let toggled = todo_toggle(milk_id.clone());
        assert!(toggled.ok);
        assert!(toggled.items[0].done);

        let edited = todo_edit(milk_id.clone(), "Buy oat milk".to_string());
        assert!(edited.ok);
        assert_eq!(edited.items[0].text, "Buy oat milk");
        assert!(edited.items[0].done, "edit must preserve completion");

        let empty_edit = todo_edit(milk_id.clone(), "".to_string());
        assert!(!empty_edit.ok);
        assert_eq!(empty_edit.items[0].text, "Buy oat milk");

        // Prompt host: destructive endpoints return the dialog payload
        // without mutating.
        let delete_request = todo_delete(milk_id.clone());
        assert!(!delete_request.ok);
        let prompt = delete_request.confirmation.expect("delete should prompt");
        assert_eq!(prompt.title, "Delete Todo");
        assert_eq!(todo_list().items.len(), 1);

        let deleted = todo_delete_confirmed(milk_id);
        assert!(deleted.ok);
        assert!(deleted.items.is_empty());

        todo_add("one".to_string());
        todo_add("two".to_string());
        let clear_request = todo_clear_all();
        assert!(!clear_request.ok);
        let prompt = clear_request.confirmation.expect("clear should prompt");
        assert_eq!(prompt.title, "Delete All");
        assert_eq!(prompt.message, "Delete all 2 todos?");
        assert_eq!(todo_list().items.len(), 2);

        let cleared = todo_clear_all_confirmed();
        assert!(cleared.ok);
        assert!(cleared.items.is_empty());

        // Empty list never prompts, even on the prompt host.
        let noop = todo_clear_all();
        assert!(noop.confirmation.is_none());
        assert_eq!(noop.message, "already empty");
    }
}
