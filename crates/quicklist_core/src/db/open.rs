//! Connection bootstrap for the local storage database.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure pragmas and apply migrations before returning.
//!
//! # Invariants
//! - Returned connections have all migrations applied.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens the storage database file and applies pending migrations.
///
/// # Side effects
/// - Emits `db_open` log events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    bootstrap("file", || Connection::open(path))
}

/// Opens an in-memory database and applies pending migrations.
///
/// Used by tests and throwaway sessions; contents vanish on drop.
pub fn open_db_in_memory() -> DbResult<Connection> {
    bootstrap("memory", Connection::open_in_memory)
}

fn bootstrap(
    mode: &str,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let result = open().map_err(Into::into).and_then(|mut conn| {
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_migrations(&mut conn)?;
        Ok(conn)
    });

    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }

    result
}
