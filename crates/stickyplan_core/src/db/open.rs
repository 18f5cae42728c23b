//! Connection bootstrap utilities for SQLite.
//!
//! # Invariants
//! - Returned connections have migrations fully applied.
//! - File databases get their parent directory created on demand.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens (or creates) the planner database file and applies migrations.
///
/// # Side effects
/// - Creates missing parent directories.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    open_with("file", || {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Connection::open(path)?)
    })
}

/// Opens an in-memory database and applies migrations.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with("memory", || Ok(Connection::open_in_memory()?))
}

fn open_with(
    mode: &'static str,
    connect: impl FnOnce() -> DbResult<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let result = connect().and_then(|mut conn| {
        bootstrap_connection(&mut conn)?;
        Ok(conn)
    });

    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={} duration_ms={}",
            mode,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={} duration_ms={} error={}",
            mode,
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}
