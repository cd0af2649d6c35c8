//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode (when enabled), NORMAL sync, configurable busy_timeout,
//! foreign_keys ON.

use rusqlite::Connection;

use larder_core::config::StorageConfig;
use larder_core::errors::LarderResult;

use crate::to_storage_err;

/// Apply the safety pragmas to a connection.
pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> LarderResult<()> {
    if config.wal_mode {
        // Returns the resulting mode as a row; in-memory databases report "memory".
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    conn.execute_batch(&format!(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {};
        PRAGMA foreign_keys = ON;
        ",
        config.busy_timeout_ms
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> LarderResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
