//! Retention pruning, counts, integrity check.

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use larder_core::errors::LarderResult;

use super::event_ops::in_transaction;
use super::format_date;
use crate::to_storage_err;

/// Delete events dated before `cutoff` from both event tables in one
/// transaction. Returns the number of rows removed.
pub fn prune_events_before(conn: &Connection, cutoff: NaiveDate) -> LarderResult<usize> {
    let cutoff = format_date(cutoff);
    in_transaction(conn, "prune_events", |tx| {
        let purchases = tx
            .execute("DELETE FROM purchase_events WHERE date < ?1", params![cutoff])
            .map_err(|e| to_storage_err(e.to_string()))?;
        let consumptions = tx
            .execute("DELETE FROM consumption_events WHERE date < ?1", params![cutoff])
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(purchases + consumptions)
    })
}

/// Total rows across both event tables.
pub fn event_count(conn: &Connection) -> LarderResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT (SELECT COUNT(*) FROM purchase_events)
                  + (SELECT COUNT(*) FROM consumption_events)",
            [],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count.max(0) as usize)
}

pub fn pattern_count(conn: &Connection) -> LarderResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM pattern_entries", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count.max(0) as usize)
}

/// Run integrity check. Returns true if database is OK.
pub fn integrity_check(conn: &Connection) -> LarderResult<bool> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(result == "ok")
}
