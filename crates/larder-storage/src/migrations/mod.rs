//! Schema migrations tracked in `PRAGMA user_version`.

pub mod v001_event_tables;
pub mod v002_pattern_table;

use rusqlite::Connection;

use larder_core::errors::{LarderResult, StorageError};

type MigrationFn = fn(&Connection) -> LarderResult<()>;

const MIGRATIONS: &[(u32, MigrationFn)] = &[
    (1, v001_event_tables::migrate),
    (2, v002_pattern_table::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Run all pending migrations, each inside its own transaction.
pub fn run_migrations(conn: &Connection) -> LarderResult<u32> {
    let current = current_version(conn)?;
    let mut applied = 0;

    for (version, migrate) in MIGRATIONS {
        if current >= *version {
            continue;
        }
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| failed(*version, e.to_string()))?;
        if let Err(e) = migrate(&tx) {
            let _ = tx.rollback();
            return Err(failed(*version, e.to_string()));
        }
        tx.pragma_update(None, "user_version", version)
            .map_err(|e| failed(*version, e.to_string()))?;
        tx.commit().map_err(|e| failed(*version, e.to_string()))?;
        tracing::info!(version = version, "applied migration");
        applied += 1;
    }

    Ok(applied)
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> LarderResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| crate::to_storage_err(e.to_string()))
}

fn failed(version: u32, reason: String) -> larder_core::LarderError {
    StorageError::MigrationFailed { version, reason }.into()
}
