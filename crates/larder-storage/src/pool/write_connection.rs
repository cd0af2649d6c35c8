//! Single connection behind a `std::sync::Mutex`. Serialized access.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use larder_core::config::StorageConfig;
use larder_core::errors::LarderResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// The engine's only connection, protected by a mutex so the engine is `Send + Sync`.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a connection to the given database path.
    pub fn open(path: &Path, config: &StorageConfig) -> LarderResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory(config: &StorageConfig) -> LarderResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the lock and execute a closure with the connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> LarderResult<T>
    where
        F: FnOnce(&Connection) -> LarderResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
