/// Persistence-layer errors. Recovered locally by the engine except on the
/// first append of a session.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("corrupt record in {table}: {details}")]
    CorruptRecord { table: String, details: String },

    #[error("{backend} backend unavailable: {reason}")]
    Unavailable { backend: String, reason: String },
}
