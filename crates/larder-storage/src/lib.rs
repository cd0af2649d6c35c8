//! # larder-storage
//!
//! SQLite persistence for the pantry engine: purchase and consumption event
//! tables, the pattern table, versioned migrations and retention pruning.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use larder_core::errors::{LarderError, StorageError};

/// Helper to convert a storage error message into a `LarderError`.
pub(crate) fn to_storage_err(msg: impl Into<String>) -> LarderError {
    LarderError::StorageError(StorageError::SqliteError {
        message: msg.into(),
    })
}

/// Helper for rows whose stored text no longer decodes.
pub(crate) fn corrupt(table: &str, details: impl Into<String>) -> LarderError {
    LarderError::StorageError(StorageError::CorruptRecord {
        table: table.to_string(),
        details: details.into(),
    })
}
