//! StorageEngine: owns the connection, runs migrations at startup, implements
//! IEventStorage + IPatternStorage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use larder_core::config::StorageConfig;
use larder_core::errors::LarderResult;
use larder_core::models::{ConsumptionEvent, PatternEntry, ProductEvents, ProductKey, PurchaseEvent};
use larder_core::traits::{IEventStorage, IPatternStorage};

use crate::migrations;
use crate::pool::WriteConnection;
use crate::queries::{event_ops, maintenance, pattern_ops};

/// SQLite-backed persistence for events and pattern entries.
pub struct StorageEngine {
    writer: WriteConnection,
    db_path: Option<PathBuf>,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk with default settings.
    pub fn open(path: &Path) -> LarderResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    pub fn open_with_config(path: &Path, config: &StorageConfig) -> LarderResult<Self> {
        let writer = WriteConnection::open(path, config)?;
        let engine = Self {
            writer,
            db_path: Some(path.to_path_buf()),
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open the database named by `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> LarderResult<Self> {
        Self::open_with_config(Path::new(&config.db_path), config)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> LarderResult<Self> {
        let writer = WriteConnection::open_in_memory(&StorageConfig::default())?;
        let engine = Self {
            writer,
            db_path: None,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> LarderResult<()> {
        self.writer.with_conn_sync(|conn| {
            let applied = migrations::run_migrations(conn)?;
            tracing::debug!(applied, path = ?self.db_path, "storage initialized");
            Ok(())
        })
    }

    /// Path of the backing file, `None` when in memory.
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    pub fn schema_version(&self) -> LarderResult<u32> {
        self.writer.with_conn_sync(migrations::current_version)
    }

    pub fn event_count(&self) -> LarderResult<usize> {
        self.writer.with_conn_sync(maintenance::event_count)
    }

    pub fn pattern_count(&self) -> LarderResult<usize> {
        self.writer.with_conn_sync(maintenance::pattern_count)
    }

    pub fn integrity_check(&self) -> LarderResult<bool> {
        self.writer.with_conn_sync(maintenance::integrity_check)
    }
}

impl IEventStorage for StorageEngine {
    fn append_purchase(&self, event: &PurchaseEvent) -> LarderResult<()> {
        self.writer
            .with_conn_sync(|conn| event_ops::insert_purchase(conn, event))
    }

    fn append_consumption(&self, event: &ConsumptionEvent) -> LarderResult<()> {
        self.writer
            .with_conn_sync(|conn| event_ops::insert_consumption(conn, event))
    }

    fn query(&self, key: &ProductKey) -> LarderResult<ProductEvents> {
        self.writer
            .with_conn_sync(|conn| event_ops::events_for(conn, key))
    }

    fn query_all(&self) -> LarderResult<BTreeMap<ProductKey, ProductEvents>> {
        self.writer.with_conn_sync(event_ops::all_events)
    }

    fn prune_before(&self, cutoff: NaiveDate) -> LarderResult<usize> {
        self.writer
            .with_conn_sync(|conn| maintenance::prune_events_before(conn, cutoff))
    }
}

impl IPatternStorage for StorageEngine {
    fn save_pattern(&self, entry: &PatternEntry) -> LarderResult<()> {
        self.writer
            .with_conn_sync(|conn| pattern_ops::upsert_pattern(conn, entry))
    }

    fn remove_pattern(&self, key: &ProductKey) -> LarderResult<()> {
        self.writer
            .with_conn_sync(|conn| pattern_ops::delete_pattern(conn, key))
    }

    fn load_patterns(&self) -> LarderResult<Vec<PatternEntry>> {
        self.writer.with_conn_sync(pattern_ops::load_patterns)
    }
}
