use std::collections::BTreeMap;

use larder_core::models::{PatternEntry, ProductKey};

/// In-memory pattern entries, one per product key.
#[derive(Debug, Clone, Default)]
pub struct PatternModel {
    entries: BTreeMap<ProductKey, PatternEntry>,
}

impl PatternModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &ProductKey) -> Option<&PatternEntry> {
        self.entries.get(key)
    }

    /// Insert or replace; returns the previous entry.
    pub fn upsert(&mut self, entry: PatternEntry) -> Option<PatternEntry> {
        self.entries.insert(entry.product_key.clone(), entry)
    }

    pub fn remove(&mut self, key: &ProductKey) -> Option<PatternEntry> {
        self.entries.remove(key)
    }

    /// Entries ordered by canonical key.
    pub fn entries(&self) -> impl Iterator<Item = &PatternEntry> {
        self.entries.values()
    }

    pub fn to_vec(&self) -> Vec<PatternEntry> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
