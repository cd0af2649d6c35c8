//! Scripted collaborators: in-memory, always-failing and toggleable backends,
//! static pantry sources, normalizers and receipt parsers.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::NaiveDate;

use larder_core::errors::{LarderError, LarderResult, StorageError};
use larder_core::models::{
    ConsumptionEvent, NewPantryItem, NormalizedName, PantrySnapshot, PatternEntry, ProductEvents,
    ProductKey, PurchaseEvent,
};
use larder_core::traits::{
    IEventStorage, IPantrySource, IPatternStorage, IProductNormalizer, IReceiptParser,
};

fn unavailable(backend: &str) -> LarderError {
    StorageError::Unavailable {
        backend: backend.to_string(),
        reason: "scripted failure".to_string(),
    }
    .into()
}

// ── Storage ───────────────────────────────────────────────────────────────

/// Event and pattern storage held in memory, insertion order preserved.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    events: Mutex<BTreeMap<ProductKey, ProductEvents>>,
    patterns: Mutex<BTreeMap<ProductKey, PatternEntry>>,
    appends: AtomicUsize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful appends so far.
    pub fn append_count(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.lock().unwrap().len()
    }
}

impl IEventStorage for InMemoryStorage {
    fn append_purchase(&self, event: &PurchaseEvent) -> LarderResult<()> {
        self.events
            .lock()
            .unwrap()
            .entry(event.product_key.clone())
            .or_default()
            .purchases
            .push(event.clone());
        self.appends.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn append_consumption(&self, event: &ConsumptionEvent) -> LarderResult<()> {
        self.events
            .lock()
            .unwrap()
            .entry(event.product_key.clone())
            .or_default()
            .consumptions
            .push(event.clone());
        self.appends.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn query(&self, key: &ProductKey) -> LarderResult<ProductEvents> {
        Ok(self.events.lock().unwrap().get(key).cloned().unwrap_or_default())
    }

    fn query_all(&self) -> LarderResult<BTreeMap<ProductKey, ProductEvents>> {
        Ok(self.events.lock().unwrap().clone())
    }

    fn prune_before(&self, cutoff: NaiveDate) -> LarderResult<usize> {
        let mut events = self.events.lock().unwrap();
        let removed = events.values_mut().map(|e| e.retain_since(cutoff)).sum();
        events.retain(|_, e| !e.is_empty());
        Ok(removed)
    }
}

impl IPatternStorage for InMemoryStorage {
    fn save_pattern(&self, entry: &PatternEntry) -> LarderResult<()> {
        self.patterns
            .lock()
            .unwrap()
            .insert(entry.product_key.clone(), entry.clone());
        Ok(())
    }

    fn remove_pattern(&self, key: &ProductKey) -> LarderResult<()> {
        self.patterns.lock().unwrap().remove(key);
        Ok(())
    }

    fn load_patterns(&self) -> LarderResult<Vec<PatternEntry>> {
        Ok(self.patterns.lock().unwrap().values().cloned().collect())
    }
}

/// Every call fails with `StorageError::Unavailable`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStorage;

impl IEventStorage for FailingStorage {
    fn append_purchase(&self, _event: &PurchaseEvent) -> LarderResult<()> {
        Err(unavailable("failing"))
    }

    fn append_consumption(&self, _event: &ConsumptionEvent) -> LarderResult<()> {
        Err(unavailable("failing"))
    }

    fn query(&self, _key: &ProductKey) -> LarderResult<ProductEvents> {
        Err(unavailable("failing"))
    }

    fn query_all(&self) -> LarderResult<BTreeMap<ProductKey, ProductEvents>> {
        Err(unavailable("failing"))
    }

    fn prune_before(&self, _cutoff: NaiveDate) -> LarderResult<usize> {
        Err(unavailable("failing"))
    }
}

impl IPatternStorage for FailingStorage {
    fn save_pattern(&self, _entry: &PatternEntry) -> LarderResult<()> {
        Err(unavailable("failing"))
    }

    fn remove_pattern(&self, _key: &ProductKey) -> LarderResult<()> {
        Err(unavailable("failing"))
    }

    fn load_patterns(&self) -> LarderResult<Vec<PatternEntry>> {
        Err(unavailable("failing"))
    }
}

/// In-memory storage that fails every call while switched off.
#[derive(Debug, Default)]
pub struct FlakyStorage {
    inner: InMemoryStorage,
    down: AtomicBool,
}

impl FlakyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts in the failing state.
    pub fn down() -> Self {
        let storage = Self::default();
        storage.set_down(true);
        storage
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn inner(&self) -> &InMemoryStorage {
        &self.inner
    }

    fn check(&self) -> LarderResult<()> {
        if self.down.load(Ordering::SeqCst) {
            Err(unavailable("flaky"))
        } else {
            Ok(())
        }
    }
}

impl IEventStorage for FlakyStorage {
    fn append_purchase(&self, event: &PurchaseEvent) -> LarderResult<()> {
        self.check()?;
        self.inner.append_purchase(event)
    }

    fn append_consumption(&self, event: &ConsumptionEvent) -> LarderResult<()> {
        self.check()?;
        self.inner.append_consumption(event)
    }

    fn query(&self, key: &ProductKey) -> LarderResult<ProductEvents> {
        self.check()?;
        self.inner.query(key)
    }

    fn query_all(&self) -> LarderResult<BTreeMap<ProductKey, ProductEvents>> {
        self.check()?;
        self.inner.query_all()
    }

    fn prune_before(&self, cutoff: NaiveDate) -> LarderResult<usize> {
        self.check()?;
        self.inner.prune_before(cutoff)
    }
}

impl IPatternStorage for FlakyStorage {
    fn save_pattern(&self, entry: &PatternEntry) -> LarderResult<()> {
        self.check()?;
        self.inner.save_pattern(entry)
    }

    fn remove_pattern(&self, key: &ProductKey) -> LarderResult<()> {
        self.check()?;
        self.inner.remove_pattern(key)
    }

    fn load_patterns(&self) -> LarderResult<Vec<PatternEntry>> {
        self.check()?;
        self.inner.load_patterns()
    }
}

// ── Pantry ────────────────────────────────────────────────────────────────

/// Returns a fixed snapshot, or fails when built with `failing()`.
#[derive(Debug, Clone, Default)]
pub struct StaticPantry {
    snapshot: Option<PantrySnapshot>,
}

impl StaticPantry {
    pub fn new(snapshot: PantrySnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    pub fn failing() -> Self {
        Self { snapshot: None }
    }
}

impl IPantrySource for StaticPantry {
    fn current_snapshot(&self) -> LarderResult<PantrySnapshot> {
        self.snapshot.clone().ok_or_else(|| unavailable("pantry"))
    }
}

// ── Normalization ─────────────────────────────────────────────────────────

/// Answers from a lookup table keyed by trimmed lower-case raw name.
/// Unknown names normalize to themselves without a match.
#[derive(Debug, Clone, Default)]
pub struct ScriptedNormalizer {
    answers: HashMap<String, NormalizedName>,
}

impl ScriptedNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `raw` normalizes to `normalized` with no match.
    pub fn rename(mut self, raw: &str, normalized: &str) -> Self {
        self.answers.insert(
            raw.trim().to_lowercase(),
            NormalizedName {
                normalized_name: normalized.to_string(),
                is_match: false,
                matched_key: None,
                confidence: 0.9,
            },
        );
        self
    }

    /// `raw` is the same product as `existing`.
    pub fn matching(mut self, raw: &str, existing: &str) -> Self {
        self.answers.insert(
            raw.trim().to_lowercase(),
            NormalizedName {
                normalized_name: existing.to_string(),
                is_match: true,
                matched_key: ProductKey::new(existing).ok(),
                confidence: 0.95,
            },
        );
        self
    }
}

impl IProductNormalizer for ScriptedNormalizer {
    fn normalize(&self, raw_name: &str, _existing: &[ProductKey]) -> LarderResult<NormalizedName> {
        Ok(self
            .answers
            .get(&raw_name.trim().to_lowercase())
            .cloned()
            .unwrap_or_else(|| NormalizedName {
                normalized_name: raw_name.trim().to_string(),
                is_match: false,
                matched_key: None,
                confidence: 0.5,
            }))
    }
}

/// Always fails with `NormalizationFailed`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingNormalizer;

impl IProductNormalizer for FailingNormalizer {
    fn normalize(&self, raw_name: &str, _existing: &[ProductKey]) -> LarderResult<NormalizedName> {
        Err(LarderError::NormalizationFailed {
            raw_name: raw_name.to_string(),
            reason: "service unreachable".to_string(),
        })
    }
}

// ── Receipts ──────────────────────────────────────────────────────────────

/// Returns fixed items for any image, or a `ParseFailure`.
#[derive(Debug, Clone)]
pub struct ScriptedReceiptParser {
    items: Option<Vec<NewPantryItem>>,
}

impl ScriptedReceiptParser {
    pub fn returning(items: Vec<NewPantryItem>) -> Self {
        Self { items: Some(items) }
    }

    pub fn failing() -> Self {
        Self { items: None }
    }
}

impl IReceiptParser for ScriptedReceiptParser {
    fn parse_receipt(&self, image: &[u8]) -> LarderResult<Vec<NewPantryItem>> {
        match &self.items {
            Some(items) if !image.is_empty() => Ok(items.clone()),
            Some(_) => Err(LarderError::ParseFailure {
                reason: "empty image".to_string(),
            }),
            None => Err(LarderError::ParseFailure {
                reason: "no line items recognized".to_string(),
            }),
        }
    }
}
