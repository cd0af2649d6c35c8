//! Session context: owns the event store and pattern model and sequences
//! append, recompute and ranking.
//!
//! Single-threaded. Every mutation goes through `&mut self`, so a ranking
//! call always observes the entry recomputed by the preceding append.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Duration;

use larder_core::config::LarderConfig;
use larder_core::constants::{COMPONENT_PANTRY, COMPONENT_PATTERN_STORE};
use larder_core::errors::LarderResult;
use larder_core::models::{
    ConsumptionEvent, DegradationEvent, DepletionForecast, PantryProduct, PatternAnalytics,
    PatternEntry, ProductKey, ProductOutlook, PurchaseEvent,
};
use larder_core::traits::{Clock, IEventStorage, IPantrySource, IPatternStorage, SystemClock};
use larder_observability::DegradationTracker;

use crate::analytics;
use crate::event_store::EventStore;
use crate::outcome::SuggestionOutcome;
use crate::ranker::{PatternSource, SuggestionRanker};
use crate::updater::{PatternModel, PatternUpdater};

pub struct PantrySession {
    config: LarderConfig,
    clock: Arc<dyn Clock>,
    store: EventStore,
    model: PatternModel,
    updater: PatternUpdater,
    ranker: SuggestionRanker,
    pattern_store: Option<Arc<dyn IPatternStorage>>,
    degradations: DegradationTracker,
}

impl PantrySession {
    /// A session over `events`, using the wall clock. Call [`hydrate`](Self::hydrate)
    /// to load earlier history.
    pub fn new(config: LarderConfig, events: Arc<dyn IEventStorage>) -> Self {
        Self {
            updater: PatternUpdater::new(config.patterns.clone()),
            ranker: SuggestionRanker::from_config(&config),
            config,
            clock: Arc::new(SystemClock),
            store: EventStore::new(events),
            model: PatternModel::new(),
            pattern_store: None,
            degradations: DegradationTracker::new(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Copy every accepted event to a secondary backend. Its failures are never surfaced.
    pub fn with_replica(mut self, replica: Arc<dyn IEventStorage>) -> Self {
        self.store = self.store.with_replica(replica);
        self
    }

    /// Persist recomputed entries to `store` and read ranking patterns from it.
    pub fn with_pattern_store(mut self, store: Arc<dyn IPatternStorage>) -> Self {
        self.pattern_store = Some(store);
        self
    }

    pub fn config(&self) -> &LarderConfig {
        &self.config
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn model(&self) -> &PatternModel {
        &self.model
    }

    pub fn pattern(&self, key: &ProductKey) -> Option<&PatternEntry> {
        self.model.get(key)
    }

    pub fn degradations(&self) -> &DegradationTracker {
        &self.degradations
    }

    pub(crate) fn degradations_mut(&mut self) -> &mut DegradationTracker {
        &mut self.degradations
    }

    // --- Lifecycle ---

    /// Load persisted history and rebuild every pattern. A failing backend is
    /// logged and the session starts empty. Returns the number of events loaded.
    pub fn hydrate(&mut self) -> usize {
        let loaded = self.store.hydrate(&mut self.degradations);
        self.rebuild_all();
        loaded
    }

    /// Recompute every product's entry from its full history.
    pub fn rebuild_all(&mut self) -> usize {
        self.model.clear();
        let keys = self.store.product_keys();
        for key in &keys {
            self.recompute(key);
        }
        keys.len()
    }

    // --- Events ---

    pub fn record_purchase(&mut self, event: PurchaseEvent) -> LarderResult<()> {
        let key = event.product_key.clone();
        self.store.append_purchase(event, &mut self.degradations)?;
        self.recompute(&key);
        Ok(())
    }

    pub fn record_consumption(&mut self, event: ConsumptionEvent) -> LarderResult<()> {
        let key = event.product_key.clone();
        self.store.append_consumption(event, &mut self.degradations)?;
        self.recompute(&key);
        Ok(())
    }

    fn recompute(&mut self, key: &ProductKey) {
        let Some(events) = self.store.get(key) else {
            self.model.remove(key);
            self.forget_pattern(key);
            return;
        };
        let entry = self
            .updater
            .recompute(key, events, self.model.get(key), self.clock.today());
        self.save_pattern(&entry);
        self.model.upsert(entry);
    }

    fn save_pattern(&mut self, entry: &PatternEntry) {
        let Some(store) = &self.pattern_store else {
            return;
        };
        match store.save_pattern(entry) {
            Ok(()) => {
                self.degradations.mark_recovered(COMPONENT_PATTERN_STORE);
            }
            Err(e) => {
                tracing::warn!(product = %entry.product_key, error = %e, "pattern save failed");
                self.degradations.record(DegradationEvent::new(
                    COMPONENT_PATTERN_STORE,
                    e.to_string(),
                    "in-memory pattern",
                ));
            }
        }
    }

    fn forget_pattern(&mut self, key: &ProductKey) {
        let Some(store) = &self.pattern_store else {
            return;
        };
        if let Err(e) = store.remove_pattern(key) {
            tracing::warn!(product = %key, error = %e, "pattern removal failed");
            self.degradations.record(DegradationEvent::new(
                COMPONENT_PATTERN_STORE,
                e.to_string(),
                "stale pattern row",
            ));
        }
    }

    // --- Prediction ---

    pub fn predict(&self, key: &ProductKey, current_quantity: f64) -> DepletionForecast {
        self.ranker
            .predictor()
            .predict(self.model.get(key), current_quantity)
    }

    pub fn optimal_quantity(&self, key: &ProductKey) -> u32 {
        self.ranker.predictor().optimal_quantity(self.model.get(key))
    }

    // --- Suggestions ---

    /// Rank suggestions for `pantry` plus `manual` entries. Never fails; an
    /// unreadable pattern store yields a degraded outcome.
    pub fn generate(&mut self, pantry: &[PantryProduct], manual: &[String]) -> SuggestionOutcome {
        let today = self.clock.today();
        let Some(store) = self.pattern_store.clone() else {
            let entries = self.model.to_vec();
            return self
                .ranker
                .rank(pantry, manual, PatternSource::Available(&entries), today);
        };

        match store.load_patterns() {
            Ok(loaded) => {
                self.degradations.mark_recovered(COMPONENT_PATTERN_STORE);
                let entries = self.overlay_model(loaded);
                self.ranker
                    .rank(pantry, manual, PatternSource::Available(&entries), today)
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::warn!(
                    error = %reason,
                    "pattern source unavailable, ranking pantry signals only"
                );
                self.degradations.record(DegradationEvent::new(
                    COMPONENT_PATTERN_STORE,
                    reason.clone(),
                    "pantry and manual signals only",
                ));
                self.ranker
                    .rank(pantry, manual, PatternSource::Unavailable(&reason), today)
            }
        }
    }

    /// Stored entries with this session's recomputed entries taking precedence.
    /// A save that failed earlier leaves the store stale for that key.
    fn overlay_model(&self, loaded: Vec<PatternEntry>) -> Vec<PatternEntry> {
        let mut merged: BTreeMap<ProductKey, PatternEntry> = loaded
            .into_iter()
            .map(|e| (e.product_key.clone(), e))
            .collect();
        for entry in self.model.entries() {
            merged.insert(entry.product_key.clone(), entry.clone());
        }
        merged.into_values().collect()
    }

    /// Like [`generate`](Self::generate), reading the pantry from `source`.
    /// An unreadable snapshot ranks with an empty pantry and degrades the outcome.
    pub fn generate_from(
        &mut self,
        source: &dyn IPantrySource,
        manual: &[String],
    ) -> SuggestionOutcome {
        match source.current_snapshot() {
            Ok(snapshot) => self.generate(&snapshot, manual),
            Err(e) => {
                let reason = e.to_string();
                tracing::warn!(error = %reason, "pantry snapshot unavailable");
                self.degradations.record(DegradationEvent::new(
                    COMPONENT_PANTRY,
                    reason.clone(),
                    "empty pantry",
                ));
                match self.generate(&[], manual) {
                    degraded @ SuggestionOutcome::Degraded { .. } => degraded,
                    outcome => SuggestionOutcome::Degraded {
                        suggestions: outcome.into_suggestions(),
                        reason,
                    },
                }
            }
        }
    }

    // --- Analytics ---

    pub fn analytics(&self) -> PatternAnalytics {
        analytics::summarize(&self.model, self.store.total_records())
    }

    pub fn analyze_product(&self, key: &ProductKey) -> ProductOutlook {
        analytics::outlook(
            self.model.get(key),
            self.clock.today(),
            &self.config.suggestions,
        )
    }

    // --- Retention ---

    /// Drop history older than `max_age_days` and rebuild affected patterns.
    /// Returns the number of products whose history changed.
    pub fn prune_older_than(&mut self, max_age_days: u32) -> usize {
        let cutoff = self.clock.today() - Duration::days(i64::from(max_age_days));
        let changed = self.store.prune_before(cutoff, &mut self.degradations);
        for key in &changed {
            self.recompute(key);
        }
        changed.len()
    }

    /// [`prune_older_than`](Self::prune_older_than) with the configured retention.
    pub fn apply_retention(&mut self) -> usize {
        self.prune_older_than(self.config.retention.max_age_days)
    }
}
