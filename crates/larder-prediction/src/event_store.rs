//! Event store: append-only purchases and consumptions per product.
//!
//! Each append validates, persists to the primary backend, copies to the
//! replica (if any), then becomes visible in memory. In-memory lists stay
//! sorted by date with same-day events in insertion order.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;

use larder_core::constants::{COMPONENT_EVENT_STORE, COMPONENT_REPLICA};
use larder_core::errors::LarderResult;
use larder_core::models::{
    ConsumptionEvent, DegradationEvent, EventKind, ProductEvents, ProductKey, PurchaseEvent,
};
use larder_core::traits::IEventStorage;
use larder_observability::tracing_setup::events;
use larder_observability::DegradationTracker;

const MEMORY_ONLY: &str = "event kept in memory only";

pub struct EventStore {
    primary: Arc<dyn IEventStorage>,
    replica: Option<Arc<dyn IEventStorage>>,
    events: BTreeMap<ProductKey, ProductEvents>,
    appended: usize,
}

impl EventStore {
    pub fn new(primary: Arc<dyn IEventStorage>) -> Self {
        Self {
            primary,
            replica: None,
            events: BTreeMap::new(),
            appended: 0,
        }
    }

    pub fn with_replica(mut self, replica: Arc<dyn IEventStorage>) -> Self {
        self.replica = Some(replica);
        self
    }

    /// Load every persisted event from the primary backend, replacing the
    /// in-memory state. A failing backend leaves the store empty.
    /// Returns the number of events loaded.
    pub fn hydrate(&mut self, tracker: &mut DegradationTracker) -> usize {
        match self.primary.query_all() {
            Ok(mut loaded) => {
                for product_events in loaded.values_mut() {
                    product_events.sort_chronologically();
                }
                loaded.retain(|_, e| !e.is_empty());
                self.events = loaded;
                let count = self.total_records();
                events::session_hydrated(self.events.len(), count);
                count
            }
            Err(e) => {
                tracing::warn!(error = %e, "event backend unreadable, starting empty");
                tracker.record(DegradationEvent::new(
                    COMPONENT_EVENT_STORE,
                    e.to_string(),
                    "empty session",
                ));
                0
            }
        }
    }

    pub fn append_purchase(
        &mut self,
        event: PurchaseEvent,
        tracker: &mut DegradationTracker,
    ) -> LarderResult<()> {
        event.validate()?;
        let _span =
            larder_observability::append_span!(event.product_key, EventKind::Purchase.as_str())
                .entered();
        self.persist(tracker, |backend| backend.append_purchase(&event))?;

        events::event_appended(
            event.product_key.as_str(),
            EventKind::Purchase.as_str(),
            event.quantity,
        );
        let list = &mut self.events.entry(event.product_key.clone()).or_default().purchases;
        let at = list.partition_point(|e| e.date <= event.date);
        list.insert(at, event);
        self.appended += 1;
        Ok(())
    }

    pub fn append_consumption(
        &mut self,
        event: ConsumptionEvent,
        tracker: &mut DegradationTracker,
    ) -> LarderResult<()> {
        event.validate()?;
        let _span =
            larder_observability::append_span!(event.product_key, EventKind::Consumption.as_str())
                .entered();
        self.persist(tracker, |backend| backend.append_consumption(&event))?;

        events::event_appended(
            event.product_key.as_str(),
            EventKind::Consumption.as_str(),
            event.quantity_consumed,
        );
        let list = &mut self
            .events
            .entry(event.product_key.clone())
            .or_default()
            .consumptions;
        let at = list.partition_point(|e| e.date <= event.date);
        list.insert(at, event);
        self.appended += 1;
        Ok(())
    }

    /// Write to the primary, then the replica.
    ///
    /// A primary failure is surfaced only while the session holds no data at
    /// all; otherwise the event is kept in memory and the failure recorded.
    fn persist<F>(&self, tracker: &mut DegradationTracker, write: F) -> LarderResult<()>
    where
        F: Fn(&dyn IEventStorage) -> LarderResult<()>,
    {
        match write(self.primary.as_ref()) {
            Ok(()) => {
                tracker.mark_recovered(COMPONENT_EVENT_STORE);
            }
            Err(e) if self.has_no_fallback() => {
                tracing::warn!(error = %e, "first append failed with no in-memory data");
                return Err(e);
            }
            Err(e) => {
                tracing::warn!(error = %e, "event backend append failed");
                tracker.record(DegradationEvent::new(
                    COMPONENT_EVENT_STORE,
                    e.to_string(),
                    MEMORY_ONLY,
                ));
                return Ok(());
            }
        }

        if let Some(replica) = &self.replica {
            match write(replica.as_ref()) {
                Ok(()) => {
                    tracker.mark_recovered(COMPONENT_REPLICA);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "replica append failed");
                    tracker.record(DegradationEvent::new(
                        COMPONENT_REPLICA,
                        e.to_string(),
                        "primary copy only",
                    ));
                }
            }
        }
        Ok(())
    }

    fn has_no_fallback(&self) -> bool {
        self.appended == 0 && self.events.is_empty()
    }

    /// Events for one product, sorted by date ascending.
    pub fn events_for(&self, key: &ProductKey) -> ProductEvents {
        self.events.get(key).cloned().unwrap_or_default()
    }

    pub fn get(&self, key: &ProductKey) -> Option<&ProductEvents> {
        self.events.get(key)
    }

    pub fn product_keys(&self) -> Vec<ProductKey> {
        self.events.keys().cloned().collect()
    }

    pub fn total_records(&self) -> usize {
        self.events.values().map(ProductEvents::len).sum()
    }

    /// Appends accepted during this session.
    pub fn appended_this_session(&self) -> usize {
        self.appended
    }

    /// Remove events dated before `cutoff` from the backend and from memory.
    /// Returns the keys whose history changed.
    pub fn prune_before(
        &mut self,
        cutoff: NaiveDate,
        tracker: &mut DegradationTracker,
    ) -> Vec<ProductKey> {
        let _span = larder_observability::prune_span!(cutoff).entered();
        match self.primary.prune_before(cutoff) {
            Ok(removed) => tracing::debug!(removed, "backend pruned"),
            Err(e) => {
                tracing::warn!(error = %e, "backend prune failed");
                tracker.record(DegradationEvent::new(
                    COMPONENT_EVENT_STORE,
                    e.to_string(),
                    "pruned in memory only",
                ));
            }
        }

        let mut changed = Vec::new();
        let mut removed = 0;
        for (key, product_events) in self.events.iter_mut() {
            let dropped = product_events.retain_since(cutoff);
            if dropped > 0 {
                removed += dropped;
                changed.push(key.clone());
            }
        }
        self.events.retain(|_, e| !e.is_empty());
        events::events_pruned(removed, &cutoff.to_string());
        changed
    }
}
