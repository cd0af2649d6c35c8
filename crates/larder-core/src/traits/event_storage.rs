use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::errors::LarderResult;
use crate::models::{ConsumptionEvent, ProductEvents, ProductKey, PurchaseEvent};

/// Durable event persistence.
///
/// Appends are atomic per call. Reads return every appended event for a key
/// in insertion order.
pub trait IEventStorage: Send + Sync {
    // --- Append ---
    fn append_purchase(&self, event: &PurchaseEvent) -> LarderResult<()>;
    fn append_consumption(&self, event: &ConsumptionEvent) -> LarderResult<()>;

    // --- Query ---
    fn query(&self, key: &ProductKey) -> LarderResult<ProductEvents>;
    fn query_all(&self) -> LarderResult<BTreeMap<ProductKey, ProductEvents>>;

    // --- Retention ---
    /// Remove events dated before `cutoff`. Returns the number removed.
    fn prune_before(&self, cutoff: NaiveDate) -> LarderResult<usize>;
}
