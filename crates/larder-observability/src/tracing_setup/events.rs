//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log an appended purchase or consumption.
pub fn event_appended(product: &str, kind: &str, quantity: f64) {
    tracing::debug!(
        event = "event_appended",
        product = %product,
        kind = %kind,
        quantity = quantity,
        "event appended"
    );
}

/// Log a pattern recompute result.
pub fn pattern_recomputed(product: &str, rate: f64, frequency_days: f64, confidence: f64) {
    tracing::debug!(
        event = "pattern_recomputed",
        product = %product,
        rate = rate,
        frequency_days = frequency_days,
        confidence = confidence,
        "pattern recomputed"
    );
}

/// Log a completed suggestion run.
pub fn suggestions_generated(count: usize, degraded: bool) {
    tracing::info!(
        event = "suggestions_generated",
        count = count,
        degraded = degraded,
        "suggestions generated"
    );
}

/// Log events removed by retention.
pub fn events_pruned(removed: usize, cutoff: &str) {
    tracing::info!(
        event = "events_pruned",
        removed = removed,
        cutoff = %cutoff,
        "events pruned"
    );
}

/// Log a session hydration.
pub fn session_hydrated(products: usize, events: usize) {
    tracing::info!(
        event = "session_hydrated",
        products = products,
        events = events,
        "session hydrated"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a component returning to normal operation.
pub fn degradation_recovered(component: &str) {
    tracing::info!(
        event = "degradation_recovered",
        component = %component,
        "degradation recovered"
    );
}
