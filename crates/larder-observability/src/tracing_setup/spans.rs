//! Span definitions per engine operation: append, recompute, suggestion, intake, prune.

/// Create an event-append span.
#[macro_export]
macro_rules! append_span {
    ($product:expr, $kind:expr) => {
        tracing::info_span!("larder.append", product = %$product, kind = %$kind)
    };
}

/// Create a pattern-recompute span.
#[macro_export]
macro_rules! recompute_span {
    ($product:expr) => {
        tracing::debug_span!("larder.recompute", product = %$product)
    };
}

/// Create a suggestion-generation span.
#[macro_export]
macro_rules! suggestion_span {
    ($pantry_size:expr, $manual_count:expr) => {
        tracing::info_span!(
            "larder.suggestions",
            pantry_size = $pantry_size,
            manual_count = $manual_count
        )
    };
}

/// Create an intake span.
#[macro_export]
macro_rules! intake_span {
    ($item_count:expr) => {
        tracing::info_span!("larder.intake", item_count = $item_count)
    };
}

/// Create a retention-prune span.
#[macro_export]
macro_rules! prune_span {
    ($cutoff:expr) => {
        tracing::info_span!("larder.prune", cutoff = %$cutoff)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const APPEND: &str = "larder.append";
    pub const RECOMPUTE: &str = "larder.recompute";
    pub const SUGGESTIONS: &str = "larder.suggestions";
    pub const INTAKE: &str = "larder.intake";
    pub const PRUNE: &str = "larder.prune";
}
