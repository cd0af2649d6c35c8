/// Larder version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of products reported in `PatternAnalytics::top_consumers`.
pub const TOP_CONSUMERS_LIMIT: usize = 5;

/// Confidence assigned to a name the basic normalizer produced.
pub const BASIC_NORMALIZATION_CONFIDENCE: f64 = 0.3;

/// Defaults reported by `analyze_product` when a product has no pattern.
pub const OUTLOOK_DEFAULT_FREQUENCY_DAYS: f64 = 7.0;
pub const OUTLOOK_DEFAULT_RATE: f64 = 0.5;

// Degradation component names.
pub const COMPONENT_EVENT_STORE: &str = "event_store";
pub const COMPONENT_REPLICA: &str = "event_replica";
pub const COMPONENT_PATTERN_STORE: &str = "pattern_store";
pub const COMPONENT_NORMALIZER: &str = "normalizer";
pub const COMPONENT_PANTRY: &str = "pantry_snapshot";
