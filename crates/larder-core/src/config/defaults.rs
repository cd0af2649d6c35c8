//! Compiled defaults for every configuration value.

// Storage
pub const DEFAULT_DB_PATH: &str = "larder.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

// Pattern model
pub const DEFAULT_MIN_DATA_POINTS: usize = 2;
pub const DEFAULT_CONSUMPTION_RATE: f64 = 0.5;
pub const DEFAULT_MIN_CONSUMPTION_RATE: f64 = 0.1;
pub const DEFAULT_PURCHASE_FREQUENCY_DAYS: f64 = 7.0;
pub const DEFAULT_SEASONALITY_WINDOW_DAYS: u32 = 30;
pub const DEFAULT_SEASONALITY_MIN: f64 = 0.5;
pub const DEFAULT_SEASONALITY_MAX: f64 = 2.0;
pub const DEFAULT_CONFIDENCE_SATURATION_EVENTS: usize = 10;
pub const DEFAULT_PREDICTION_ACCURACY: f64 = 0.7;
pub const DEFAULT_COLD_START_ACCURACY: f64 = 0.5;

// Depletion prediction
pub const DEFAULT_HIGH_URGENCY_DAYS: i64 = 3;
pub const DEFAULT_MEDIUM_URGENCY_DAYS: i64 = 7;
pub const DEFAULT_RESTOCK_HORIZON_DAYS: u32 = 14;
pub const DEFAULT_FALLBACK_QUANTITY: u32 = 3;

// Suggestions
pub const DEFAULT_LOW_STOCK_THRESHOLD: f64 = 2.0;
pub const DEFAULT_LOW_STOCK_TOP_UP: u32 = 5;
pub const DEFAULT_LOW_STOCK_ESTIMATED_DAYS: i64 = 7;
pub const DEFAULT_EXPIRED_REPLACEMENT: u32 = 3;
pub const DEFAULT_EXPIRED_ESTIMATED_DAYS: i64 = 1;
pub const DEFAULT_MANUAL_QUANTITY: u32 = 1;
pub const DEFAULT_BUY_WINDOW_DAYS: f64 = 2.0;
pub const DEFAULT_HIGH_BUY_WINDOW_DAYS: f64 = 1.0;
pub const DEFAULT_PATTERN_MIN_CONFIDENCE: f64 = 0.3;
pub const DEFAULT_DEPLETION_MEDIUM_MIN_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_MAX_SUGGESTED_QUANTITY: u32 = 10;

// Retention
pub const DEFAULT_RETENTION_MAX_AGE_DAYS: u32 = 180;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
