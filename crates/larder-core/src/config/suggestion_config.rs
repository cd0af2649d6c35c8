use serde::{Deserialize, Serialize};

use super::defaults;

/// Suggestion ranker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// On-hand quantity at or below which a product is low on stock.
    pub low_stock_threshold: f64,
    pub low_stock_top_up: u32,
    pub low_stock_estimated_days: i64,
    pub expired_replacement: u32,
    pub expired_estimated_days: i64,
    pub manual_quantity: u32,
    /// A pattern suggestion is emitted when the next purchase is due within this many days.
    pub buy_window_days: f64,
    /// Pattern suggestions due within this many days are High priority.
    pub high_buy_window_days: f64,
    /// Pattern confidence must exceed this for a frequency-based suggestion.
    pub pattern_min_confidence: f64,
    /// Confidence a Medium depletion forecast needs before it is suggested.
    pub depletion_medium_min_confidence: f64,
    pub max_suggested_quantity: u32,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: defaults::DEFAULT_LOW_STOCK_THRESHOLD,
            low_stock_top_up: defaults::DEFAULT_LOW_STOCK_TOP_UP,
            low_stock_estimated_days: defaults::DEFAULT_LOW_STOCK_ESTIMATED_DAYS,
            expired_replacement: defaults::DEFAULT_EXPIRED_REPLACEMENT,
            expired_estimated_days: defaults::DEFAULT_EXPIRED_ESTIMATED_DAYS,
            manual_quantity: defaults::DEFAULT_MANUAL_QUANTITY,
            buy_window_days: defaults::DEFAULT_BUY_WINDOW_DAYS,
            high_buy_window_days: defaults::DEFAULT_HIGH_BUY_WINDOW_DAYS,
            pattern_min_confidence: defaults::DEFAULT_PATTERN_MIN_CONFIDENCE,
            depletion_medium_min_confidence: defaults::DEFAULT_DEPLETION_MEDIUM_MIN_CONFIDENCE,
            max_suggested_quantity: defaults::DEFAULT_MAX_SUGGESTED_QUANTITY,
        }
    }
}
