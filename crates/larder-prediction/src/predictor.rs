//! Depletion predictor: days until empty and urgency from on-hand quantity.
//!
//! Pure and deterministic; reads only the entry it is handed.

use larder_core::config::{LarderConfig, PatternConfig, PredictionConfig};
use larder_core::models::{DepletionForecast, PatternEntry, Priority};

#[derive(Debug, Clone)]
pub struct DepletionPredictor {
    thresholds: PredictionConfig,
    default_rate: f64,
    min_rate: f64,
    max_quantity: u32,
}

impl Default for DepletionPredictor {
    fn default() -> Self {
        Self::from_config(&LarderConfig::default())
    }
}

impl DepletionPredictor {
    pub fn new(prediction: PredictionConfig, patterns: &PatternConfig, max_quantity: u32) -> Self {
        Self {
            thresholds: prediction,
            default_rate: patterns.default_consumption_rate,
            min_rate: patterns.min_consumption_rate,
            max_quantity: max_quantity.max(1),
        }
    }

    pub fn from_config(config: &LarderConfig) -> Self {
        Self::new(
            config.prediction.clone(),
            &config.patterns,
            config.suggestions.max_suggested_quantity,
        )
    }

    /// Forecast for `current_quantity` units on hand. Negative or non-finite
    /// quantities count as empty.
    pub fn predict(
        &self,
        entry: Option<&PatternEntry>,
        current_quantity: f64,
    ) -> DepletionForecast {
        let quantity = if current_quantity.is_finite() {
            current_quantity.max(0.0)
        } else {
            0.0
        };
        let rate = self.effective_rate(entry);
        let days_until_empty = (quantity / rate).round() as i64;

        DepletionForecast {
            days_until_empty,
            urgency: self.urgency_for(days_until_empty),
            confidence: entry.map(|e| e.confidence).unwrap_or(0.0),
        }
    }

    /// Urgency tier for a days-until-empty estimate.
    pub fn urgency_for(&self, days_until_empty: i64) -> Priority {
        if days_until_empty <= self.thresholds.high_urgency_days {
            Priority::High
        } else if days_until_empty <= self.thresholds.medium_urgency_days {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Units to buy so the restock lasts the configured horizon.
    pub fn optimal_quantity(&self, entry: Option<&PatternEntry>) -> u32 {
        let Some(entry) = entry else {
            return self.thresholds.fallback_quantity;
        };
        let needed = entry.effective_rate() * f64::from(self.thresholds.restock_horizon_days);
        clamp_quantity(needed, self.max_quantity)
    }

    fn effective_rate(&self, entry: Option<&PatternEntry>) -> f64 {
        let rate = entry.map(|e| e.effective_rate()).unwrap_or(self.default_rate);
        if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            self.default_rate.max(self.min_rate)
        }
    }
}

/// `ceil(raw)` clamped to `[1, max]`; non-finite input yields 1.
pub(crate) fn clamp_quantity(raw: f64, max: u32) -> u32 {
    if !raw.is_finite() {
        return 1;
    }
    (raw.ceil().max(1.0) as u32).clamp(1, max.max(1))
}
