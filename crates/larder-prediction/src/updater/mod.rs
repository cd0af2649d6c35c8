//! Pattern updater: recomputes one product's [`PatternEntry`] from its events.
//!
//! ```text
//! events < minDataPoints  → cold start (default rate, confidence 0)
//! frequency    = mean inter-purchase interval (keeps previous below 2 purchases)
//! rate         = max(floor, consumed / first-to-last consumption span)
//! seasonality  = clamp(windowed rate / rate, min, max)
//! confidence   = min(1, events / saturation)
//! ```

pub mod factors;
pub mod model;

pub use model::PatternModel;

use chrono::NaiveDate;

use larder_core::config::PatternConfig;
use larder_core::models::{PatternEntry, ProductEvents, ProductKey};

/// Stateless recompute over a product's full history.
#[derive(Debug, Clone, Default)]
pub struct PatternUpdater {
    config: PatternConfig,
}

impl PatternUpdater {
    pub fn new(config: PatternConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Recompute the entry for `key`. `events` must be sorted chronologically.
    pub fn recompute(
        &self,
        key: &ProductKey,
        events: &ProductEvents,
        previous: Option<&PatternEntry>,
        today: NaiveDate,
    ) -> PatternEntry {
        let _span = larder_observability::recompute_span!(key).entered();
        let cfg = &self.config;

        let previous_frequency = previous
            .map(|p| p.purchase_frequency_days)
            .unwrap_or(cfg.default_purchase_frequency_days);

        let mut entry = PatternEntry {
            product_key: key.clone(),
            average_consumption_rate: cfg.default_consumption_rate,
            purchase_frequency_days: previous_frequency,
            last_purchase_date: events.purchases.iter().map(|e| e.date).max(),
            last_consumed_date: events.consumptions.iter().map(|e| e.date).max(),
            total_purchased: events.purchases.iter().map(|e| e.quantity).sum(),
            total_consumed: events.consumptions.iter().map(|e| e.quantity_consumed).sum(),
            purchase_count: events.purchases.len(),
            consumption_count: events.consumptions.len(),
            seasonality_factor: 1.0,
            confidence: 0.0,
            prediction_accuracy: cfg.cold_start_accuracy,
            updated_at: today,
        };

        if events.len() < cfg.min_data_points {
            return entry;
        }

        entry.purchase_frequency_days =
            factors::frequency::mean_interval_days(&events.purchases).unwrap_or(previous_frequency);
        entry.average_consumption_rate = factors::rate::calculate(&events.consumptions, cfg);
        entry.seasonality_factor = factors::seasonality::calculate(
            &events.consumptions,
            entry.average_consumption_rate,
            today,
            cfg,
        );
        entry.confidence = factors::confidence::calculate(events.len(), cfg);
        entry.prediction_accuracy = cfg.prediction_accuracy;

        larder_observability::tracing_setup::events::pattern_recomputed(
            key.as_str(),
            entry.average_consumption_rate,
            entry.purchase_frequency_days,
            entry.confidence,
        );
        entry
    }
}
