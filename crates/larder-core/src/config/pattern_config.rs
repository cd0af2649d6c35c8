use serde::{Deserialize, Serialize};

use super::defaults;

/// Pattern model configuration: cold-start policy and statistic bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Fewer combined events than this and the entry uses cold-start values.
    pub min_data_points: usize,
    /// Units per day assumed when no rate can be computed.
    pub default_consumption_rate: f64,
    /// Floor applied to every computed rate.
    pub min_consumption_rate: f64,
    /// Purchase interval assumed before two purchases exist.
    pub default_purchase_frequency_days: f64,
    /// Trailing window (days) compared against the all-time rate.
    pub seasonality_window_days: u32,
    pub seasonality_min: f64,
    pub seasonality_max: f64,
    /// Combined event count at which confidence reaches 1.0.
    pub confidence_saturation_events: usize,
    /// Accuracy reported for computed entries. Not derived from outcomes.
    pub prediction_accuracy: f64,
    /// Accuracy reported for cold-start entries.
    pub cold_start_accuracy: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            min_data_points: defaults::DEFAULT_MIN_DATA_POINTS,
            default_consumption_rate: defaults::DEFAULT_CONSUMPTION_RATE,
            min_consumption_rate: defaults::DEFAULT_MIN_CONSUMPTION_RATE,
            default_purchase_frequency_days: defaults::DEFAULT_PURCHASE_FREQUENCY_DAYS,
            seasonality_window_days: defaults::DEFAULT_SEASONALITY_WINDOW_DAYS,
            seasonality_min: defaults::DEFAULT_SEASONALITY_MIN,
            seasonality_max: defaults::DEFAULT_SEASONALITY_MAX,
            confidence_saturation_events: defaults::DEFAULT_CONFIDENCE_SATURATION_EVENTS,
            prediction_accuracy: defaults::DEFAULT_PREDICTION_ACCURACY,
            cold_start_accuracy: defaults::DEFAULT_COLD_START_ACCURACY,
        }
    }
}
