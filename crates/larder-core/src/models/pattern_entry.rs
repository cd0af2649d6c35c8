use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ProductKey;

/// Derived statistical summary of one product's purchase and consumption history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub product_key: ProductKey,
    /// Units per day, never below the configured floor.
    pub average_consumption_rate: f64,
    /// Mean interval between purchases, in days.
    pub purchase_frequency_days: f64,
    pub last_purchase_date: Option<NaiveDate>,
    pub last_consumed_date: Option<NaiveDate>,
    /// Sum of purchased quantities.
    pub total_purchased: f64,
    /// Sum of consumed quantities.
    pub total_consumed: f64,
    pub purchase_count: usize,
    pub consumption_count: usize,
    /// Recent-vs-historical rate multiplier, within the configured bounds.
    pub seasonality_factor: f64,
    /// Grows with data volume, in [0, 1].
    pub confidence: f64,
    /// Configured placeholder, in [0, 1].
    pub prediction_accuracy: f64,
    /// Date of the recompute that produced this entry.
    pub updated_at: NaiveDate,
}

impl PatternEntry {
    /// Consumption rate adjusted by seasonality.
    pub fn effective_rate(&self) -> f64 {
        self.average_consumption_rate * self.seasonality_factor
    }

    /// Combined purchase and consumption event count.
    pub fn data_points(&self) -> usize {
        self.purchase_count + self.consumption_count
    }

    /// True while the entry carries cold-start defaults.
    pub fn is_cold_start(&self) -> bool {
        self.confidence <= 0.0
    }
}
