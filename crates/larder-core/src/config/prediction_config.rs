use serde::{Deserialize, Serialize};

use super::defaults;

/// Depletion predictor thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Days-until-empty at or below which urgency is High.
    pub high_urgency_days: i64,
    /// Days-until-empty at or below which urgency is Medium.
    pub medium_urgency_days: i64,
    /// Days a restock should last when sizing a purchase.
    pub restock_horizon_days: u32,
    /// Quantity suggested when a product has no pattern.
    pub fallback_quantity: u32,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            high_urgency_days: defaults::DEFAULT_HIGH_URGENCY_DAYS,
            medium_urgency_days: defaults::DEFAULT_MEDIUM_URGENCY_DAYS,
            restock_horizon_days: defaults::DEFAULT_RESTOCK_HORIZON_DAYS,
            fallback_quantity: defaults::DEFAULT_FALLBACK_QUANTITY,
        }
    }
}
