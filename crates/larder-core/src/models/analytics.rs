use serde::{Deserialize, Serialize};

use super::{Priority, ProductKey};

/// Summary statistics over the whole pattern model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalytics {
    pub total_records: usize,
    pub total_products: usize,
    pub average_accuracy: f64,
    /// Up to five products with the highest total consumption.
    pub top_consumers: Vec<ProductKey>,
}

/// When the next purchase of a product is due.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecommendation {
    /// Days until the next purchase, never negative.
    pub should_buy_in: f64,
    pub urgency: Priority,
    pub confidence: f64,
}

/// Per-product pattern analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOutlook {
    pub average_days_between_purchases: f64,
    pub consumption_rate: f64,
    pub confidence: f64,
    pub next_purchase: PurchaseRecommendation,
}
