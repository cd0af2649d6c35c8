//! Model-wide analytics and per-product purchase outlook.

use chrono::NaiveDate;

use larder_core::config::SuggestionConfig;
use larder_core::constants::{
    OUTLOOK_DEFAULT_FREQUENCY_DAYS, OUTLOOK_DEFAULT_RATE, TOP_CONSUMERS_LIMIT,
};
use larder_core::models::{
    PatternAnalytics, PatternEntry, Priority, ProductOutlook, PurchaseRecommendation,
};

use crate::updater::PatternModel;

/// Summary over every pattern entry. `total_records` is the event count.
pub fn summarize(model: &PatternModel, total_records: usize) -> PatternAnalytics {
    let average_accuracy = if model.is_empty() {
        0.0
    } else {
        model.entries().map(|e| e.prediction_accuracy).sum::<f64>() / model.len() as f64
    };

    let mut by_consumption: Vec<&PatternEntry> = model.entries().collect();
    by_consumption.sort_by(|a, b| {
        b.total_consumed
            .partial_cmp(&a.total_consumed)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.product_key.cmp(&b.product_key))
    });

    PatternAnalytics {
        total_records,
        total_products: model.len(),
        average_accuracy,
        top_consumers: by_consumption
            .into_iter()
            .take(TOP_CONSUMERS_LIMIT)
            .map(|e| e.product_key.clone())
            .collect(),
    }
}

/// Outlook for one product; defaults when it has no pattern.
pub fn outlook(
    entry: Option<&PatternEntry>,
    today: NaiveDate,
    config: &SuggestionConfig,
) -> ProductOutlook {
    let Some(entry) = entry else {
        return ProductOutlook {
            average_days_between_purchases: OUTLOOK_DEFAULT_FREQUENCY_DAYS,
            consumption_rate: OUTLOOK_DEFAULT_RATE,
            confidence: 0.0,
            next_purchase: PurchaseRecommendation {
                should_buy_in: OUTLOOK_DEFAULT_FREQUENCY_DAYS,
                urgency: Priority::Medium,
                confidence: 0.0,
            },
        };
    };

    let days_since = entry
        .last_purchase_date
        .map(|d| (today - d).num_days() as f64)
        .unwrap_or(0.0);
    let should_buy_in = (entry.purchase_frequency_days - days_since).max(0.0);
    let urgency = if should_buy_in <= config.high_buy_window_days {
        Priority::High
    } else if should_buy_in <= config.buy_window_days {
        Priority::Medium
    } else {
        Priority::Low
    };

    ProductOutlook {
        average_days_between_purchases: entry.purchase_frequency_days,
        consumption_rate: entry.average_consumption_rate,
        confidence: entry.confidence,
        next_purchase: PurchaseRecommendation {
            should_buy_in,
            urgency,
            confidence: entry.confidence,
        },
    }
}
