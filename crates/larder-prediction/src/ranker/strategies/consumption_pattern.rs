use larder_core::models::{Priority, ReasonTag, ShoppingSuggestion};

use crate::predictor::clamp_quantity;
use crate::ranker::{Emitted, RankingContext};

/// Products whose next purchase is due by their purchase frequency.
///
/// `shouldBuyIn = frequency - days since last purchase`; emitted when within
/// the buy window and the pattern is confident enough. Entries without a
/// recorded purchase carry no frequency signal and are skipped.
pub fn collect(ctx: &RankingContext<'_>, emitted: &mut Emitted) {
    let cfg = ctx.config;
    for entry in ctx.patterns.values() {
        let Some(last_purchase) = entry.last_purchase_date else {
            continue;
        };
        let days_since = (ctx.today - last_purchase).num_days() as f64;
        let should_buy_in = entry.purchase_frequency_days - days_since;

        if should_buy_in > cfg.buy_window_days || entry.confidence <= cfg.pattern_min_confidence {
            continue;
        }

        let priority = if should_buy_in <= cfg.high_buy_window_days {
            Priority::High
        } else {
            Priority::Medium
        };
        let quantity = clamp_quantity(
            entry.average_consumption_rate * entry.purchase_frequency_days,
            cfg.max_suggested_quantity,
        );

        emitted.push(ShoppingSuggestion {
            product_key: entry.product_key.clone(),
            suggested_quantity: quantity,
            priority,
            reason: ReasonTag::ConsumptionPattern,
            estimated_days_until_needed: Some((should_buy_in.round() as i64).max(0)),
            last_consumed_date: entry.last_consumed_date,
        });
    }
}
