use larder_core::models::{ReasonTag, ShoppingSuggestion};

use crate::ranker::{Emitted, RankingContext};

/// Pantry products with `0 < on hand <= threshold`.
pub fn collect(ctx: &RankingContext<'_>, emitted: &mut Emitted) {
    let cfg = ctx.config;
    for product in ctx.pantry {
        let on_hand = product.total_on_hand_quantity;
        if !(on_hand > 0.0 && on_hand <= cfg.low_stock_threshold) {
            continue;
        }
        emitted.push(ShoppingSuggestion {
            product_key: product.product_key.clone(),
            suggested_quantity: cfg.low_stock_top_up,
            priority: product.priority,
            reason: ReasonTag::LowStock,
            estimated_days_until_needed: Some(cfg.low_stock_estimated_days),
            last_consumed_date: ctx
                .pattern_for(&product.product_key)
                .and_then(|e| e.last_consumed_date),
        });
    }
}
