use larder_core::models::{Priority, ReasonTag, ShoppingSuggestion};

use crate::ranker::{Emitted, RankingContext};

/// Pantry products holding a batch that expired before today.
pub fn collect(ctx: &RankingContext<'_>, emitted: &mut Emitted) {
    let cfg = ctx.config;
    for product in ctx.pantry {
        if !product.has_expired_batch(ctx.today) {
            continue;
        }
        emitted.push(ShoppingSuggestion {
            product_key: product.product_key.clone(),
            suggested_quantity: cfg.expired_replacement,
            priority: Priority::High,
            reason: ReasonTag::Expired,
            estimated_days_until_needed: Some(cfg.expired_estimated_days),
            last_consumed_date: ctx
                .pattern_for(&product.product_key)
                .and_then(|e| e.last_consumed_date),
        });
    }
}
