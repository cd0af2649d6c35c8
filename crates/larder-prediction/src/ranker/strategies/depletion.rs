use larder_core::models::{Priority, ReasonTag, ShoppingSuggestion};

use crate::ranker::{Emitted, RankingContext};

/// Pantry products with a pattern, scored by the depletion predictor.
///
/// High urgency needs the pattern confidence floor; Medium needs the stricter
/// depletion threshold. Out-of-stock products are left to other strategies.
pub fn collect(ctx: &RankingContext<'_>, emitted: &mut Emitted) {
    let cfg = ctx.config;
    for product in ctx.pantry {
        if product.total_on_hand_quantity <= 0.0 || emitted.contains(&product.product_key) {
            continue;
        }
        let Some(entry) = ctx.pattern_for(&product.product_key) else {
            continue;
        };

        let forecast = ctx
            .predictor
            .predict(Some(entry), product.total_on_hand_quantity);
        let wanted = match forecast.urgency {
            Priority::High => forecast.confidence > cfg.pattern_min_confidence,
            Priority::Medium => forecast.confidence > cfg.depletion_medium_min_confidence,
            Priority::Low => false,
        };
        if !wanted {
            continue;
        }

        emitted.push(ShoppingSuggestion {
            product_key: product.product_key.clone(),
            suggested_quantity: ctx.predictor.optimal_quantity(Some(entry)),
            priority: forecast.urgency,
            reason: ReasonTag::ConsumptionPattern,
            estimated_days_until_needed: Some(forecast.days_until_empty),
            last_consumed_date: entry.last_consumed_date,
        });
    }
}
