use larder_core::models::{Priority, ProductKey, ReasonTag, ShoppingSuggestion};

use crate::ranker::{Emitted, RankingContext};

/// One Medium suggestion per manual entry not already listed.
/// Blank entries are ignored.
pub fn collect(ctx: &RankingContext<'_>, manual: &[String], emitted: &mut Emitted) {
    for raw in manual {
        let key = match ProductKey::new(raw) {
            Ok(key) => key,
            Err(e) => {
                tracing::debug!(entry = %raw, error = %e, "skipping manual entry");
                continue;
            }
        };
        emitted.push(ShoppingSuggestion {
            product_key: key,
            suggested_quantity: ctx.config.manual_quantity,
            priority: Priority::Medium,
            reason: ReasonTag::Manual,
            estimated_days_until_needed: None,
            last_consumed_date: None,
        });
    }
}
