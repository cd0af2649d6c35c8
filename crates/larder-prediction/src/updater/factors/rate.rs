use chrono::NaiveDate;

use larder_core::config::PatternConfig;
use larder_core::models::ConsumptionEvent;

/// Units consumed per day across the first-to-last consumption span.
///
/// Falls back to the default rate on a zero-day span. Never below the floor.
pub fn calculate(consumptions: &[ConsumptionEvent], config: &PatternConfig) -> f64 {
    let rate = span_rate(consumptions).unwrap_or(config.default_consumption_rate);
    rate.max(config.min_consumption_rate)
}

/// Total consumed divided by the span in days, `None` for a zero-day span.
pub(crate) fn span_rate(consumptions: &[ConsumptionEvent]) -> Option<f64> {
    let (first, last) = date_bounds(consumptions)?;
    let span = (last - first).num_days();
    if span <= 0 {
        return None;
    }
    let consumed: f64 = consumptions.iter().map(|e| e.quantity_consumed).sum();
    let rate = consumed / span as f64;
    rate.is_finite().then_some(rate)
}

fn date_bounds(consumptions: &[ConsumptionEvent]) -> Option<(NaiveDate, NaiveDate)> {
    let first = consumptions.iter().map(|e| e.date).min()?;
    let last = consumptions.iter().map(|e| e.date).max()?;
    Some((first, last))
}
