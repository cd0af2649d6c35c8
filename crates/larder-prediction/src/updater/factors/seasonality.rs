use chrono::{Duration, NaiveDate};

use larder_core::config::PatternConfig;
use larder_core::models::ConsumptionEvent;

use super::rate::span_rate;

/// Ratio of the trailing-window consumption rate to the all-time rate.
///
/// The window covers `seasonality_window_days` up to and including `today`.
/// Returns 1.0 with fewer than two windowed events or a zero-day windowed span.
pub fn calculate(
    consumptions: &[ConsumptionEvent],
    all_time_rate: f64,
    today: NaiveDate,
    config: &PatternConfig,
) -> f64 {
    if all_time_rate <= 0.0 || !all_time_rate.is_finite() {
        return 1.0;
    }
    let window_start = today - Duration::days(i64::from(config.seasonality_window_days));
    let recent: Vec<ConsumptionEvent> = consumptions
        .iter()
        .filter(|e| e.date >= window_start && e.date <= today)
        .cloned()
        .collect();
    if recent.len() < 2 {
        return 1.0;
    }
    match span_rate(&recent) {
        Some(recent_rate) => {
            (recent_rate / all_time_rate).clamp(config.seasonality_min, config.seasonality_max)
        }
        None => 1.0,
    }
}
