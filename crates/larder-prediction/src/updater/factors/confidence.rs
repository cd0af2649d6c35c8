use larder_core::config::PatternConfig;

/// `min(1, events / saturation)`.
pub fn calculate(event_count: usize, config: &PatternConfig) -> f64 {
    let saturation = config.confidence_saturation_events.max(1) as f64;
    (event_count as f64 / saturation).min(1.0)
}
