use serde::{Deserialize, Serialize};

use super::Priority;

/// Output of the depletion predictor for one product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepletionForecast {
    pub days_until_empty: i64,
    pub urgency: Priority,
    /// Pattern confidence; 0 with no entry or on cold start.
    pub confidence: f64,
}
