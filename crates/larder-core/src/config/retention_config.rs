use serde::{Deserialize, Serialize};

use super::defaults;

/// Event history retention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Events older than this many days are pruned by maintenance.
    pub max_age_days: u32,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            max_age_days: defaults::DEFAULT_RETENTION_MAX_AGE_DAYS,
        }
    }
}
