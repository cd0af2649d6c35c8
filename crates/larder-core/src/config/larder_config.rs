//! Top-level Larder configuration with file + environment resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ObservabilityConfig, PatternConfig, PredictionConfig, RetentionConfig, StorageConfig,
    SuggestionConfig,
};
use crate::errors::ConfigError;

/// Environment variable overriding `storage.db_path`.
pub const ENV_DB_PATH: &str = "LARDER_DB_PATH";
/// Environment variable overriding `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "LARDER_LOG_LEVEL";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LARDER_*`)
/// 2. Config file (`larder.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LarderConfig {
    pub storage: StorageConfig,
    pub patterns: PatternConfig,
    pub prediction: PredictionConfig,
    pub suggestions: SuggestionConfig,
    pub retention: RetentionConfig,
    pub observability: ObservabilityConfig,
}

impl LarderConfig {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist, then apply environment overrides and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `LARDER_*` overrides using the given variable lookup.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(db_path) = lookup(ENV_DB_PATH).filter(|v| !v.trim().is_empty()) {
            self.storage.db_path = db_path;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            self.observability.log_level = level;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.patterns;
        if p.min_consumption_rate <= 0.0 {
            return Err(invalid("patterns.min_consumption_rate", "must be greater than 0"));
        }
        if p.default_consumption_rate < p.min_consumption_rate {
            return Err(invalid(
                "patterns.default_consumption_rate",
                "must not be below patterns.min_consumption_rate",
            ));
        }
        if p.default_purchase_frequency_days <= 0.0 {
            return Err(invalid(
                "patterns.default_purchase_frequency_days",
                "must be greater than 0",
            ));
        }
        if p.seasonality_window_days == 0 {
            return Err(invalid("patterns.seasonality_window_days", "must be greater than 0"));
        }
        if !(p.seasonality_min > 0.0 && p.seasonality_min <= 1.0 && p.seasonality_max >= 1.0) {
            return Err(invalid(
                "patterns.seasonality_min",
                "bounds must satisfy 0 < min <= 1 <= max",
            ));
        }
        if p.confidence_saturation_events == 0 {
            return Err(invalid(
                "patterns.confidence_saturation_events",
                "must be greater than 0",
            ));
        }
        for (field, value) in [
            ("patterns.prediction_accuracy", p.prediction_accuracy),
            ("patterns.cold_start_accuracy", p.cold_start_accuracy),
            ("suggestions.pattern_min_confidence", self.suggestions.pattern_min_confidence),
            (
                "suggestions.depletion_medium_min_confidence",
                self.suggestions.depletion_medium_min_confidence,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if self.prediction.high_urgency_days > self.prediction.medium_urgency_days {
            return Err(invalid(
                "prediction.high_urgency_days",
                "must not exceed prediction.medium_urgency_days",
            ));
        }
        if self.suggestions.max_suggested_quantity == 0 {
            return Err(invalid("suggestions.max_suggested_quantity", "must be greater than 0"));
        }
        if self.retention.max_age_days == 0 {
            return Err(invalid("retention.max_age_days", "must be greater than 0"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
