//! Configuration for every Larder subsystem.
//!
//! All sections deserialize with `#[serde(default)]`, so an empty TOML
//! document yields the compiled defaults in [`defaults`].

pub mod defaults;
pub mod larder_config;
pub mod observability_config;
pub mod pattern_config;
pub mod prediction_config;
pub mod retention_config;
pub mod storage_config;
pub mod suggestion_config;

pub use larder_config::LarderConfig;
pub use observability_config::ObservabilityConfig;
pub use pattern_config::PatternConfig;
pub use prediction_config::PredictionConfig;
pub use retention_config::RetentionConfig;
pub use storage_config::StorageConfig;
pub use suggestion_config::SuggestionConfig;
