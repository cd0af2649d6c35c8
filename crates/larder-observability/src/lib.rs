//! # larder-observability
//!
//! Structured tracing with span definitions and event helpers, plus
//! degradation tracking for every fallback the engine takes.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
