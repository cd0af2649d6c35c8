//! # larder-core
//!
//! Foundation crate for the Larder pantry engine.
//! Defines all types, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LarderConfig;
pub use errors::{LarderError, LarderResult};
pub use models::{
    ConsumptionEvent, PantryProduct, PatternEntry, Priority, ProductKey, PurchaseEvent,
    ReasonTag, ShoppingSuggestion,
};
