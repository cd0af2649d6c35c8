//! # larder-prediction
//!
//! Consumption-pattern prediction and shopping suggestions for a household pantry.
//!
//! ## Components
//!
//! | Component | Role |
//! |-----------|------|
//! | Event Store | Append-only purchases and consumptions, durable backend + optional replica |
//! | Pattern Updater | Recomputes one product's statistics after each new event |
//! | Depletion Predictor | Days until empty and urgency tier from on-hand quantity |
//! | Suggestion Ranker | Merges pattern, depletion, stock, expiry and manual signals |
//!
//! [`PantrySession`] owns the store and the pattern model and sequences
//! append, recompute and ranking.

pub mod analytics;
pub mod event_store;
pub mod intake;
pub mod outcome;
pub mod predictor;
pub mod ranker;
pub mod session;
pub mod updater;

pub use event_store::EventStore;
pub use intake::BasicNormalizer;
pub use outcome::SuggestionOutcome;
pub use predictor::DepletionPredictor;
pub use ranker::{PatternSource, SuggestionRanker};
pub use session::PantrySession;
pub use updater::{PatternModel, PatternUpdater};
