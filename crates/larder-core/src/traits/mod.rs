//! Seams to the collaborators the engine does not own.

pub mod clock;
pub mod event_storage;
pub mod normalizer;
pub mod pantry_source;
pub mod pattern_storage;
pub mod receipt_parser;

pub use clock::{Clock, FixedClock, SystemClock};
pub use event_storage::IEventStorage;
pub use normalizer::IProductNormalizer;
pub use pantry_source::IPantrySource;
pub use pattern_storage::IPatternStorage;
pub use receipt_parser::IReceiptParser;
