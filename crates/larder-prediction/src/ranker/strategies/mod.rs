//! One module per suggestion source, run in the order listed in the ranker.

pub mod consumption_pattern;
pub mod depletion;
pub mod expired;
pub mod low_stock;
pub mod manual;
