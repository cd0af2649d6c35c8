//! Individual statistics, each a pure function of the sorted event lists.

pub mod confidence;
pub mod frequency;
pub mod rate;
pub mod seasonality;
