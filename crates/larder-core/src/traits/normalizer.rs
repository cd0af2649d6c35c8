use crate::errors::LarderResult;
use crate::models::{NormalizedName, ProductKey};

/// Maps a raw product name to a canonical one and decides whether it is the
/// same product as one of `existing`.
pub trait IProductNormalizer: Send + Sync {
    fn normalize(&self, raw_name: &str, existing: &[ProductKey]) -> LarderResult<NormalizedName>;
}
