use crate::errors::LarderResult;
use crate::models::{PatternEntry, ProductKey};

/// Pattern persistence and the pattern query the ranker reads from.
pub trait IPatternStorage: Send + Sync {
    /// Insert or replace the entry for its product key.
    fn save_pattern(&self, entry: &PatternEntry) -> LarderResult<()>;
    fn remove_pattern(&self, key: &ProductKey) -> LarderResult<()>;
    fn load_patterns(&self) -> LarderResult<Vec<PatternEntry>>;
}
