use crate::errors::LarderResult;
use crate::models::PantrySnapshot;

/// The pantry-management collaborator. Read-only to the engine.
pub trait IPantrySource: Send + Sync {
    fn current_snapshot(&self) -> LarderResult<PantrySnapshot>;
}
