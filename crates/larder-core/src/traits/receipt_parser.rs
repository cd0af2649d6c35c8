use crate::errors::LarderResult;
use crate::models::NewPantryItem;

/// Receipt OCR. Fails with `LarderError::ParseFailure` when the image cannot be read.
pub trait IReceiptParser: Send + Sync {
    fn parse_receipt(&self, image: &[u8]) -> LarderResult<Vec<NewPantryItem>>;
}
