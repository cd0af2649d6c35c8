use serde::{Deserialize, Serialize};

use super::ProductKey;

/// A product about to enter the pantry, from a receipt scan or a manual form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPantryItem {
    pub name: String,
    pub quantity: f64,
    /// `YYYY-MM-DD`.
    pub expiry_date: String,
}

/// Answer from the normalization collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedName {
    pub normalized_name: String,
    pub is_match: bool,
    pub matched_key: Option<ProductKey>,
    pub confidence: f64,
}
