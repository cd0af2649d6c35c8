use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Priority, ProductKey};

/// One distinct product currently in the pantry, as supplied by the pantry collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryProduct {
    pub product_key: ProductKey,
    /// Sum over every on-hand batch.
    pub total_on_hand_quantity: f64,
    pub priority: Priority,
    pub soonest_expiry_date: Option<NaiveDate>,
}

impl PantryProduct {
    pub fn new(product_key: ProductKey, total_on_hand_quantity: f64, priority: Priority) -> Self {
        Self {
            product_key,
            total_on_hand_quantity,
            priority,
            soonest_expiry_date: None,
        }
    }

    pub fn with_expiry(mut self, expiry: NaiveDate) -> Self {
        self.soonest_expiry_date = Some(expiry);
        self
    }

    /// Some batch expired strictly before `today`.
    pub fn has_expired_batch(&self, today: NaiveDate) -> bool {
        self.soonest_expiry_date.is_some_and(|d| d < today)
    }
}

/// Read-only view of the pantry at suggestion time.
pub type PantrySnapshot = Vec<PantryProduct>;
