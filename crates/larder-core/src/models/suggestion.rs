use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Priority, ProductKey};

/// Why a product is on the shopping list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonTag {
    LowStock,
    Expired,
    ConsumptionPattern,
    Manual,
}

/// A single shopping-list line. Recomputed on every call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingSuggestion {
    pub product_key: ProductKey,
    pub suggested_quantity: u32,
    pub priority: Priority,
    pub reason: ReasonTag,
    pub estimated_days_until_needed: Option<i64>,
    pub last_consumed_date: Option<NaiveDate>,
}
