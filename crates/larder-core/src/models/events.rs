//! Purchase and consumption events. Immutable once recorded.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ProductKey;
use crate::errors::ValidationError;

/// Which event table a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Purchase,
    Consumption,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Consumption => "consumption",
        }
    }
}

/// Parse a `YYYY-MM-DD` date. Full RFC 3339 timestamps are accepted and
/// truncated to their date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| ValidationError::UnparseableDate {
            value: value.to_string(),
        })
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteQuantity { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveQuantity { field, value });
    }
    Ok(())
}

/// A pantry addition: receipt confirmation or manual add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseEvent {
    pub product_key: ProductKey,
    pub quantity: f64,
    pub date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
}

impl PurchaseEvent {
    pub fn new(
        product_key: ProductKey,
        quantity: f64,
        date: NaiveDate,
        expiry_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            product_key,
            quantity,
            date,
            expiry_date,
        }
    }

    /// Build a purchase from loosely typed input, validating every field.
    pub fn parse(
        product: &str,
        quantity: f64,
        date: &str,
        expiry_date: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let event = Self {
            product_key: ProductKey::new(product)?,
            quantity,
            date: parse_date(date)?,
            expiry_date: expiry_date.map(parse_date).transpose()?,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_positive("quantity", self.quantity)
    }
}

/// A recorded consumption of some quantity of an on-hand batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionEvent {
    pub product_key: ProductKey,
    pub quantity_consumed: f64,
    pub date: NaiveDate,
    pub remaining_quantity: f64,
}

impl ConsumptionEvent {
    pub fn new(
        product_key: ProductKey,
        quantity_consumed: f64,
        date: NaiveDate,
        remaining_quantity: f64,
    ) -> Self {
        Self {
            product_key,
            quantity_consumed,
            date,
            remaining_quantity,
        }
    }

    /// Build a consumption from loosely typed input, validating every field.
    pub fn parse(
        product: &str,
        quantity_consumed: f64,
        date: &str,
        remaining_quantity: f64,
    ) -> Result<Self, ValidationError> {
        let event = Self {
            product_key: ProductKey::new(product)?,
            quantity_consumed,
            date: parse_date(date)?,
            remaining_quantity,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_positive("quantity_consumed", self.quantity_consumed)?;
        if !self.remaining_quantity.is_finite() {
            return Err(ValidationError::NonFiniteQuantity {
                field: "remaining_quantity",
            });
        }
        if self.remaining_quantity < 0.0 {
            return Err(ValidationError::NegativeRemaining {
                value: self.remaining_quantity,
            });
        }
        Ok(())
    }
}

/// All events recorded for one product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductEvents {
    pub purchases: Vec<PurchaseEvent>,
    pub consumptions: Vec<ConsumptionEvent>,
}

impl ProductEvents {
    /// Combined event count.
    pub fn len(&self) -> usize {
        self.purchases.len() + self.consumptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty() && self.consumptions.is_empty()
    }

    /// Stable sort by date; same-day events keep insertion order.
    pub fn sort_chronologically(&mut self) {
        self.purchases.sort_by_key(|e| e.date);
        self.consumptions.sort_by_key(|e| e.date);
    }

    /// Date of the newest event of either kind.
    pub fn latest_date(&self) -> Option<NaiveDate> {
        let purchase = self.purchases.iter().map(|e| e.date).max();
        let consumption = self.consumptions.iter().map(|e| e.date).max();
        purchase.max(consumption)
    }

    /// Drop events dated before `cutoff`. Returns how many were removed.
    pub fn retain_since(&mut self, cutoff: NaiveDate) -> usize {
        let before = self.len();
        self.purchases.retain(|e| e.date >= cutoff);
        self.consumptions.retain(|e| e.date >= cutoff);
        before - self.len()
    }
}
