//! Intake: turning raw product names and receipt scans into purchase events.

use larder_core::constants::{BASIC_NORMALIZATION_CONFIDENCE, COMPONENT_NORMALIZER};
use larder_core::errors::LarderResult;
use larder_core::models::{
    parse_date, DegradationEvent, NewPantryItem, NormalizedName, ProductKey, PurchaseEvent,
};
use larder_core::traits::{IProductNormalizer, IReceiptParser};

use crate::session::PantrySession;

/// Offline normalizer: trims the name and never claims a match.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicNormalizer;

impl IProductNormalizer for BasicNormalizer {
    fn normalize(&self, raw_name: &str, _existing: &[ProductKey]) -> LarderResult<NormalizedName> {
        Ok(NormalizedName {
            normalized_name: raw_name.trim().to_string(),
            is_match: false,
            matched_key: None,
            confidence: BASIC_NORMALIZATION_CONFIDENCE,
        })
    }
}

/// Result of resolving a raw name to a product key.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedKey {
    pub key: ProductKey,
    /// The name matched a product the store already knows.
    pub is_existing: bool,
    pub confidence: f64,
    /// Set when the collaborator failed and the basic normalizer answered.
    pub fallback_reason: Option<String>,
}

/// Resolve `raw_name` through `normalizer`, preferring a matched existing key.
pub fn resolve_key(
    normalizer: &dyn IProductNormalizer,
    raw_name: &str,
    existing: &[ProductKey],
) -> LarderResult<ResolvedKey> {
    let (answer, fallback_reason) = match normalizer.normalize(raw_name, existing) {
        Ok(answer) => (answer, None),
        Err(e) => {
            tracing::warn!(
                name = %raw_name,
                error = %e,
                "normalizer failed, using basic normalization"
            );
            (BasicNormalizer.normalize(raw_name, existing)?, Some(e.to_string()))
        }
    };

    if answer.is_match {
        if let Some(matched) = answer.matched_key {
            let is_existing = existing.contains(&matched);
            return Ok(ResolvedKey {
                key: matched,
                is_existing,
                confidence: answer.confidence,
                fallback_reason,
            });
        }
    }

    let key = match ProductKey::new(&answer.normalized_name) {
        Ok(key) => key,
        // Collaborator returned a blank name; the raw input decides.
        Err(_) => ProductKey::new(raw_name)?,
    };
    let is_existing = existing.contains(&key);
    Ok(ResolvedKey {
        key,
        is_existing,
        confidence: answer.confidence,
        fallback_reason,
    })
}

impl PantrySession {
    /// Resolve every item, validate it, then append one purchase per item dated today.
    ///
    /// Nothing is appended when any item fails validation. Blank expiry dates
    /// mean "no expiry". Returns the resolved keys in input order.
    pub fn record_items(
        &mut self,
        normalizer: &dyn IProductNormalizer,
        items: &[NewPantryItem],
    ) -> LarderResult<Vec<ProductKey>> {
        let _span = larder_observability::intake_span!(items.len()).entered();
        let today = self.today();
        let mut known = self.store().product_keys();
        let mut pending = Vec::with_capacity(items.len());

        for item in items {
            let resolved = resolve_key(normalizer, &item.name, &known)?;
            if let Some(reason) = &resolved.fallback_reason {
                self.degradations_mut().record(DegradationEvent::new(
                    COMPONENT_NORMALIZER,
                    reason.clone(),
                    "basic normalization",
                ));
            }
            let expiry = match item.expiry_date.trim() {
                "" => None,
                raw => Some(parse_date(raw)?),
            };
            let event = PurchaseEvent::new(resolved.key.clone(), item.quantity, today, expiry);
            event.validate()?;
            if !known.contains(&resolved.key) {
                known.push(resolved.key);
            }
            pending.push(event);
        }

        let mut keys = Vec::with_capacity(pending.len());
        for event in pending {
            keys.push(event.product_key.clone());
            self.record_purchase(event)?;
        }
        Ok(keys)
    }

    /// Parse a receipt image and record its items. Parse failures surface so
    /// the caller can offer a retry.
    pub fn ingest_receipt(
        &mut self,
        parser: &dyn IReceiptParser,
        normalizer: &dyn IProductNormalizer,
        image: &[u8],
    ) -> LarderResult<Vec<ProductKey>> {
        let items = parser.parse_receipt(image)?;
        tracing::info!(items = items.len(), "receipt parsed");
        self.record_items(normalizer, &items)
    }
}
