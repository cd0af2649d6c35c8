//! Property tests: append then query preserves every event in insertion order.

use chrono::NaiveDate;
use proptest::prelude::*;

use larder_core::models::{ConsumptionEvent, ProductKey, PurchaseEvent};
use larder_core::traits::IEventStorage;
use larder_storage::StorageEngine;

fn day(n: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(n)
}

proptest! {
    #[test]
    fn prop_append_query_preserves_order(
        purchases in prop::collection::vec((1u32..50, 0i64..365), 0..20),
        consumptions in prop::collection::vec((1u32..50, 0i64..365, 0u32..20), 0..20),
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let key = ProductKey::new("Leite").unwrap();

        for (qty, d) in &purchases {
            engine
                .append_purchase(&PurchaseEvent::new(key.clone(), *qty as f64 / 2.0, day(*d), None))
                .unwrap();
        }
        for (qty, d, rem) in &consumptions {
            engine
                .append_consumption(&ConsumptionEvent::new(
                    key.clone(),
                    *qty as f64 / 4.0,
                    day(*d),
                    *rem as f64,
                ))
                .unwrap();
        }

        let events = engine.query(&key).unwrap();
        prop_assert_eq!(events.purchases.len(), purchases.len());
        prop_assert_eq!(events.consumptions.len(), consumptions.len());
        for (stored, (qty, d)) in events.purchases.iter().zip(&purchases) {
            prop_assert_eq!(stored.quantity, *qty as f64 / 2.0);
            prop_assert_eq!(stored.date, day(*d));
        }
        for (stored, (qty, d, rem)) in events.consumptions.iter().zip(&consumptions) {
            prop_assert_eq!(stored.quantity_consumed, *qty as f64 / 4.0);
            prop_assert_eq!(stored.date, day(*d));
            prop_assert_eq!(stored.remaining_quantity, *rem as f64);
        }
    }

    #[test]
    fn prop_prune_keeps_events_on_or_after_cutoff(
        dates in prop::collection::vec(0i64..100, 1..30),
        cutoff in 0i64..100,
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let key = ProductKey::new("Arroz").unwrap();
        for d in &dates {
            engine
                .append_purchase(&PurchaseEvent::new(key.clone(), 1.0, day(*d), None))
                .unwrap();
        }
        let expected_removed = dates.iter().filter(|d| **d < cutoff).count();
        let removed = engine.prune_before(day(cutoff)).unwrap();
        prop_assert_eq!(removed, expected_removed);
        let remaining = engine.query(&key).unwrap();
        prop_assert!(remaining.purchases.iter().all(|e| e.date >= day(cutoff)));
    }
}
