//! Property tests: statistic bounds, confidence growth, and ranking order.

use std::sync::Arc;

use proptest::prelude::*;

use larder_core::config::LarderConfig;
use larder_core::models::{Priority, ProductEvents};
use larder_core::traits::FixedClock;
use larder_prediction::{PantrySession, PatternSource, PatternUpdater, SuggestionRanker};
use test_fixtures::doubles::InMemoryStorage;
use test_fixtures::{consumption, day, key, pantry_item, purchase};

fn priority_of(n: u8) -> Priority {
    match n % 3 {
        0 => Priority::Low,
        1 => Priority::Medium,
        _ => Priority::High,
    }
}

fn history(
    purchases: &[(u32, i64)],
    consumptions: &[(u32, i64)],
) -> ProductEvents {
    let mut events = ProductEvents {
        purchases: purchases
            .iter()
            .map(|(q, d)| purchase("Leite", f64::from(*q) / 4.0, *d))
            .collect(),
        consumptions: consumptions
            .iter()
            .map(|(q, d)| consumption("Leite", f64::from(*q) / 4.0, *d, 0.0))
            .collect(),
    };
    events.sort_chronologically();
    events
}

proptest! {
    #[test]
    fn prop_rate_never_below_floor(
        purchases in prop::collection::vec((1u32..40, 0i64..120), 0..8),
        consumptions in prop::collection::vec((1u32..40, 0i64..120), 0..16),
    ) {
        let events = history(&purchases, &consumptions);
        let entry = PatternUpdater::default().recompute(&key("Leite"), &events, None, day(120));
        prop_assert!(entry.average_consumption_rate >= 0.1);
        prop_assert!(entry.average_consumption_rate.is_finite());
    }

    #[test]
    fn prop_seasonality_within_bounds(
        consumptions in prop::collection::vec((1u32..200, 0i64..120), 0..20),
        today in 0i64..150,
    ) {
        let events = history(&[], &consumptions);
        let entry = PatternUpdater::default().recompute(&key("Leite"), &events, None, day(today));
        prop_assert!((0.5..=2.0).contains(&entry.seasonality_factor));
    }

    #[test]
    fn prop_confidence_grows_and_saturates(
        steps in prop::collection::vec((any::<bool>(), 1u32..20, 0i64..60), 1..25),
    ) {
        let storage = Arc::new(InMemoryStorage::new());
        let mut session = PantrySession::new(LarderConfig::default(), storage)
            .with_clock(Arc::new(FixedClock(day(60))));
        let mut last = 0.0_f64;
        for (n, (is_purchase, q, d)) in steps.iter().enumerate() {
            if *is_purchase {
                session.record_purchase(purchase("Leite", f64::from(*q), *d)).unwrap();
            } else {
                session
                    .record_consumption(consumption("Leite", f64::from(*q), *d, 0.0))
                    .unwrap();
            }
            let confidence = session.pattern(&key("Leite")).unwrap().confidence;
            prop_assert!(confidence >= last);
            prop_assert!(confidence <= 1.0);
            if n + 1 >= 10 {
                prop_assert_eq!(confidence, 1.0);
            }
            last = confidence;
        }
    }

    #[test]
    fn prop_suggestions_are_ordered(
        pantry in prop::collection::vec(
            (0usize..12, 0u32..12, any::<u8>(), prop::option::of(0i64..20)),
            0..12,
        ),
        manual in prop::collection::vec(0usize..12, 0..6),
    ) {
        let names = [
            "Leite", "Pão", "Café", "Arroz", "Feijão", "Ovos",
            "Sal", "Açúcar", "Óleo", "Iogurte", "Queijo", "Sabão",
        ];
        let snapshot: Vec<_> = pantry
            .iter()
            .map(|(i, q, p, expiry)| {
                let item = pantry_item(names[*i], f64::from(*q) / 2.0, priority_of(*p));
                match expiry {
                    Some(d) => item.with_expiry(day(*d)),
                    None => item,
                }
            })
            .collect();
        let manual: Vec<String> = manual.iter().map(|i| names[*i].to_string()).collect();

        let outcome = SuggestionRanker::default().rank(
            &snapshot,
            &manual,
            PatternSource::Available(&[]),
            day(10),
        );
        let list = outcome.suggestions();
        for pair in list.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.priority >= b.priority);
            if a.priority == b.priority {
                match (a.estimated_days_until_needed, b.estimated_days_until_needed) {
                    (Some(x), Some(y)) => {
                        prop_assert!(x < y || (x == y && a.product_key < b.product_key))
                    }
                    (Some(_), None) => {}
                    (None, Some(_)) => prop_assert!(false, "absent estimate sorted first"),
                    (None, None) => prop_assert!(a.product_key < b.product_key),
                }
            }
        }
    }
}
