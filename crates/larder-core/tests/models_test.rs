use chrono::NaiveDate;
use larder_core::errors::ValidationError;
use larder_core::models::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── ProductKey ────────────────────────────────────────────────────────────

#[test]
fn product_key_equality_is_case_insensitive_and_trimmed() {
    let a = ProductKey::new("  Leite ").unwrap();
    let b = ProductKey::new("LEITE").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.as_str(), "leite");
    assert_eq!(a.label(), "Leite");
    assert!(a.matches(" leite"));
}

#[test]
fn product_key_hash_follows_canonical_form() {
    let mut set = std::collections::HashSet::new();
    set.insert(ProductKey::new("Arroz").unwrap());
    set.insert(ProductKey::new("arroz ").unwrap());
    assert_eq!(set.len(), 1);
}

#[test]
fn product_key_rejects_blank_names() {
    assert_eq!(ProductKey::new("   "), Err(ValidationError::EmptyProductKey));
}

#[test]
fn product_key_orders_lexically_by_canonical_form() {
    let mut keys = vec![
        ProductKey::new("pão").unwrap(),
        ProductKey::new("Arroz").unwrap(),
        ProductKey::new("café").unwrap(),
    ];
    keys.sort();
    let labels: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
    assert_eq!(labels, vec!["arroz", "café", "pão"]);
}

#[test]
fn product_key_serializes_as_its_label() {
    let key = ProductKey::new("Sabão").unwrap();
    let json = serde_json::to_string(&key).unwrap();
    assert_eq!(json, "\"Sabão\"");
    let back: ProductKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, key);
    assert!(serde_json::from_str::<ProductKey>("\"  \"").is_err());
}

// ── Dates ─────────────────────────────────────────────────────────────────

#[test]
fn parse_date_accepts_plain_and_rfc3339_dates() {
    assert_eq!(parse_date("2024-03-05").unwrap(), date(2024, 3, 5));
    assert_eq!(
        parse_date("2024-03-05T22:10:00Z").unwrap(),
        date(2024, 3, 5)
    );
}

#[test]
fn parse_date_rejects_garbage() {
    assert!(matches!(
        parse_date("05/03/2024"),
        Err(ValidationError::UnparseableDate { .. })
    ));
    assert!(parse_date("2024-02-30").is_err());
}

// ── Event validation ──────────────────────────────────────────────────────

#[test]
fn purchase_parse_validates_every_field() {
    let event = PurchaseEvent::parse("Leite", 2.0, "2024-01-01", Some("2024-01-10")).unwrap();
    assert_eq!(event.expiry_date, Some(date(2024, 1, 10)));

    assert!(matches!(
        PurchaseEvent::parse("Leite", 0.0, "2024-01-01", None),
        Err(ValidationError::NonPositiveQuantity { .. })
    ));
    assert!(matches!(
        PurchaseEvent::parse("Leite", f64::NAN, "2024-01-01", None),
        Err(ValidationError::NonFiniteQuantity { .. })
    ));
    assert!(matches!(
        PurchaseEvent::parse("Leite", 1.0, "2024-01-01", Some("soon")),
        Err(ValidationError::UnparseableDate { .. })
    ));
}

#[test]
fn consumption_rejects_negative_remaining() {
    let err = ConsumptionEvent::parse("Leite", 1.0, "2024-01-01", -1.0).unwrap_err();
    assert_eq!(err, ValidationError::NegativeRemaining { value: -1.0 });
    assert!(ConsumptionEvent::parse("Leite", 1.0, "2024-01-01", 0.0).is_ok());
}

#[test]
fn product_events_sort_is_stable_within_a_day() {
    let key = ProductKey::new("Pão").unwrap();
    let mut events = ProductEvents::default();
    events
        .consumptions
        .push(ConsumptionEvent::new(key.clone(), 3.0, date(2024, 1, 2), 0.0));
    events
        .consumptions
        .push(ConsumptionEvent::new(key.clone(), 1.0, date(2024, 1, 1), 2.0));
    events
        .consumptions
        .push(ConsumptionEvent::new(key.clone(), 2.0, date(2024, 1, 1), 1.0));
    events.sort_chronologically();

    let quantities: Vec<f64> = events
        .consumptions
        .iter()
        .map(|e| e.quantity_consumed)
        .collect();
    assert_eq!(quantities, vec![1.0, 2.0, 3.0]);
    assert_eq!(events.latest_date(), Some(date(2024, 1, 2)));
}

#[test]
fn retain_since_drops_only_older_events() {
    let key = ProductKey::new("Café").unwrap();
    let mut events = ProductEvents::default();
    events
        .purchases
        .push(PurchaseEvent::new(key.clone(), 1.0, date(2023, 1, 1), None));
    events
        .purchases
        .push(PurchaseEvent::new(key.clone(), 1.0, date(2024, 1, 1), None));
    events
        .consumptions
        .push(ConsumptionEvent::new(key, 1.0, date(2023, 6, 1), 0.0));

    let removed = events.retain_since(date(2023, 12, 31));
    assert_eq!(removed, 2);
    assert_eq!(events.len(), 1);
}

// ── Priority / pantry ─────────────────────────────────────────────────────

#[test]
fn priority_orders_low_medium_high() {
    assert!(Priority::High > Priority::Medium);
    assert!(Priority::Medium > Priority::Low);
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn pantry_product_expired_only_strictly_before_today() {
    let key = ProductKey::new("Iogurte").unwrap();
    let today = date(2024, 5, 10);
    let product = PantryProduct::new(key.clone(), 2.0, Priority::Low).with_expiry(today);
    assert!(!product.has_expired_batch(today));
    let product = PantryProduct::new(key, 2.0, Priority::Low).with_expiry(date(2024, 5, 9));
    assert!(product.has_expired_batch(today));
}

// ── ProductKey properties ─────────────────────────────────────────────────

mod product_key_properties {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use larder_core::models::ProductKey;
    use proptest::prelude::*;

    fn hash_of(key: &ProductKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        #[test]
        fn prop_case_and_padding_do_not_change_identity(
            name in "[a-zA-Zçãé][a-zA-Zçãé ]{0,11}",
            left in " {0,3}",
            right in " {0,3}",
        ) {
            let plain = ProductKey::new(&name).unwrap();
            let padded = format!("{left}{}{right}", name.to_uppercase());
            let shouted = ProductKey::new(&padded).unwrap();

            prop_assert_eq!(&plain, &shouted);
            prop_assert_eq!(hash_of(&plain), hash_of(&shouted));
            prop_assert_eq!(plain.cmp(&shouted), std::cmp::Ordering::Equal);
            prop_assert!(shouted.matches(&name));
        }

        #[test]
        fn prop_serde_keeps_label_and_identity(name in "[a-zA-Zçãé][a-zA-Zçãé ]{0,11}") {
            let key = ProductKey::new(&name).unwrap();
            let json = serde_json::to_string(&key).unwrap();
            let back: ProductKey = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(&back, &key);
            prop_assert_eq!(back.label(), key.label());
        }
    }
}
