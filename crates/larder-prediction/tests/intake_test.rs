use std::sync::Arc;

use larder_core::config::LarderConfig;
use larder_core::constants::COMPONENT_NORMALIZER;
use larder_core::errors::{LarderError, ValidationError};
use larder_core::models::NewPantryItem;
use larder_core::traits::{FixedClock, IProductNormalizer};
use larder_prediction::intake::resolve_key;
use larder_prediction::{BasicNormalizer, PantrySession};
use test_fixtures::doubles::{
    FailingNormalizer, InMemoryStorage, ScriptedNormalizer, ScriptedReceiptParser,
};
use test_fixtures::{day, key, purchase};

fn session() -> PantrySession {
    PantrySession::new(LarderConfig::default(), Arc::new(InMemoryStorage::new()))
        .with_clock(Arc::new(FixedClock(day(30))))
}

fn item(name: &str, quantity: f64, expiry: &str) -> NewPantryItem {
    NewPantryItem {
        name: name.to_string(),
        quantity,
        expiry_date: expiry.to_string(),
    }
}

// ── Key resolution ────────────────────────────────────────────────────────

#[test]
fn basic_normalizer_trims_without_matching() {
    let answer = BasicNormalizer.normalize("  Leite  ", &[key("Leite")]).unwrap();
    assert_eq!(answer.normalized_name, "Leite");
    assert!(!answer.is_match);
    assert_eq!(answer.confidence, 0.3);
}

#[test]
fn matched_name_resolves_to_existing_key() {
    let normalizer = ScriptedNormalizer::new().matching("Leite Integral 1L", "Leite");
    let resolved = resolve_key(&normalizer, "Leite Integral 1L", &[key("leite")]).unwrap();
    assert_eq!(resolved.key, key("Leite"));
    assert!(resolved.is_existing);
    assert_eq!(resolved.confidence, 0.95);
    assert!(resolved.fallback_reason.is_none());
}

#[test]
fn renamed_product_is_new_unless_known() {
    let normalizer = ScriptedNormalizer::new().rename("ARROZ TIPO 1 5KG", "Arroz");
    let fresh = resolve_key(&normalizer, "ARROZ TIPO 1 5KG", &[]).unwrap();
    assert_eq!(fresh.key, key("Arroz"));
    assert!(!fresh.is_existing);

    let known = resolve_key(&normalizer, "ARROZ TIPO 1 5KG", &[key("arroz")]).unwrap();
    assert!(known.is_existing);
}

#[test]
fn failing_normalizer_falls_back_to_basic() {
    let resolved = resolve_key(&FailingNormalizer, "  Café  ", &[]).unwrap();
    assert_eq!(resolved.key.label(), "Café");
    assert_eq!(resolved.confidence, 0.3);
    assert!(resolved
        .fallback_reason
        .as_deref()
        .is_some_and(|r| r.contains("service unreachable")));
}

#[test]
fn blank_normalized_name_keeps_raw_input() {
    let normalizer = ScriptedNormalizer::new().rename("Pão de forma", "   ");
    let resolved = resolve_key(&normalizer, "Pão de forma", &[]).unwrap();
    assert_eq!(resolved.key, key("Pão de forma"));
}

#[test]
fn blank_raw_name_is_rejected() {
    let err = resolve_key(&BasicNormalizer, "   ", &[]).unwrap_err();
    assert!(matches!(
        err,
        LarderError::ValidationError(ValidationError::EmptyProductKey)
    ));
}

// ── Recording items ───────────────────────────────────────────────────────

#[test]
fn items_become_purchases_dated_today() {
    let mut session = session();
    session.record_purchase(purchase("Leite", 1.0, 20)).unwrap();
    let normalizer = ScriptedNormalizer::new().matching("leite uht", "Leite");

    let keys = session
        .record_items(
            &normalizer,
            &[item("Leite UHT", 2.0, ""), item("Iogurte", 4.0, "2024-02-10")],
        )
        .unwrap();
    assert_eq!(keys, vec![key("Leite"), key("Iogurte")]);

    let leite = session.store().events_for(&key("Leite"));
    assert_eq!(leite.purchases.len(), 2);
    assert_eq!(leite.purchases[1].date, day(30));
    assert_eq!(leite.purchases[1].expiry_date, None);

    let iogurte = session.store().events_for(&key("Iogurte"));
    assert_eq!(iogurte.purchases[0].expiry_date, Some(day(40)));
    assert!(session.pattern(&key("Iogurte")).is_some());
}

#[test]
fn repeated_new_name_in_one_batch_shares_a_key() {
    let mut session = session();
    let keys = session
        .record_items(&BasicNormalizer, &[item("Ovos", 12.0, ""), item("ovos ", 6.0, "")])
        .unwrap();
    assert_eq!(keys[0], keys[1]);
    assert_eq!(session.pattern(&key("Ovos")).unwrap().purchase_count, 2);
}

#[test]
fn invalid_item_rejects_whole_batch() {
    let mut session = session();
    let err = session
        .record_items(
            &BasicNormalizer,
            &[item("Leite", 1.0, ""), item("Iogurte", 2.0, "10/02/2024")],
        )
        .unwrap_err();
    assert!(matches!(
        err,
        LarderError::ValidationError(ValidationError::UnparseableDate { .. })
    ));

    let err = session
        .record_items(&BasicNormalizer, &[item("Leite", 1.0, ""), item("Pão", -1.0, "")])
        .unwrap_err();
    assert!(matches!(
        err,
        LarderError::ValidationError(ValidationError::NonPositiveQuantity { .. })
    ));
    assert_eq!(session.store().total_records(), 0);
}

#[test]
fn normalizer_fallback_is_recorded_as_degradation() {
    let mut session = session();
    session
        .record_items(&FailingNormalizer, &[item("Feijão", 1.0, "")])
        .unwrap();
    assert!(session.degradations().is_degraded(COMPONENT_NORMALIZER));
    assert!(session.pattern(&key("Feijão")).is_some());
}

// ── Receipts ──────────────────────────────────────────────────────────────

#[test]
fn receipt_items_are_recorded() {
    let mut session = session();
    let parser = ScriptedReceiptParser::returning(vec![
        item("Café", 1.0, ""),
        item("Açúcar", 2.0, "2024-12-31"),
    ]);
    let keys = session
        .ingest_receipt(&parser, &BasicNormalizer, b"jpeg bytes")
        .unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(session.store().total_records(), 2);
}

#[test]
fn receipt_parse_failure_surfaces_and_records_nothing() {
    let mut session = session();
    let err = session
        .ingest_receipt(&ScriptedReceiptParser::failing(), &BasicNormalizer, b"blurry")
        .unwrap_err();
    assert!(matches!(err, LarderError::ParseFailure { .. }));

    let parser = ScriptedReceiptParser::returning(vec![item("Café", 1.0, "")]);
    let err = session
        .ingest_receipt(&parser, &BasicNormalizer, &[])
        .unwrap_err();
    assert!(matches!(err, LarderError::ParseFailure { .. }));
    assert_eq!(session.store().total_records(), 0);
}
