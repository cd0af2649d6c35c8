use larder_core::models::{PatternEntry, Priority, ReasonTag, ShoppingSuggestion};
use larder_prediction::ranker::sort_suggestions;
use larder_prediction::{PatternSource, SuggestionOutcome, SuggestionRanker};
use test_fixtures::{day, key, pantry_item};

fn pattern(name: &str, frequency: f64, last_purchase_day: i64, confidence: f64) -> PatternEntry {
    PatternEntry {
        product_key: key(name),
        average_consumption_rate: 0.5,
        purchase_frequency_days: frequency,
        last_purchase_date: Some(day(last_purchase_day)),
        last_consumed_date: Some(day(last_purchase_day)),
        total_purchased: 4.0,
        total_consumed: 3.0,
        purchase_count: 2,
        consumption_count: 3,
        seasonality_factor: 1.0,
        confidence,
        prediction_accuracy: 0.7,
        updated_at: day(last_purchase_day),
    }
}

fn manual(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn only(outcome: &SuggestionOutcome) -> &ShoppingSuggestion {
    assert_eq!(outcome.len(), 1, "expected one suggestion, got {outcome:?}");
    &outcome.suggestions()[0]
}

// ── Consumption pattern ───────────────────────────────────────────────────

#[test]
fn due_pattern_within_one_day_is_high() {
    let ranker = SuggestionRanker::default();
    let patterns = [pattern("Leite", 7.0, 0, 0.5)];
    let outcome = ranker.rank(&[], &[], PatternSource::Available(&patterns), day(6));

    let s = only(&outcome);
    assert_eq!(s.reason, ReasonTag::ConsumptionPattern);
    assert_eq!(s.priority, Priority::High);
    assert_eq!(s.suggested_quantity, 4);
    assert_eq!(s.estimated_days_until_needed, Some(1));
    assert_eq!(s.last_consumed_date, Some(day(0)));
}

#[test]
fn due_pattern_within_window_is_medium() {
    let ranker = SuggestionRanker::default();
    let patterns = [pattern("Leite", 7.0, 0, 0.5)];
    let outcome = ranker.rank(&[], &[], PatternSource::Available(&patterns), day(5));
    assert_eq!(only(&outcome).priority, Priority::Medium);
    assert_eq!(only(&outcome).estimated_days_until_needed, Some(2));
}

#[test]
fn overdue_pattern_clamps_estimate_to_zero() {
    let ranker = SuggestionRanker::default();
    let patterns = [pattern("Leite", 7.0, 0, 0.5)];
    let outcome = ranker.rank(&[], &[], PatternSource::Available(&patterns), day(20));
    assert_eq!(only(&outcome).estimated_days_until_needed, Some(0));
    assert_eq!(only(&outcome).priority, Priority::High);
}

#[test]
fn pattern_not_due_or_unconfident_is_skipped() {
    let ranker = SuggestionRanker::default();
    let not_due = [pattern("Leite", 7.0, 0, 0.9)];
    assert!(ranker
        .rank(&[], &[], PatternSource::Available(&not_due), day(4))
        .is_empty());

    // Confidence must exceed the floor strictly.
    let at_floor = [pattern("Leite", 7.0, 0, 0.3)];
    assert!(ranker
        .rank(&[], &[], PatternSource::Available(&at_floor), day(7))
        .is_empty());
}

#[test]
fn pattern_without_purchase_is_skipped() {
    let ranker = SuggestionRanker::default();
    let mut entry = pattern("Leite", 7.0, 0, 0.9);
    entry.last_purchase_date = None;
    let outcome = ranker.rank(&[], &[], PatternSource::Available(&[entry]), day(30));
    assert!(outcome.is_empty());
}

// ── Depletion ─────────────────────────────────────────────────────────────

#[test]
fn depletion_emits_high_urgency_above_pattern_floor() {
    let ranker = SuggestionRanker::default();
    // Bought today, so the frequency strategy does not claim it.
    let patterns = [pattern("Leite", 7.0, 10, 0.4)];
    let pantry = [pantry_item("Leite", 1.0, Priority::Low)];
    let outcome = ranker.rank(&pantry, &[], PatternSource::Available(&patterns), day(10));

    let s = &outcome.suggestions()[0];
    assert_eq!(s.reason, ReasonTag::ConsumptionPattern);
    assert_eq!(s.priority, Priority::High);
    assert_eq!(s.estimated_days_until_needed, Some(2));
    assert_eq!(s.suggested_quantity, 7);
}

#[test]
fn depletion_medium_needs_stricter_confidence() {
    let ranker = SuggestionRanker::default();
    let pantry = [pantry_item("Leite", 3.0, Priority::Low)];

    let weak = [pattern("Leite", 7.0, 10, 0.5)];
    assert!(ranker
        .rank(&pantry, &[], PatternSource::Available(&weak), day(10))
        .is_empty());

    let strong = [pattern("Leite", 7.0, 10, 0.6)];
    let outcome = ranker.rank(&pantry, &[], PatternSource::Available(&strong), day(10));
    assert_eq!(only(&outcome).priority, Priority::Medium);
    assert_eq!(only(&outcome).estimated_days_until_needed, Some(6));
}

#[test]
fn depletion_never_emits_low_urgency() {
    let ranker = SuggestionRanker::default();
    let patterns = [pattern("Arroz", 7.0, 10, 1.0)];
    let pantry = [pantry_item("Arroz", 10.0, Priority::High)];
    let outcome = ranker.rank(&pantry, &[], PatternSource::Available(&patterns), day(10));
    assert!(outcome.is_empty());
}

// ── Pantry signals ────────────────────────────────────────────────────────

#[test]
fn low_stock_uses_pantry_priority_and_inclusive_threshold() {
    let ranker = SuggestionRanker::default();
    let pantry = [
        pantry_item("Feijão", 2.0, Priority::High),
        pantry_item("Arroz", 2.5, Priority::High),
        pantry_item("Sal", 0.0, Priority::High),
    ];
    let outcome = ranker.rank(&pantry, &[], PatternSource::Available(&[]), day(0));

    let s = only(&outcome);
    assert_eq!(s.product_key, key("Feijão"));
    assert_eq!(s.reason, ReasonTag::LowStock);
    assert_eq!(s.priority, Priority::High);
    assert_eq!(s.suggested_quantity, 5);
    assert_eq!(s.estimated_days_until_needed, Some(7));
}

#[test]
fn expired_requires_date_strictly_before_today() {
    let ranker = SuggestionRanker::default();
    let pantry = [
        pantry_item("Iogurte", 6.0, Priority::Low).with_expiry(day(9)),
        pantry_item("Queijo", 6.0, Priority::Low).with_expiry(day(10)),
    ];
    let outcome = ranker.rank(&pantry, &[], PatternSource::Available(&[]), day(10));

    let s = only(&outcome);
    assert_eq!(s.product_key, key("Iogurte"));
    assert_eq!(s.reason, ReasonTag::Expired);
    assert_eq!(s.priority, Priority::High);
    assert_eq!(s.suggested_quantity, 3);
    assert_eq!(s.estimated_days_until_needed, Some(1));
}

#[test]
fn first_strategy_to_claim_a_product_wins() {
    let ranker = SuggestionRanker::default();
    let pantry = [pantry_item("Iogurte", 1.0, Priority::Low).with_expiry(day(1))];
    let outcome = ranker.rank(
        &pantry,
        &manual(&["iogurte"]),
        PatternSource::Available(&[]),
        day(10),
    );
    assert_eq!(only(&outcome).reason, ReasonTag::LowStock);
}

// ── Manual entries ────────────────────────────────────────────────────────

#[test]
fn manual_entries_are_deduplicated_and_blank_ones_ignored() {
    let ranker = SuggestionRanker::default();
    let outcome = ranker.rank(
        &[],
        &manual(&["Sabão", "  ", "sabão ", "Detergente"]),
        PatternSource::Available(&[]),
        day(0),
    );

    let keys: Vec<_> = outcome.suggestions().iter().map(|s| s.product_key.clone()).collect();
    assert_eq!(keys, vec![key("Detergente"), key("Sabão")]);
    for s in outcome.suggestions() {
        assert_eq!(s.reason, ReasonTag::Manual);
        assert_eq!(s.priority, Priority::Medium);
        assert_eq!(s.suggested_quantity, 1);
        assert_eq!(s.estimated_days_until_needed, None);
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────

#[test]
fn nothing_to_suggest_is_empty_not_degraded() {
    let ranker = SuggestionRanker::default();
    let outcome = ranker.rank(&[], &[], PatternSource::Available(&[]), day(0));
    assert_eq!(outcome, SuggestionOutcome::Empty);
    assert!(!outcome.is_degraded());
}

#[test]
fn unavailable_patterns_rank_pantry_signals_only() {
    let ranker = SuggestionRanker::default();
    let pantry = [
        pantry_item("Leite", 1.0, Priority::Medium),
        pantry_item("Iogurte", 5.0, Priority::Low).with_expiry(day(0)),
    ];
    let outcome = ranker.rank(
        &pantry,
        &manual(&["Pão"]),
        PatternSource::Unavailable("pattern store offline"),
        day(3),
    );

    assert!(outcome.is_degraded());
    assert_eq!(outcome.degradation_reason(), Some("pattern store offline"));
    let reasons: Vec<_> = outcome.suggestions().iter().map(|s| s.reason).collect();
    assert_eq!(
        reasons,
        vec![ReasonTag::Expired, ReasonTag::LowStock, ReasonTag::Manual]
    );
}

#[test]
fn degraded_outcome_may_be_empty() {
    let ranker = SuggestionRanker::default();
    let outcome = ranker.rank(&[], &[], PatternSource::Unavailable("offline"), day(0));
    assert!(outcome.is_degraded());
    assert!(outcome.is_empty());
}

#[test]
fn outcome_serializes_with_status_tag() {
    let complete = SuggestionOutcome::complete(vec![]);
    assert_eq!(
        serde_json::to_value(&complete).unwrap(),
        serde_json::json!({ "status": "empty" })
    );

    let degraded = SuggestionOutcome::Degraded {
        suggestions: vec![],
        reason: "offline".to_string(),
    };
    let value = serde_json::to_value(&degraded).unwrap();
    assert_eq!(value["status"], "degraded");
    assert_eq!(value["data"]["reason"], "offline");
}

// ── Ordering ──────────────────────────────────────────────────────────────

fn suggestion(name: &str, priority: Priority, days: Option<i64>) -> ShoppingSuggestion {
    ShoppingSuggestion {
        product_key: key(name),
        suggested_quantity: 1,
        priority,
        reason: ReasonTag::Manual,
        estimated_days_until_needed: days,
        last_consumed_date: None,
    }
}

#[test]
fn sort_orders_priority_then_days_then_key() {
    let mut list = vec![
        suggestion("Zeta", Priority::Medium, None),
        suggestion("Alfa", Priority::Medium, None),
        suggestion("Beta", Priority::Medium, Some(9)),
        suggestion("Gama", Priority::Low, Some(0)),
        suggestion("Delta", Priority::High, Some(5)),
        suggestion("Épsilon", Priority::High, Some(1)),
    ];
    sort_suggestions(&mut list);
    let names: Vec<_> = list.iter().map(|s| s.product_key.label().to_string()).collect();
    assert_eq!(names, vec!["Épsilon", "Delta", "Beta", "Alfa", "Zeta", "Gama"]);
}
