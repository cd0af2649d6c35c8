//! Terse constructors for events and pantry rows. Day 0 is 2024-01-01.

use chrono::{Duration, NaiveDate};

use larder_core::models::{ConsumptionEvent, PantryProduct, Priority, ProductKey, PurchaseEvent};

/// 2024-01-01 plus `n` days.
pub fn day(n: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid base date") + Duration::days(n)
}

pub fn key(name: &str) -> ProductKey {
    ProductKey::new(name).expect("non-blank product name")
}

pub fn purchase(name: &str, quantity: f64, on_day: i64) -> PurchaseEvent {
    PurchaseEvent::new(key(name), quantity, day(on_day), None)
}

pub fn consumption(name: &str, quantity: f64, on_day: i64, remaining: f64) -> ConsumptionEvent {
    ConsumptionEvent::new(key(name), quantity, day(on_day), remaining)
}

pub fn pantry_item(name: &str, on_hand: f64, priority: Priority) -> PantryProduct {
    PantryProduct::new(key(name), on_hand, priority)
}
