//! Golden scenario files under `golden/`.

use chrono::NaiveDate;
use serde::Deserialize;

use larder_core::models::{
    ConsumptionEvent, PantryProduct, Priority, ProductKey, PurchaseEvent, ReasonTag,
};

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub description: String,
    pub today: NaiveDate,
    #[serde(default)]
    pub purchases: Vec<PurchaseFixture>,
    #[serde(default)]
    pub consumptions: Vec<ConsumptionFixture>,
    #[serde(default)]
    pub pantry: Vec<PantryFixture>,
    #[serde(default)]
    pub manual: Vec<String>,
    pub expected: Expected,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseFixture {
    pub product: String,
    pub quantity: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub expiry: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsumptionFixture {
    pub product: String,
    pub quantity: f64,
    pub date: NaiveDate,
    pub remaining: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PantryFixture {
    pub product: String,
    pub quantity: f64,
    pub priority: Priority,
    #[serde(default)]
    pub soonest_expiry: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Expected {
    #[serde(default)]
    pub patterns: Vec<ExpectedPattern>,
    #[serde(default)]
    pub predictions: Vec<ExpectedPrediction>,
    #[serde(default)]
    pub suggestions: Vec<ExpectedSuggestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedPattern {
    pub product: String,
    pub purchase_frequency_days: f64,
    pub average_consumption_rate: f64,
    pub seasonality_factor: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedPrediction {
    pub product: String,
    pub quantity: f64,
    pub days_until_empty: i64,
    pub urgency: Priority,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedSuggestion {
    pub product: String,
    pub reason: ReasonTag,
    pub priority: Priority,
    pub quantity: u32,
    pub estimated_days: Option<i64>,
}

fn key(name: &str) -> ProductKey {
    ProductKey::new(name).expect("scenario product names are non-blank")
}

impl GoldenScenario {
    pub fn purchase_events(&self) -> Vec<PurchaseEvent> {
        self.purchases
            .iter()
            .map(|p| PurchaseEvent::new(key(&p.product), p.quantity, p.date, p.expiry))
            .collect()
    }

    pub fn consumption_events(&self) -> Vec<ConsumptionEvent> {
        self.consumptions
            .iter()
            .map(|c| ConsumptionEvent::new(key(&c.product), c.quantity, c.date, c.remaining))
            .collect()
    }

    pub fn pantry_snapshot(&self) -> Vec<PantryProduct> {
        self.pantry
            .iter()
            .map(|p| PantryProduct {
                product_key: key(&p.product),
                total_on_hand_quantity: p.quantity,
                priority: p.priority,
                soonest_expiry_date: p.soonest_expiry,
            })
            .collect()
    }
}
