pub mod analytics;
pub mod degradation_event;
pub mod depletion_forecast;
pub mod events;
pub mod intake;
pub mod pantry;
pub mod pattern_entry;
pub mod priority;
pub mod product_key;
pub mod suggestion;

pub use analytics::{PatternAnalytics, ProductOutlook, PurchaseRecommendation};
pub use degradation_event::DegradationEvent;
pub use depletion_forecast::DepletionForecast;
pub use events::{parse_date, ConsumptionEvent, EventKind, ProductEvents, PurchaseEvent};
pub use intake::{NewPantryItem, NormalizedName};
pub use pantry::{PantryProduct, PantrySnapshot};
pub use pattern_entry::PatternEntry;
pub use priority::Priority;
pub use product_key::ProductKey;
pub use suggestion::{ReasonTag, ShoppingSuggestion};
