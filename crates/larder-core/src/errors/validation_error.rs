/// Malformed events rejected at the Event Store boundary. Never persisted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be greater than zero, got {value}")]
    NonPositiveQuantity { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteQuantity { field: &'static str },

    #[error("remaining quantity cannot be negative, got {value}")]
    NegativeRemaining { value: f64 },

    #[error("unparseable date '{value}', expected YYYY-MM-DD")]
    UnparseableDate { value: String },

    #[error("product key is empty")]
    EmptyProductKey,
}
