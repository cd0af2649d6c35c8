use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Canonical product identifier.
///
/// Produced once by the normalization step and threaded through every
/// component. Equality, hashing, and ordering use the trimmed lower-case
/// form; the trimmed original spelling is kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductKey {
    label: String,
    canonical: String,
}

impl ProductKey {
    /// Build a key from a raw product name. Whitespace-only names are rejected.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let label = raw.trim();
        if label.is_empty() {
            return Err(ValidationError::EmptyProductKey);
        }
        Ok(Self {
            label: label.to_string(),
            canonical: label.to_lowercase(),
        })
    }

    /// The canonical (trimmed, lower-case) form used for comparisons and storage.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// The display spelling.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether `raw` names this product under case-insensitive trimmed comparison.
    pub fn matches(&self, raw: &str) -> bool {
        raw.trim().to_lowercase() == self.canonical
    }
}

impl PartialEq for ProductKey {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for ProductKey {}

impl Hash for ProductKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for ProductKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProductKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl TryFrom<String> for ProductKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for ProductKey {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductKey> for String {
    fn from(key: ProductKey) -> Self {
        key.label
    }
}
