//! Layered result of a suggestion run.

use serde::{Deserialize, Serialize};

use larder_core::models::ShoppingSuggestion;

/// Every tier yields a list; callers that only want suggestions use
/// [`SuggestionOutcome::into_suggestions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum SuggestionOutcome {
    /// All signal sources were available.
    Complete(Vec<ShoppingSuggestion>),
    /// Pattern data was unavailable; only pantry and manual signals contributed.
    Degraded {
        suggestions: Vec<ShoppingSuggestion>,
        reason: String,
    },
    /// All sources available and nothing to buy.
    Empty,
}

impl SuggestionOutcome {
    /// Build a complete outcome, collapsing an empty list to `Empty`.
    pub fn complete(suggestions: Vec<ShoppingSuggestion>) -> Self {
        if suggestions.is_empty() {
            Self::Empty
        } else {
            Self::Complete(suggestions)
        }
    }

    pub fn suggestions(&self) -> &[ShoppingSuggestion] {
        match self {
            Self::Complete(list) => list,
            Self::Degraded { suggestions, .. } => suggestions,
            Self::Empty => &[],
        }
    }

    pub fn into_suggestions(self) -> Vec<ShoppingSuggestion> {
        match self {
            Self::Complete(list) => list,
            Self::Degraded { suggestions, .. } => suggestions,
            Self::Empty => Vec::new(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn degradation_reason(&self) -> Option<&str> {
        match self {
            Self::Degraded { reason, .. } => Some(reason),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.suggestions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions().is_empty()
    }
}
