//! Suggestion ranker: combines pattern, depletion, pantry and manual signals
//! into one ordered shopping list.
//!
//! Strategies run in a fixed order and each product is emitted at most once;
//! the first strategy to claim a product wins:
//!
//! 1. consumption pattern (purchase due by frequency)
//! 2. depletion forecast (pantry products with a pattern)
//! 3. low stock
//! 4. expired batch
//! 5. manual entries
//!
//! The pattern-based strategies are skipped when the pattern source is unavailable.

pub mod strategies;

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use larder_core::config::{LarderConfig, SuggestionConfig};
use larder_core::models::{PantryProduct, PatternEntry, ProductKey, ShoppingSuggestion};

use crate::outcome::SuggestionOutcome;
use crate::predictor::DepletionPredictor;

/// Where the ranker's pattern entries come from for one run.
#[derive(Debug, Clone, Copy)]
pub enum PatternSource<'a> {
    Available(&'a [PatternEntry]),
    /// The source could not be read; carries the failure description.
    Unavailable(&'a str),
}

/// Inputs shared by every strategy in one run.
pub struct RankingContext<'a> {
    pub pantry: &'a [PantryProduct],
    pub patterns: BTreeMap<&'a ProductKey, &'a PatternEntry>,
    pub today: NaiveDate,
    pub config: &'a SuggestionConfig,
    pub predictor: &'a DepletionPredictor,
}

impl RankingContext<'_> {
    pub fn pattern_for(&self, key: &ProductKey) -> Option<&PatternEntry> {
        self.patterns.get(key).copied()
    }
}

/// Products already on the list; the first claim wins.
#[derive(Debug, Default)]
pub struct Emitted {
    suggestions: Vec<ShoppingSuggestion>,
    keys: HashSet<ProductKey>,
}

impl Emitted {
    pub fn contains(&self, key: &ProductKey) -> bool {
        self.keys.contains(key)
    }

    /// Add unless the product is already listed. Returns whether it was added.
    pub fn push(&mut self, suggestion: ShoppingSuggestion) -> bool {
        if !self.keys.insert(suggestion.product_key.clone()) {
            return false;
        }
        self.suggestions.push(suggestion);
        true
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn into_vec(self) -> Vec<ShoppingSuggestion> {
        self.suggestions
    }
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionRanker {
    config: SuggestionConfig,
    predictor: DepletionPredictor,
}

impl SuggestionRanker {
    pub fn new(config: SuggestionConfig, predictor: DepletionPredictor) -> Self {
        Self { config, predictor }
    }

    pub fn from_config(config: &LarderConfig) -> Self {
        Self::new(
            config.suggestions.clone(),
            DepletionPredictor::from_config(config),
        )
    }

    pub fn predictor(&self) -> &DepletionPredictor {
        &self.predictor
    }

    /// Produce the ordered shopping list. Never fails.
    pub fn rank(
        &self,
        pantry: &[PantryProduct],
        manual: &[String],
        patterns: PatternSource<'_>,
        today: NaiveDate,
    ) -> SuggestionOutcome {
        let _span = larder_observability::suggestion_span!(pantry.len(), manual.len()).entered();

        let entries: &[PatternEntry] = match patterns {
            PatternSource::Available(entries) => entries,
            PatternSource::Unavailable(_) => &[],
        };
        let ctx = RankingContext {
            pantry,
            patterns: entries.iter().map(|e| (&e.product_key, e)).collect(),
            today,
            config: &self.config,
            predictor: &self.predictor,
        };

        let mut emitted = Emitted::default();
        if let PatternSource::Available(_) = patterns {
            strategies::consumption_pattern::collect(&ctx, &mut emitted);
            strategies::depletion::collect(&ctx, &mut emitted);
        }
        strategies::low_stock::collect(&ctx, &mut emitted);
        strategies::expired::collect(&ctx, &mut emitted);
        strategies::manual::collect(&ctx, manual, &mut emitted);

        let mut suggestions = emitted.into_vec();
        sort_suggestions(&mut suggestions);

        let outcome = match patterns {
            PatternSource::Available(_) => SuggestionOutcome::complete(suggestions),
            PatternSource::Unavailable(reason) => SuggestionOutcome::Degraded {
                suggestions,
                reason: reason.to_string(),
            },
        };
        larder_observability::tracing_setup::events::suggestions_generated(
            outcome.len(),
            outcome.is_degraded(),
        );
        outcome
    }
}

/// Priority descending, then estimated days ascending (absent last), then key.
pub fn sort_suggestions(suggestions: &mut [ShoppingSuggestion]) {
    suggestions.sort_by(compare);
}

fn compare(a: &ShoppingSuggestion, b: &ShoppingSuggestion) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| {
            match (a.estimated_days_until_needed, b.estimated_days_until_needed) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        })
        .then_with(|| a.product_key.cmp(&b.product_key))
}
