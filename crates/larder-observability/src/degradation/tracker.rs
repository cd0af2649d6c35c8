//! Per-session log of the fallbacks the engine took and whether each
//! component has since come back.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use larder_core::models::DegradationEvent;
use serde::{Deserialize, Serialize};

use crate::tracing_setup::events;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    Active,
    Recovered,
}

/// One logged fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

impl TrackedDegradation {
    pub fn is_active(&self) -> bool {
        self.recovery_status == RecoveryStatus::Active
    }

    fn close(&mut self, at: DateTime<Utc>) {
        self.recovery_status = RecoveryStatus::Recovered;
        self.recovered_at = Some(at);
    }
}

#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    log: Vec<TrackedDegradation>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: DegradationEvent) {
        events::degradation_triggered(&event.component, &event.failure, &event.fallback_used);
        self.log.push(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
    }

    /// Close every open entry for `component`. Returns how many were closed.
    pub fn mark_recovered(&mut self, component: &str) -> usize {
        let now = Utc::now();
        let mut closed = 0;
        for tracked in self
            .log
            .iter_mut()
            .filter(|t| t.is_active() && t.event.component == component)
        {
            tracked.close(now);
            closed += 1;
        }
        if closed > 0 {
            events::degradation_recovered(component);
        }
        closed
    }

    /// Every entry in the order recorded.
    pub fn events(&self) -> &[TrackedDegradation] {
        &self.log
    }

    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.log.iter().filter(|t| t.is_active()).collect()
    }

    pub fn is_degraded(&self, component: &str) -> bool {
        self.log
            .iter()
            .any(|t| t.is_active() && t.event.component == component)
    }

    /// Components with at least one open entry, sorted.
    pub fn degraded_components(&self) -> BTreeSet<&str> {
        self.log
            .iter()
            .filter(|t| t.is_active())
            .map(|t| t.event.component.as_str())
            .collect()
    }

    /// Failures recorded after `since`, for one component or all of them.
    pub fn count_since(&self, component: Option<&str>, since: DateTime<Utc>) -> usize {
        self.log
            .iter()
            .filter(|t| t.event.timestamp > since)
            .filter(|t| component.map_or(true, |c| t.event.component == c))
            .count()
    }
}
