//! Request statistics tracking.
//!
//! This module provides thread-safe counters for request outcomes, read by the
//! `/status` and `/metrics` endpoints.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use strum::IntoEnumIterator;

use super::types::RequestOutcome;

/// Thread-safe request statistics tracker.
///
/// Every [`RequestOutcome`] variant gets an atomic counter initialized to zero
/// at construction, so the map is never written after `new()` and can be
/// shared across handlers with `Arc` without locking.
pub struct RequestStats {
    outcomes: HashMap<RequestOutcome, AtomicUsize>,
    started_at: Instant,
}

impl RequestStats {
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in RequestOutcome::iter() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }

        RequestStats {
            outcomes,
            started_at: Instant::now(),
        }
    }

    /// Increment the counter for an outcome.
    pub fn record(&self, outcome: RequestOutcome) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in RequestStats initialization.",
                outcome
            );
        }
    }

    /// Get the count for an outcome.
    pub fn get_count(&self, outcome: RequestOutcome) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total requests across all outcomes.
    pub fn total_requests(&self) -> usize {
        RequestOutcome::iter().map(|o| self.get_count(o)).sum()
    }

    /// Total failed requests (invalid input and store failures).
    pub fn total_errors(&self) -> usize {
        RequestOutcome::iter()
            .filter(RequestOutcome::is_error)
            .map(|o| self.get_count(o))
            .sum()
    }

    /// Seconds since the tracker was created.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

impl Default for RequestStats {
    fn default() -> Self {
        Self::new()
    }
}
