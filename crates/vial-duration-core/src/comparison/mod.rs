//! Comparison of successive estimates.
//!
//! The estimator keeps no state. A caller that wants to show how a
//! recalculation moved the results owns a [`DeltaTracker`] and feeds it each
//! successful estimate in turn.

use crate::models::{EstimateDelta, VialEstimate};

/// Caller-held memory of the last recorded estimate.
#[derive(Debug, Clone, Default)]
pub struct DeltaTracker {
    previous: Option<VialEstimate>,
}

impl DeltaTracker {
    /// Create a tracker with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an estimate and return its change from the previous one.
    ///
    /// Returns `None` the first time, since there is nothing to compare against.
    pub fn record(&mut self, estimate: VialEstimate) -> Option<EstimateDelta> {
        let delta = self.previous.as_ref().map(|prev| estimate.delta_since(prev));
        self.previous = Some(estimate);
        delta
    }

    /// The most recently recorded estimate.
    pub fn previous(&self) -> Option<&VialEstimate> {
        self.previous.as_ref()
    }

    /// Forget the recorded estimate.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

/// Change from `previous` to `current`, if there is a previous estimate.
pub fn compare(current: &VialEstimate, previous: Option<&VialEstimate>) -> Option<EstimateDelta> {
    previous.map(|prev| current.delta_since(prev))
}
