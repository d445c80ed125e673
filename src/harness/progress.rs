//! Progress side channel for the timing harness.

use crate::domain::Observation;

/// Receives each observation as soon as it has been measured.
pub trait ProgressSink {
    fn observe(&mut self, observation: &Observation);
}

impl<F: FnMut(&Observation)> ProgressSink for F {
    fn observe(&mut self, observation: &Observation) {
        self(observation)
    }
}

/// Discards progress (non-verbose runs).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn observe(&mut self, _observation: &Observation) {}
}

/// Emits one `tracing` event per observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn observe(&mut self, observation: &Observation) {
        tracing::info!(
            n = observation.size,
            seconds = observation.seconds,
            "n={}: {:e}",
            observation.size,
            observation.seconds
        );
    }
}
