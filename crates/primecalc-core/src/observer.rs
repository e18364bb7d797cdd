//! Observer pattern for progress tracking.
//!
//! The `Freeze()` mechanism gives sieving loops a lock-free throttle so
//! progress deltas below the reporting threshold never leave the hot path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::progress::ProgressUpdate;

/// Observer trait for receiving progress updates.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);

    /// Create a frozen snapshot for lock-free access in hot loops.
    fn freeze(&self) -> FrozenObserver;
}

/// A frozen observer that can be used in hot loops without locks.
///
/// Stores progress as atomic bits for lock-free reads.
pub struct FrozenObserver {
    progress: Arc<AtomicU64>,
    threshold: f64,
}

impl FrozenObserver {
    /// Create a new frozen observer with the given reporting threshold.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            progress: Arc::new(AtomicU64::new(0)),
            threshold,
        }
    }

    /// Check if progress has changed enough to warrant reporting.
    #[inline]
    #[must_use]
    pub fn should_report(&self, new_progress: f64) -> bool {
        let current = f64::from_bits(self.progress.load(Ordering::Relaxed));
        (new_progress - current) >= self.threshold
    }

    /// Update the stored progress value.
    pub fn update(&self, new_progress: f64) {
        self.progress
            .store(new_progress.to_bits(), Ordering::Relaxed);
    }

    /// Get the current progress value.
    #[must_use]
    pub fn current(&self) -> f64 {
        f64::from_bits(self.progress.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PROGRESS_REPORT_THRESHOLD;

    #[test]
    fn frozen_observer_should_report() {
        let frozen = FrozenObserver::new(PROGRESS_REPORT_THRESHOLD);
        assert!(frozen.should_report(0.02));
        frozen.update(0.02);
        assert!(!frozen.should_report(0.025));
        assert!(frozen.should_report(0.04));
    }

    #[test]
    fn frozen_observer_initial_progress_is_zero() {
        let frozen = FrozenObserver::new(0.05);
        assert!((frozen.current() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn frozen_observer_update_and_current() {
        let frozen = FrozenObserver::new(0.01);
        frozen.update(0.5);
        assert!((frozen.current() - 0.5).abs() < f64::EPSILON);
        frozen.update(0.75);
        assert!((frozen.current() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn frozen_observer_zero_threshold_always_reports() {
        let frozen = FrozenObserver::new(0.0);
        assert!(frozen.should_report(0.0));
        frozen.update(0.0);
        assert!(frozen.should_report(0.001));
    }
}
