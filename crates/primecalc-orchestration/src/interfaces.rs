//! Orchestration interfaces.

use std::time::Duration;

use primecalc_core::progress::ProgressUpdate;
use primecalc_core::sieve::SieveError;

/// Trait for reporting progress to the user.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress update.
    fn report(&self, update: &ProgressUpdate);

    /// Report completion.
    fn complete(&self);
}

/// Successful outcome of a single sieve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SieveOutcome {
    /// The n-th prime.
    pub value: u64,
    /// Total primes the sieve produced (may overshoot the request).
    pub primes_found: usize,
}

/// Result of a single sieve run.
#[derive(Debug, Clone)]
pub struct ComputationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed outcome or a structured error.
    pub outcome: Result<SieveOutcome, SieveError>,
    /// Computation duration.
    pub duration: Duration,
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a successful outcome.
    fn present_result(
        &self,
        algorithm: &str,
        n: u64,
        outcome: &SieveOutcome,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison across methods.
    fn present_comparison(&self, results: &[ComputationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Null progress reporter (does nothing).
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {
    fn report(&self, _update: &ProgressUpdate) {}
    fn complete(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_reporter() {
        let reporter = NullProgressReporter;
        reporter.report(&ProgressUpdate::new(0, "test", 0.5, 1, 2));
        reporter.complete();
    }

    #[test]
    fn computation_result() {
        let result = ComputationResult {
            algorithm: "Eratosthenes".into(),
            outcome: Ok(SieveOutcome {
                value: 13,
                primes_found: 8,
            }),
            duration: Duration::from_millis(100),
        };
        assert_eq!(result.algorithm, "Eratosthenes");
        assert_eq!(result.outcome.unwrap().value, 13);
    }
}
