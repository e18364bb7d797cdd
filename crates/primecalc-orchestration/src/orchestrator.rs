//! Core orchestration: validation, execution, and result analysis.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use primecalc_core::method::Method;
use primecalc_core::observer::ProgressObserver;
use primecalc_core::observers::NoOpObserver;
use primecalc_core::options::Options;
use primecalc_core::progress::CancellationToken;
use primecalc_core::sieve::{Sieve, SieveError};

use crate::interfaces::{ComputationResult, SieveOutcome};

/// Validate the requested count against every selected method.
///
/// Runs before any sieve executes: invalid requests fail fast with no
/// partial work.
pub fn validate_request(n: u64, sieves: &[(Method, Arc<dyn Sieve>)]) -> Result<(), SieveError> {
    for (method, _) in sieves {
        method.check_count(n)?;
    }
    Ok(())
}

/// Execute all given sieves and extract the n-th prime from each.
pub fn execute_sieves(
    sieves: &[(Method, Arc<dyn Sieve>)],
    n: u64,
    opts: &Options,
    cancel: &CancellationToken,
    timeout: Option<Duration>,
) -> Vec<ComputationResult> {
    execute_sieves_with_observer(sieves, n, opts, cancel, timeout, &NoOpObserver::new())
}

/// Execute all given sieves with a progress observer.
pub fn execute_sieves_with_observer(
    sieves: &[(Method, Arc<dyn Sieve>)],
    n: u64,
    opts: &Options,
    cancel: &CancellationToken,
    timeout: Option<Duration>,
    observer: &dyn ProgressObserver,
) -> Vec<ComputationResult> {
    let start_time = Instant::now();

    if sieves.len() == 1 {
        // Single sieve: run directly
        let (_, sieve) = &sieves[0];
        return vec![run_sieve(sieve, 0, n, opts, cancel, observer)];
    }

    // Multiple sieves: run in parallel using rayon
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    sieves
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(i, (method, sieve))| {
            // Timeout is checked between dispatches, not mid-computation
            if let Some(timeout) = timeout {
                if start_time.elapsed() > timeout {
                    return ComputationResult {
                        algorithm: sieve.name().to_string(),
                        outcome: Err(SieveError::Timeout(
                            "deadline exceeded before dispatch".into(),
                        )),
                        duration: Duration::ZERO,
                    };
                }
            }

            debug!(method = %method, n, "dispatching sieve");
            run_sieve(sieve, i, n, opts, cancel, observer)
        })
        .collect()
}

fn run_sieve(
    sieve: &Arc<dyn Sieve>,
    sieve_index: usize,
    n: u64,
    opts: &Options,
    cancel: &CancellationToken,
    observer: &dyn ProgressObserver,
) -> ComputationResult {
    let start = Instant::now();
    let outcome = sieve
        .primes(cancel, observer, sieve_index, n, opts)
        .and_then(|primes| {
            // 1-indexed request, 0-indexed sequence
            let position = n.checked_sub(1).and_then(|i| usize::try_from(i).ok());
            match position.and_then(|i| primes.get(i)) {
                Some(&value) => Ok(SieveOutcome {
                    value,
                    primes_found: primes.len(),
                }),
                None => Err(SieveError::InsufficientPrimes {
                    requested: n,
                    found: primes.len(),
                }),
            }
        });

    ComputationResult {
        algorithm: sieve.name().to_string(),
        outcome,
        duration: start.elapsed(),
    }
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[ComputationResult]) -> Result<(), SieveError> {
    let valid: Vec<&SieveOutcome> = results
        .iter()
        .filter_map(|r| r.outcome.as_ref().ok())
        .collect();

    if valid.is_empty() {
        return Err(SieveError::Computation("no valid results".into()));
    }

    // Compare all results to the first valid one
    let first = valid[0].value;
    for outcome in &valid[1..] {
        if outcome.value != first {
            return Err(SieveError::Mismatch);
        }
    }

    Ok(())
}
