//! # primecalc-core
//!
//! Core library for the PrimeCalc n-th prime calculator.
//! Implements a batched Sieve of Atkin and an incremental batched Sieve of
//! Eratosthenes behind a common `Sieve` trait.

pub mod atkin;
pub mod batch;
pub mod constants;
pub mod eratosthenes;
pub mod method;
pub mod observer;
pub mod observers;
pub mod options;
pub mod progress;
pub mod registry;
pub mod sieve;

// Re-exports
pub use constants::{
    exit_codes, ATKIN_BOUND_MARGIN, ATKIN_COUNT_LIMIT, DEFAULT_ATKIN_BATCH_SIZE,
    DEFAULT_ERATOSTHENES_BATCH_SIZE, PRIME_TABLE, PROGRESS_REPORT_THRESHOLD,
};
pub use method::Method;
pub use observer::{FrozenObserver, ProgressObserver};
pub use options::Options;
pub use progress::{CancellationToken, ProgressUpdate};
pub use registry::{DefaultFactory, SieveFactory};
pub use sieve::{CoreSieve, PrimeSieve, Sieve, SieveError};

use std::sync::Arc;

/// Compute the n-th prime (1-indexed) with the default method and batch width.
///
/// This is a convenience function for simple use cases. For method choice,
/// progress, or cancellation, use the `Sieve` trait directly.
///
/// # Example
/// ```
/// assert_eq!(primecalc_core::nth_prime(1), 2);
/// assert_eq!(primecalc_core::nth_prime(6), 13);
/// ```
///
/// # Panics
/// Panics if `n` is 0: prime positions are 1-indexed.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn nth_prime(n: u64) -> u64 {
    use eratosthenes::EratosthenesSieve;
    use observers::NoOpObserver;

    assert!(n >= 1, "prime positions are 1-indexed");

    let sieve = PrimeSieve::new(Arc::new(EratosthenesSieve::new()));
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    let opts = Options::default();
    let primes = sieve
        .primes(&cancel, &observer, 0, n, &opts)
        .expect("eratosthenes sieve should not fail for valid input");
    primes[n as usize - 1]
}
