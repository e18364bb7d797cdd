//! Sieve traits and the `PrimeSieve` decorator.
//!
//! `Sieve` is the public trait consumed by orchestration.
//! `CoreSieve` is the internal trait implemented by algorithms.
//! `PrimeSieve` is a decorator that adds the small-count fast path (n <= 64)
//! and a pre-delegation cancellation check.

use std::sync::Arc;

use crate::constants::{PRIME_TABLE, PRIME_TABLE_LEN};
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::{CancellationToken, ProgressUpdate};

/// Error type for sieve runs.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SieveError {
    /// The request itself is invalid (count, method, or limit violation).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A computation error occurred.
    #[error("computation error: {0}")]
    Computation(String),

    /// The sieve returned a shorter sequence than the requested position.
    #[error("sieve produced {found} primes, fewer than the requested {requested}")]
    InsufficientPrimes {
        /// The 1-indexed position that was requested.
        requested: u64,
        /// How many primes the sieve actually produced.
        found: usize,
    },

    /// Computation was cancelled.
    #[error("computation cancelled")]
    Cancelled,

    /// Computation timed out.
    #[error("computation timed out: {0}")]
    Timeout(String),

    /// Results from different methods don't match.
    #[error("result mismatch between methods")]
    Mismatch,
}

/// Public trait for prime sieves, consumed by orchestration.
pub trait Sieve: Send + Sync {
    /// Produce a sorted, duplicate-free sequence of at least `n` primes.
    fn primes(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        sieve_index: usize,
        n: u64,
        opts: &Options,
    ) -> Result<Vec<u64>, SieveError>;

    /// Get the name of this sieve.
    fn name(&self) -> &'static str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `PrimeSieve` which adds the fast path and cancellation check.
pub trait CoreSieve: Send + Sync {
    /// Run the full sieve for counts beyond the precomputed table.
    fn primes_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        sieve_index: usize,
        n: u64,
        opts: &Options,
    ) -> Result<Vec<u64>, SieveError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;
}

/// Decorator that wraps a `CoreSieve` with the small-count fast path.
pub struct PrimeSieve {
    inner: Arc<dyn CoreSieve>,
}

impl PrimeSieve {
    /// Create a new `PrimeSieve` wrapping the given core sieve.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreSieve>) -> Self {
        Self { inner }
    }

    /// Fast path for small n (n <= 64) using the precomputed table.
    #[allow(clippy::cast_possible_truncation)]
    fn primes_small(n: u64) -> Vec<u64> {
        PRIME_TABLE[..n as usize].to_vec()
    }
}

impl Sieve for PrimeSieve {
    fn primes(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        sieve_index: usize,
        n: u64,
        opts: &Options,
    ) -> Result<Vec<u64>, SieveError> {
        // Fast path for small n
        if n <= PRIME_TABLE_LEN as u64 {
            observer.on_progress(&ProgressUpdate::done(sieve_index, self.inner.name()));
            return Ok(Self::primes_small(n));
        }

        // Check cancellation before starting
        if cancel.is_cancelled() {
            return Err(SieveError::Cancelled);
        }

        // Delegate to core algorithm
        self.inner
            .primes_core(cancel, observer, sieve_index, n, opts)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
