//! Batched Sieve of Atkin.
//!
//! Classifies candidates by the parity of lattice solutions to three fixed
//! quadratic forms modulo 12, then removes multiples of squares of the
//! surviving values. The (x, y) scan is chunked along the y axis so a chunk
//! never materializes more than `batch_size` lattice points.
//!
//! The sieve is bound-oriented: the requested count is scaled by a fixed
//! margin to a numeric search limit, and the scan repeats with a doubled
//! limit in the unlikely case a pass yields fewer primes than requested.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::batch::LatticePlan;
use crate::constants::ATKIN_BOUND_MARGIN;
use crate::method::Method;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::{CancellationToken, ProgressUpdate};
use crate::sieve::{CoreSieve, SieveError};

/// Batched Sieve of Atkin.
///
/// # Example
/// ```
/// use primecalc_core::atkin::AtkinSieve;
/// use primecalc_core::sieve::CoreSieve;
/// use primecalc_core::observers::NoOpObserver;
/// use primecalc_core::options::Options;
/// use primecalc_core::progress::CancellationToken;
///
/// let sieve = AtkinSieve::new();
/// let cancel = CancellationToken::new();
/// let observer = NoOpObserver::new();
/// let opts = Options::default();
/// let primes = sieve.primes_core(&cancel, &observer, 0, 6, &opts).unwrap();
/// assert_eq!(&primes[..6], &[2, 3, 5, 7, 11, 13]);
/// ```
pub struct AtkinSieve;

impl AtkinSieve {
    /// Create a new `AtkinSieve`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Integer square root (floor).
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn isqrt(n: u64) -> u64 {
        let mut r = (n as f64).sqrt() as u64;
        while r > 0 && r * r > n {
            r -= 1;
        }
        while (r + 1) * (r + 1) <= n {
            r += 1;
        }
        r
    }

    /// One full lattice pass up to `limit`. Returns the primes <= `limit`,
    /// sorted ascending.
    #[allow(clippy::cast_precision_loss)]
    fn scan(
        &self,
        limit: u64,
        batch_size: usize,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        sieve_index: usize,
    ) -> Result<Vec<u64>, SieveError> {
        let sz = Self::isqrt(limit);
        let plan = LatticePlan::new(sz, batch_size);
        let chunks = plan.chunk_count();

        // Value -> number of lattice hits across all three forms.
        let mut hits: HashMap<u64, u32> = HashMap::new();

        let frozen = observer.freeze();
        for i in 0..chunks {
            cancel.check_cancelled()?;

            let (y_start, y_end) = plan.chunk_bounds(i);
            for x in 1..=plan.sz() {
                let x2 = x * x;
                for y in y_start..y_end {
                    let y2 = y * y;

                    let a = 4 * x2 + y2;
                    if a <= limit && matches!(a % 12, 1 | 5) {
                        *hits.entry(a).or_insert(0) += 1;
                    }

                    let b = 3 * x2 + y2;
                    if b <= limit && b % 12 == 7 {
                        *hits.entry(b).or_insert(0) += 1;
                    }

                    // Form C is only defined below the diagonal
                    if x > y {
                        let c = 3 * x2 - y2;
                        if c <= limit && c % 12 == 11 {
                            *hits.entry(c).or_insert(0) += 1;
                        }
                    }
                }
            }

            let progress = (i + 1) as f64 / chunks as f64;
            if frozen.should_report(progress) {
                frozen.update(progress);
                observer.on_progress(&ProgressUpdate::new(
                    sieve_index,
                    "Atkin",
                    progress,
                    i + 1,
                    chunks,
                ));
            }
        }

        // Parity step: odd hit count => candidate. A sorted set keeps the
        // square-free sweep deterministic ascending.
        let mut candidates: BTreeSet<u64> = hits
            .into_iter()
            .filter(|&(_, count)| count % 2 == 1)
            .map(|(value, _)| value)
            .collect();

        // Square-free elimination, p ascending: a value removed by a smaller
        // p's square must not eliminate anything itself. The sweep runs
        // through sz inclusive, the largest value whose square fits below
        // the limit.
        for p in 5..=sz {
            if !candidates.contains(&p) {
                continue;
            }
            let p2 = p * p;
            let mut multiple = p2;
            while multiple <= limit {
                candidates.remove(&multiple);
                multiple += p2;
            }
        }

        let mut primes = Vec::with_capacity(candidates.len() + 2);
        primes.push(2);
        primes.push(3);
        primes.extend(candidates);
        Ok(primes)
    }
}

impl Default for AtkinSieve {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreSieve for AtkinSieve {
    fn primes_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        sieve_index: usize,
        n: u64,
        opts: &Options,
    ) -> Result<Vec<u64>, SieveError> {
        let batch_size = opts.batch_size_for(Method::Atkin);
        if batch_size == 0 {
            return Err(SieveError::Config("batch size must be positive".into()));
        }

        let mut limit = n.saturating_mul(ATKIN_BOUND_MARGIN);
        loop {
            let primes = self.scan(limit, batch_size, cancel, observer, sieve_index)?;
            if primes.len() as u64 >= n {
                observer.on_progress(&ProgressUpdate::done(sieve_index, "Atkin"));
                return Ok(primes);
            }
            debug!(
                limit,
                found = primes.len(),
                requested = n,
                "scan bound too small, rescanning with doubled limit"
            );
            limit = limit.saturating_mul(2);
        }
    }

    fn name(&self) -> &'static str {
        "Atkin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::NoOpObserver;

    fn compute(n: u64, batch_size: Option<usize>) -> Vec<u64> {
        let sieve = AtkinSieve::new();
        let cancel = CancellationToken::new();
        let observer = NoOpObserver::new();
        let opts = Options {
            batch_size,
            ..Default::default()
        };
        sieve
            .primes_core(&cancel, &observer, 0, n, &opts)
            .unwrap()
    }

    #[test]
    fn isqrt_exact_and_floor() {
        assert_eq!(AtkinSieve::isqrt(0), 0);
        assert_eq!(AtkinSieve::isqrt(1), 1);
        assert_eq!(AtkinSieve::isqrt(24), 4);
        assert_eq!(AtkinSieve::isqrt(25), 5);
        assert_eq!(AtkinSieve::isqrt(26), 5);
        assert_eq!(AtkinSieve::isqrt(999_999_999_999), 999_999);
        assert_eq!(AtkinSieve::isqrt(1_000_000_000_000), 1_000_000);
    }

    #[test]
    fn atkin_small_prefix() {
        let primes = compute(10, None);
        assert_eq!(
            &primes[..15],
            &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn atkin_65th_prime() {
        // First count past the fast-path table
        let primes = compute(65, None);
        assert_eq!(primes[63], 311);
        assert_eq!(primes[64], 313);
    }

    #[test]
    fn atkin_sorted_no_duplicates() {
        let primes = compute(200, None);
        for pair in primes.windows(2) {
            assert!(pair[0] < pair[1], "not strictly ascending: {pair:?}");
        }
    }

    #[test]
    fn atkin_square_free_at_bound_edge() {
        // n = 9 gives limit 180, whose root 13 has an odd-parity lattice
        // count for 169 = 13^2. The square-free sweep must reach p = 13.
        let primes = compute(9, None);
        assert!(primes.contains(&13));
        assert!(primes.contains(&167));
        assert!(!primes.contains(&169));
        assert_eq!(primes[8], 23);
    }

    #[test]
    fn atkin_square_free_property() {
        let primes = compute(300, None);
        let limit = *primes.last().unwrap();
        for &p in primes.iter().filter(|&&p| p >= 5) {
            let p2 = p * p;
            let mut multiple = p2;
            while multiple <= limit {
                assert!(
                    primes.binary_search(&multiple).is_err(),
                    "square multiple {multiple} of {p} survived"
                );
                multiple += p2;
            }
        }
    }

    #[test]
    fn atkin_batch_width_does_not_change_output() {
        let reference = compute(100, None);
        for batch_size in [7, 100, 4096] {
            assert_eq!(compute(100, Some(batch_size)), reference);
        }
    }

    #[test]
    fn atkin_cancellation() {
        let sieve = AtkinSieve::new();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let observer = NoOpObserver::new();
        let opts = Options::default();
        let result = sieve.primes_core(&cancel, &observer, 0, 1000, &opts);
        assert!(matches!(result, Err(SieveError::Cancelled)));
    }
}
