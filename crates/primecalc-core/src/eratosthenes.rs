//! Incremental batched Sieve of Eratosthenes.
//!
//! Grows the prime accumulator batch by batch: each new candidate range is
//! filtered against the primes found so far, then self-sieved for composites
//! whose smallest factor lies inside the batch itself, until the accumulator
//! holds the requested count. No hard ceiling is enforced for this method.

use tracing::debug;

use crate::batch::CandidateBatch;
use crate::method::Method;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::{CancellationToken, ProgressUpdate};
use crate::sieve::{CoreSieve, SieveError};

/// Incremental batched Sieve of Eratosthenes.
///
/// # Example
/// ```
/// use primecalc_core::eratosthenes::EratosthenesSieve;
/// use primecalc_core::sieve::CoreSieve;
/// use primecalc_core::observers::NoOpObserver;
/// use primecalc_core::options::Options;
/// use primecalc_core::progress::CancellationToken;
///
/// let sieve = EratosthenesSieve::new();
/// let cancel = CancellationToken::new();
/// let observer = NoOpObserver::new();
/// let opts = Options { batch_size: Some(1_000), ..Default::default() };
/// let primes = sieve.primes_core(&cancel, &observer, 0, 6, &opts).unwrap();
/// assert_eq!(primes[5], 13);
/// ```
pub struct EratosthenesSieve;

impl EratosthenesSieve {
    /// Create a new `EratosthenesSieve`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Filter `batch` against the known primes, ascending. Returns true when
    /// the early exit fired: the batch emptied, or the current prime's square
    /// exceeds the batch maximum so no known prime can eliminate anything
    /// further.
    fn eliminate_known(batch: &mut CandidateBatch, known: &[u64]) -> bool {
        for &p in known {
            batch.eliminate_multiples_of(p);
            match batch.max() {
                None => return true,
                Some(max) if p.saturating_mul(p) > max => return true,
                Some(_) => {}
            }
        }
        false
    }

    /// Self-sieve: trial division against primes discovered inside the batch.
    /// Runs only when every known prime was applied without the early exit,
    /// so surviving composites can only have factors inside the batch.
    fn self_sieve(batch: &mut CandidateBatch) {
        let mut i = 0;
        while let Some(candidate) = batch.get(i) {
            let Some(max) = batch.max() else { break };
            if candidate.saturating_mul(candidate) > max {
                break;
            }
            batch.eliminate_multiples_of(candidate);
            i += 1;
        }
    }
}

impl Default for EratosthenesSieve {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreSieve for EratosthenesSieve {
    #[allow(clippy::cast_precision_loss)]
    fn primes_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        sieve_index: usize,
        n: u64,
        opts: &Options,
    ) -> Result<Vec<u64>, SieveError> {
        let batch_size = opts.batch_size_for(Method::Eratosthenes) as u64;
        if batch_size == 0 {
            return Err(SieveError::Config("batch size must be positive".into()));
        }

        let mut res: Vec<u64> = Vec::new();
        let mut batch = CandidateBatch::from_range(2, batch_size);
        let mut step: u64 = 0;

        let frozen = observer.freeze();
        while (res.len() as u64) < n {
            cancel.check_cancelled()?;
            step += 1;

            if !Self::eliminate_known(&mut batch, &res) {
                Self::self_sieve(&mut batch);
            }

            res.extend_from_slice(batch.values());
            debug!(step, found = res.len(), "batch sieved");

            let progress = (res.len() as f64 / n as f64).min(1.0);
            if frozen.should_report(progress) {
                frozen.update(progress);
                observer.on_progress(&ProgressUpdate::new(
                    sieve_index,
                    "Eratosthenes",
                    progress,
                    res.len() as u64,
                    n,
                ));
            }

            batch = CandidateBatch::from_range(batch_size * step, batch_size * (step + 1));
        }

        observer.on_progress(&ProgressUpdate::done(sieve_index, "Eratosthenes"));
        Ok(res)
    }

    fn name(&self) -> &'static str {
        "Eratosthenes"
    }
}
