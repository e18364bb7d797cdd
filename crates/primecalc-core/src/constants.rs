//! Constants for sieve defaults, limits, and dispatch.

/// Default batch width (lattice points per chunk) for the Atkin sieve.
pub const DEFAULT_ATKIN_BATCH_SIZE: usize = 10_000_000;

/// Default batch width (candidate range per pass) for the Eratosthenes sieve.
pub const DEFAULT_ERATOSTHENES_BATCH_SIZE: usize = 1_000_000;

/// Hard ceiling on the requested count for the Atkin sieve, checked on the
/// raw count before bound scaling.
pub const ATKIN_COUNT_LIMIT: u64 = 50_000_000;

/// Fixed multiplier turning a requested count into Atkin's numeric search
/// bound. p(n) ~ n(ln n + ln ln n) stays below 20n across the supported
/// range (p(50,000,000) = 982,451,653 < 10^9); a pass that still comes up
/// short triggers a rescan with a doubled bound.
pub const ATKIN_BOUND_MARGIN: u64 = 20;

/// Minimum progress change (1%) before reporting an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Number of primes served from the precomputed table (fast path).
pub const PRIME_TABLE_LEN: usize = 64;

/// Precomputed first 64 primes, used as the fast path for small requests.
///
/// The 64th prime is 311. Larger requests go through the full sieves.
pub const PRIME_TABLE: [u64; PRIME_TABLE_LEN] = {
    let mut table = [0u64; PRIME_TABLE_LEN];
    let mut count = 0;
    let mut candidate = 2u64;
    while count < PRIME_TABLE_LEN {
        let mut is_prime = true;
        let mut d = 2;
        while d * d <= candidate {
            if candidate % d == 0 {
                is_prime = false;
                break;
            }
            d += 1;
        }
        if is_prime {
            table[count] = candidate;
            count += 1;
        }
        candidate += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Computation timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Method results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or arguments.
    pub const ERROR_CONFIG: i32 = 4;
    /// Computation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
