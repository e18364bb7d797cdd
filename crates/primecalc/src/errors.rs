//! Error handling and exit codes.

use primecalc_core::constants::exit_codes;
use primecalc_core::sieve::SieveError;

/// Map an application error to a process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SieveError>() {
        Some(SieveError::InvalidInput(_) | SieveError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(SieveError::Cancelled) => exit_codes::ERROR_CANCELED,
        Some(SieveError::Timeout(_)) => exit_codes::ERROR_TIMEOUT,
        Some(SieveError::Mismatch) => exit_codes::ERROR_MISMATCH,
        Some(
            SieveError::Computation(_) | SieveError::InsufficientPrimes { .. },
        )
        | None => exit_codes::ERROR_GENERIC,
    }
}
