//! Closed dispatch over the supported sieve algorithms.
//!
//! A tagged enum rather than an open registry keyed by strings: the
//! per-method limit and default batch width are `match` arms, and the
//! unknown-method error is produced in exactly one place (`FromStr`).

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    ATKIN_COUNT_LIMIT, DEFAULT_ATKIN_BATCH_SIZE, DEFAULT_ERATOSTHENES_BATCH_SIZE,
};
use crate::sieve::SieveError;

/// Supported sieve algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Batched Sieve of Atkin (bound-oriented, hard count ceiling).
    Atkin,
    /// Incremental batched Sieve of Eratosthenes (count-oriented).
    Eratosthenes,
}

impl Method {
    /// All supported methods, in presentation order.
    pub const ALL: [Method; 2] = [Method::Atkin, Method::Eratosthenes];

    /// Canonical CLI name of this method.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Method::Atkin => "atkin",
            Method::Eratosthenes => "eratosthenes",
        }
    }

    /// Hard ceiling on the requested count, where one is enforced.
    #[must_use]
    pub const fn hard_limit(self) -> Option<u64> {
        match self {
            Method::Atkin => Some(ATKIN_COUNT_LIMIT),
            Method::Eratosthenes => None,
        }
    }

    /// Default batch width when the caller supplies none.
    #[must_use]
    pub const fn default_batch_size(self) -> usize {
        match self {
            Method::Atkin => DEFAULT_ATKIN_BATCH_SIZE,
            Method::Eratosthenes => DEFAULT_ERATOSTHENES_BATCH_SIZE,
        }
    }

    /// Validate a requested count against this method's constraints.
    pub fn check_count(self, n: u64) -> Result<(), SieveError> {
        if n == 0 {
            return Err(SieveError::InvalidInput(
                "n must be at least 1 (prime positions are 1-indexed)".into(),
            ));
        }
        if let Some(limit) = self.hard_limit() {
            if n > limit {
                return Err(SieveError::InvalidInput(format!(
                    "n is too high for method \"{}\" (maximum {limit})",
                    self.name()
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "atkin" => Ok(Method::Atkin),
            "eratosthenes" => Ok(Method::Eratosthenes),
            other => {
                let valid: Vec<&str> = Method::ALL.iter().map(|m| m.name()).collect();
                Err(SieveError::InvalidInput(format!(
                    "unknown method \"{other}\": available options: {valid:?}"
                )))
            }
        }
    }
}
