//! Sieve options and configuration.

use crate::method::Method;
use crate::sieve::SieveError;

/// Options for a sieve run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Batch width override; each method supplies its own default when unset.
    pub batch_size: Option<usize>,
    /// Whether to show verbose output.
    pub verbose: bool,
    /// Whether to show detailed output.
    pub details: bool,
}

impl Options {
    /// Resolve the effective batch width for `method`.
    #[must_use]
    pub fn batch_size_for(&self, method: Method) -> usize {
        self.batch_size
            .unwrap_or_else(|| method.default_batch_size())
    }

    /// Validate option values before any sieve executes.
    pub fn validate(&self) -> Result<(), SieveError> {
        if self.batch_size == Some(0) {
            return Err(SieveError::Config("batch size must be positive".into()));
        }
        Ok(())
    }
}
