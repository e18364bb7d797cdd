//! Sieve factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::atkin::AtkinSieve;
use crate::eratosthenes::EratosthenesSieve;
use crate::method::Method;
use crate::sieve::{PrimeSieve, Sieve};

/// Factory trait for creating sieves.
pub trait SieveFactory: Send + Sync {
    /// Get or create a sieve for the given method.
    fn get(&self, method: Method) -> Arc<dyn Sieve>;

    /// List all available methods.
    fn available(&self) -> &'static [Method];
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<Method, Arc<dyn Sieve>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_sieve(method: Method) -> Arc<dyn Sieve> {
        match method {
            Method::Atkin => Arc::new(PrimeSieve::new(Arc::new(AtkinSieve::new()))),
            Method::Eratosthenes => {
                Arc::new(PrimeSieve::new(Arc::new(EratosthenesSieve::new())))
            }
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SieveFactory for DefaultFactory {
    fn get(&self, method: Method) -> Arc<dyn Sieve> {
        // Check cache first
        if let Some(sieve) = self.cache.read().get(&method) {
            return Arc::clone(sieve);
        }

        // Create and cache
        let sieve = Self::create_sieve(method);
        self.cache.write().insert(method, Arc::clone(&sieve));
        sieve
    }

    fn available(&self) -> &'static [Method] {
        &Method::ALL
    }
}
