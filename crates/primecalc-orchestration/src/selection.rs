//! Sieve selection logic.

use std::sync::Arc;

use primecalc_core::method::Method;
use primecalc_core::registry::SieveFactory;
use primecalc_core::sieve::{Sieve, SieveError};

/// Get sieves to run based on the method selection string.
///
/// `"all"` selects every available method for cross-checking; any other
/// value must name a single supported method.
pub fn get_sieves_to_run(
    method: &str,
    factory: &dyn SieveFactory,
) -> Result<Vec<(Method, Arc<dyn Sieve>)>, SieveError> {
    match method {
        "all" => Ok(factory
            .available()
            .iter()
            .map(|&m| (m, factory.get(m)))
            .collect()),
        name => {
            let method: Method = name.parse()?;
            Ok(vec![(method, factory.get(method))])
        }
    }
}
