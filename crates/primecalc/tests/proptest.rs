//! Property-based tests for the sieve methods.

use std::sync::Arc;

use proptest::prelude::*;

use primecalc_core::method::Method;
use primecalc_core::observers::NoOpObserver;
use primecalc_core::options::Options;
use primecalc_core::progress::CancellationToken;
use primecalc_core::registry::{DefaultFactory, SieveFactory};
use primecalc_core::sieve::Sieve;

fn compute(method: Method, n: u64, batch_size: usize) -> u64 {
    let sieve: Arc<dyn Sieve> = DefaultFactory::new().get(method);
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    let opts = Options {
        batch_size: Some(batch_size),
        ..Default::default()
    };
    let primes = sieve.primes(&cancel, &observer, 0, n, &opts).unwrap();
    primes[usize::try_from(n).unwrap() - 1]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Both methods agree on the n-th prime for random n past the
    /// fast-path table.
    #[test]
    fn atkin_equals_eratosthenes(n in 65u64..400) {
        let a = compute(Method::Atkin, n, 10_000);
        let e = compute(Method::Eratosthenes, n, 10_000);
        prop_assert_eq!(a, e, "p({}) atkin != eratosthenes", n);
    }

    /// The n-th prime is strictly monotonic in n.
    #[test]
    fn nth_prime_monotonic(n in 1u64..300) {
        let p0 = compute(Method::Eratosthenes, n, 5_000);
        let p1 = compute(Method::Eratosthenes, n + 1, 5_000);
        prop_assert!(p0 < p1, "p({}) = {} !< p({}) = {}", n, p0, n + 1, p1);
    }

    /// Batch width never changes the result.
    #[test]
    fn batch_width_invariant(n in 1u64..200, batch_size in 2usize..3000) {
        let reference = compute(Method::Eratosthenes, n, 10_000);
        let value = compute(Method::Eratosthenes, n, batch_size);
        prop_assert_eq!(value, reference);
    }
}

/// Known anchor values for both methods.
#[test]
fn anchors_all_methods() {
    for method in Method::ALL {
        assert_eq!(compute(method, 1, 10_000), 2, "{method} p(1)");
        assert_eq!(compute(method, 2, 10_000), 3, "{method} p(2)");
        assert_eq!(compute(method, 3, 10_000), 5, "{method} p(3)");
        assert_eq!(compute(method, 6, 10_000), 13, "{method} p(6)");
    }
}

/// p(64) is the last table value; p(65) is the first sieved one.
#[test]
fn boundary_64_65_all_methods() {
    for method in Method::ALL {
        assert_eq!(compute(method, 64, 10_000), 311, "{method} p(64)");
        assert_eq!(compute(method, 65, 10_000), 313, "{method} p(65)");
    }
}

/// Two independent runs with identical inputs return identical results.
#[test]
fn idempotent_across_calls() {
    for method in Method::ALL {
        let first = compute(method, 123, 4_096);
        let second = compute(method, 123, 4_096);
        assert_eq!(first, second, "{method} not idempotent");
    }
}
