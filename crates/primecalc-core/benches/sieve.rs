//! Criterion benchmarks comparing the two sieve algorithms.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use primecalc_core::atkin::AtkinSieve;
use primecalc_core::eratosthenes::EratosthenesSieve;
use primecalc_core::observers::NoOpObserver;
use primecalc_core::options::Options;
use primecalc_core::progress::CancellationToken;
use primecalc_core::sieve::CoreSieve;

fn bench_sieves(c: &mut Criterion) {
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    let opts = Options {
        batch_size: Some(100_000),
        ..Default::default()
    };

    let mut group = c.benchmark_group("nth_prime");
    for n in [500u64, 2_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("atkin", n), &n, |b, &n| {
            let sieve = AtkinSieve::new();
            b.iter(|| sieve.primes_core(&cancel, &observer, 0, n, &opts).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("eratosthenes", n), &n, |b, &n| {
            let sieve = EratosthenesSieve::new();
            b.iter(|| sieve.primes_core(&cancel, &observer, 0, n, &opts).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sieves);
criterion_main!(benches);
