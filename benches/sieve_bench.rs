//! Benchmark for the prime sieve.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazyseq::sieve::{PrimeSieve, primes};
use std::hint::black_box;

fn benchmark_primes(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("primes");

    for count in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("take", count), &count, |bencher, &count| {
            bencher.iter(|| black_box(primes().take(count).to_list()));
        });
    }

    group.bench_function("next_prime_x500", |bencher| {
        bencher.iter(|| {
            let mut sieve = PrimeSieve::new();
            let mut last = 0;
            for _ in 0..500 {
                last = sieve.next_prime().unwrap_or(last);
            }
            black_box(last)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_primes);
criterion_main!(benches);
