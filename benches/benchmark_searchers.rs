use affinecrack::checkers::signature::Signature;
use affinecrack::cipher::encrypt_bytes;
use affinecrack::searchers::brute_force::BruteForce;
use affinecrack::searchers::exhaustive_key::ExhaustiveKey;
use affinecrack::searchers::interface::{Search, Searcher};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    let brute_force = Searcher::<BruteForce>::new();
    let exhaustive_key = Searcher::<ExhaustiveKey>::new();

    let mut group = c.benchmark_group("affine key search");
    // (m, b) pairs whose inverse sits early, in the middle and at the end of the search
    for (m, b) in [(1u8, 0u8), (3, 7), (255, 255)] {
        let ciphertext = encrypt_bytes(m, b, &[0xFF, 0xD8, 0xFF, 0xE0]);
        group.bench_with_input(
            BenchmarkId::new("brute force", format!("m={} b={}", m, b)),
            &ciphertext,
            |bencher, ciphertext| {
                bencher.iter(|| brute_force.search(black_box(ciphertext), &Signature::JPEG))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("exhaustive key", format!("m={} b={}", m, b)),
            &ciphertext,
            |bencher, ciphertext| {
                bencher.iter(|| exhaustive_key.search(black_box(ciphertext), &Signature::JPEG))
            },
        );
    }
    group.finish();

    c.bench_function("brute force key unknown", |bencher| {
        bencher.iter(|| brute_force.search(black_box(&[9u8, 9][..]), &Signature::JPEG))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
