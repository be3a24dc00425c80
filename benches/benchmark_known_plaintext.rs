use affinecrack::cipher::encrypt_bytes;
use affinecrack::known_plaintext::{analyze_known_plaintext, SampleSelection};
use affinecrack::modular::inverse;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("modular inverse of every odd byte", |b| {
        b.iter(|| {
            for m in (1..256).step_by(2) {
                black_box(inverse(black_box(m), 256).ok());
            }
        })
    });

    let plaintext: Vec<u8> = (0..=255).collect();
    let ciphertext = encrypt_bytes(77, 13, &plaintext);
    c.bench_function("known plaintext sequential", |b| {
        b.iter(|| {
            analyze_known_plaintext(
                black_box(&plaintext),
                black_box(&ciphertext),
                SampleSelection::Sequential,
            )
        })
    });
    c.bench_function("known plaintext with reduction", |b| {
        b.iter(|| {
            analyze_known_plaintext(
                black_box(&[130u8, 2][..]),
                black_box(&[141u8, 13][..]),
                SampleSelection::Sequential,
            )
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
