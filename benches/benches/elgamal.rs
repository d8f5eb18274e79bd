//! Twisted ElGamal benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crypto_core::{params, Ciphertext, Scalar};

fn bench_elgamal(c: &mut Criterion) {
    let mut group = c.benchmark_group("elgamal");
    let pk = params().g * Scalar::from(0x1234_5678u64);
    let r = Scalar::from(99u64);
    let a = Ciphertext::encrypt(700, &pk, &r);
    let b = Ciphertext::encrypt(300, &pk, &r);

    group.bench_function("encrypt", |bench| {
        bench.iter(|| Ciphertext::encrypt(black_box(1_000), &pk, &r))
    });

    group.bench_function("add", |bench| bench.iter(|| black_box(a) + black_box(b)));

    group.bench_function("sub_plain", |bench| bench.iter(|| black_box(a).sub_plain(black_box(30))));

    group.finish();
}

criterion_group!(benches, bench_elgamal);
criterion_main!(benches);
