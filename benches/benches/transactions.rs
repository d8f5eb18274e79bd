//! Transaction construction benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crypto_core::{PrivateKey, Signer};
use ledger_benches::set_nft_price_segment;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tx_builder::{construct_set_nft_price_tx, SetNftPrice, TxBody, TxInfo};

fn bench_transactions(c: &mut Criterion) {
    let mut group = c.benchmark_group("transactions");
    let sk = PrivateKey::generate(&mut StdRng::seed_from_u64(7));
    let pk = sk.public_key();
    let segment = set_nft_price_segment(5);
    let body = SetNftPrice::from_segment(&segment).unwrap();
    let tx = construct_set_nft_price_tx(&sk, &segment).unwrap();

    group.bench_function("decode_segment", |b| {
        b.iter(|| SetNftPrice::from_segment(black_box(&segment)).unwrap())
    });

    group.bench_function("msg_hash", |b| b.iter(|| black_box(&body).msg_hash()));

    group.bench_function("construct", |b| {
        b.iter(|| construct_set_nft_price_tx(&sk, black_box(&segment)).unwrap())
    });

    group.bench_function("verify_signature", |b| b.iter(|| tx.verify(black_box(&pk))));

    group.finish();
}

criterion_group!(benches, bench_transactions);
criterion_main!(benches);
