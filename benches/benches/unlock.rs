//! Unlock proof benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ledger_benches::unlock_request;
use rand::rngs::StdRng;
use rand::SeedableRng;
use unlock_proofs::{
    prove_unlock, verify_batch, verify_unlock, UnlockCircuit, UnlockProof, UnlockWitness,
};

fn bench_native(c: &mut Criterion) {
    let mut group = c.benchmark_group("unlock_native");
    let request = unlock_request(1);
    let mut rng = StdRng::seed_from_u64(2);
    let proof = prove_unlock(&mut rng, &request).unwrap();

    group.bench_function("prove", |b| {
        b.iter(|| prove_unlock(&mut rng, black_box(&request)).unwrap())
    });

    group.bench_function("verify", |b| {
        b.iter(|| verify_unlock(black_box(&proof), &request.context).unwrap())
    });

    group.bench_function("build_witness", |b| {
        b.iter(|| UnlockWitness::build(black_box(&proof), true).unwrap())
    });

    group.finish();
}

fn bench_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("unlock_circuit");
    group.sample_size(10);

    let request = unlock_request(3);
    let proof = prove_unlock(&mut StdRng::seed_from_u64(4), &request).unwrap();
    let circuit = UnlockCircuit::new(UnlockWitness::build(&proof, true).unwrap());

    group.bench_function("synthesize", |b| b.iter(|| circuit.to_r1cs().unwrap()));

    let cs = circuit.to_r1cs().unwrap();
    let inputs = proof.statement().public_inputs();
    group.bench_function("verify_with_inputs", |b| {
        b.iter(|| cs.verify_with_inputs(black_box(&inputs)))
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("unlock_batch");

    for size in [4usize, 16, 64].iter() {
        let proofs: Vec<UnlockProof> = (0..*size as u64)
            .map(|seed| {
                let request = unlock_request(seed);
                prove_unlock(&mut StdRng::seed_from_u64(seed), &request).unwrap()
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("verify", size), &proofs, |b, proofs| {
            b.iter(|| verify_batch(proofs))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_native, bench_circuit, bench_batch);
criterion_main!(benches);
