// crates/kem/benches/kyber.rs

//! Benchmarks for the Kyber KEM variants

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lattica_api::Kem;
use lattica_kem::kyber::{Kyber1024, Kyber512, Kyber768};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

macro_rules! bench_kyber_variant {
    ($fn_name:ident, $kem:ty, $group:expr) => {
        fn $fn_name(c: &mut Criterion) {
            let mut group = c.benchmark_group($group);
            let mut rng = ChaChaRng::seed_from_u64(42);

            group.bench_function("keygen", |b| {
                b.iter(|| {
                    let _keypair = <$kem>::keypair(&mut rng).unwrap();
                });
            });

            let (pk, _) = <$kem>::keypair(&mut rng).unwrap();
            group.bench_function("encapsulate", |b| {
                b.iter(|| {
                    let (_ct, _ss) = <$kem>::encapsulate(&mut rng, black_box(&pk)).unwrap();
                });
            });

            let (pk, sk) = <$kem>::keypair(&mut rng).unwrap();
            let (ct, _) = <$kem>::encapsulate(&mut rng, &pk).unwrap();
            group.bench_function("decapsulate", |b| {
                b.iter(|| {
                    let _ss = <$kem>::decapsulate(black_box(&sk), black_box(&ct)).unwrap();
                });
            });

            group.bench_function("full_workflow", |b| {
                b.iter(|| {
                    let (pk, sk) = <$kem>::keypair(&mut rng).unwrap();
                    let (ct, ss1) = <$kem>::encapsulate(&mut rng, &pk).unwrap();
                    let ss2 = <$kem>::decapsulate(&sk, &ct).unwrap();
                    (ss1, ss2)
                });
            });

            group.finish();
        }
    };
}

bench_kyber_variant!(bench_kyber512, Kyber512, "Kyber512");
bench_kyber_variant!(bench_kyber768, Kyber768, "Kyber768");
bench_kyber_variant!(bench_kyber1024, Kyber1024, "Kyber1024");

criterion_group!(benches, bench_kyber512, bench_kyber768, bench_kyber1024);
criterion_main!(benches);
