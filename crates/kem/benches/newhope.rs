// crates/kem/benches/newhope.rs

//! Benchmarks for the NewHope KEM variants

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lattica_api::Kem;
use lattica_kem::newhope::{NewHope1024, NewHope512};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

macro_rules! bench_newhope_variant {
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

            group.finish();
        }
    };
}

bench_newhope_variant!(bench_newhope512, NewHope512, "NewHope512");
bench_newhope_variant!(bench_newhope1024, NewHope1024, "NewHope1024");

criterion_group!(benches, bench_newhope512, bench_newhope1024);
criterion_main!(benches);
