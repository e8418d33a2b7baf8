//! Criterion benchmarks for randmath_rng.
//!
//! Compares raw throughput of the three backends and the cost of the
//! derived samplers on a fixed backend.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use randmath_rng::rng::{GeneratorKind, RandomNumberFactory};

const BATCH: usize = 10_000;

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("backends");
    group.throughput(Throughput::Elements(BATCH as u64));

    for kind in GeneratorKind::ALL {
        group.bench_with_input(BenchmarkId::new("raw_uint", kind), &kind, |b, &kind| {
            let mut rng = RandomNumberFactory::with_seed(kind, 42);
            b.iter(|| {
                let mut acc = 0_u64;
                for _ in 0..BATCH {
                    acc ^= rng.next_raw_uint();
                }
                black_box(acc)
            });
        });

        group.bench_with_input(BenchmarkId::new("fill_uniform", kind), &kind, |b, &kind| {
            let mut rng = RandomNumberFactory::with_seed(kind, 42);
            let mut buffer = vec![0.0; BATCH];
            b.iter(|| {
                rng.fill_uniform(&mut buffer);
                black_box(buffer[BATCH - 1])
            });
        });
    }

    group.finish();
}

fn bench_samplers(c: &mut Criterion) {
    let mut group = c.benchmark_group("samplers");
    group.throughput(Throughput::Elements(BATCH as u64));
    let mut rng = RandomNumberFactory::with_seed(GeneratorKind::MersenneTwister, 7);

    group.bench_function("fill_normal", |b| {
        let mut buffer = vec![0.0; BATCH];
        b.iter(|| {
            rng.fill_normal(&mut buffer);
            black_box(buffer[0])
        });
    });

    for shape in [0.5, 2.0, 10.0] {
        group.bench_with_input(BenchmarkId::new("gamma", shape), &shape, |b, &shape| {
            b.iter(|| {
                (0..BATCH)
                    .filter_map(|_| rng.gen_gamma(black_box(shape), 1.0).ok())
                    .sum::<f64>()
            });
        });
    }

    group.bench_function("beta", |b| {
        b.iter(|| {
            (0..BATCH)
                .filter_map(|_| rng.gen_beta(black_box(7.0), 2.0).ok())
                .sum::<f64>()
        });
    });

    group.bench_function("gen_int", |b| {
        b.iter(|| {
            (0..BATCH)
                .filter_map(|_| rng.gen_int(black_box(6)).ok())
                .map(u64::from)
                .sum::<u64>()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_backends, bench_samplers);
criterion_main!(benches);
