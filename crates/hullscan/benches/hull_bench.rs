//! Criterion benchmarks for both hull engines.
//! Sizes: n in {10, 100, 1000}, uniform scatter in a 512 px box.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullscan::gen::{regular_polygon, scatter, ScatterCfg};
use hullscan::{Algorithm, HullCfg, Recorder};

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 100, 1000] {
        let cfg = ScatterCfg {
            count: n,
            ..ScatterCfg::default()
        };
        for alg in Algorithm::ALL {
            let engine = alg.engine(HullCfg::default());
            group.bench_with_input(BenchmarkId::new(alg.to_string(), n), &n, |b, _| {
                b.iter_batched(
                    || scatter(cfg, 43).unwrap(),
                    |pts| {
                        let _h = engine.compute(&pts).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_worst_case(c: &mut Criterion) {
    // Every point on the hull: h = n, Jarvis degrades to O(n²).
    let mut group = c.benchmark_group("hull_all_extreme");
    for &n in &[16usize, 128, 512] {
        let pts = regular_polygon(n, 100.0, 0.1);
        for alg in Algorithm::ALL {
            let engine = alg.engine(HullCfg::default());
            group.bench_with_input(BenchmarkId::new(alg.to_string(), n), &pts, |b, pts| {
                b.iter(|| engine.compute(pts).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_with_recorder(c: &mut Criterion) {
    let pts = scatter(
        ScatterCfg {
            count: 1000,
            ..ScatterCfg::default()
        },
        7,
    )
    .unwrap();
    let engine = Algorithm::GrahamScan.engine(HullCfg::default());
    c.bench_function("graham-scan/recorder/1000", |b| {
        b.iter(|| {
            let mut rec = Recorder::new();
            engine.compute_with(&pts, Some(&mut rec)).unwrap()
        })
    });
}

criterion_group!(benches, bench_engines, bench_worst_case, bench_with_recorder);
criterion_main!(benches);
