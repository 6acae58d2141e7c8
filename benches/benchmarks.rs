//! Benchmarks for the pipestats hot paths
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use pipestats::pipeline::Aggregator;
use pipestats::quantiles::nearest_rank;
use pipestats::statistics::RunningStats;

fn synthetic_values(n: usize) -> Vec<f64> {
    // Deterministic, mildly irregular stream
    (0..n)
        .map(|i| (i.wrapping_mul(2654435761) % 1_000_003) as f64)
        .collect()
}

fn bench_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("moments");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add", |b| {
        let mut stats = RunningStats::new();
        let mut i = 0u64;
        b.iter(|| {
            stats.add(black_box(i as f64));
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for n in [1_000, 100_000] {
        let values = synthetic_values(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("compact_{}", n), |b| {
            b.iter(|| {
                let mut aggregator = Aggregator::compact();
                for &value in &values {
                    aggregator.push(value);
                }
                black_box(aggregator.finish().unwrap())
            });
        });

        group.bench_function(format!("buffered_{}", n), |b| {
            b.iter(|| {
                let mut aggregator = Aggregator::buffered();
                for &value in &values {
                    aggregator.push(value);
                }
                black_box(aggregator.finish().unwrap())
            });
        });
    }

    group.finish();
}

fn bench_quantiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_rank");

    for n in [1_000, 100_000] {
        let mut sorted = synthetic_values(n);
        sorted.sort_by(f64::total_cmp);

        group.bench_function(format!("quartiles_{}", n), |b| {
            b.iter(|| black_box(nearest_rank::quartiles(black_box(&sorted)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_moments, bench_pipeline, bench_quantiles);
criterion_main!(benches);
