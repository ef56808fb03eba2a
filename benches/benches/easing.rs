// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tactile_easing::{Curve, EasingSpec, ease};

const SAMPLES: usize = 1_024;

fn samples() -> Vec<f64> {
    (0..SAMPLES).map(|i| i as f64 / (SAMPLES - 1) as f64).collect()
}

fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing/evaluate");
    group.throughput(Throughput::Elements(SAMPLES as u64));
    let ts = samples();

    for curve in Curve::ALL {
        let spec = EasingSpec::parse(curve.name());
        group.bench_with_input(BenchmarkId::new("in_out", curve.name()), &ts, |b, ts| {
            b.iter(|| {
                let sum: f64 = ts.iter().map(|&t| spec.evaluate(t)).sum();
                black_box(sum);
            });
        });
    }

    group.finish();
}

/// Parsing the name on every call versus reusing a parsed spec.
fn bench_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing/by_name");
    group.throughput(Throughput::Elements(SAMPLES as u64));
    let ts = samples();

    group.bench_function("ease(\"elastic-out\")", |b| {
        b.iter(|| {
            let sum: f64 = ts.iter().map(|&t| ease(black_box("elastic-out"), t, None)).sum();
            black_box(sum);
        });
    });
    let spec = EasingSpec::parse("elastic-out");
    group.bench_function("EasingSpec::evaluate", |b| {
        b.iter(|| {
            let sum: f64 = ts.iter().map(|&t| spec.evaluate(t)).sum();
            black_box(sum);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_curves, bench_by_name);
criterion_main!(benches);
