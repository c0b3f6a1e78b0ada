//! Speed Calculation Benchmarks
//!
//! Measures per-sample cost of the speed pipeline for each smoothing mode
//! and magnitude norm.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lamco_pointer_speed::config::SpeedCalculatorConfig;
use lamco_pointer_speed::speed::{lp_magnitude, SpeedCalculator};

/// Generate a pointer trace with jittered poll intervals (simulates a 1 kHz mouse)
fn generate_trace(len: usize) -> Vec<(f64, f64, f64)> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.01;
            let dx = (t.sin() * 40.0).round();
            let dy = ((t * 0.7).cos() * 25.0).round();
            let dt = 1.0 + ((i * 7919) % 13) as f64 * 0.05;
            (dx, dy, dt)
        })
        .collect()
}

/// Benchmark a full trace through each smoothing mode
fn bench_calculate_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_speed");

    let trace = generate_trace(10_000);
    group.throughput(Throughput::Elements(trace.len() as u64));

    let modes = [
        ("unsmoothed", SpeedCalculatorConfig::default()),
        ("simple", SpeedCalculatorConfig::smoothed(50.0, false)),
        ("linear", SpeedCalculatorConfig::smoothed(50.0, true)),
    ];

    for (name, config) in modes {
        group.bench_with_input(BenchmarkId::new("trace", name), &trace, |b, trace| {
            b.iter(|| {
                let mut calculator = SpeedCalculator::with_config(config).unwrap();
                let mut last = 0.0;
                for &(dx, dy, dt) in trace {
                    last = calculator
                        .calculate_speed(black_box(dx), black_box(dy), black_box(dt))
                        .unwrap();
                }
                black_box(last)
            })
        });
    }

    group.finish();
}

/// Benchmark the magnitude function for the fast-path and general norms
fn bench_lp_magnitude(c: &mut Criterion) {
    let mut group = c.benchmark_group("lp_magnitude");

    for (name, p) in [("p1", 1.0), ("p2", 2.0), ("p3", 3.0), ("pinf", f64::INFINITY)] {
        group.bench_function(name, |b| {
            b.iter(|| lp_magnitude(black_box(12.0), black_box(-5.0), black_box(p)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calculate_speed, bench_lp_magnitude);
criterion_main!(benches);
