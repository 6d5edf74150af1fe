//! Criterion benchmarks for vanna_core solvers.
//!
//! Measures Levenberg-Marquardt cost on representative one-parameter
//! problems to characterise convergence behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vanna_core::math::solvers::{LMConfig, LevenbergMarquardtSolver};

/// Benchmark the solver across residual shapes.
fn bench_levenberg_marquardt(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenberg_marquardt");

    // Linear residual: converges in a handful of iterations
    group.bench_function("solve_linear", |b| {
        let solver = LevenbergMarquardtSolver::with_defaults();
        b.iter(|| solver.solve(|x| x - black_box(3.0), 0.0).unwrap());
    });

    // Quadratic root recovery from increasingly distant starting points
    for start in [1.0, 10.0, 100.0] {
        group.bench_with_input(BenchmarkId::new("solve_sqrt2", start), &start, |b, &start| {
            let solver = LevenbergMarquardtSolver::with_defaults();
            b.iter(|| solver.solve(|x| x * x - black_box(2.0), start).unwrap());
        });
    }

    // Transcendental residual where the undamped step overshoots
    group.bench_function("solve_arctan", |b| {
        let solver = LevenbergMarquardtSolver::with_defaults();
        b.iter(|| solver.solve(|x: f64| x.atan(), black_box(3.0)).unwrap());
    });

    group.finish();
}

/// Benchmark the configuration presets on the same problem.
fn bench_config_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("lm_config_presets");

    for (name, config) in [
        ("fast", LMConfig::fast()),
        ("default", LMConfig::default()),
        ("high_precision", LMConfig::high_precision()),
    ] {
        group.bench_with_input(BenchmarkId::new("solve_sqrt2", name), &config, |b, config| {
            let solver = LevenbergMarquardtSolver::new(*config);
            b.iter(|| solver.solve(|x| x * x - black_box(2.0), 1.0).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_levenberg_marquardt, bench_config_presets);
criterion_main!(benches);
