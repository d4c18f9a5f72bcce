//! Criterion benchmarks for `tm-math`.
//!
//! Focus on the kernels that run once per class and marker in the scorer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tm_math::{log_normal_pdf, log_sum_exp, normalize_log_probs};

fn bench_gaussian_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian");

    // Variance regimes seen in the tumor marker model.
    for (name, mean, variance) in [
        ("healthy_afp", 5.0, 9.0),
        ("ovarian_early", 151.0, 6_348.0),
        ("liver_stage_iv", 6_000.0, 15_000_000.0),
        ("pancreatic_stage_iv", 12_500.0, 35_000_000.0),
    ] {
        group.bench_with_input(
            BenchmarkId::new("log_normal_pdf", name),
            &(mean, variance),
            |b, &(mu, var)| {
                b.iter(|| {
                    let x = 180.0_f64;
                    black_box(log_normal_pdf(black_box(x), black_box(mu), black_box(var)));
                });
            },
        );
    }

    group.finish();
}

fn bench_normalization(c: &mut Criterion) {
    let scores: Vec<f64> = (0..10).map(|i| -10_000.0 - (i as f64) * 37.5).collect();
    c.bench_function("log_sum_exp/10", |b| {
        b.iter(|| black_box(log_sum_exp(black_box(&scores))));
    });
    c.bench_function("normalize_log_probs/10", |b| {
        b.iter(|| black_box(normalize_log_probs(black_box(&scores))));
    });
}

criterion_group!(benches, bench_gaussian_kernels, bench_normalization);
criterion_main!(benches);
