//! Criterion benchmarks for the scoring and ranking hot path in `tm-core`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tm_core::{ModelRegistry, PatientRecord};

fn panel(he4: f64, afp: f64, ca19_9: f64) -> PatientRecord {
    PatientRecord::new()
        .with("HE4", he4)
        .with("AFP", afp)
        .with("CA19-9", ca19_9)
}

fn bench_rank(c: &mut Criterion) {
    let registry = ModelRegistry::builtin().expect("builtin model");
    let scorer = registry.scorer();

    let mut group = c.benchmark_group("ranking");

    for (name, record) in [
        ("ovarian_early", panel(180.0, 6.0, 22.0)),
        ("liver_stage_iv", panel(70.0, 6000.0, 24.0)),
    ] {
        group.bench_with_input(BenchmarkId::new("rank", name), &record, |b, r| {
            b.iter(|| {
                let ranking = scorer.rank(black_box(r)).expect("rank should succeed");
                black_box(ranking[0].probability);
            })
        });
        group.bench_with_input(BenchmarkId::new("score_detailed", name), &record, |b, r| {
            b.iter(|| black_box(scorer.score_detailed(black_box(r)).expect("score")))
        });
    }

    // Batch of synthetic panels sweeping each marker across its clinical range.
    let batch: Vec<PatientRecord> = (0..10_000)
        .map(|i| {
            let t = i as f64;
            panel(40.0 + (t % 600.0), 2.0 + (t * 3.0) % 8000.0, 10.0 + (t * 7.0) % 15_000.0)
        })
        .collect();
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function("predict_batch_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for record in &batch {
                acc += scorer.predict(record).expect("predict").probability;
            }
            black_box(acc)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
