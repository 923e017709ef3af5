//! Criterion benchmarks for the composition and evaluation core.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pl_composer::{compose, PhysicalConstants, RegisterLayout};
use pl_footprint::{evaluate_footprint, ConcentrationThreshold};
use shared_types::FrequencyTable;

fn bench_compose(c: &mut Criterion) {
    let layout = RegisterLayout::reference();
    let constants = PhysicalConstants::default();
    c.bench_function("compose_reference_layout", |b| {
        b.iter(|| compose(black_box(&layout), black_box(&constants)).unwrap())
    });

    let wide = RegisterLayout::new(16, 16, 16, 16).unwrap();
    c.bench_function("compose_wide_layout", |b| {
        b.iter(|| compose(black_box(&wide), black_box(&constants)).unwrap())
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let table: FrequencyTable =
        (0..256).map(|i| (format!("{i:08b}"), 4)).collect();
    let threshold = ConcentrationThreshold::default();
    c.bench_function("evaluate_footprint_256_outcomes", |b| {
        b.iter(|| evaluate_footprint(black_box(&table), threshold).unwrap())
    });
}

criterion_group!(benches, bench_compose, bench_evaluate);
criterion_main!(benches);
