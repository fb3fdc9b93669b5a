//! Engine throughput benchmarks: evaluations per second and full-roster
//! compositions per second against the shipped datasets.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use shotcaller::data::data_registry::HeroRegistry;
use shotcaller::engine::{compose_ideal_team, evaluate, recommend_replacements};

fn full_roster() -> Vec<String> {
    ["hulk", "doctor_strange", "phoenix", "wolverine", "luna_snow", "mantis"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let registry = HeroRegistry::load().expect("shipped datasets should load");
    let roster = full_roster();

    let mut group = c.benchmark_group("evaluate");
    group.throughput(Throughput::Elements(1));
    group.bench_function("full_roster", |b| {
        b.iter(|| evaluate(black_box(&registry), black_box(&roster)))
    });
    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let registry = HeroRegistry::load().expect("shipped datasets should load");
    let roster: Vec<Option<String>> = vec![
        Some("hulk".to_string()),
        Some("phoenix".to_string()),
        None,
        None,
        None,
        None,
    ];

    let mut group = c.benchmark_group("recommend");
    group.throughput(Throughput::Elements(1));
    group.bench_function("single_slot", |b| {
        b.iter(|| recommend_replacements(black_box(&registry), black_box(&roster), 2, 3))
    });
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let registry = HeroRegistry::load().expect("shipped datasets should load");
    let seeded: Vec<Option<String>> =
        vec![Some("phoenix".to_string()), None, None, None, None, None];

    let mut group = c.benchmark_group("compose");
    group.throughput(Throughput::Elements(1));
    group.bench_function("from_empty", |b| {
        b.iter(|| compose_ideal_team(black_box(&registry), black_box(&[])))
    });
    group.bench_function("from_seeded_slot", |b| {
        b.iter(|| compose_ideal_team(black_box(&registry), black_box(&seeded)))
    });
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_recommend, bench_compose);
criterion_main!(benches);
