use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use coeffbot::domain::models::{Observation, HISTORY_CAPACITY};
use coeffbot::services::{analyze, parse_coefficients};

fn full_history() -> Vec<Observation> {
    let now = Utc::now();
    (0..HISTORY_CAPACITY)
        .map(|i| {
            let value = if i % 17 == 0 { 12.5 } else { 1.0 + (i % 7) as f64 * 0.3 };
            Observation::new(value, now - Duration::seconds((HISTORY_CAPACITY - i) as i64 * 30))
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let history = full_history();
    let now = Utc::now();

    c.bench_function("analyze_full_history", |b| {
        b.iter(|| analyze(black_box(&history), black_box(now)));
    });
}

fn bench_parse(c: &mut Criterion) {
    let input = "1.2 2.5 3.1 1.0 1.05 14.2 1.33 2.0 1.1 7.77";

    c.bench_function("parse_coefficients", |b| {
        b.iter(|| parse_coefficients(black_box(input)));
    });
}

criterion_group!(benches, bench_analyze, bench_parse);
criterion_main!(benches);
