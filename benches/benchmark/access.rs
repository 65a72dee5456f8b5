use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};
use std::hint::black_box;
use terminus_outcome::{Narrow, Outcome, Wide};

pub fn bench_checked_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("access/value");

    let narrow = Outcome::<u64, &str, Narrow>::success(42);
    let wide = Outcome::<u64, &str, Wide>::success(42);

    group.bench_function("narrow", |b| b.iter(|| *black_box(&narrow).value()));
    group.bench_function("wide", |b| b.iter(|| *black_box(&wide).value()));
    group.bench_function("try_value", |b| b.iter(|| black_box(&wide).try_value().copied()));
    group.bench_function("assume_value", |b| {
        // SAFETY: `narrow` holds a value.
        b.iter(|| unsafe { *black_box(&narrow).assume_value() })
    });
    group.bench_function("value_or", |b| b.iter(|| black_box(wide).value_or(0)));

    group.finish();
}

pub fn bench_discriminant(c: &mut Criterion) {
    let outcomes: Vec<Outcome<u32, u32>> = (0..1000u32)
        .map(|i| if i % 3 == 0 { Outcome::failure(i) } else { Outcome::success(i) })
        .collect();

    c.bench_function("access/has_value_scan", |b| {
        b.iter(|| black_box(&outcomes).iter().filter(|o| o.has_value()).count())
    });
}

criterion_group! {
    name = access_benches;
    config = configure_criterion();
    targets = bench_checked_access, bench_discriminant
}
