use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};
use std::hint::black_box;
use terminus_outcome::traits::{IntoOutcome, OptionExt};
use terminus_outcome::{Narrow, Outcome};

pub fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");

    group.bench_function("from_result", |b| {
        b.iter(|| {
            let outcome: Outcome<i32, &str> = black_box(Ok::<i32, &str>(7)).into();
            black_box(outcome)
        })
    });
    group.bench_function("into_result", |b| {
        b.iter(|| black_box(Outcome::<i32, &str>::failure("x")).into_result())
    });
    group.bench_function("into_outcome", |b| {
        b.iter(|| black_box(Err::<i32, &str>("x")).into_outcome::<Narrow>())
    });
    group.bench_function("ok_or_fail", |b| {
        b.iter(|| black_box(Some(3u8)).ok_or_fail::<&str, Narrow>("none"))
    });
    group.bench_function("convert_widen", |b| {
        b.iter(|| {
            let wide: Outcome<u64, String> = black_box(Outcome::<u8, &str>::failure("x")).convert();
            black_box(wide)
        })
    });

    group.finish();
}

criterion_group! {
    name = conversion_benches;
    config = configure_criterion();
    targets = bench_conversions
}
