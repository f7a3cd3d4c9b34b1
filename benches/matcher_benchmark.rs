// ============================================================================
// Decimal Matcher Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - DecimalValue::parse on inputs of growing length
// 2. Matching - End-to-end match_value for valid, rejected and invalid input
// 3. Concurrency - One shared matcher used from several threads
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_matcher::prelude::*;
use std::hint::black_box;

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_parse");

    for num_digits in [8, 32, 256].iter() {
        let half = "7".repeat(*num_digits / 2);
        let input = format!("-{half}.{half}");

        group.bench_with_input(
            BenchmarkId::new("digits", num_digits),
            &input,
            |b, input| {
                b.iter(|| black_box(DecimalValue::parse(black_box(input))));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Matching Benchmarks
// ============================================================================

fn benchmark_match_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_value");
    let matcher = DecimalNumberMatcher::new(DecimalMatcherConfig::monetary());

    let cases = [
        ("valid", "12345678.90"),
        ("too_many_places", "1234.5678"),
        ("both_limits", "123456789012.345"),
        ("not_decimal", "12.3.4"),
    ];

    for (name, input) in cases.iter() {
        group.bench_with_input(BenchmarkId::new("monetary", name), input, |b, input| {
            b.iter(|| black_box(matcher.match_value(Some(black_box(*input)))));
        });
    }

    group.finish();
}

fn benchmark_absent_value(c: &mut Criterion) {
    let matcher = DecimalNumberMatcher::default();
    c.bench_function("match_absent_value", |b| {
        b.iter(|| black_box(matcher.match_value(black_box(None))));
    });
}

// ============================================================================
// Concurrency Benchmarks
// ============================================================================

fn benchmark_shared_matcher(c: &mut Criterion) {
    let matcher = DecimalNumberMatcher::new(DecimalMatcherConfig::from_params(&[15, 4]).unwrap());
    let inputs: Vec<String> = (0..1000).map(|i| format!("{}.{}", i * 37, i % 10_000)).collect();

    c.bench_function("shared_matcher_4_threads", |b| {
        b.iter(|| {
            std::thread::scope(|scope| {
                for chunk in inputs.chunks(250) {
                    let matcher = &matcher;
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .filter(|input| matcher.match_value(Some(input.as_str())).is_empty())
                            .count()
                    });
                }
            })
        });
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_match_value,
    benchmark_absent_value,
    benchmark_shared_matcher,
);
criterion_main!(benches);
