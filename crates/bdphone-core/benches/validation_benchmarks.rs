//! Benchmarks for phone number validation
//!
//! Measures the full validate pipeline across the input shapes users
//! typically submit, plus the transform path.
//!
//! Copyright (c) 2026 Bdphone Team
//! Licensed under the Apache-2.0 license

use bdphone_core::{customize, validate, TransformOptions, ValidationOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const INPUTS: [(&str, &str); 7] = [
    ("local", "01712345678"),
    ("e164", "+8801712345678"),
    ("dialing_prefix", "008801712345678"),
    ("formatted", "+880 1712-345678"),
    ("missing_zero", "1712345678"),
    ("letters", "abc01712345678"),
    ("too_short", "016123"),
];

fn bench_validate(c: &mut Criterion) {
    let options = ValidationOptions::default();
    let mut group = c.benchmark_group("validate");

    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| validate(black_box(input), &options))
        });
    }

    group.finish();
}

fn bench_expected_operator(c: &mut Criterion) {
    let options = ValidationOptions::new().expected_operator("Robi-Airtel");
    c.bench_function("validate_expected_operator", |b| {
        b.iter(|| validate(black_box("01812345678"), &options))
    });
}

fn bench_customize(c: &mut Criterion) {
    let options = TransformOptions::new()
        .remove_from_start(1)
        .remove_from_end(2)
        .prefix("+880")
        .separator(" ");
    c.bench_function("customize", |b| {
        b.iter(|| customize(black_box("01615928286"), &options))
    });
}

criterion_group!(benches, bench_validate, bench_expected_operator, bench_customize);
criterion_main!(benches);
