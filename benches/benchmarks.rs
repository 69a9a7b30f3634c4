use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use media_typer::*;

const INPUTS: &[(&str, &str)] = &[
    ("simple", "text/html"),
    ("with_suffix", "image/svg+xml"),
    ("upper_case", "APPLICATION/VND.API+JSON"),
    ("invalid", "text/plain; charset=utf-8"),
];

// Benchmark media type parsing
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, &input| {
            b.iter(|| parse(black_box(input)));
        });
    }

    group.finish();
}

// Benchmark media type validation
fn bench_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("test");

    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, &input| {
            b.iter(|| test(black_box(input)));
        });
    }

    group.finish();
}

// Benchmark media type formatting
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let plain = MediaType::new("text", "html");
    let suffixed = MediaType::new("application", "vnd.api").with_suffix("json");

    group.bench_function("simple", |b| {
        b.iter(|| format(black_box(&plain)));
    });

    group.bench_function("with_suffix", |b| {
        b.iter(|| format(black_box(&suffixed)));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_test, bench_format);

criterion_main!(benches);
