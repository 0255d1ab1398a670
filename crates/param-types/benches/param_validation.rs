// Baseline benchmarks for argument validation
// Run with: cargo bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use param_types::prelude::*;

fn person_args() -> Vec<Value> {
    args!["Shin Lu", 18, "movie", "reading", "programming"]
}

/// Benchmark the passing path of a fail-fast validator with rest arguments
fn bench_strict_pass(c: &mut Criterion) {
    let validator = validate_with_errors_with(
        &ValidatorConfig::active(),
        "constructor",
        checkers![string(), number(), string().rest()],
    )
    .unwrap();
    let input = person_args();

    c.bench_function("strict_pass", |b| {
        b.iter(|| black_box(validator.call(black_box(&input))));
    });
}

/// Benchmark the failing path, which renders a message
fn bench_strict_fail(c: &mut Criterion) {
    let validator = validate_with_errors_with(
        &ValidatorConfig::active(),
        "constructor",
        checkers![string(), number(), string().rest()],
    )
    .unwrap();
    let input = args!["Shin Lu", "18"];

    c.bench_function("strict_fail", |b| {
        b.iter(|| black_box(validator.call(black_box(&input))));
    });
}

/// Benchmark a nested structure: array of shapes
fn bench_nested_shape(c: &mut Criterion) {
    let people = array_of(
        Shape::new()
            .field("name", string().required())
            .field("age", number())
            .field("hobbies", array_of(string())),
    );
    let validator =
        validate_with(&ValidatorConfig::active(), "import", checkers![people.required()])
            .unwrap();

    let person = Object::new()
        .with("name", "Shin Lu")
        .with("age", 18)
        .with("hobbies", vec!["movie", "reading"]);
    let input = vec![Value::from(vec![Value::from(person); 32])];

    c.bench_function("nested_shape_32", |b| {
        b.iter(|| black_box(validator.call(black_box(&input))));
    });
}

/// Benchmark a disabled validator, which should cost next to nothing
fn bench_disabled(c: &mut Criterion) {
    let validator = validate_with_errors_with(
        &ValidatorConfig::disabled(),
        "constructor",
        checkers![string(), number(), string().rest()],
    )
    .unwrap();
    let input = person_args();

    c.bench_function("disabled", |b| {
        b.iter(|| black_box(validator.call(black_box(&input))));
    });
}

criterion_group!(
    benches,
    bench_strict_pass,
    bench_strict_fail,
    bench_nested_shape,
    bench_disabled
);
criterion_main!(benches);
