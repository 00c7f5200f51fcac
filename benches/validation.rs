//! Benchmarks for form validation.
//!
//! These benchmarks measure one full validation pass over a valid form and
//! over an empty one, which fails every required rule.

use contact_tui::form::{validate, FormData};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn valid_form() -> FormData {
    FormData {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 (20) 7946-0958".to_string(),
        subject: "Analytical engine".to_string(),
        message: "The engine weaves algebraic patterns.".to_string(),
        ..FormData::default()
    }
}

fn bench_validate_valid(c: &mut Criterion) {
    let data = valid_form();
    c.bench_function("validate_valid_form", |b| {
        b.iter(|| validate(black_box(&data)))
    });
}

fn bench_validate_empty(c: &mut Criterion) {
    let data = FormData::default();
    c.bench_function("validate_empty_form", |b| {
        b.iter(|| validate(black_box(&data)))
    });
}

criterion_group!(benches, bench_validate_valid, bench_validate_empty);
criterion_main!(benches);
