// ============================================================================
// Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Operand Kinds - Integer fast path vs float path per operation
// 2. Dispatch - Free functions vs Operation::apply
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rnw_calc::prelude::*;
use std::hint::black_box;

// ============================================================================
// Operand Kind Benchmarks
// Exact integer arithmetic vs direct f64 arithmetic
// ============================================================================

fn benchmark_operand_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("operand_kinds");

    let cases = [
        ("int", Number::Int(12_345), Number::Int(7)),
        ("float", Number::Float(12_345.5), Number::Float(7.25)),
        ("mixed", Number::Int(12_345), Number::Float(7.25)),
    ];

    for (label, a, b) in cases.iter() {
        group.bench_with_input(BenchmarkId::new("add", label), &(*a, *b), |bench, (a, b)| {
            bench.iter(|| black_box(add(black_box(*a), black_box(*b))));
        });

        group.bench_with_input(BenchmarkId::new("multiply", label), &(*a, *b), |bench, (a, b)| {
            bench.iter(|| black_box(multiply(black_box(*a), black_box(*b))));
        });

        group.bench_with_input(BenchmarkId::new("divide", label), &(*a, *b), |bench, (a, b)| {
            bench.iter(|| black_box(divide(black_box(*a), black_box(*b))));
        });

        group.bench_with_input(BenchmarkId::new("power", label), &(*a, *b), |bench, (a, b)| {
            bench.iter(|| black_box(power(black_box(*a), black_box(*b))));
        });
    }

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn benchmark_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("free_functions", |b| {
        b.iter(|| {
            let x = black_box(3.5);
            let y = black_box(2);
            black_box(add(x, y) + subtract(x, y) + multiply(x, y) + power(x, y))
        });
    });

    group.bench_function("operation_apply", |b| {
        b.iter(|| {
            let x = black_box(3.5);
            let y = black_box(2);
            let mut total = 0.0;
            for op in Operation::ALL {
                if let Ok(v) = op.apply(x, y) {
                    total += v;
                }
            }
            black_box(total)
        });
    });

    group.bench_function("divide_by_zero", |b| {
        b.iter(|| black_box(divide(black_box(1), black_box(0))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_operand_kinds, benchmark_dispatch);
criterion_main!(benches);
