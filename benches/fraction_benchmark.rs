// ============================================================================
// Fraction Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - exact operations on growing operands
// 2. Parsing - decimal and fraction notations
// 3. Math Library - iterative functions across target accuracies
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nfrac::prelude::*;
use std::hint::black_box;

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    // Harmonic partial sums: denominators grow with every term
    for terms in [10u32, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("harmonic_sum", terms), terms, |b, &terms| {
            b.iter(|| {
                let mut sum = Fraction::zero();
                for k in 1..=terms {
                    sum = sum + Fraction::new(1, k).unwrap();
                }
                black_box(sum.reduced())
            });
        });
    }

    let a = Fraction::new("123456789.987654321", 7).unwrap();
    let b = Fraction::new(355, 113).unwrap();
    group.bench_function("times_divide", |bench| {
        bench.iter(|| black_box(a.times(&b).unwrap().divide(&b).unwrap()))
    });

    group.finish();
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.bench_function("decimal", |b| {
        b.iter(|| black_box("3.14159265358979323846".parse::<Fraction>().unwrap()))
    });
    group.bench_function("latex", |b| {
        b.iter(|| black_box(Fraction::parse_fraction("\\frac{22}{7}")))
    });
    group.bench_function("constant_pi", |b| b.iter(|| black_box(Constant::Pi.value())));

    group.finish();
}

// ============================================================================
// Math Library Benchmarks
// ============================================================================

fn benchmark_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("math");
    group.sample_size(20);

    for accuracy in [20usize, 50, 100].iter() {
        let ctx = MathContext::new(*accuracy);
        group.bench_with_input(BenchmarkId::new("sqrt", accuracy), &ctx, |b, ctx| {
            b.iter(|| black_box(ctx.sqrt(2).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("sin", accuracy), &ctx, |b, ctx| {
            b.iter(|| black_box(ctx.sin(1).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("exp", accuracy), &ctx, |b, ctx| {
            b.iter(|| black_box(ctx.exp(10).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("ln", accuracy), &ctx, |b, ctx| {
            b.iter(|| black_box(ctx.ln(2).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_arithmetic, benchmark_parsing, benchmark_math);
criterion_main!(benches);
