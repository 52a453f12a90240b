// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;
use polylib_polynomial::{ModulusContext, Polynomial};

const MODULUS: i64 = 1_000_000_007;

fn create_test_polynomials(degree: usize, ctx: &ModulusContext) -> (Polynomial, Polynomial) {
    let coeffs1: Vec<BigInt> = (0..=degree).map(|i| BigInt::from(i as i64 + 1)).collect();
    let coeffs2: Vec<BigInt> = (0..=degree)
        .map(|i| BigInt::from((i + 1) as i64 * 2))
        .collect();

    (
        Polynomial::from_coefficients(&coeffs1, ctx),
        Polynomial::from_coefficients(&coeffs2, ctx),
    )
}

fn benchmark_polynomial_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_addition");
    let ctx = ModulusContext::integers();

    for degree in [10, 50, 100, 500] {
        let (poly1, poly2) = create_test_polynomials(degree, &ctx);

        group.bench_function(format!("degree_{degree}"), |b| {
            b.iter(|| black_box(poly1.add(&poly2, &ctx)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_multiplication");
    let ctx = ModulusContext::with_modulus(MODULUS).unwrap();

    for degree in [5, 10, 20, 50] {
        let (poly1, poly2) = create_test_polynomials(degree, &ctx);

        group.bench_function(format!("degree_{degree}"), |b| {
            b.iter(|| black_box(poly1.mul(&poly2, &ctx)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_division");
    let ctx = ModulusContext::with_modulus(MODULUS).unwrap();

    for degree in [10, 20, 50, 100] {
        let (poly1, _) = create_test_polynomials(degree, &ctx);
        let (divisor, _) = create_test_polynomials(degree / 2, &ctx);

        group.bench_function(format!("degree_{degree}"), |b| {
            b.iter(|| black_box(poly1.div(&divisor, &ctx).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_cyclic_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("cyclic_power");

    // (x + 1)^n mod (x^r - 1) over Z/nZ, the inner loop of the primality test.
    for (n, r) in [(61i64, 29i64), (1009, 101), (10007, 173)] {
        let ctx = ModulusContext::with_modulus(n).unwrap();
        let base = Polynomial::binomial(1, &ctx);
        let modulus = Polynomial::cyclic_modulus(r, &ctx);
        let exponent = BigInt::from(n);

        group.bench_function(format!("n_{n}_r_{r}"), |b| {
            b.iter(|| black_box(base.pow(&exponent, Some(&modulus), &ctx).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_polynomial_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_evaluation");
    let ctx = ModulusContext::with_modulus(MODULUS).unwrap();

    for degree in [10, 50, 100, 500] {
        let (poly1, _) = create_test_polynomials(degree, &ctx);
        let x = BigInt::from(42);

        group.bench_function(format!("degree_{degree}"), |b| {
            b.iter(|| black_box(poly1.evaluate(&x, &ctx)))
        });
    }

    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let text = "5x^9 + 3x^8 - 7x^3 + 12x - 1";
    c.bench_function("parse_polynomial", |b| {
        b.iter(|| black_box(text.parse::<Polynomial>().unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_polynomial_addition,
    benchmark_polynomial_multiplication,
    benchmark_polynomial_division,
    benchmark_cyclic_power,
    benchmark_polynomial_evaluation,
    benchmark_parse
);
criterion_main!(benches);
