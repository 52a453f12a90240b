// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use polylib_polynomial::{is_perfect_power, ModulusContext, Polynomial};
use proptest::prelude::*;

const PRIME: i64 = 101;

fn arb_coefficients(max_len: usize) -> impl Strategy<Value = Vec<BigInt>> {
    prop::collection::vec(-1000i64..1000, 1..max_len)
        .prop_map(|v| v.into_iter().map(BigInt::from).collect())
}

fn arb_polynomial() -> impl Strategy<Value = Polynomial> {
    arb_coefficients(12)
        .prop_map(|coeffs| Polynomial::from_coefficients(&coeffs, &ModulusContext::integers()))
}

/// Polynomials over Z/101Z with a leading coefficient that is a unit.
fn arb_divisor() -> impl Strategy<Value = Polynomial> {
    (1i64..PRIME, prop::collection::vec(0i64..PRIME, 0..6)).prop_map(|(lead, rest)| {
        let ctx = ModulusContext::with_modulus(PRIME).unwrap();
        let coeffs: Vec<BigInt> = std::iter::once(lead)
            .chain(rest)
            .map(BigInt::from)
            .collect();
        Polynomial::from_coefficients(&coeffs, &ctx)
    })
}

fn is_prime(n: u64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

fn primes_below(limit: u64) -> Vec<u64> {
    (2..limit).filter(|&n| is_prime(n)).collect()
}

proptest! {
    #[test]
    fn addition_commutes(p in arb_polynomial(), q in arb_polynomial()) {
        let ctx = ModulusContext::integers();
        prop_assert_eq!(p.add(&q, &ctx), q.add(&p, &ctx));
    }

    #[test]
    fn multiplication_commutes(p in arb_polynomial(), q in arb_polynomial()) {
        let ctx = ModulusContext::integers();
        prop_assert_eq!(p.mul(&q, &ctx), q.mul(&p, &ctx));
    }

    #[test]
    fn subtraction_inverts_addition(p in arb_polynomial(), q in arb_polynomial()) {
        let ctx = ModulusContext::integers();
        prop_assert_eq!(p.add(&q, &ctx).sub(&q, &ctx), p);
    }

    #[test]
    fn division_reconstructs_dividend(p in arb_polynomial(), d in arb_divisor()) {
        let ctx = ModulusContext::with_modulus(PRIME).unwrap();
        let p = p.reduce(&ctx);
        let (q, r) = p.div(&d, &ctx).unwrap();
        prop_assert_eq!(q.mul(&d, &ctx).add(&r, &ctx), p);
        prop_assert!(r.is_zero() || r.degree() < d.degree());
    }

    #[test]
    fn power_matches_repeated_multiplication(
        p in arb_polynomial(),
        m in arb_divisor(),
        n in 0u32..12,
    ) {
        let ctx = ModulusContext::with_modulus(PRIME).unwrap();
        let p = p.reduce(&ctx);
        let mut expected = Polynomial::one(&ctx);
        for _ in 0..n {
            expected = expected.mul(&p, &ctx);
        }
        let expected = expected.poly_mod(&m, &ctx).unwrap();
        prop_assert_eq!(p.pow(&BigInt::from(n), Some(&m), &ctx).unwrap(), expected);
    }

    #[test]
    fn printed_form_parses_back(p in arb_polynomial()) {
        let printed = p.to_string();
        let parsed: Polynomial = printed.parse().unwrap();
        prop_assert_eq!(parsed, p);
    }

    #[test]
    fn powers_are_perfect_powers(k in 2u64..1000, b in 2u32..6) {
        prop_assert!(is_perfect_power(&BigInt::from(k.pow(b))));
    }

    #[test]
    fn primes_are_not_perfect_powers(n in prop::sample::select(primes_below(5000))) {
        prop_assert!(!is_perfect_power(&BigInt::from(n)));
    }
}
