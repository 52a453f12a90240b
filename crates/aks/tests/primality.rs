// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigUint;
use polylib_aks::{aks_primality_test, Aks, AksOptions, AksStep, FindRStrategy};
use proptest::prelude::*;

fn trial_division(n: u64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

#[test]
fn agrees_with_trial_division() {
    for n in 0..=60u64 {
        assert_eq!(
            aks_primality_test(&BigUint::from(n)).unwrap(),
            trial_division(n),
            "wrong verdict for {n}"
        );
    }
}

#[test]
fn known_values() {
    let primes = [2u64, 3, 5, 7, 31, 61, 97];
    let composites = [4u64, 9, 63, 91, 121];
    for n in primes {
        assert!(aks_primality_test(&BigUint::from(n)).unwrap(), "{n} is prime");
    }
    for n in composites {
        assert!(!aks_primality_test(&BigUint::from(n)).unwrap(), "{n} is composite");
    }
}

#[test]
fn brute_force_sequential_run() {
    let aks = Aks::new(AksOptions {
        strategy: FindRStrategy::BruteForce,
        parallel: false,
        threads: None,
    });
    let report = aks.run(&BigUint::from(97u32)).unwrap();
    assert!(report.is_prime);
    assert_eq!(report.step, AksStep::PolynomialIdentity);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn products_are_composite(a in 2u64..40, b in 2u64..40) {
        let report = Aks::default().run(&BigUint::from(a * b)).unwrap();
        prop_assert!(!report.is_prime);
        prop_assert!(report.witness.is_some() || report.step == AksStep::PerfectPower);
    }
}
