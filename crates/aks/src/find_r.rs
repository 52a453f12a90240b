// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Strategies for choosing the cyclic modulus degree `r`.

use crate::errors::AksResult;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use polylib_polynomial::{is_coprime, log2_floor, multiplicative_order};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Finds the smallest `r` such that the order of `n` modulo `r` exceeds `⌊log2 n⌋²`.
pub trait FindR: Send + Sync {
    fn find_r(&self, n: &BigInt) -> AksResult<BigInt>;
}

/// Computes `ord_r(n)` directly for each coprime candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiplicativeOrder;

impl FindR for MultiplicativeOrder {
    fn find_r(&self, n: &BigInt) -> AksResult<BigInt> {
        let max_k = BigInt::from(log2_floor(n)?.pow(2));
        let mut r = BigInt::from(2);
        loop {
            if is_coprime(n, &r)? && multiplicative_order(&r, n)? > max_k {
                return Ok(r);
            }
            r += 1;
        }
    }
}

/// Rejects a candidate as soon as some `n^k mod r` with `k <= ⌊log2 n⌋²` is 0 or 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl BruteForce {
    fn accepts(n: &BigInt, r: &BigInt, max_k: u64) -> bool {
        let base = n % r;
        let mut value = base.clone();
        for _ in 0..max_k {
            if value.is_zero() || value.is_one() {
                return false;
            }
            value = (&value * &base) % r;
        }
        true
    }
}

impl FindR for BruteForce {
    fn find_r(&self, n: &BigInt) -> AksResult<BigInt> {
        let max_k = log2_floor(n)?.pow(2);
        let mut r = BigInt::from(2);
        loop {
            if is_coprime(n, &r)? && Self::accepts(n, &r, max_k) {
                return Ok(r);
            }
            r += 1;
        }
    }
}

/// Selectable [`FindR`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindRStrategy {
    #[default]
    MultiplicativeOrder,
    BruteForce,
}

impl FindRStrategy {
    pub fn finder(&self) -> Box<dyn FindR> {
        match self {
            FindRStrategy::MultiplicativeOrder => Box::new(MultiplicativeOrder),
            FindRStrategy::BruteForce => Box::new(BruteForce),
        }
    }
}

impl fmt::Display for FindRStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindRStrategy::MultiplicativeOrder => write!(f, "multiplicative-order"),
            FindRStrategy::BruteForce => write!(f, "brute-force"),
        }
    }
}

impl FromStr for FindRStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "multiplicative-order" | "order" => Ok(FindRStrategy::MultiplicativeOrder),
            "brute-force" | "brute" => Ok(FindRStrategy::BruteForce),
            other => Err(format!(
                "unknown strategy '{other}', expected 'multiplicative-order' or 'brute-force'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_r_for_61() {
        // ⌊log2 61⌋² = 25 and 29 is the first r with ord_r(61) > 25.
        let n = BigInt::from(61);
        assert_eq!(MultiplicativeOrder.find_r(&n).unwrap(), BigInt::from(29));
        assert_eq!(BruteForce.find_r(&n).unwrap(), BigInt::from(29));
    }

    #[test]
    fn test_strategies_agree() {
        for n in 2..400 {
            let n = BigInt::from(n);
            assert_eq!(
                MultiplicativeOrder.find_r(&n).unwrap(),
                BruteForce.find_r(&n).unwrap(),
                "strategies disagree for n = {n}"
            );
        }
    }

    #[test]
    fn test_found_r_is_coprime() {
        for n in [2, 3, 10, 64, 97, 1024] {
            let n = BigInt::from(n);
            let r = MultiplicativeOrder.find_r(&n).unwrap();
            assert!(is_coprime(&n, &r).unwrap());
        }
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "brute-force".parse::<FindRStrategy>().unwrap(),
            FindRStrategy::BruteForce
        );
        assert_eq!(
            "Multiplicative_Order".parse::<FindRStrategy>().unwrap(),
            FindRStrategy::MultiplicativeOrder
        );
        assert!("fastest".parse::<FindRStrategy>().is_err());
        assert_eq!(FindRStrategy::BruteForce.to_string(), "brute-force");
    }
}
