// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Modular integer arithmetic used by the polynomial model and the primality test.
//!
//! Everything here works on arbitrary precision `BigInt` values. Functions that take a
//! modulus validate it: a zero modulus is a domain error and a negative modulus is not
//! supported.

use crate::errors::{PolynomialError, PolynomialResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Rejects moduli that cannot be used for reduction.
pub(crate) fn check_modulus(modulus: &BigInt) -> PolynomialResult<()> {
    if modulus.is_zero() {
        return Err(PolynomialError::domain("Modulus cannot be zero"));
    }
    if modulus.is_negative() {
        return Err(PolynomialError::not_implemented(
            "Modulus cannot be negative",
        ));
    }
    Ok(())
}

/// Reduction against an already validated modulus.
pub(crate) fn reduce_unchecked(x: &BigInt, modulus: &BigInt, ignore_sign: bool) -> BigInt {
    let mut r = x % modulus;
    if !ignore_sign && r.is_negative() {
        r += modulus;
    }
    r
}

/// Reduces a number modulo a modulus.
///
/// The remainder keeps the sign of `x` when `ignore_sign` is set, otherwise it is
/// normalized into `[0, modulus)`.
///
/// # Errors
///
/// `Domain` if `modulus` is zero, `NotImplemented` if it is negative.
pub fn reduce(x: &BigInt, modulus: &BigInt, ignore_sign: bool) -> PolynomialResult<BigInt> {
    check_modulus(modulus)?;
    Ok(reduce_unchecked(x, modulus, ignore_sign))
}

/// Computes `b⁻¹ mod modulus` with the extended Euclidean algorithm.
///
/// Negative `b` is shifted into `[0, modulus)` first. The inverse modulo 1 is 0.
///
/// # Errors
///
/// `BadModulus` if `gcd(b, modulus) != 1`.
pub fn mod_inverse(b: &BigInt, modulus: &BigInt) -> PolynomialResult<BigInt> {
    check_modulus(modulus)?;
    if modulus.is_one() {
        return Ok(BigInt::zero());
    }

    let mut old_r = reduce_unchecked(b, modulus, false);
    let mut r = modulus.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    // old_r is now gcd(b, modulus)
    if !old_r.is_one() {
        return Err(PolynomialError::BadModulus {
            value: b.clone(),
            modulus: modulus.clone(),
        });
    }

    Ok(reduce_unchecked(&old_s, modulus, false))
}

/// Computes `a · b⁻¹ mod modulus`, normalized into `[0, modulus)`.
pub fn mod_divide(a: &BigInt, b: &BigInt, modulus: &BigInt) -> PolynomialResult<BigInt> {
    let inverse = mod_inverse(b, modulus)?;
    Ok(reduce_unchecked(&(a * inverse), modulus, false))
}

/// Greatest common divisor by the Euclidean algorithm.
///
/// # Errors
///
/// `NotImplemented` if either operand is negative.
pub fn gcd(a: &BigInt, b: &BigInt) -> PolynomialResult<BigInt> {
    if a.is_negative() || b.is_negative() {
        return Err(PolynomialError::not_implemented(
            "gcd does not accept negative numbers",
        ));
    }
    let mut a = a.clone();
    let mut b = b.clone();
    while !a.is_zero() && !b.is_zero() {
        if a > b {
            a %= &b;
        } else {
            b %= &a;
        }
    }
    Ok(a + b)
}

/// Returns true when `gcd(a, b) == 1`.
pub fn is_coprime(a: &BigInt, b: &BigInt) -> PolynomialResult<bool> {
    Ok(gcd(a, b)?.is_one())
}

/// Square-and-multiply exponentiation, optionally reduced modulo `modulus`.
///
/// With a modulus the running values are reduced after every multiply and square, so
/// the result lies in `[0, modulus)`.
///
/// # Errors
///
/// `Domain` if `exponent` is negative or the modulus is zero.
pub fn power(x: &BigInt, exponent: &BigInt, modulus: Option<&BigInt>) -> PolynomialResult<BigInt> {
    if exponent.is_negative() {
        return Err(PolynomialError::domain("Exponent must be non-negative"));
    }
    if let Some(m) = modulus {
        check_modulus(m)?;
    }
    let reduce_step = |value: BigInt| match modulus {
        Some(m) => reduce_unchecked(&value, m, false),
        None => value,
    };

    let mut result = reduce_step(BigInt::one());
    let mut base = reduce_step(x.clone());
    let mut n = exponent.clone();

    while n.is_positive() {
        if n.is_odd() {
            result = reduce_step(&result * &base);
        }
        n >>= 1;
        if n.is_positive() {
            base = reduce_step(&base * &base);
        }
    }

    Ok(result)
}

/// Euler's totient: the number of integers in `[1, n]` coprime to `n`.
///
/// Counted by brute force, one gcd per candidate.
pub fn totient(n: &BigInt) -> PolynomialResult<BigInt> {
    let mut count = BigInt::zero();
    let mut k = BigInt::one();
    while &k <= n {
        if is_coprime(&k, n)? {
            count += 1;
        }
        k += 1;
    }
    Ok(count)
}

/// Smallest `k >= 1` with `a^k ≡ 1 (mod n)`.
///
/// # Errors
///
/// `Domain` if `n < 2` or `gcd(n, a) != 1`.
pub fn multiplicative_order(n: &BigInt, a: &BigInt) -> PolynomialResult<BigInt> {
    if n < &BigInt::from(2) {
        return Err(PolynomialError::domain(format!(
            "The modulus must be 2 or greater, got {n}"
        )));
    }
    let a = reduce_unchecked(a, n, false);
    if !is_coprime(n, &a)? {
        return Err(PolynomialError::domain(format!(
            "{a} and {n} must be coprime to have a multiplicative order"
        )));
    }

    let mut k = BigInt::one();
    let mut value = a.clone();
    while !value.is_one() {
        value = reduce_unchecked(&(&value * &a), n, false);
        k += 1;
    }
    Ok(k)
}

/// Computes `⌊log2(n)⌋` for `n > 0`.
pub fn log2_floor(n: &BigInt) -> PolynomialResult<u64> {
    if !n.is_positive() {
        return Err(PolynomialError::domain(format!(
            "log2 is only defined for positive numbers, got {n}"
        )));
    }
    Ok(n.bits() - 1)
}

/// Finds the exact `exponent`-th root of `n` by binary search.
///
/// Returns the root when `root^exponent == n`, otherwise zero to signal that no
/// exact integer root exists.
pub fn integer_root(n: &BigInt, exponent: u32) -> BigInt {
    if !n.is_positive() || exponent == 0 {
        return BigInt::zero();
    }

    let mut low = BigInt::one();
    let mut high = BigInt::one() << (n.bits() / u64::from(exponent) + 2);
    while high.pow(exponent) <= *n {
        high <<= 1;
    }

    while low <= high {
        let mid: BigInt = &low + (&high - &low) / 2;
        let mid_pow = mid.pow(exponent);

        if mid_pow == *n {
            return mid;
        } else if mid_pow < *n {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    BigInt::zero()
}

/// Checks whether `n = a^b` for some integers `a > 1` and `b > 1`.
///
/// `n <= 1` is never a perfect power.
pub fn is_perfect_power(n: &BigInt) -> bool {
    if n <= &BigInt::one() {
        return false;
    }
    let max_exponent = n.bits() - 1;
    (2..=max_exponent).any(|b| {
        let Ok(b) = u32::try_from(b) else {
            return false;
        };
        let root = integer_root(n, b);
        !root.is_zero() && root.pow(b) == *n
    })
}
