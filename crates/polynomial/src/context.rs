// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The arithmetic context every polynomial operation runs under.

use crate::errors::{PolynomialError, PolynomialResult};
use crate::utils::{check_modulus, mod_divide, reduce_unchecked};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::fmt;

/// Selects between exact integer arithmetic and arithmetic modulo `m`.
///
/// The context is passed explicitly to every operation that creates or combines
/// coefficients. A coefficient is reduced under the context of the operation that
/// wrote it; see [`crate::Polynomial::reduce`] to re-canonicalize a value under a
/// different context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulusContext {
    modulus: Option<BigInt>,
    ignore_sign: bool,
    safety_checks: bool,
}

impl Default for ModulusContext {
    fn default() -> Self {
        Self::integers()
    }
}

impl ModulusContext {
    /// Exact arithmetic over Z.
    pub fn integers() -> Self {
        Self {
            modulus: None,
            ignore_sign: false,
            safety_checks: true,
        }
    }

    /// Arithmetic over Z/mZ.
    ///
    /// # Errors
    ///
    /// `Domain` for a zero modulus, `NotImplemented` for a negative one.
    pub fn with_modulus(modulus: impl Into<BigInt>) -> PolynomialResult<Self> {
        let modulus = modulus.into();
        check_modulus(&modulus)?;
        Ok(Self {
            modulus: Some(modulus),
            ..Self::integers()
        })
    }

    /// Builds a context from an optional modulus.
    pub fn from_option(modulus: Option<BigInt>) -> PolynomialResult<Self> {
        match modulus {
            Some(m) => Self::with_modulus(m),
            None => Ok(Self::integers()),
        }
    }

    /// Keep the sign of reduced values instead of normalizing into `[0, m)`.
    pub fn ignore_sign(mut self, ignore_sign: bool) -> Self {
        self.ignore_sign = ignore_sign;
        self
    }

    /// Enable or disable advisory warnings.
    pub fn safety_checks(mut self, safety_checks: bool) -> Self {
        self.safety_checks = safety_checks;
        self
    }

    pub fn modulus(&self) -> Option<&BigInt> {
        self.modulus.as_ref()
    }

    pub fn ignores_sign(&self) -> bool {
        self.ignore_sign
    }

    pub fn has_safety_checks(&self) -> bool {
        self.safety_checks
    }

    /// Canonical residue of `x` under this context. Without a modulus `x` is
    /// returned unchanged.
    pub fn reduce(&self, x: &BigInt) -> BigInt {
        match &self.modulus {
            Some(m) => reduce_unchecked(x, m, self.ignore_sign),
            None => x.clone(),
        }
    }

    /// Like [`ModulusContext::reduce`], but an explicit modulus overrides the
    /// context's own.
    pub fn reduce_by(&self, x: &BigInt, modulus: Option<&BigInt>) -> PolynomialResult<BigInt> {
        match modulus {
            Some(m) => {
                check_modulus(m)?;
                Ok(reduce_unchecked(x, m, self.ignore_sign))
            }
            None => Ok(self.reduce(x)),
        }
    }

    /// Divides `a` by `b` under this context.
    ///
    /// Without a modulus the division must be exact. With a modulus `b` must be
    /// invertible; when signs are ignored the quotient is computed on absolute values
    /// and negated if the operands' signs differ.
    ///
    /// # Errors
    ///
    /// `Domain` for an inexact (or zero) integer division, `BadModulus` when `b` has
    /// no inverse modulo `m`.
    pub fn divide_exact(&self, a: &BigInt, b: &BigInt) -> PolynomialResult<BigInt> {
        match &self.modulus {
            None => {
                if b.is_zero() {
                    return Err(PolynomialError::domain(format!(
                        "Encountered division by zero ({a} / {b})"
                    )));
                }
                if !(a % b).is_zero() {
                    return Err(PolynomialError::domain(format!(
                        "Encountered non-integer value during division ({a} and {b})"
                    )));
                }
                Ok(a / b)
            }
            Some(m) => {
                if self.ignore_sign && (a.is_negative() != b.is_negative()) {
                    Ok(-mod_divide(&a.abs(), &b.abs(), m)?)
                } else {
                    mod_divide(a, b, m)
                }
            }
        }
    }
}

impl fmt::Display for ModulusContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.modulus {
            Some(m) => write!(f, "Z/{m}Z"),
            None => write!(f, "Z"),
        }
    }
}
