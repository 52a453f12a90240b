// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial long division.

use crate::context::ModulusContext;
use crate::errors::{PolynomialError, PolynomialResult};
use crate::polynomial::Polynomial;

impl Polynomial {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// Leading coefficients are divided with [`ModulusContext::divide_exact`], so over Z
    /// every step must divide exactly and over Z/mZ the divisor's leading coefficient
    /// must be invertible.
    ///
    /// # Errors
    ///
    /// - `DivisionByZero` if `divisor` is identically zero.
    /// - `Domain` if an integer step is inexact.
    /// - `BadModulus` if the leading coefficient has no inverse modulo `m`.
    pub fn div(
        &self,
        divisor: &Polynomial,
        ctx: &ModulusContext,
    ) -> PolynomialResult<(Polynomial, Polynomial)> {
        long_division(self, divisor, ctx, true)
    }

    /// Remainder of `self` divided by `modulus`.
    ///
    /// Same as [`Polynomial::div`] without building the quotient.
    pub fn poly_mod(&self, modulus: &Polynomial, ctx: &ModulusContext) -> PolynomialResult<Polynomial> {
        long_division(self, modulus, ctx, false).map(|(_, remainder)| remainder)
    }
}

fn long_division(
    dividend: &Polynomial,
    divisor: &Polynomial,
    ctx: &ModulusContext,
    keep_quotient: bool,
) -> PolynomialResult<(Polynomial, Polynomial)> {
    if divisor.is_zero() {
        return Err(PolynomialError::DivisionByZero);
    }

    let divisor_degree = divisor.degree();
    let divisor_lead = divisor.leading_term();
    let mut quotient = Polynomial::zero();
    let mut current = dividend.clone();

    while !current.is_zero() && current.degree() >= divisor_degree {
        let t = current.leading_term().div(&divisor_lead, ctx)?;
        current = current.sub(&divisor.mul_monomial(&t, ctx), ctx);
        if keep_quotient {
            quotient.accumulate_monomial(&t, ctx);
        }
    }

    Ok((quotient, current))
}
