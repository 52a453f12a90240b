// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Square-and-multiply exponentiation, optionally reduced by a polynomial modulus.

use crate::context::ModulusContext;
use crate::errors::{PolynomialError, PolynomialResult};
use crate::polynomial::Polynomial;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use tracing::{trace, warn};

impl Polynomial {
    /// Raises `self` to `exponent`.
    ///
    /// With `poly_modulus`, the base and the running result are reduced by
    /// [`Polynomial::poly_mod`] once up front and after every multiplication, which keeps
    /// the working degree below the modulus degree.
    ///
    /// # Errors
    ///
    /// `Domain` for a negative exponent, plus any error raised while reducing by
    /// `poly_modulus`.
    pub fn pow(
        &self,
        exponent: &BigInt,
        poly_modulus: Option<&Polynomial>,
        ctx: &ModulusContext,
    ) -> PolynomialResult<Polynomial> {
        if exponent.is_negative() {
            return Err(PolynomialError::domain(format!(
                "Cannot raise a polynomial to the negative power {exponent}"
            )));
        }

        if ctx.modulus().is_none() && ctx.has_safety_checks() {
            warn!(
                %exponent,
                "Exponentiation without an integer modulus; coefficients are unbounded"
            );
        }

        let reduce = |p: Polynomial| -> PolynomialResult<Polynomial> {
            match poly_modulus {
                Some(m) => p.poly_mod(m, ctx),
                None => Ok(p),
            }
        };

        let mut result = reduce(Polynomial::one(ctx))?;
        let mut base = reduce(self.reduce(ctx))?;
        let mut exp = exponent.clone();

        while !exp.is_zero() {
            if exp.is_odd() {
                result = reduce(result.mul(&base, ctx))?;
            }
            exp >>= 1;
            if !exp.is_zero() {
                base = reduce(base.mul(&base, ctx))?;
            }
            trace!(remaining_bits = exp.bits(), degree = %result.degree(), "pow step");
        }

        Ok(result)
    }
}
