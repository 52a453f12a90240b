// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Single terms `c·x^d`.

use crate::context::ModulusContext;
use crate::errors::PolynomialResult;
use crate::format::{write_magnitude, SymbolFormat, DEFAULT_SYMBOL};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A term `coefficient · x^degree`.
///
/// The coefficient is reduced under the context passed at construction. The degree
/// may be negative as an intermediate artifact of division.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monomial {
    coefficient: BigInt,
    degree: BigInt,
}

impl Monomial {
    /// Creates a monomial, reducing the coefficient under `ctx`.
    pub fn new(
        coefficient: impl Into<BigInt>,
        degree: impl Into<BigInt>,
        ctx: &ModulusContext,
    ) -> Self {
        Self {
            coefficient: ctx.reduce(&coefficient.into()),
            degree: degree.into(),
        }
    }

    /// A degree zero monomial.
    pub fn constant(coefficient: impl Into<BigInt>, ctx: &ModulusContext) -> Self {
        Self::new(coefficient, BigInt::zero(), ctx)
    }

    /// The zero term at degree zero.
    pub fn zero() -> Self {
        Self {
            coefficient: BigInt::zero(),
            degree: BigInt::zero(),
        }
    }

    /// Builds a monomial from values that are already reduced.
    pub(crate) fn from_parts(coefficient: BigInt, degree: BigInt) -> Self {
        Self {
            coefficient,
            degree,
        }
    }

    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    pub fn degree(&self) -> &BigInt {
        &self.degree
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    pub fn is_constant(&self) -> bool {
        self.degree.is_zero()
    }

    /// Coefficient product, degree sum.
    pub fn mul(&self, other: &Self, ctx: &ModulusContext) -> Self {
        Self::new(
            &self.coefficient * &other.coefficient,
            &self.degree + &other.degree,
            ctx,
        )
    }

    /// Coefficient quotient under `ctx`, degree difference.
    ///
    /// # Errors
    ///
    /// `Domain` if the integer division is inexact, `BadModulus` if `other`'s
    /// coefficient is not invertible modulo the active modulus.
    pub fn div(&self, other: &Self, ctx: &ModulusContext) -> PolynomialResult<Self> {
        let coefficient = ctx.divide_exact(&self.coefficient, &other.coefficient)?;
        Ok(Self::new(coefficient, &self.degree - &other.degree, ctx))
    }

    pub fn neg(&self, ctx: &ModulusContext) -> Self {
        Self::new(-&self.coefficient, self.degree.clone(), ctx)
    }

    /// The same term with the coefficient's absolute value.
    pub fn abs(&self) -> Self {
        Self::from_parts(self.coefficient.abs(), self.degree.clone())
    }
}

impl SymbolFormat for Monomial {
    fn fmt_symbol(&self, f: &mut fmt::Formatter<'_>, symbol: char) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.is_negative() {
            write!(f, "-")?;
        }
        write_magnitude(f, &self.coefficient.abs(), &self.degree, symbol)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_symbol(f, DEFAULT_SYMBOL)
    }
}
