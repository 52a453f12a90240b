// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Sparse polynomial representation and ring operations.

use crate::context::ModulusContext;
use crate::format::{write_magnitude, SymbolFormat, DEFAULT_SYMBOL};
use crate::monomial::Monomial;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial stored as a sparse map from degree to coefficient.
///
/// The map always holds an entry at degree zero. Entries whose coefficient is zero
/// may remain in the map; queries filter them out. Coefficients are reduced under the
/// [`ModulusContext`] of the operation that last wrote them.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    terms: BTreeMap<BigInt, BigInt>,
}

impl Polynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        let mut terms = BTreeMap::new();
        terms.insert(BigInt::zero(), BigInt::zero());
        Self { terms }
    }

    /// Creates a polynomial by accumulating `monomials` into zero.
    ///
    /// Terms sharing a degree are added together.
    pub fn new(monomials: impl IntoIterator<Item = Monomial>, ctx: &ModulusContext) -> Self {
        let mut poly = Self::zero();
        for monomial in monomials {
            poly.accumulate_monomial(&monomial, ctx);
        }
        poly
    }

    /// The constant polynomial `1`.
    pub fn one(ctx: &ModulusContext) -> Self {
        Self::from_integer(1, ctx)
    }

    /// A constant polynomial.
    pub fn from_integer(constant: impl Into<BigInt>, ctx: &ModulusContext) -> Self {
        Self::from_monomial(Monomial::constant(constant, ctx), ctx)
    }

    /// A single-term polynomial.
    pub fn from_monomial(monomial: Monomial, ctx: &ModulusContext) -> Self {
        Self::new([monomial], ctx)
    }

    /// Creates a polynomial from coefficients in descending order of degree.
    pub fn from_coefficients(coefficients: &[BigInt], ctx: &ModulusContext) -> Self {
        let top = coefficients.len();
        Self::new(
            coefficients
                .iter()
                .enumerate()
                .map(|(i, c)| Monomial::new(c.clone(), top - 1 - i, ctx)),
            ctx,
        )
    }

    /// The binomial `x + a`.
    pub fn binomial(a: impl Into<BigInt>, ctx: &ModulusContext) -> Self {
        Self::new(
            [Monomial::new(1, 1, ctx), Monomial::constant(a, ctx)],
            ctx,
        )
    }

    /// The polynomial modulus `x^r - 1`.
    pub fn cyclic_modulus(r: impl Into<BigInt>, ctx: &ModulusContext) -> Self {
        Self::new(
            [Monomial::new(1, r, ctx), Monomial::constant(-1, ctx)],
            ctx,
        )
    }

    /// The multinomial `1 + x + ... + x^(n-1)`.
    pub fn multinomial(n: u64, ctx: &ModulusContext) -> Self {
        Self::new((0..n).map(|i| Monomial::new(1, i, ctx)), ctx)
    }

    /// Adds `coefficient · x^degree` into this polynomial in place.
    ///
    /// This is the single write path for all arithmetic. The accumulated coefficient is
    /// reduced under `ctx`.
    pub fn accumulate(&mut self, coefficient: &BigInt, degree: &BigInt, ctx: &ModulusContext) {
        let entry = self.terms.entry(degree.clone()).or_default();
        *entry = ctx.reduce(&(&*entry + coefficient));
    }

    pub fn accumulate_monomial(&mut self, monomial: &Monomial, ctx: &ModulusContext) {
        self.accumulate(monomial.coefficient(), monomial.degree(), ctx);
    }

    /// All stored terms, including zero ones, in descending degree.
    pub fn terms(&self) -> Vec<Monomial> {
        self.terms
            .iter()
            .rev()
            .map(|(d, c)| Monomial::from_parts(c.clone(), d.clone()))
            .collect()
    }

    /// Nonzero terms in descending degree.
    ///
    /// Never empty: an identically zero polynomial yields a single zero term.
    pub fn nonzero_terms(&self) -> Vec<Monomial> {
        let terms: Vec<Monomial> = self
            .terms
            .iter()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(d, c)| Monomial::from_parts(c.clone(), d.clone()))
            .collect();
        if terms.is_empty() {
            vec![Monomial::zero()]
        } else {
            terms
        }
    }

    /// All stored coefficients, including zeros, in descending degree.
    pub fn coefficients(&self) -> Vec<BigInt> {
        self.terms.values().rev().cloned().collect()
    }

    /// Nonzero coefficients in descending degree (a single zero for the zero polynomial).
    pub fn nonzero_coefficients(&self) -> Vec<BigInt> {
        self.nonzero_terms()
            .into_iter()
            .map(|m| m.coefficient().clone())
            .collect()
    }

    /// Sum of the coefficients, reduced under `ctx` when one is given.
    pub fn sum_of_coefficients(&self, ctx: Option<&ModulusContext>) -> BigInt {
        let sum: BigInt = self.terms.values().sum();
        match ctx {
            Some(ctx) => ctx.reduce(&sum),
            None => sum,
        }
    }

    /// Highest degree with a nonzero coefficient, or zero if there is none.
    pub fn degree(&self) -> BigInt {
        self.terms
            .iter()
            .rev()
            .find(|(_, c)| !c.is_zero())
            .map(|(d, _)| d.clone())
            .unwrap_or_else(BigInt::zero)
    }

    /// Coefficient at `degree`, zero if absent.
    pub fn coefficient_at(&self, degree: &BigInt) -> BigInt {
        self.terms.get(degree).cloned().unwrap_or_else(BigInt::zero)
    }

    pub fn monomial_at(&self, degree: &BigInt) -> Monomial {
        Monomial::from_parts(self.coefficient_at(degree), degree.clone())
    }

    /// The term of highest nonzero degree.
    pub fn leading_term(&self) -> Monomial {
        self.monomial_at(&self.degree())
    }

    pub fn is_zero(&self) -> bool {
        self.terms.values().all(|c| c.is_zero())
    }

    /// Re-reduces every coefficient under `ctx`.
    pub fn reduce(&self, ctx: &ModulusContext) -> Self {
        Self::new(self.nonzero_terms(), ctx)
    }

    /// Adds two polynomials.
    pub fn add(&self, other: &Self, ctx: &ModulusContext) -> Self {
        let mut sum = Self::zero();
        for term in self.nonzero_terms().iter().chain(other.nonzero_terms().iter()) {
            sum.accumulate_monomial(term, ctx);
        }
        sum
    }

    /// Subtracts `other` from `self`.
    pub fn sub(&self, other: &Self, ctx: &ModulusContext) -> Self {
        self.add(&other.neg(ctx), ctx)
    }

    /// Multiplies by the constant `-1`.
    pub fn neg(&self, ctx: &ModulusContext) -> Self {
        self.mul(&Self::from_integer(-1, ctx), ctx)
    }

    /// Multiplies two polynomials term by term.
    ///
    /// Runs in `O(|p|·|q|)` over the nonzero terms.
    pub fn mul(&self, other: &Self, ctx: &ModulusContext) -> Self {
        let lhs = self.nonzero_terms();
        let rhs = other.nonzero_terms();
        let mut product = Self::zero();
        for a in &lhs {
            for b in &rhs {
                product.accumulate(
                    &(a.coefficient() * b.coefficient()),
                    &(a.degree() + b.degree()),
                    ctx,
                );
            }
        }
        product
    }

    /// Multiplies every term by a single monomial.
    pub fn mul_monomial(&self, monomial: &Monomial, ctx: &ModulusContext) -> Self {
        let mut product = Self::zero();
        for term in self.nonzero_terms() {
            product.accumulate_monomial(&term.mul(monomial, ctx), ctx);
        }
        product
    }

    /// Evaluates the polynomial at `x`, reducing under `ctx`.
    ///
    /// Negative-degree terms are skipped.
    pub fn evaluate(&self, x: &BigInt, ctx: &ModulusContext) -> BigInt {
        let mut result = BigInt::zero();
        for (degree, coeff) in self.terms.iter().filter(|(d, c)| !d.is_negative() && !c.is_zero()) {
            let mut power = BigInt::one();
            let mut exp = degree.clone();
            while exp.is_positive() {
                power = ctx.reduce(&(&power * x));
                exp -= 1;
            }
            result = ctx.reduce(&(result + coeff * power));
        }
        result
    }
}

/// Two polynomials are equal when their coefficients agree at every degree from zero
/// through the larger of their degrees.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        let top = std::cmp::max(self.degree(), other.degree());
        let mut d = BigInt::zero();
        while d <= top {
            if self.coefficient_at(&d) != other.coefficient_at(&d) {
                return false;
            }
            d += 1;
        }
        true
    }
}

impl Eq for Polynomial {}

/// Wraps an already reduced monomial without further reduction.
impl From<Monomial> for Polynomial {
    fn from(monomial: Monomial) -> Self {
        Self::from_monomial(monomial, &ModulusContext::integers())
    }
}

impl SymbolFormat for Polynomial {
    fn fmt_symbol(&self, f: &mut fmt::Formatter<'_>, symbol: char) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for term in self.nonzero_terms() {
            let negative = term.is_negative();
            if first {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            write_magnitude(f, &term.coefficient().abs(), term.degree(), symbol)?;
        }

        Ok(())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_symbol(f, DEFAULT_SYMBOL)
    }
}
