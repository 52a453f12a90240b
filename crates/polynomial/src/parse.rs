// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Text syntax for monomials and polynomials.
//!
//! A monomial is written `[coefficient][symbol][^degree]` where the symbol is any single
//! ASCII letter. `**` is read as `^` and `*` is ignored, so `3*x**2` and `3x^2` are the
//! same term. A polynomial is a sequence of monomials joined by `+` or `-`; whitespace
//! and parentheses are ignored.

use crate::context::ModulusContext;
use crate::errors::{PolynomialError, PolynomialResult};
use crate::monomial::Monomial;
use crate::polynomial::Polynomial;
use num_bigint::BigInt;
use num_traits::One;
use std::str::FromStr;

impl Monomial {
    /// Parses a single term, reducing its coefficient under `ctx`.
    ///
    /// # Errors
    ///
    /// `NotImplemented` for decimal coefficients, `Parse` or `ParseInt` for anything
    /// else that is not a term.
    pub fn parse(input: &str, ctx: &ModulusContext) -> PolynomialResult<Self> {
        let text: String = input
            .replace("**", "^")
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '*' && *c != '+')
            .collect();

        if text.is_empty() {
            return Err(PolynomialError::parse("Empty monomial"));
        }
        if text.contains('.') {
            return Err(PolynomialError::not_implemented(format!(
                "Decimal coefficients are not supported ({input})"
            )));
        }

        let mut parts = text.split('^');
        let head = parts.next().unwrap_or_default();
        let degree_text = parts.next();
        if parts.next().is_some() {
            return Err(PolynomialError::parse(format!(
                "Monomial has more than one exponent ({input})"
            )));
        }

        let letters = head.chars().filter(|c| c.is_ascii_alphabetic()).count();
        match letters {
            0 => {
                if degree_text.is_some() {
                    return Err(PolynomialError::parse(format!(
                        "Exponent without a symbol ({input})"
                    )));
                }
                let coefficient = match head {
                    "-" => -BigInt::one(),
                    _ => BigInt::from_str(head)?,
                };
                Ok(Monomial::constant(coefficient, ctx))
            }
            1 => {
                let Some(coefficient_text) = head.strip_suffix(|c: char| c.is_ascii_alphabetic())
                else {
                    return Err(PolynomialError::parse(format!(
                        "Symbol must follow the coefficient ({input})"
                    )));
                };
                let coefficient = match coefficient_text {
                    "" => BigInt::one(),
                    "-" => -BigInt::one(),
                    _ => BigInt::from_str(coefficient_text)?,
                };
                let degree = match degree_text {
                    Some(d) => BigInt::from_str(d)?,
                    None => BigInt::one(),
                };
                Ok(Monomial::new(coefficient, degree, ctx))
            }
            _ => Err(PolynomialError::parse(format!(
                "Monomial has more than one symbol ({input})"
            ))),
        }
    }
}

impl Polynomial {
    /// Parses a sum of terms, reducing coefficients under `ctx`.
    ///
    /// # Errors
    ///
    /// `Parse` for empty input, otherwise whatever [`Monomial::parse`] reports for the
    /// first malformed term.
    pub fn parse(input: &str, ctx: &ModulusContext) -> PolynomialResult<Self> {
        let text: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
            .collect();
        if text.is_empty() {
            return Err(PolynomialError::parse("Empty polynomial"));
        }

        // Negative exponents keep their sign.
        let text = text
            .replace("**", "^")
            .replace('-', "+-")
            .replace("^+-", "^-");

        let mut poly = Polynomial::zero();
        let mut seen = false;
        for piece in text.split('+').filter(|p| !p.is_empty()) {
            poly.accumulate_monomial(&Monomial::parse(piece, ctx)?, ctx);
            seen = true;
        }
        if !seen {
            return Err(PolynomialError::parse(format!("No terms in ({input})")));
        }
        Ok(poly)
    }
}

impl FromStr for Monomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Monomial::parse(s, &ModulusContext::integers())
    }
}

impl FromStr for Polynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Polynomial::parse(s, &ModulusContext::integers())
    }
}
