// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Printing of monomials and polynomials with a configurable variable symbol.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::fmt;

/// The variable symbol used by `Display`.
pub const DEFAULT_SYMBOL: char = 'x';

/// Types that print in terms of a variable symbol.
pub trait SymbolFormat {
    /// Writes `self` using `symbol` as the variable.
    fn fmt_symbol(&self, f: &mut fmt::Formatter<'_>, symbol: char) -> fmt::Result;

    /// Returns a `Display` adapter that prints with `symbol`.
    fn with_symbol(&self, symbol: char) -> WithSymbol<'_, Self> {
        WithSymbol {
            value: self,
            symbol,
        }
    }
}

/// `Display` adapter returned by [`SymbolFormat::with_symbol`].
pub struct WithSymbol<'a, T: ?Sized> {
    value: &'a T,
    symbol: char,
}

impl<T: SymbolFormat + ?Sized> fmt::Display for WithSymbol<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt_symbol(f, self.symbol)
    }
}

/// Writes the unsigned part of a term: `c`, `x`, `cx`, `x^d` or `cx^d`.
pub(crate) fn write_magnitude(
    f: &mut fmt::Formatter<'_>,
    abs_coeff: &BigInt,
    degree: &BigInt,
    symbol: char,
) -> fmt::Result {
    if degree.is_zero() {
        return write!(f, "{abs_coeff}");
    }
    if !abs_coeff.is_one() {
        write!(f, "{abs_coeff}")?;
    }
    write!(f, "{symbol}")?;
    if !degree.is_one() {
        write!(f, "^{degree}")?;
    }
    Ok(())
}
