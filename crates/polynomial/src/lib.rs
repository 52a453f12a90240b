// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Exact univariate polynomial arithmetic with big integer coefficients, either over the
//! integers or over the residues modulo a positive integer.
//!
//! ## Features
//!
//! - Uses `num-bigint` for both coefficients and degrees.
//! - Sparse representation: only degrees that were written are stored.
//! - Explicit arithmetic context: every operation takes a [`ModulusContext`] selecting
//!   Z or Z/mZ, so there is no hidden global modulus.
//! - Long division, remainder reduction and square-and-multiply exponentiation modulo a
//!   polynomial such as `x^r - 1`.
//! - Number theoretic helpers (inverse, totient, multiplicative order, perfect powers).
//! - Serialization: optional serde support, exercised with bincode.
//!
//! ## Example
//!
//! ```
//! use num_bigint::BigInt;
//! use polylib_polynomial::{ModulusContext, Polynomial};
//!
//! let ctx = ModulusContext::with_modulus(7).unwrap();
//! let p = Polynomial::parse("x + 1", &ctx).unwrap();
//! let m = Polynomial::cyclic_modulus(5, &ctx);
//! let q = p.pow(&BigInt::from(7), Some(&m), &ctx).unwrap();
//! assert_eq!(q.to_string(), "x^2 + 1");
//! ```

pub mod context;
pub mod division;
pub mod errors;
pub mod format;
pub mod monomial;
pub mod parse;
pub mod polynomial;
pub mod power;
pub mod utils;

pub use context::ModulusContext;
pub use errors::{ErrorKind, PolynomialError, PolynomialResult};
pub use format::{SymbolFormat, WithSymbol, DEFAULT_SYMBOL};
pub use monomial::Monomial;
pub use polynomial::Polynomial;
pub use utils::*;
