// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # AKS primality test
//!
//! Deterministic primality proving on top of `polylib-polynomial`. The test runs five
//! ordered steps and stops at the first conclusive one:
//!
//! 1. perfect power check,
//! 2. search for the cyclic modulus degree `r` (see [`FindR`]),
//! 3. trial division up to `min(r, n - 1)`,
//! 4. `n <= r` shortcut,
//! 5. the polynomial identity `(x + a)^n ≡ x^n + a` modulo `(n, x^r - 1)`.
//!
//! Steps 3 and 5 can fan out over rayon. Both fan-outs report the smallest witness, so
//! parallel and sequential runs return identical reports.
//!
//! ```
//! use num_bigint::BigUint;
//! use polylib_aks::aks_primality_test;
//!
//! assert!(aks_primality_test(&BigUint::from(61u32)).unwrap());
//! assert!(!aks_primality_test(&BigUint::from(63u32)).unwrap());
//! ```

mod aks;
mod errors;
mod find_r;
pub mod pool;

pub use aks::*;
pub use errors::*;
pub use find_r::*;
