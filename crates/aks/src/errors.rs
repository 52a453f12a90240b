// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use polylib_polynomial::PolynomialError;
use thiserror::Error;

/// Errors raised while running the primality test.
#[derive(Debug, Error)]
pub enum AksError {
    /// Arithmetic failure in one of the steps
    #[error(transparent)]
    Arithmetic(#[from] PolynomialError),

    /// The worker pool could not be created
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A value that must fit a machine word does not
    #[error("Value out of range: {message}")]
    OutOfRange { message: String },
}

pub type AksResult<T> = Result<T, AksError>;
