// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for integer and polynomial arithmetic.

use num_bigint::BigInt;
use thiserror::Error;

/// The category an arithmetic failure belongs to.
///
/// Callers generally only need to know which kind of failure occurred, not the
/// exact variant that carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation invoked outside its mathematical domain.
    Domain,
    /// A value that must be invertible under the active modulus is not.
    BadModulus,
    /// The operation is intentionally unsupported.
    NotImplemented,
    /// Malformed textual input.
    Parse,
}

/// Errors that can occur during polynomial operations.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// Division by zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// Operation outside its mathematical domain
    #[error("Domain error: {message}")]
    Domain { message: String },

    /// Value not invertible for the modulus
    #[error("Bad modulus: {value} is not invertible modulo {modulus}")]
    BadModulus { value: BigInt, modulus: BigInt },

    /// Feature intentionally unsupported
    #[error("Not implemented: {message}")]
    NotImplemented { message: String },

    /// Malformed monomial or polynomial text
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Parse error for BigInt
    #[error("Parse error: {0}")]
    ParseInt(#[from] num_bigint::ParseBigIntError),
}

impl PolynomialError {
    /// Create a domain error with a message
    pub fn domain(message: impl Into<String>) -> Self {
        PolynomialError::Domain {
            message: message.into(),
        }
    }

    /// Create a not-implemented error with a message
    pub fn not_implemented(message: impl Into<String>) -> Self {
        PolynomialError::NotImplemented {
            message: message.into(),
        }
    }

    /// Create a parse error with a message
    pub fn parse(message: impl Into<String>) -> Self {
        PolynomialError::Parse {
            message: message.into(),
        }
    }

    /// The kind of failure this error represents.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PolynomialError::DivisionByZero | PolynomialError::Domain { .. } => ErrorKind::Domain,
            PolynomialError::BadModulus { .. } => ErrorKind::BadModulus,
            PolynomialError::NotImplemented { .. } => ErrorKind::NotImplemented,
            PolynomialError::Parse { .. } | PolynomialError::ParseInt(_) => ErrorKind::Parse,
        }
    }
}

/// Result type alias for polynomial operations
pub type PolynomialResult<T> = Result<T, PolynomialError>;
