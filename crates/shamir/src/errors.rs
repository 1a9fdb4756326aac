// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use polyshare_polynomial::PolynomialError;
use thiserror::Error;

/// Errors that can occur while generating shares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    /// The supplied modulus failed the probabilistic primality test.
    #[error("Modulus {modulus} is not prime")]
    ModulusNotPrime { modulus: BigInt },

    /// A threshold of zero leaves the sharing polynomial without coefficients.
    #[error("Invalid threshold {threshold}: at least one share must be required")]
    InvalidThreshold { threshold: usize },

    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}
