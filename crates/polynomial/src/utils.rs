// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Modular helpers shared by the polynomial operations.

use crate::errors::PolynomialError;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Reduces a number modulo a modulus.
///
/// # Arguments
///
/// * `x` - The number to reduce
/// * `modulus` - The modulus to reduce by
///
/// # Returns
///
/// The reduced number in the range [0, modulus)
pub fn reduce(x: &BigInt, modulus: &BigInt) -> BigInt {
    let mut r = x % modulus;
    if r < BigInt::zero() {
        r += modulus;
    }
    r
}

/// Reduces each element of `coefficients` into `[0, p)`, returning a new vector.
pub fn reduce_coefficients(coefficients: &[BigInt], p: &BigInt) -> Vec<BigInt> {
    coefficients.iter().map(|coeff| reduce(coeff, p)).collect()
}

/// Reduces each element of `coefficients` into `[0, p)` in place.
pub fn reduce_coefficients_mut(coefficients: &mut [BigInt], p: &BigInt) {
    for coeff in coefficients.iter_mut() {
        *coeff = reduce(coeff, p);
    }
}

/// Computes the inverse of `value` modulo `modulus`.
///
/// # Errors
///
/// Returns `PolynomialError::InvalidModulus` if the modulus is not positive and
/// `PolynomialError::NotInvertible` if `gcd(value, modulus) != 1`.
pub fn mod_inverse(value: &BigInt, modulus: &BigInt) -> Result<BigInt, PolynomialError> {
    check_modulus(modulus)?;
    reduce(value, modulus)
        .modinv(modulus)
        .ok_or_else(|| PolynomialError::NotInvertible {
            value: value.clone(),
            modulus: modulus.clone(),
        })
}

/// Rejects moduli that do not define a quotient ring `Z/mZ` with `m >= 1`.
pub fn check_modulus(modulus: &BigInt) -> Result<(), PolynomialError> {
    if modulus.is_positive() {
        Ok(())
    } else {
        Err(PolynomialError::InvalidModulus {
            modulus: modulus.clone(),
        })
    }
}
