// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Positive modulus defining the quotient ring `Z/mZ`.

use crate::errors::PolynomialError;
use crate::utils::{check_modulus, mod_inverse, reduce};
use num_bigint::BigInt;
use std::fmt;
use std::str::FromStr;

/// A positive integer modulus.
///
/// Operations that accept a modulus reduce every coefficient they produce into `[0, m)`.
/// Division and share generation additionally assume `m` is prime.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Modulus(BigInt);

impl Modulus {
    /// Creates a modulus, rejecting zero and negative values.
    pub fn new(value: BigInt) -> Result<Self, PolynomialError> {
        check_modulus(&value)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> &BigInt {
        &self.0
    }

    /// Reduces `x` into `[0, m)`.
    pub fn reduce(&self, x: &BigInt) -> BigInt {
        reduce(x, &self.0)
    }

    /// Inverse of `x` modulo `m`.
    pub fn inverse(&self, x: &BigInt) -> Result<BigInt, PolynomialError> {
        mod_inverse(x, &self.0)
    }

    pub fn bits(&self) -> u64 {
        self.0.bits()
    }
}

impl TryFrom<BigInt> for Modulus {
    type Error = PolynomialError;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        Modulus::new(value)
    }
}

impl FromStr for Modulus {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modulus::new(s.trim().parse::<BigInt>()?)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
