// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// Integer long division hit a leading coefficient ratio that is not an integer.
    ///
    /// The whole division is abandoned; no partial quotient is returned.
    #[error("Inexact division: leading coefficient {divisor_lead} does not divide {dividend_lead}")]
    InexactDivision {
        dividend_lead: BigInt,
        divisor_lead: BigInt,
    },

    /// A shift by a negative power of x was requested.
    #[error("Negative shift: {shift}")]
    NegativeShift { shift: i64 },

    /// The shifted polynomial would not fit in memory.
    #[error("Shift too large: {shift}")]
    ShiftTooLarge { shift: i64 },

    /// The value has no inverse modulo the given modulus.
    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible { value: BigInt, modulus: BigInt },

    /// The modulus is not a positive integer.
    #[error("Invalid modulus: {modulus}")]
    InvalidModulus { modulus: BigInt },

    /// Parse error for a coefficient
    #[error("Parse error: {0}")]
    ParseError(#[from] num_bigint::ParseBigIntError),
}
