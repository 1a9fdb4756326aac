// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! A polynomial library with big integer coefficients designed for cryptographic operations.
//! Coefficients are arbitrary precision integers, optionally reduced modulo a prime.
//!
//! ## Features
//!
//! - Uses `num-bigint` for coefficient representation.
//! - Dense canonical representation: coefficients are stored lowest degree first and the
//!   leading coefficient of a non-constant polynomial is never zero.
//! - Arithmetic with an optional modulus: addition, subtraction, multiplication, long
//!   division (modular inverse of the divisor's leading coefficient when a modulus is
//!   given), Euclidean GCD and evaluation.
//! - Random polynomials drawn from an injected random number generator.
//!
//! ## Integer domain
//!
//! Without a modulus, division stays in the integers: a step whose leading coefficient
//! ratio is fractional aborts with [`PolynomialError::InexactDivision`]. Fractional
//! coefficients are never produced.

pub mod errors;
pub mod modulus;
pub mod polynomial;
pub mod utils;

pub use errors::PolynomialError;
pub use modulus::Modulus;
pub use polynomial::Polynomial;
pub use utils::*;
