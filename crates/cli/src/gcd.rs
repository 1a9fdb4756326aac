// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use polyshare_polynomial::{Modulus, Polynomial};

pub fn execute(a: &Polynomial, b: &Polynomial, modulus: Option<&Modulus>) -> Result<()> {
    println!("{}", gcd(a, b, modulus)?);
    Ok(())
}

/// The result is not normalized, so it may differ from a monic gcd by a constant factor.
pub fn gcd(a: &Polynomial, b: &Polynomial, modulus: Option<&Modulus>) -> Result<Polynomial> {
    a.gcd(b, modulus)
        .with_context(|| format!("Could not compute gcd({a}, {b})"))
}
