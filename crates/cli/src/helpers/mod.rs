// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Context, Result};
use num_bigint::BigInt;
use polyshare_polynomial::{Modulus, Polynomial};

pub mod telemetry;

/// Parse a comma separated, constant-first coefficient list such as `1,2,0,3`
pub fn parse_polynomial(s: &str) -> Result<Polynomial> {
    if s.trim().is_empty() {
        bail!("polynomial must have at least one coefficient");
    }
    s.parse::<Polynomial>()
        .with_context(|| format!("'{s}' is not a comma separated list of integers"))
}

/// Parse a decimal integer
pub fn parse_bigint(s: &str) -> Result<BigInt> {
    s.trim()
        .parse::<BigInt>()
        .with_context(|| format!("'{s}' is not an integer"))
}

/// Parse a positive modulus
pub fn parse_modulus(s: &str) -> Result<Modulus> {
    Ok(Modulus::new(parse_bigint(s)?)?)
}
