// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use polyshare_polynomial::{Modulus, Polynomial};
use tracing::debug;

pub fn execute(poly: &Polynomial, x: &BigInt, modulus: Option<&Modulus>) {
    debug!(%poly, %x, "evaluating");
    println!("{}", poly.eval(x, modulus));
}
