// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::{BigInt, BigUint};

/// Probabilistic primality test for a share modulus, backed by `is_prime`.
///
/// Negative numbers, 0 and 1 are not prime.
pub fn is_probably_prime(n: &BigInt) -> bool {
    let Some(n) = n.to_biguint() else {
        return false;
    };
    if n < BigUint::from(2u32) {
        return false;
    }
    if n < BigUint::from(4u32) {
        return true;
    }
    is_prime::is_prime(&n.to_str_radix(10))
}
