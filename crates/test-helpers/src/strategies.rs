// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use polyshare_polynomial::Polynomial;
use proptest::prelude::*;

/// Polynomials of degree at most `max_degree` with coefficients in `[-bound, bound]`.
pub fn arb_polynomial(max_degree: usize, bound: i64) -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(-bound..=bound, 1..=max_degree + 1)
        .prop_map(|coeffs| Polynomial::from_ints(&coeffs))
}

/// Like [`arb_polynomial`] but never the zero polynomial.
pub fn arb_nonzero_polynomial(max_degree: usize, bound: i64) -> impl Strategy<Value = Polynomial> {
    arb_polynomial(max_degree, bound).prop_filter("nonzero polynomial", |p| !p.is_zero())
}

/// Polynomials whose leading coefficient is 1, so integer division is always exact.
pub fn arb_monic_polynomial(max_degree: usize, bound: i64) -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(-bound..=bound, 0..=max_degree).prop_map(|mut coeffs| {
        coeffs.push(1);
        Polynomial::from_ints(&coeffs)
    })
}

pub fn arb_bigint(bound: i64) -> impl Strategy<Value = BigInt> {
    (-bound..=bound).prop_map(BigInt::from)
}
