// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use polyshare_polynomial::{Modulus, Polynomial};
use std::fmt::Write;

pub fn execute(dividend: &Polynomial, divisor: &Polynomial, modulus: Option<&Modulus>) -> Result<()> {
    print!("{}", divide(dividend, divisor, modulus)?);
    Ok(())
}

pub fn divide(
    dividend: &Polynomial,
    divisor: &Polynomial,
    modulus: Option<&Modulus>,
) -> Result<String> {
    let (quotient, remainder) = dividend
        .div(divisor, modulus)
        .with_context(|| format!("Could not divide {dividend} by {divisor}"))?;

    let mut out = String::new();
    writeln!(out, "quotient: {quotient}")?;
    writeln!(out, "remainder: {remainder}")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyshare_test_helpers::small_modulus;

    #[test]
    fn test_divide() {
        let p = Polynomial::from_ints(&[1, 2, 0, 3]);
        let q = Polynomial::from_ints(&[1, 1]);
        assert_eq!(
            divide(&p, &q, None).unwrap(),
            "quotient: 3x^2 - 3x + 5\nremainder: -4\n"
        );
    }

    #[test]
    fn test_divide_modular() {
        let p = Polynomial::from_ints(&[1, 2, 0, 3]);
        let q = Polynomial::from_ints(&[1, 1]);
        // -3 = 10 and -4 = 9 mod 13
        assert_eq!(
            divide(&p, &q, Some(&small_modulus(13))).unwrap(),
            "quotient: 3x^2 + 10x + 5\nremainder: 9\n"
        );
    }

    #[test]
    fn test_divide_by_zero_polynomial() {
        let p = Polynomial::from_ints(&[4, 5]);
        assert_eq!(
            divide(&p, &Polynomial::zero(), None).unwrap(),
            "quotient: 0\nremainder: 5x + 4\n"
        );
    }

    #[test]
    fn test_inexact_division_is_reported() {
        let p = Polynomial::from_ints(&[0, 0, 3]);
        let q = Polynomial::from_ints(&[0, 2]);
        let err = divide(&p, &q, None).unwrap_err();
        assert!(format!("{err:#}").starts_with("Could not divide 3x^2 by 2x"));
    }
}
