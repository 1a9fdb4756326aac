// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{
    errors::ShamirError,
    primality::is_probably_prime,
    shares::{Point, ShareSet},
};
use num_bigint::{BigInt, Sign};
use polyshare_polynomial::{Modulus, Polynomial};
use rand::Rng;
use tracing::{debug, info};

/// Number of random bytes drawn per field element: one more than the byte length of
/// the modulus, so the reduction bias stays small.
pub fn field_element_size(modulus: &Modulus) -> usize {
    (modulus.bits() / 8 + 1) as usize
}

/// Samples `size` random bytes, reads them as a big-endian integer and reduces it
/// into `[0, m)`.
pub fn random_field_element<R: Rng + ?Sized>(size: usize, modulus: &Modulus, rng: &mut R) -> BigInt {
    let mut bytes = vec![0u8; size];
    rng.fill_bytes(&mut bytes);
    modulus.reduce(&BigInt::from_bytes_be(Sign::Plus, &bytes))
}

/// Generates a random polynomial of degree `threshold - 1` over `Z/pZ` and evaluates it
/// at `num_parties` random points.
///
/// Every coefficient and every x coordinate is an independently sampled field element.
/// The x coordinates are not deduplicated and may be zero.
///
/// The sharing polynomial is returned alongside the shares. Whoever holds it knows the
/// secret, so this is intended for constructing and testing sharings rather than for
/// handing out shares in a deployment.
///
/// # Errors
///
/// Returns `ShamirError::InvalidThreshold` when `threshold` is zero and
/// `ShamirError::ModulusNotPrime` when `prime` fails the primality test.
pub fn generate_shares<R: Rng + ?Sized>(
    num_parties: usize,
    threshold: usize,
    prime: &BigInt,
    rng: &mut R,
) -> Result<(ShareSet, Polynomial), ShamirError> {
    info!(num_parties, threshold, "generate_shares");

    if threshold == 0 {
        return Err(ShamirError::InvalidThreshold { threshold });
    }

    if !is_probably_prime(prime) {
        debug!(%prime, "rejecting composite modulus");
        return Err(ShamirError::ModulusNotPrime {
            modulus: prime.clone(),
        });
    }

    let modulus = Modulus::new(prime.clone())?;
    let size = field_element_size(&modulus);

    debug!(size, "generate_shares:sampling polynomial...");
    let coefficients = (0..threshold)
        .map(|_| random_field_element(size, &modulus, rng))
        .collect();
    let poly = Polynomial::new(coefficients);

    debug!(degree = poly.degree(), "generate_shares:evaluating shares...");
    let shares = (0..num_parties)
        .map(|_| {
            let x = random_field_element(size, &modulus, rng);
            let y = poly.eval(&x, Some(&modulus));
            Point::new(x, y)
        })
        .collect::<ShareSet>();

    Ok((shares, poly))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Signed;
    use polyshare_test_helpers::{bigint, create_rng_from_u64, modulus_61, COMPOSITE_61, PRIME_61};
    use tracing_test::traced_test;

    #[test]
    fn test_field_element_size() {
        assert_eq!(field_element_size(&modulus_61()), 8);
        let m = Modulus::new(BigInt::from(256)).unwrap();
        assert_eq!(field_element_size(&m), 2);
    }

    #[test]
    fn test_random_field_element_in_range() {
        let mut rng = create_rng_from_u64(1);
        let m = Modulus::new(BigInt::from(101)).unwrap();
        let size = field_element_size(&m);
        for _ in 0..200 {
            let e = random_field_element(size, &m, &mut rng);
            assert!(!e.is_negative());
            assert!(e < BigInt::from(101));
        }
    }

    #[test]
    #[traced_test]
    fn test_generate_shares() {
        let mut rng = create_rng_from_u64(42);
        let prime = bigint(PRIME_61);
        let (shares, poly) = generate_shares(5, 3, &prime, &mut rng).unwrap();

        assert_eq!(shares.len(), 5);
        assert_eq!(poly.degree(), 2);
        assert!(shares.verify(&poly, &modulus_61()));
        assert!(poly.coefficients().iter().all(|c| !c.is_negative() && c < &prime));
        assert!(logs_contain("generate_shares"));
    }

    #[test]
    fn test_generate_shares_is_deterministic_for_a_seed() {
        let prime = bigint(PRIME_61);
        let first = generate_shares(4, 2, &prime, &mut create_rng_from_u64(9)).unwrap();
        let second = generate_shares(4, 2, &prime, &mut create_rng_from_u64(9)).unwrap();
        let other = generate_shares(4, 2, &prime, &mut create_rng_from_u64(10)).unwrap();

        assert_eq!(first, second);
        assert_ne!(first.1, other.1);
    }

    #[test]
    fn test_composite_modulus_is_rejected() {
        let mut rng = create_rng_from_u64(42);
        let composite = bigint(COMPOSITE_61);
        assert_eq!(
            generate_shares(5, 3, &composite, &mut rng),
            Err(ShamirError::ModulusNotPrime { modulus: composite })
        );
        assert!(matches!(
            generate_shares(5, 3, &BigInt::from(0), &mut rng),
            Err(ShamirError::ModulusNotPrime { .. })
        ));
    }

    #[test]
    fn test_zero_threshold_is_rejected() {
        let mut rng = create_rng_from_u64(42);
        assert_eq!(
            generate_shares(5, 0, &bigint(PRIME_61), &mut rng),
            Err(ShamirError::InvalidThreshold { threshold: 0 })
        );
    }

    #[test]
    fn test_constant_polynomial_for_threshold_one() {
        let mut rng = create_rng_from_u64(3);
        let (shares, poly) = generate_shares(3, 1, &bigint(PRIME_61), &mut rng).unwrap();
        assert_eq!(poly.degree(), 0);
        assert!(shares.iter().all(|s| s.y() == poly.constant_term()));
    }
}
