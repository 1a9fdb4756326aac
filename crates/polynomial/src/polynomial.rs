// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic implementation.

use crate::errors::PolynomialError;
use crate::modulus::Modulus;
use crate::utils::{reduce_coefficients, reduce_coefficients_mut};
use num_bigint::{BigInt, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand::Rng;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;
use tracing::{debug, trace};

/// A dense polynomial represented by its coefficients in ascending order of degree.
///
/// Index `i` holds the coefficient of `x^i`, so `3x^3 + 2x + 1` is stored as `[1, 2, 0, 3]`.
/// The representation is always canonical: the leading coefficient of a non-constant
/// polynomial is nonzero and the zero polynomial is `[0]`, never an empty vector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polynomial {
    /// Coefficients in ascending order (constant term first).
    coefficients: Vec<BigInt>,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (degree, coeff) in self.coefficients.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }

            if first {
                if coeff.is_negative() {
                    write!(f, "-")?;
                }
            } else if coeff.is_positive() {
                write!(f, " + ")?;
            } else {
                write!(f, " - ")?;
            }
            first = false;

            let abs_coeff = coeff.abs();
            if degree == 0 || !abs_coeff.is_one() {
                write!(f, "{abs_coeff}")?;
            }

            if degree > 0 {
                write!(f, "x")?;
                if degree > 1 {
                    write!(f, "^{degree}")?;
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

/// Parses a comma separated list of coefficients in ascending order, e.g. `"1, 2, 0, 3"`.
impl FromStr for Polynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coefficients = s
            .split(',')
            .map(|c| c.trim().parse::<BigInt>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polynomial::new(coefficients))
    }
}

impl From<Vec<BigInt>> for Polynomial {
    fn from(coefficients: Vec<BigInt>) -> Self {
        Polynomial::new(coefficients)
    }
}

impl From<Vec<i64>> for Polynomial {
    fn from(coefficients: Vec<i64>) -> Self {
        Polynomial::from_ints(&coefficients)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}

impl Polynomial {
    /// Creates a new polynomial from a vector of coefficients.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Vector of coefficients in ascending order of degree. Trailing
    ///   zeros are trimmed and an empty vector yields the zero polynomial.
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        let mut poly = Self { coefficients };
        poly.trim();
        poly
    }

    /// Creates a polynomial from small integer coefficients in ascending order.
    pub fn from_ints(coefficients: &[i64]) -> Self {
        Polynomial::new(coefficients.iter().map(|&c| BigInt::from(c)).collect())
    }

    /// The zero polynomial, `[0]`.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![BigInt::zero()],
        }
    }

    /// Creates a constant polynomial.
    ///
    /// # Arguments
    ///
    /// * `constant` - The constant value.
    pub fn constant(constant: BigInt) -> Self {
        Self {
            coefficients: vec![constant],
        }
    }

    /// Creates a random polynomial with `degree + 1` coefficients drawn uniformly from
    /// `[0, 2^bits)`.
    ///
    /// The result is canonicalized, so its degree is lower than `degree` whenever the
    /// sampled top coefficients are zero.
    pub fn random<R: Rng + ?Sized>(degree: usize, bits: u64, rng: &mut R) -> Self {
        let coefficients = (0..=degree)
            .map(|_| BigInt::from(rng.gen_biguint(bits)))
            .collect();
        Polynomial::new(coefficients)
    }

    /// Returns the coefficients of the polynomial, constant term first.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Consumes the polynomial and returns its coefficients, constant term first.
    pub fn into_coefficients(self) -> Vec<BigInt> {
        self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of the zero polynomial is 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefficients[0].is_zero()
    }

    /// Returns the leading coefficient of the polynomial.
    pub fn leading_coefficient(&self) -> &BigInt {
        &self.coefficients[self.degree()]
    }

    /// Returns the coefficient of `x^0`.
    pub fn constant_term(&self) -> &BigInt {
        &self.coefficients[0]
    }

    /// Removes leading zero coefficients. The constant term is always kept.
    fn trim(&mut self) {
        let len = self
            .coefficients
            .iter()
            .rposition(|c| !c.is_zero())
            .map_or(1, |last| last + 1);
        self.coefficients.truncate(len);
        if self.coefficients.is_empty() {
            self.coefficients.push(BigInt::zero());
        }
    }

    /// Total order used to pick which operand is processed first.
    ///
    /// Compares by degree, then by coefficients from the highest degree down. It says
    /// nothing about the magnitude of the polynomial as a function.
    pub(crate) fn compare(&self, other: &Self) -> Ordering {
        self.degree().cmp(&other.degree()).then_with(|| {
            self.coefficients
                .iter()
                .rev()
                .cmp(other.coefficients.iter().rev())
        })
    }

    /// Returns `self * x^shift`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::NegativeShift` if `shift` is negative and
    /// `PolynomialError::ShiftTooLarge` if the shifted coefficient vector cannot be
    /// allocated.
    pub fn shift(&self, shift: i64) -> Result<Self, PolynomialError> {
        if shift < 0 {
            return Err(PolynomialError::NegativeShift { shift });
        }
        if self.is_zero() {
            return Ok(Polynomial::zero());
        }

        let too_large = || PolynomialError::ShiftTooLarge { shift };
        let offset = usize::try_from(shift).map_err(|_| too_large())?;
        let len = offset
            .checked_add(self.coefficients.len())
            .ok_or_else(too_large)?;

        let mut coefficients = Vec::new();
        coefficients
            .try_reserve_exact(len)
            .map_err(|_| too_large())?;
        coefficients.resize(offset, BigInt::zero());
        coefficients.extend(self.coefficients.iter().cloned());
        Ok(Self { coefficients })
    }

    fn shifted(&self, shift: usize) -> Self {
        if self.is_zero() {
            return Polynomial::zero();
        }
        let mut coefficients = vec![BigInt::zero(); shift];
        coefficients.extend(self.coefficients.iter().cloned());
        Self { coefficients }
    }

    /// Borrows `self` when there is no modulus, otherwise returns a reduced copy.
    fn reduced(&self, modulus: Option<&Modulus>) -> Cow<'_, Self> {
        match modulus {
            Some(m) => Cow::Owned(self.reduce(m)),
            None => Cow::Borrowed(self),
        }
    }

    /// Reduces every coefficient into `[0, m)`.
    pub fn reduce(&self, modulus: &Modulus) -> Self {
        Polynomial::new(reduce_coefficients(&self.coefficients, modulus.value()))
    }

    /// Adds two polynomials together.
    ///
    /// Overlapping coefficients are summed and the higher coefficients of the larger
    /// operand are copied through. With a modulus every coefficient of the result is
    /// reduced into `[0, m)`.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to add to `self`.
    /// * `modulus` - Optional modulus for the coefficients.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the sum of the two polynomials.
    pub fn add(&self, other: &Self, modulus: Option<&Modulus>) -> Self {
        let (larger, smaller) = match self.compare(other) {
            Ordering::Less => (other, self),
            _ => (self, other),
        };

        let mut sum = larger.coefficients.clone();
        for (acc, coeff) in sum.iter_mut().zip(&smaller.coefficients) {
            *acc += coeff;
        }

        if let Some(m) = modulus {
            reduce_coefficients_mut(&mut sum, m.value());
        }

        Polynomial::new(sum)
    }

    /// Negates all coefficients of the polynomial.
    ///
    /// # Returns
    ///
    /// A new polynomial with all coefficients negated.
    pub fn neg(&self) -> Self {
        Self {
            coefficients: self.coefficients.iter().map(|x| -x).collect(),
        }
    }

    /// Subtracts `other` from `self`, computed as `self + (-other)`.
    pub fn sub(&self, other: &Self, modulus: Option<&Modulus>) -> Self {
        self.add(&other.neg(), modulus)
    }

    /// Multiplies two polynomials using the schoolbook convolution.
    ///
    /// With a modulus both operands are reduced first and every partial sum is reduced,
    /// which keeps intermediate values below `m^2`.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to multiply with `self`.
    /// * `modulus` - Optional modulus for the coefficients.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the product.
    pub fn mul(&self, other: &Self, modulus: Option<&Modulus>) -> Self {
        let lhs = self.reduced(modulus);
        let rhs = other.reduced(modulus);

        let product_len = lhs.coefficients.len() + rhs.coefficients.len() - 1;
        let mut product = vec![BigInt::zero(); product_len];

        for (i, a) in lhs.coefficients.iter().enumerate() {
            for (j, b) in rhs.coefficients.iter().enumerate() {
                let acc = &mut product[i + j];
                *acc += a * b;
                if let Some(m) = modulus {
                    let reduced = m.reduce(acc);
                    *acc = reduced;
                }
            }
        }

        Polynomial::new(product)
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    ///
    /// # Arguments
    ///
    /// * `scalar` - A `BigInt` scalar to multiply with each coefficient.
    /// * `modulus` - Optional modulus for the coefficients.
    pub fn scalar_mul(&self, scalar: &BigInt, modulus: Option<&Modulus>) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .map(|x| match modulus {
                Some(m) => m.reduce(&(x * scalar)),
                None => x * scalar,
            })
            .collect();
        Polynomial::new(coefficients)
    }

    /// Divides one polynomial by another, returning the quotient and remainder.
    ///
    /// With a modulus, both operands are reduced first and each step divides by the
    /// leading coefficient of the divisor through its modular inverse, so the modulus
    /// must be prime (or at least coprime to that coefficient).
    ///
    /// Without a modulus the division stays in the integers. If at any step the leading
    /// coefficient of the divisor does not divide the leading coefficient of the running
    /// remainder, the whole division is abandoned.
    ///
    /// If the divisor is the zero polynomial, or has a higher degree than `self`, the
    /// quotient is zero and the remainder is `self`.
    ///
    /// On success `quotient * divisor + remainder == self` (modulo `m` when given) and
    /// the remainder is zero or has a lower degree than the divisor.
    ///
    /// # Arguments
    ///
    /// * `divisor` - A reference to the divisor polynomial.
    /// * `modulus` - Optional modulus for the coefficients.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InexactDivision` if an integer division step is not exact.
    /// Returns `PolynomialError::NotInvertible` if the divisor's leading coefficient has
    /// no inverse modulo `m`.
    pub fn div(
        &self,
        divisor: &Self,
        modulus: Option<&Modulus>,
    ) -> Result<(Self, Self), PolynomialError> {
        let dividend = self.reduced(modulus);
        let divisor = divisor.reduced(modulus);

        if dividend.degree() < divisor.degree() || divisor.is_zero() {
            return Ok((Polynomial::zero(), dividend.into_owned()));
        }

        let divisor_degree = divisor.degree();
        let divisor_lead = divisor.leading_coefficient();
        let field = match modulus {
            Some(m) => Some((m, m.inverse(divisor_lead)?)),
            None => None,
        };

        let mut quotient = vec![BigInt::zero(); dividend.degree() - divisor_degree + 1];
        let mut remainder = dividend.into_owned();

        while !remainder.is_zero() && remainder.degree() >= divisor_degree {
            let offset = remainder.degree() - divisor_degree;
            let lead = remainder.leading_coefficient();

            let ratio = match &field {
                Some((m, inverse)) => m.reduce(&(lead * inverse)),
                None => {
                    let (ratio, rest) = lead.div_rem(divisor_lead);
                    if !rest.is_zero() {
                        debug!(%lead, %divisor_lead, "aborting inexact integer division");
                        return Err(PolynomialError::InexactDivision {
                            dividend_lead: lead.clone(),
                            divisor_lead: divisor_lead.clone(),
                        });
                    }
                    ratio
                }
            };

            trace!(offset, %ratio, "division step");
            let step = divisor.shifted(offset).scalar_mul(&ratio, modulus);
            remainder = remainder.sub(&step, modulus);
            quotient[offset] = ratio;
        }

        Ok((Polynomial::new(quotient), remainder))
    }

    /// Returns only the remainder of [`Polynomial::div`].
    pub fn rem(&self, divisor: &Self, modulus: Option<&Modulus>) -> Result<Self, PolynomialError> {
        self.div(divisor, modulus).map(|(_, remainder)| remainder)
    }

    /// Computes a greatest common divisor with the Euclidean algorithm.
    ///
    /// The result is not normalized: over a prime field any nonzero scalar multiple of it
    /// is an equally valid gcd.
    ///
    /// # Errors
    ///
    /// Propagates division errors. Without a modulus a remainder sequence that leaves
    /// the integers ends in `PolynomialError::InexactDivision` rather than looping.
    pub fn gcd(&self, other: &Self, modulus: Option<&Modulus>) -> Result<Self, PolynomialError> {
        let mut a = self.reduced(modulus).into_owned();
        let mut b = other.reduced(modulus).into_owned();

        if a.compare(&b) == Ordering::Less {
            std::mem::swap(&mut a, &mut b);
        }

        while !b.is_zero() {
            let remainder = a.rem(&b, modulus)?;
            trace!(%b, %remainder, "gcd step");
            a = std::mem::replace(&mut b, remainder);
        }

        Ok(a)
    }

    /// Evaluates the polynomial at a given point.
    ///
    /// Accumulates `sum += x^i * a_i` while tracking the running power of `x`. With a
    /// modulus both accumulators are reduced on every iteration.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate the polynomial.
    /// * `modulus` - Optional modulus for the result.
    pub fn eval(&self, x: &BigInt, modulus: Option<&Modulus>) -> BigInt {
        let mut sum = BigInt::zero();
        let mut power = BigInt::one();

        for coeff in &self.coefficients {
            sum += &power * coeff;
            power *= x;
            if let Some(m) = modulus {
                sum = m.reduce(&sum);
                power = m.reduce(&power);
            }
        }

        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PolynomialError;
    use num_bigint::BigInt;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn modulus(m: i64) -> Modulus {
        Modulus::new(BigInt::from(m)).unwrap()
    }

    #[test]
    fn test_basic_polynomial_creation() {
        let poly = Polynomial::from_ints(&[1, 2, 3]);
        assert_eq!(poly.degree(), 2);
        assert_eq!(
            poly.coefficients(),
            &[BigInt::from(1), BigInt::from(2), BigInt::from(3)]
        );
        assert_eq!(poly.leading_coefficient(), &BigInt::from(3));
        assert_eq!(poly.constant_term(), &BigInt::from(1));
    }

    #[test]
    fn test_zero_polynomial() {
        let zero = Polynomial::zero();
        assert_eq!(zero.degree(), 0);
        assert_eq!(zero.coefficients().len(), 1);
        assert!(zero.is_zero());

        assert_eq!(Polynomial::new(vec![]), zero);
        assert_eq!(Polynomial::from_ints(&[0, 0, 0]), zero);
    }

    #[test]
    fn test_constant_polynomial() {
        let const_poly = Polynomial::constant(BigInt::from(42));
        assert_eq!(const_poly.degree(), 0);
        assert!(!const_poly.is_zero());
        assert_eq!(const_poly.coefficients(), &[BigInt::from(42)]);
    }

    #[test]
    fn test_trim_is_idempotent() {
        let poly = Polynomial::from_ints(&[1, 2, 0, 0]);
        assert_eq!(poly.coefficients(), &[BigInt::from(1), BigInt::from(2)]);

        let again = Polynomial::new(poly.coefficients().to_vec());
        assert_eq!(again, poly);
    }

    #[test]
    fn test_polynomial_display() {
        assert_eq!(Polynomial::from_ints(&[1, -3, 2]).to_string(), "2x^2 - 3x + 1");
        assert_eq!(Polynomial::from_ints(&[1, 2, 0, 3]).to_string(), "3x^3 + 2x + 1");
        assert_eq!(Polynomial::from_ints(&[-4, 0, -1]).to_string(), "-x^2 - 4");
        assert_eq!(Polynomial::from_ints(&[0, 1]).to_string(), "x");
        assert_eq!(Polynomial::zero().to_string(), "0");
    }

    #[test]
    fn test_parse() {
        let poly: Polynomial = "1, 2, 0, 3".parse().unwrap();
        assert_eq!(poly, Polynomial::from_ints(&[1, 2, 0, 3]));

        let trimmed: Polynomial = "5,0,0".parse().unwrap();
        assert_eq!(trimmed, Polynomial::from_ints(&[5]));

        assert!(matches!(
            "1,,2".parse::<Polynomial>(),
            Err(PolynomialError::ParseError(_))
        ));
    }

    #[test]
    fn test_compare() {
        let p = Polynomial::from_ints(&[9, 9]);
        let q = Polynomial::from_ints(&[0, 0, 1]);
        assert_eq!(p.compare(&q), Ordering::Less);
        assert_eq!(q.compare(&p), Ordering::Greater);

        // same degree: highest coefficient decides first
        let a = Polynomial::from_ints(&[5, 1, 2]);
        let b = Polynomial::from_ints(&[0, 3, 2]);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(a.compare(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_shift() {
        let poly = Polynomial::from_ints(&[1, 1]);
        assert_eq!(poly.shift(2).unwrap(), Polynomial::from_ints(&[0, 0, 1, 1]));
        assert_eq!(poly.shift(0).unwrap(), poly);
        assert_eq!(Polynomial::zero().shift(3).unwrap(), Polynomial::zero());
    }

    #[test]
    fn test_negative_shift_is_an_error() {
        let poly = Polynomial::from_ints(&[1, 1]);
        assert_eq!(
            poly.shift(-1),
            Err(PolynomialError::NegativeShift { shift: -1 })
        );
    }

    #[test]
    fn test_unallocatable_shift_is_an_error() {
        let poly = Polynomial::from_ints(&[1]);
        assert_eq!(
            poly.shift(i64::MAX),
            Err(PolynomialError::ShiftTooLarge { shift: i64::MAX })
        );
        assert_eq!(Polynomial::zero().shift(i64::MAX).unwrap(), Polynomial::zero());
    }

    #[test]
    fn test_neg_operator() {
        let poly = Polynomial::from_ints(&[1, -2, 3]);
        let expected = Polynomial::from_ints(&[-1, 2, -3]);
        assert_eq!(-&poly, expected);
        assert_eq!(-poly.clone(), expected);
        assert_eq!(-(-&poly), poly);
        assert_eq!(-&Polynomial::zero(), Polynomial::zero());
    }

    #[test]
    fn test_from_small_integers() {
        assert_eq!(
            Polynomial::from(vec![1i64, 2, 0, 3]),
            Polynomial::from_ints(&[1, 2, 0, 3])
        );
        assert_eq!(Polynomial::from(vec![5i64, 0, 0]).degree(), 0);
        assert_eq!(Polynomial::from(Vec::<i64>::new()), Polynomial::zero());
    }

    #[test]
    fn test_polynomial_addition() {
        let poly1 = Polynomial::from_ints(&[2, 1]);
        let poly2 = Polynomial::from_ints(&[4, 3, 7]);
        let result = poly1.add(&poly2, None);
        assert_eq!(result, Polynomial::from_ints(&[6, 4, 7]));
        assert_eq!(poly2.add(&poly1, None), result);
    }

    #[test]
    fn test_addition_cancels_leading_terms() {
        let poly1 = Polynomial::from_ints(&[1, 2, 3]);
        let poly2 = Polynomial::from_ints(&[1, 0, -3]);
        assert_eq!(poly1.add(&poly2, None), Polynomial::from_ints(&[2, 2]));
    }

    #[test]
    fn test_modular_addition() {
        let m = modulus(7);
        let poly1 = Polynomial::from_ints(&[5, 6, 3]);
        let poly2 = Polynomial::from_ints(&[4, -6, 4]);
        assert_eq!(poly1.add(&poly2, Some(&m)), Polynomial::from_ints(&[2]));
    }

    #[test]
    fn test_polynomial_subtraction() {
        let poly1 = Polynomial::from_ints(&[3, 5]);
        let poly2 = Polynomial::from_ints(&[1, 2]);
        assert_eq!(poly1.sub(&poly2, None), Polynomial::from_ints(&[2, 3]));
        assert!(poly1.sub(&poly1, None).is_zero());

        let m = modulus(5);
        assert_eq!(poly2.sub(&poly1, Some(&m)), Polynomial::from_ints(&[3, 2]));
    }

    #[test]
    fn test_polynomial_negation() {
        let poly = Polynomial::from_ints(&[1, -2, 3]);
        assert_eq!(Polynomial::neg(&poly), Polynomial::from_ints(&[-1, 2, -3]));
        assert_eq!(poly, Polynomial::from_ints(&[1, -2, 3]));
    }

    #[test]
    fn test_polynomial_multiplication() {
        let poly1 = Polynomial::from_ints(&[2, 1]); // x + 2
        let poly2 = Polynomial::from_ints(&[3, 1]); // x + 3
        let result = poly1.mul(&poly2, None);
        assert_eq!(result, Polynomial::from_ints(&[6, 5, 1]));
        assert_eq!(result.degree(), poly1.degree() + poly2.degree());
    }

    #[test]
    fn test_multiplication_by_zero() {
        let poly = Polynomial::from_ints(&[2, 1, 4]);
        assert!(poly.mul(&Polynomial::zero(), None).is_zero());
        assert_eq!(poly.mul(&Polynomial::zero(), None).coefficients().len(), 1);
    }

    #[test]
    fn test_modular_multiplication_does_not_touch_inputs() {
        let m = modulus(5);
        let poly1 = Polynomial::from_ints(&[7, 3]);
        let poly2 = Polynomial::from_ints(&[-1, 4]);
        let result = poly1.mul(&poly2, Some(&m));
        // (3x + 2)(4x + 4) = 12x^2 + 20x + 8 = 2x^2 + 3 mod 5
        assert_eq!(result, Polynomial::from_ints(&[3, 0, 2]));
        assert_eq!(poly1, Polynomial::from_ints(&[7, 3]));
        assert_eq!(poly2, Polynomial::from_ints(&[-1, 4]));
    }

    #[test]
    fn test_scalar_multiplication() {
        let poly = Polynomial::from_ints(&[1, 2, 3]);
        let result = poly.scalar_mul(&BigInt::from(5), None);
        assert_eq!(result, Polynomial::from_ints(&[5, 10, 15]));

        let m = modulus(5);
        assert!(poly.scalar_mul(&BigInt::from(5), Some(&m)).is_zero());
    }

    #[test]
    fn test_polynomial_division() {
        // 3x^3 + 2x + 1 = (x + 1)(3x^2 - 3x + 5) - 4
        let dividend = Polynomial::from_ints(&[1, 2, 0, 3]);
        let divisor = Polynomial::from_ints(&[1, 1]);
        let (quotient, remainder) = dividend.div(&divisor, None).unwrap();
        assert_eq!(quotient, Polynomial::from_ints(&[5, -3, 3]));
        assert_eq!(remainder, Polynomial::from_ints(&[-4]));
        assert_eq!(
            quotient.mul(&divisor, None).add(&remainder, None),
            dividend
        );
    }

    #[test]
    fn test_exact_division() {
        let dividend = Polynomial::from_ints(&[6, 5, 1]);
        let divisor = Polynomial::from_ints(&[2, 1]);
        let (quotient, remainder) = dividend.div(&divisor, None).unwrap();
        assert_eq!(quotient, Polynomial::from_ints(&[3, 1]));
        assert!(remainder.is_zero());
    }

    #[test]
    fn test_division_by_zero_polynomial() {
        let poly = Polynomial::from_ints(&[1, 2]);
        let (quotient, remainder) = poly.div(&Polynomial::zero(), None).unwrap();
        assert!(quotient.is_zero());
        assert_eq!(remainder, poly);
    }

    #[test]
    fn test_division_by_higher_degree() {
        let poly = Polynomial::from_ints(&[1, 2]);
        let divisor = Polynomial::from_ints(&[1, 0, 1]);
        let (quotient, remainder) = poly.div(&divisor, None).unwrap();
        assert_eq!(quotient, Polynomial::zero());
        assert_eq!(remainder, poly);
    }

    #[test]
    fn test_inexact_division_is_an_error() {
        // 3x^2 + 1 divided by 2x + 1: 3 / 2 is not an integer
        let dividend = Polynomial::from_ints(&[1, 0, 3]);
        let divisor = Polynomial::from_ints(&[1, 2]);
        assert_eq!(
            dividend.div(&divisor, None),
            Err(PolynomialError::InexactDivision {
                dividend_lead: BigInt::from(3),
                divisor_lead: BigInt::from(2),
            })
        );
    }

    #[test]
    fn test_inexact_division_after_progress_discards_everything() {
        // first step 4/2 = 2 is fine, leaving 3x + 1; second step 3/2 aborts
        let dividend = Polynomial::from_ints(&[1, 5, 4]);
        let divisor = Polynomial::from_ints(&[1, 2]);
        assert!(matches!(
            dividend.div(&divisor, None),
            Err(PolynomialError::InexactDivision { .. })
        ));
        assert_eq!(dividend, Polynomial::from_ints(&[1, 5, 4]));
    }

    #[test]
    fn test_modular_division() {
        let m = modulus(7);
        let dividend = Polynomial::from_ints(&[1, 0, 3]);
        let divisor = Polynomial::from_ints(&[1, 2]);
        let (quotient, remainder) = dividend.div(&divisor, Some(&m)).unwrap();
        assert!(remainder.degree() < divisor.degree() || remainder.is_zero());
        assert_eq!(
            quotient.mul(&divisor, Some(&m)).add(&remainder, Some(&m)),
            dividend.reduce(&m)
        );
    }

    #[test]
    fn test_modular_division_with_divisor_vanishing_mod_m() {
        let m = modulus(7);
        let dividend = Polynomial::from_ints(&[3, 1]);
        let divisor = Polynomial::from_ints(&[14, 7]);
        let (quotient, remainder) = dividend.div(&divisor, Some(&m)).unwrap();
        assert!(quotient.is_zero());
        assert_eq!(remainder, dividend);
    }

    #[test]
    fn test_modular_division_with_non_invertible_lead() {
        let m = modulus(8);
        let dividend = Polynomial::from_ints(&[1, 0, 1]);
        let divisor = Polynomial::from_ints(&[1, 2]);
        assert!(matches!(
            dividend.div(&divisor, Some(&m)),
            Err(PolynomialError::NotInvertible { .. })
        ));
    }

    #[test]
    fn test_gcd() {
        // (x + 1)(x - 1) and (x + 1)(x + 2)
        let p = Polynomial::from_ints(&[-1, 0, 1]);
        let q = Polynomial::from_ints(&[2, 3, 1]);
        let m = modulus(101);
        let g = p.gcd(&q, Some(&m)).unwrap();
        assert_eq!(g.degree(), 1);
        assert!(p.rem(&g, Some(&m)).unwrap().is_zero());
        assert!(q.rem(&g, Some(&m)).unwrap().is_zero());
        assert_eq!(g, q.gcd(&p, Some(&m)).unwrap());
    }

    #[test]
    fn test_gcd_without_modulus() {
        let p = Polynomial::from_ints(&[-1, 0, 1]);
        let q = Polynomial::from_ints(&[-1, 1]);
        assert_eq!(p.gcd(&q, None).unwrap(), q);
    }

    #[test]
    fn test_gcd_with_zero() {
        let p = Polynomial::from_ints(&[3, 1]);
        assert_eq!(p.gcd(&Polynomial::zero(), None).unwrap(), p);
        assert_eq!(Polynomial::zero().gcd(&p, None).unwrap(), p);
    }

    #[test]
    fn test_gcd_stall_is_reported() {
        // 2x + 1 and 3 have no integer remainder sequence
        let p = Polynomial::from_ints(&[1, 2]);
        let q = Polynomial::from_ints(&[3]);
        assert!(matches!(
            p.gcd(&q, None),
            Err(PolynomialError::InexactDivision { .. })
        ));
    }

    #[test]
    fn test_polynomial_evaluation() {
        let poly = Polynomial::from_ints(&[3, 2, 1]); // x^2 + 2x + 3
        assert_eq!(poly.eval(&BigInt::from(2), None), BigInt::from(11));
        assert_eq!(poly.eval(&BigInt::from(0), None), BigInt::from(3));

        let m = modulus(7);
        assert_eq!(poly.eval(&BigInt::from(2), Some(&m)), BigInt::from(4));
        assert_eq!(poly.eval(&BigInt::from(-2), Some(&m)), BigInt::from(3));
    }

    #[test]
    fn test_reduce() {
        let m = modulus(7);
        let poly = Polynomial::from_ints(&[10, 6, -3]);
        assert_eq!(poly.reduce(&m), Polynomial::from_ints(&[3, 6, 4]));
        assert_eq!(Polynomial::from_ints(&[1, 7, -14]).reduce(&m), Polynomial::from_ints(&[1]));
    }

    #[test]
    fn test_random_polynomial() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let poly = Polynomial::random(5, 64, &mut rng);
        assert!(poly.degree() <= 5);
        let bound = BigInt::one() << 64;
        assert!(poly
            .coefficients()
            .iter()
            .all(|c| !c.is_negative() && c < &bound));

        let mut same = ChaCha20Rng::seed_from_u64(42);
        assert_eq!(Polynomial::random(5, 64, &mut same), poly);
    }
}
