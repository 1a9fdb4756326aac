// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use polyshare_polynomial::{Modulus, Polynomial};
use std::fmt;
use std::ops::Deref;

/// A share: the sharing polynomial evaluates to `y` at `x`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Checks `poly(x) == y` in `Z/mZ`.
    pub fn lies_on(&self, poly: &Polynomial, modulus: &Modulus) -> bool {
        poly.eval(&self.x, Some(modulus)) == modulus.reduce(&self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(BigInt, BigInt)> for Point {
    fn from((x, y): (BigInt, BigInt)) -> Self {
        Point::new(x, y)
    }
}

/// The ordered shares produced from one sharing polynomial.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareSet(Vec<Point>);

impl Deref for ShareSet {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ShareSet {
    pub fn new() -> Self {
        Self(vec![])
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, share: Point) {
        self.0.push(share);
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.0
    }

    /// True when every share lies on `poly` modulo `modulus`.
    pub fn verify(&self, poly: &Polynomial, modulus: &Modulus) -> bool {
        self.0.iter().all(|share| share.lies_on(poly, modulus))
    }
}

impl From<Vec<Point>> for ShareSet {
    fn from(value: Vec<Point>) -> Self {
        ShareSet(value)
    }
}

impl FromIterator<Point> for ShareSet {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        ShareSet(iter.into_iter().collect())
    }
}

impl IntoIterator for ShareSet {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
