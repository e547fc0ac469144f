// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exact rational coefficients backed by arbitrary precision integers.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::algebra::traits::{FieldLike, RingLike};

/// The field of rational numbers, with no overflow.
///
/// This is the default field for [`crate::Complex::ranks`]. Gaussian
/// elimination over the rationals can grow numerators and denominators well
/// beyond the original integer incidences, hence the big integer backing.
///
/// ```rust
/// use dmorse::{Rational, RingLike};
///
/// let half = Rational::from(2).invert();
/// assert_eq!(half.clone() + half, Rational::one());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// Create the fraction `numerator / denominator`. Panics if `denominator`
    /// is zero.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "rational with zero denominator");
        Self(BigRational::new(
            BigInt::from(numerator),
            BigInt::from(denominator),
        ))
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }
}

impl RingLike for Rational {
    fn zero() -> Self {
        Self(BigRational::zero())
    }

    fn one() -> Self {
        Self(BigRational::one())
    }

    fn is_invertible(&self) -> bool {
        !self.0.is_zero()
    }

    fn invert(&self) -> Self {
        assert!(!self.0.is_zero(), "attempting to invert rational zero");
        Self(self.0.recip())
    }
}

impl FieldLike for Rational {}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}
