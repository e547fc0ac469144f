// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `Cyclic` type implementing the prime field of integers with
//! configurable modulus.

use std::convert::From;
use std::fmt::{Display, Error, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use flint_sys::nmod_vec::{nmod_add, nmod_init, nmod_inv, nmod_mul, nmod_neg, nmod_sub, nmod_t};

use crate::algebra::traits::{FieldLike, RingLike};

/// The field of integers modulo `MOD`, for prime modulus values `MOD`.
///
/// Boundary ranks over `Cyclic<p>` differ from the rational ranks exactly
/// when the homology of the complex has `p`-torsion.
///
/// # Important Note
/// `MOD` **must** be a prime number for the [`FieldLike`] implementation to be
/// mathematically correct. While this is not explicitly checked at compile
/// time, `invert` assumes this property.
///
/// Arithmetic is delegated to FLINT's word-size modular routines, which
/// handle overflow for any modulus fitting in a `u64`.
///
/// # Examples
/// ```rust
/// use dmorse::Cyclic;
/// assert_eq!(Cyclic::<5>::from(8u64), Cyclic::<5>::from(3u64));
/// assert_eq!(Cyclic::<5>::from(-1i64), Cyclic::<5>::from(4u64));
/// assert_ne!(Cyclic::<7>::from(2i64), Cyclic::<7>::from(-2i64));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Cyclic<const MOD: u64> {
    remainder: u64,
    modulus: nmod_t,
}

impl<const MOD: u64> Cyclic<MOD> {
    /// Create a new `Cyclic` instance with the given value modulo `MOD`. Panics
    /// if `MOD` is less than 2; `MOD` is expected to be a prime number,
    /// though this is not explicitly checked.
    pub fn new(value: u64) -> Self {
        assert!(
            MOD > 1,
            "modulus values must be a prime number greater than or equal to 2"
        );

        let mut modulus = nmod_t {
            n: 0,
            ninv: 0,
            norm: 0,
        };
        unsafe {
            nmod_init(&mut modulus, MOD);
        }

        Self {
            remainder: value % MOD,
            modulus,
        }
    }

    /// The canonical representative in `0..MOD`.
    pub fn remainder(&self) -> u64 {
        self.remainder
    }

    fn with_remainder(self, remainder: u64) -> Self {
        Self {
            remainder,
            modulus: self.modulus,
        }
    }
}

impl<const MOD: u64> From<u64> for Cyclic<MOD> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const MOD: u64> From<i64> for Cyclic<MOD> {
    /// The image of an integer incidence degree.
    fn from(value: i64) -> Self {
        let residue = Self::new(value.unsigned_abs());
        if value < 0 { -residue } else { residue }
    }
}

impl<const MOD: u64> RingLike for Cyclic<MOD> {
    fn zero() -> Self {
        Self::new(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_invertible(&self) -> bool {
        self.remainder != 0
    }

    fn invert(&self) -> Self {
        assert!(
            self.remainder != 0,
            "attempting to invert equivalency class zero"
        );
        if MOD == 2 {
            return *self;
        }

        self.with_remainder(unsafe { nmod_inv(self.remainder, self.modulus) })
    }
}

impl<const MOD: u64> FieldLike for Cyclic<MOD> {}

impl<const MOD: u64> Display for Cyclic<MOD> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{} (mod {})", self.remainder, MOD)
    }
}

impl<const MOD: u64> Neg for Cyclic<MOD> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.with_remainder(unsafe { nmod_neg(self.remainder, self.modulus) })
    }
}

impl<const MOD: u64> AddAssign for Cyclic<MOD> {
    fn add_assign(&mut self, rhs: Self) {
        self.remainder = unsafe { nmod_add(self.remainder, rhs.remainder, self.modulus) };
    }
}

impl<const MOD: u64> Add for Cyclic<MOD> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.with_remainder(unsafe { nmod_add(self.remainder, rhs.remainder, self.modulus) })
    }
}

impl<const MOD: u64> SubAssign for Cyclic<MOD> {
    fn sub_assign(&mut self, rhs: Self) {
        self.remainder = unsafe { nmod_sub(self.remainder, rhs.remainder, self.modulus) };
    }
}

impl<const MOD: u64> Sub for Cyclic<MOD> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.with_remainder(unsafe { nmod_sub(self.remainder, rhs.remainder, self.modulus) })
    }
}

impl<const MOD: u64> MulAssign for Cyclic<MOD> {
    fn mul_assign(&mut self, rhs: Self) {
        self.remainder = unsafe { nmod_mul(self.remainder, rhs.remainder, self.modulus) };
    }
}

impl<const MOD: u64> Mul for Cyclic<MOD> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.with_remainder(unsafe { nmod_mul(self.remainder, rhs.remainder, self.modulus) })
    }
}

impl<const MOD: u64> PartialEq for Cyclic<MOD> {
    fn eq(&self, other: &Self) -> bool {
        self.remainder == other.remainder
    }
}

impl<const MOD: u64> Eq for Cyclic<MOD> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// The Mersenne prime `2^61 - 1`.
    const LARGE: u64 = (1 << 61) - 1;

    #[test]
    #[should_panic(expected = "modulus values must be a prime number greater than or equal to 2")]
    fn trivial_modulus_is_rejected() {
        let _ = Cyclic::<1>::from(1i64);
    }

    #[test]
    fn incidence_degrees_map_to_residues() {
        assert_eq!(Cyclic::<3>::from(-1i64).remainder(), 2);
        assert_eq!(Cyclic::<3>::from(-3i64), Cyclic::zero());
        assert_eq!(Cyclic::<7>::from(i64::MIN).remainder(), 6);
        assert_eq!(Cyclic::<7>::from(i64::MAX).remainder(), 0);
        assert_eq!(Cyclic::<LARGE>::from(-2i64).remainder(), LARGE - 2);
    }

    #[test]
    fn torsion_degree_vanishes_in_its_characteristic() {
        let twice = Cyclic::<2>::from(2i64);
        assert_eq!(twice, Cyclic::zero());
        assert!(!twice.is_invertible());

        let twice = Cyclic::<3>::from(2i64);
        assert!(twice.is_invertible());
        assert_eq!(twice * twice.invert(), Cyclic::one());
    }

    #[test]
    fn pivot_elimination_clears_the_entry() {
        // Eliminating the entry 4 against the pivot 6 over Z/7.
        let (entry, pivot) = (Cyclic::<7>::from(4i64), Cyclic::<7>::from(6i64));
        let factor = entry * pivot.invert();
        assert_eq!(factor.remainder(), 3);
        assert_eq!(entry - factor * pivot, Cyclic::zero());

        let mut column = entry;
        column -= factor * pivot;
        column += Cyclic::from(-1i64);
        assert_eq!(column, Cyclic::from(6u64));
    }

    #[test]
    fn every_unit_inverts() {
        for value in 1..13u64 {
            let unit = Cyclic::<13>::from(value);
            assert_eq!(unit * unit.invert(), Cyclic::one(), "{unit}");
        }
        assert_eq!(Cyclic::<2>::one().invert(), Cyclic::one());
    }

    #[test]
    #[should_panic(expected = "attempting to invert equivalency class zero")]
    fn zero_has_no_inverse() {
        Cyclic::<5>::from(10i64).invert();
    }

    #[test]
    fn large_modulus_wraps() {
        let top = Cyclic::<LARGE>::from(-1i64);
        assert_eq!(top + top, Cyclic::from(LARGE - 2));
        assert_eq!(top * top, Cyclic::one());
        assert_eq!(-top, Cyclic::one());

        let mut square = Cyclic::<LARGE>::from(1u64 << 40);
        square *= Cyclic::from(1u64 << 40);
        assert_eq!(square, Cyclic::from(1u64 << 19));
    }

    #[test]
    fn display() {
        assert_eq!(Cyclic::<5>::from(-1i64).to_string(), "4 (mod 5)");
    }
}
