// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Helper trait for types that support additive operations.
pub trait Additive:
    Sized + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
}

/// Helper trait for types that support multiplicative operations.
pub trait Multiplicative: Sized + Mul<Output = Self> + MulAssign {}

/// Helper trait for basic algebraic structure requirements.
pub trait AlgebraicBase: Sized + Clone + Eq + Debug {}

impl<T> Additive for T where
    T: Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
}

impl<T> Multiplicative for T where T: Mul<Output = Self> + MulAssign {}

impl<T> AlgebraicBase for T where T: Sized + Clone + Eq + Debug {}

/// Expected functionality for coefficient rings throughout `dmorse`.
///
/// Incidence degrees of a [`crate::Complex`] live in the integers (`i64`),
/// whose units are exactly `1` and `-1`; only unit incidences may be collapsed
/// by a matching. Ranks are computed over types that are also [`FieldLike`].
pub trait RingLike: AlgebraicBase + Additive + Multiplicative {
    /// Creates a new ring element representing the additive identity.
    fn zero() -> Self;
    /// Creates a new ring element representing the multiplicative identity.
    fn one() -> Self;
    /// Check if the element is invertible in the ring.
    fn is_invertible(&self) -> bool;
    /// Return the multiplicative inverse of `self`, for those values at which
    /// it exists. Panics if the inverse does not exist.
    fn invert(&self) -> Self;
}

/// A coefficient ring in which every nonzero element is invertible, and into
/// which integer incidence degrees can be mapped.
///
/// The conversion from `i64` is the canonical ring homomorphism from the
/// integers, so ranks computed over different fields may differ when the
/// complex has torsion.
pub trait FieldLike: RingLike + From<i64> {}
