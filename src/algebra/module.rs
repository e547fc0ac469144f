// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::{HashMap, hash_map};
use std::hash::Hash;
use std::iter::FromIterator;
use std::ops::{AddAssign, Neg, SubAssign};

use crate::RingLike;

/// HashMap-based sparse chains: formal linear combinations
///
/// $ a_1c_1 + a_2c_2 + ... + a_nc_n $
///
/// of basis elements `c_i` of type `B` with coefficients `a_i` in the ring
/// `R`. Only nonzero coefficients are stored; inserting a coefficient that
/// cancels an existing one removes the basis element.
///
/// Boundary matrices store one chain per column (a grade-`k` cell mapped to
/// the combination of its faces), which keeps the mostly-zero incidence
/// structure of large complexes compact.
///
/// ```rust
/// use dmorse::HashMapModule;
///
/// let mut chain = HashMapModule::<u32, i64>::new();
/// chain.insert_or_add(1, 3);
/// chain.insert_or_add(2, -1);
/// chain.insert_or_add(1, -3);
///
/// assert_eq!(chain.coef(&1), 0);
/// assert_eq!(chain.coef(&2), -1);
/// assert_eq!(chain.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct HashMapModule<B, R> {
    map: HashMap<B, R>,
}

impl<B, R> HashMapModule<B, R>
where
    B: Clone + Eq + Hash,
    R: RingLike,
{
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Return the coefficient of `cell`, zero if absent.
    pub fn coef(&self, cell: &B) -> R {
        self.map.get(cell).cloned().unwrap_or_else(R::zero)
    }

    /// If `cell` is not in `self`, insert it with coefficient `coef`. Else, add
    /// `coef` to the existing coefficient of `cell`, dropping the cell if the
    /// sum vanishes.
    pub fn insert_or_add(&mut self, cell: B, coef: R) {
        if coef == R::zero() {
            return;
        }
        match self.map.entry(cell) {
            hash_map::Entry::Occupied(mut entry) => {
                *entry.get_mut() += coef;
                if *entry.get() == R::zero() {
                    entry.remove();
                }
            }
            hash_map::Entry::Vacant(entry) => {
                entry.insert(coef);
            }
        }
    }

    /// Multiply each coefficient in `self` by `coef`.
    pub fn scalar_mul(mut self, coef: R) -> Self {
        if coef == R::zero() {
            self.map.clear();
        } else if coef != R::one() {
            for cell_coef in self.map.values_mut() {
                *cell_coef *= coef.clone();
            }
            self.map.retain(|_, cell_coef| *cell_coef != R::zero());
        }
        self
    }

    /// Number of basis elements with nonzero coefficient.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether every coefficient is zero.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over (cell, coefficient) pairs with nonzero coefficient, in
    /// arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, B, R> {
        self.map.iter()
    }

    /// Map each coefficient into another ring, dropping those that vanish.
    pub fn map_coefficients<S, F>(&self, mut convert: F) -> HashMapModule<B, S>
    where
        S: RingLike,
        F: FnMut(&R) -> S,
    {
        self.map
            .iter()
            .map(|(cell, coef)| (cell.clone(), convert(coef)))
            .collect()
    }
}

impl<B, R> HashMapModule<B, R>
where
    B: Clone + Eq + Hash + Ord,
    R: RingLike,
{
    /// The greatest basis element with nonzero coefficient, together with its
    /// coefficient. Used as the pivot during column reduction.
    pub fn leading_term(&self) -> Option<(&B, &R)> {
        self.map.iter().max_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs))
    }
}

impl<B, R> Default for HashMapModule<B, R>
where
    B: Clone + Eq + Hash,
    R: RingLike,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<B, R: RingLike> Neg for HashMapModule<B, R> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for coef in self.map.values_mut() {
            *coef = -coef.clone();
        }
        self
    }
}

impl<B, R> AddAssign for HashMapModule<B, R>
where
    B: Clone + Eq + Hash,
    R: RingLike,
{
    fn add_assign(&mut self, rhs: Self) {
        for (cell, coef) in rhs.map {
            self.insert_or_add(cell, coef);
        }
    }
}

impl<B, R> SubAssign for HashMapModule<B, R>
where
    B: Clone + Eq + Hash,
    R: RingLike,
{
    fn sub_assign(&mut self, rhs: Self) {
        for (cell, coef) in rhs.map {
            self.insert_or_add(cell, -coef);
        }
    }
}

impl<B, R> PartialEq for HashMapModule<B, R>
where
    B: Eq + Hash,
    R: RingLike,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<B, R> Eq for HashMapModule<B, R>
where
    B: Eq + Hash,
    R: RingLike,
{
}

impl<B, R, const N: usize> From<[(B, R); N]> for HashMapModule<B, R>
where
    B: Clone + Eq + Hash,
    R: RingLike,
{
    fn from(items: [(B, R); N]) -> Self {
        items.into_iter().collect()
    }
}

impl<B, R> FromIterator<(B, R)> for HashMapModule<B, R>
where
    B: Clone + Eq + Hash,
    R: RingLike,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (B, R)>,
    {
        let mut module = Self::new();
        for (cell, coef) in iter {
            module.insert_or_add(cell, coef);
        }
        module
    }
}

impl<B, R> IntoIterator for HashMapModule<B, R> {
    type IntoIter = hash_map::IntoIter<B, R>;
    type Item = (B, R);

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cyclic, Rational};

    #[test]
    fn insertion_and_cancellation() {
        let mut module = HashMapModule::<u32, i64>::new();
        module.insert_or_add(1, 1);
        module.insert_or_add(2, -2);
        module.insert_or_add(1, 0);
        assert_eq!(module.len(), 2);

        module.insert_or_add(2, 2);
        assert_eq!(module.coef(&2), 0);
        assert_eq!(module.len(), 1);
        module.insert_or_add(1, -1);
        assert!(module.is_empty());
    }

    #[test]
    fn addition_and_subtraction() {
        let mut lhs = HashMapModule::<u32, Cyclic<7>>::from([
            (1, Cyclic::from(3u64)),
            (2, Cyclic::from(3u64)),
        ]);
        lhs += HashMapModule::from([(1, Cyclic::from(4u64)), (3, Cyclic::from(1u64))]);
        assert_eq!(
            lhs,
            HashMapModule::from([(2, Cyclic::from(3u64)), (3, Cyclic::from(1u64))])
        );

        lhs -= HashMapModule::from([(2, Cyclic::from(3u64))]);
        assert_eq!(lhs, HashMapModule::from([(3, Cyclic::from(1u64))]));
        assert_eq!(-lhs, HashMapModule::from([(3, Cyclic::from(6u64))]));
    }

    #[test]
    fn scalar_multiplication() {
        let module = HashMapModule::<u32, Cyclic<5>>::from([
            (1, Cyclic::from(2u64)),
            (2, Cyclic::from(3u64)),
        ]);
        let doubled = module.clone().scalar_mul(Cyclic::from(2u64));
        assert_eq!(doubled.coef(&1), Cyclic::from(4u64));
        assert_eq!(doubled.coef(&2), Cyclic::from(1u64));
        assert!(module.scalar_mul(Cyclic::zero()).is_empty());
    }

    #[test]
    fn coefficient_conversion_drops_zeros() {
        let module = HashMapModule::<u32, i64>::from([(0, 2), (1, 3), (4, -1)]);
        let reduced: HashMapModule<u32, Cyclic<2>> = module.map_coefficients(|c| Cyclic::from(*c));
        assert_eq!(reduced.len(), 2);
        assert_eq!(reduced.coef(&0), Cyclic::zero());

        let rational: HashMapModule<u32, Rational> =
            module.map_coefficients(|c| Rational::from(*c));
        assert_eq!(rational.coef(&4), Rational::from(-1));
    }

    #[test]
    fn leading_term() {
        let module = HashMapModule::<u32, i64>::from([(3, 1), (7, -1), (5, 2)]);
        assert_eq!(module.leading_term(), Some((&7, &-1)));
        assert_eq!(HashMapModule::<u32, i64>::new().leading_term(), None);
    }
}
