// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use dmorse::{Complex, Cyclic, Simplex};
use proptest::prelude::*;
use test_utilities::{greedy_matching, simplicial_closure};

/// Small simplicial complexes given by up to four facets on six vertices.
fn small_complex() -> impl Strategy<Value = Complex<Simplex>> {
    prop::collection::vec(prop::collection::vec(0u32..6, 1..5), 1..5)
        .prop_map(|facets| simplicial_closure(&facets))
}

/// The grades of nonzero homology. A reduction may drop top grades whose
/// cells were all matched.
fn nonzero(betti: BTreeMap<u32, usize>) -> BTreeMap<u32, usize> {
    betti.into_iter().filter(|(_, rank)| *rank != 0).collect()
}

proptest! {
    /// Reduction along an acyclic matching preserves homology over Q and
    /// over Z/2.
    #[test]
    fn prop_reduction_preserves_betti_numbers(mut complex in small_complex()) {
        greedy_matching(&mut complex);
        let reduced = complex.reduce().unwrap();

        prop_assert_eq!(nonzero(reduced.betti_numbers()), nonzero(complex.betti_numbers()));
        prop_assert_eq!(
            nonzero(reduced.betti_numbers_over::<Cyclic<2>>()),
            nonzero(complex.betti_numbers_over::<Cyclic<2>>())
        );
    }

    /// Every critical cell has exactly one twin of the same grade.
    #[test]
    fn prop_critical_cells_survive(mut complex in small_complex()) {
        let matched = greedy_matching(&mut complex);
        let reduced = complex.reduce().unwrap();

        prop_assert_eq!(reduced.cell_count(), complex.cell_count() - 2 * matched.len());
        for grade in complex.grades() {
            prop_assert_eq!(
                reduced.cells_of_grade(grade).len(),
                complex.critical_cells_of_grade(grade).count()
            );
        }
        prop_assert!(reduced.matched_edges().next().is_none());
    }

    /// Without a matching the reduction reproduces the boundary matrices.
    #[test]
    fn prop_empty_matching_is_identity(complex in small_complex()) {
        let reduced = complex.reduce().unwrap();

        prop_assert_eq!(reduced.cell_counts(), complex.cell_counts());
        prop_assert_eq!(reduced.edge_count(), complex.edge_count());
        prop_assert_eq!(reduced.boundaries(), complex.boundaries());
    }

    /// A reduced complex can be matched and reduced again.
    #[test]
    fn prop_reduction_can_be_repeated(mut complex in small_complex()) {
        greedy_matching(&mut complex);
        let mut reduced = complex.reduce().unwrap();
        greedy_matching(&mut reduced);
        let twice = reduced.reduce().unwrap();

        prop_assert_eq!(nonzero(twice.betti_numbers()), nonzero(complex.betti_numbers()));
    }
}
