// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use dmorse::{Cyclic, MorseError};
use test_utilities::{
    greedy_matching, identified_torus, projective_plane, seven_vertex_torus,
    six_vertex_projective_plane,
};

#[test]
fn identified_torus_loses_one_edge_and_one_face() {
    let mut complex = identified_torus();
    assert_eq!(complex.cell_counts(), vec![1, 3, 2]);

    complex.add_to_matching_by_labels(&"f", &"a").unwrap();
    assert!(complex.is_acyclic(complex.find_cell(&"a").unwrap(), 2));

    let reduced = complex.reduce().unwrap();
    assert_eq!(reduced.cell_counts(), vec![1, 2, 1]);
    for label in ["v", "b", "c", "g"] {
        assert!(reduced.find_cell(&label).is_some());
    }
}

#[test]
fn triangulated_torus_keeps_its_homology() {
    let mut complex = seven_vertex_torus();
    assert_eq!(complex.cell_counts(), vec![1, 7, 21, 14]);

    let expected = BTreeMap::from([(0, 0), (1, 0), (2, 2), (3, 1)]);
    assert_eq!(complex.betti_numbers(), expected);

    let matched = greedy_matching(&mut complex);
    assert_eq!(complex.verify_matching(), Ok(()));

    let reduced = complex.reduce().unwrap();
    assert_eq!(reduced.cell_count(), complex.cell_count() - 2 * matched.len());
    assert_eq!(reduced.betti_numbers(), expected);
    assert_eq!(
        reduced.betti_numbers_over::<Cyclic<2>>(),
        complex.betti_numbers_over::<Cyclic<2>>()
    );
}

#[test]
fn torsion_survives_reduction() {
    let mut complex = six_vertex_projective_plane();
    greedy_matching(&mut complex);
    let reduced = complex.reduce().unwrap();

    assert_eq!(
        reduced.betti_numbers(),
        BTreeMap::from([(0, 0), (1, 0), (2, 0), (3, 0)])
    );
    assert_eq!(
        reduced.betti_numbers_over::<Cyclic<2>>(),
        BTreeMap::from([(0, 0), (1, 0), (2, 1), (3, 1)])
    );
    assert_eq!(
        reduced.betti_numbers_over::<Cyclic<3>>(),
        complex.betti_numbers_over::<Cyclic<3>>()
    );
}

#[test]
fn non_unit_incidence_cannot_be_collapsed() {
    let mut complex = projective_plane();
    let result = complex.add_to_matching_by_labels(&"f", &"e");
    assert!(matches!(
        result,
        Err(MorseError::NonUnitIncidence { degree: 2, .. })
    ));

    let reduced = complex.reduce().unwrap();
    assert_eq!(reduced.ranks(), vec![0, 1]);
    assert_eq!(reduced.ranks_over::<Cyclic<2>>(), vec![0, 0]);
}
