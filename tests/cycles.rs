// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use dmorse::{AcyclicityCheck, ComplexBuilder, Matching, MorseError, ReductionConfig};
use test_utilities::square_boundary;

fn around_the_square() -> Matching<&'static str> {
    Matching::from_iter([("ab", "a"), ("bc", "b"), ("cd", "c"), ("da", "d")])
}

#[test]
fn closing_the_loop_is_detected() {
    let mut complex = square_boundary();
    for (side, vertex) in around_the_square().iter().take(3) {
        complex.add_to_matching_by_labels(side, vertex).unwrap();
    }
    let d = complex.find_cell(&"d").unwrap();
    assert!(complex.is_acyclic(d, 1));

    complex.add_to_matching_by_labels(&"da", &"d").unwrap();
    assert!(!complex.is_acyclic(d, 1));
    assert!(complex.verify_matching().is_err());
}

#[test]
fn cyclic_matching_is_rejected_and_discarded() {
    for acyclicity in [AcyclicityCheck::EveryEdge, AcyclicityCheck::Batch] {
        let mut complex = square_boundary();
        let config = ReductionConfig::default().with_acyclicity(acyclicity);
        let result = complex.apply_matching(&around_the_square(), &config);

        assert!(matches!(result, Err(MorseError::CyclicMatching { grade: 1, .. })));
        assert_eq!(complex.matched_edges().count(), 0);
        assert_eq!(complex.critical_cells().count(), 8);
    }
}

#[test]
fn reduction_refuses_a_reachable_cycle() {
    // The square with a spoke from `c` to a free vertex `e`. Matching is
    // done edge by edge, without any acyclicity check.
    let mut builder = ComplexBuilder::new();
    let vertices: Vec<_> = ["a", "b", "c", "d", "e"]
        .into_iter()
        .map(|label| builder.add_cell(0, label).unwrap())
        .collect();
    let sides = [("ab", 0, 1), ("bc", 1, 2), ("cd", 2, 3), ("da", 3, 0), ("ce", 2, 4)];
    for (label, tail, head) in sides {
        let side = builder.add_cell(1, label).unwrap();
        builder.add_edge(side, vertices[head], 1).unwrap();
        builder.add_edge(side, vertices[tail], -1).unwrap();
    }
    let mut complex = builder.build();
    for (side, vertex) in around_the_square() {
        complex.add_to_matching_by_labels(&side, &vertex).unwrap();
    }

    assert_eq!(complex.critical_cells().count(), 2);
    assert!(matches!(
        complex.reduce(),
        Err(MorseError::CyclicMatching { grade: 1, .. })
    ));
}

#[test]
fn reduction_refuses_a_cycle_with_no_critical_cells() {
    let mut complex = square_boundary();
    for (side, vertex) in around_the_square() {
        complex.add_to_matching_by_labels(&side, &vertex).unwrap();
    }
    assert_eq!(complex.critical_cells().count(), 0);

    match complex.reduce() {
        Err(MorseError::CyclicMatching { grade, cycle }) => {
            assert_eq!(grade, 1);
            assert_eq!(cycle.len(), 8);
        }
        other => panic!("unexpected result {other:?}"),
    }
}
