// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simplicial complexes on a vertex set, with the empty simplex.

use std::collections::HashMap;

use itertools::Itertools;

use crate::{CellId, Complex, ComplexBuilder, Matching};

/// A simplex given by its vertices in increasing order.
pub type Simplex = Vec<u32>;

/// The simplicial complex of all simplices on `vertices` having at most
/// `max_size` vertices, the empty simplex included.
///
/// A simplex with `s` vertices has grade `s`, so the empty simplex is the
/// unique cell of grade 0 and the homology computed from the complex is the
/// reduced homology, shifted up by one grade. The incidence of a simplex
/// `[v_0, ..., v_s]` with the face omitting `v_i` is `(-1)^i`.
///
/// Taking `max_size` equal to the number of vertices gives the full simplex;
/// one less gives its boundary, a sphere.
///
/// ```rust
/// use dmorse::simplicial_complex;
///
/// let circle = simplicial_complex(&[1, 2, 3], 2);
/// assert_eq!(circle.cell_counts(), vec![1, 3, 3]);
/// assert_eq!(circle.betti_numbers().get(&2), Some(&1));
/// ```
pub fn simplicial_complex(vertices: &[u32], max_size: usize) -> Complex<Simplex> {
    let vertices: Vec<u32> = vertices.iter().copied().sorted_unstable().dedup().collect();
    let max_size = max_size.min(vertices.len());

    let mut builder = ComplexBuilder::new();
    let mut ids: HashMap<Simplex, CellId> = HashMap::new();

    for size in 0..=max_size {
        for simplex in vertices.iter().copied().combinations(size) {
            let id = builder.push_cell(size as u32, Some(simplex.clone()));
            for position in 0..simplex.len() {
                let mut face = simplex.clone();
                face.remove(position);
                let degree = if position % 2 == 0 { 1 } else { -1 };
                builder.push_edge(id, ids[&face], degree, true);
            }
            ids.insert(simplex, id);
        }
    }

    builder.build()
}

/// The matching collapsing the star of `apex`: every simplex containing
/// `apex` is paired with the face obtained by removing it.
///
/// Pairs are only produced for simplices present in `complex`, whose faces
/// are present too. The matching is acyclic, and when every simplex not
/// containing `apex` has a coface containing it (as in a full simplex) it
/// leaves no critical cell at all.
pub fn cone_matching(complex: &Complex<Simplex>, apex: u32) -> Matching<Simplex> {
    complex
        .cells()
        .filter_map(|(_, cell)| cell.label())
        .filter(|simplex| simplex.contains(&apex))
        .map(|simplex| {
            let face: Simplex = simplex.iter().copied().filter(|v| *v != apex).collect();
            (simplex.clone(), face)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_simplex_counts_and_signs() {
        let complex = simplicial_complex(&[3, 1, 2], 3);
        assert_eq!(complex.cell_counts(), vec![1, 3, 3, 1]);
        assert_eq!(complex.edge_count(), 3 + 6 + 3);

        let top = complex.find_cell(&vec![1, 2, 3]).unwrap();
        let boundary = complex.cell_boundary(top);
        assert_eq!(boundary.coef(&complex.find_cell(&vec![2, 3]).unwrap()), 1);
        assert_eq!(boundary.coef(&complex.find_cell(&vec![1, 3]).unwrap()), -1);
        assert_eq!(boundary.coef(&complex.find_cell(&vec![1, 2]).unwrap()), 1);

        let vertex = complex.find_cell(&vec![2]).unwrap();
        let empty = complex.find_cell(&vec![]).unwrap();
        assert_eq!(complex.cell_boundary(vertex).coef(&empty), 1);
    }

    #[test]
    fn boundary_squares_to_zero() {
        let complex = simplicial_complex(&[0, 1, 2, 3], 4);
        for (id, _) in complex.cells() {
            let mut twice = crate::HashMapModule::<CellId, i64>::new();
            for (face, degree) in complex.cell_boundary(id) {
                for (subface, subdegree) in complex.cell_boundary(face) {
                    twice.insert_or_add(subface, degree * subdegree);
                }
            }
            assert!(twice.is_empty());
        }
    }

    #[test]
    fn cone_matching_pairs_star_of_apex() {
        let complex = simplicial_complex(&[1, 2, 3], 2);
        let matching = cone_matching(&complex, 1);
        let mut pairs: Vec<_> = matching.iter().cloned().collect();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                (vec![1], vec![]),
                (vec![1, 2], vec![2]),
                (vec![1, 3], vec![3]),
            ]
        );
    }

    #[test]
    fn vertices_are_deduplicated() {
        let complex = simplicial_complex(&[2, 2, 1], 5);
        assert_eq!(complex.cell_counts(), vec![1, 2, 1]);
    }
}
