// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::{BTreeSet, HashMap};

use dmorse::{CellId, Complex, ComplexBuilder, EdgeId, Simplex};

/// The simplicial complex generated by `facets`, with the empty simplex.
/// Facets may repeat vertices or be listed unsorted.
pub fn simplicial_closure(facets: &[Vec<u32>]) -> Complex<Simplex> {
    let mut simplices: BTreeSet<(usize, Simplex)> = BTreeSet::new();
    for facet in facets {
        let mut facet = facet.clone();
        facet.sort_unstable();
        facet.dedup();
        for mask in 0u32..(1 << facet.len()) {
            let simplex: Simplex = facet
                .iter()
                .enumerate()
                .filter(|(position, _)| mask & (1 << position) != 0)
                .map(|(_, vertex)| *vertex)
                .collect();
            simplices.insert((simplex.len(), simplex));
        }
    }

    let mut builder = ComplexBuilder::new();
    let mut ids: HashMap<Simplex, CellId> = HashMap::new();
    for (size, simplex) in simplices {
        let id = builder.add_cell(size as u32, simplex.clone()).unwrap();
        for position in 0..size {
            let mut face = simplex.clone();
            face.remove(position);
            let degree = if position % 2 == 0 { 1 } else { -1 };
            builder.add_edge(id, ids[&face], degree).unwrap();
        }
        ids.insert(simplex, id);
    }
    builder.build()
}

/// The seven-vertex triangulation of the torus.
pub fn seven_vertex_torus() -> Complex<Simplex> {
    let facets: Vec<Vec<u32>> = (0..7)
        .flat_map(|i| {
            [
                vec![i, (i + 1) % 7, (i + 3) % 7],
                vec![i, (i + 2) % 7, (i + 3) % 7],
            ]
        })
        .collect();
    simplicial_closure(&facets)
}

/// The six-vertex triangulation of the real projective plane.
pub fn six_vertex_projective_plane() -> Complex<Simplex> {
    let facets = [
        [1, 2, 4],
        [1, 2, 6],
        [1, 3, 5],
        [1, 3, 6],
        [1, 4, 5],
        [2, 3, 4],
        [2, 3, 5],
        [2, 5, 6],
        [3, 4, 6],
        [4, 5, 6],
    ];
    simplicial_closure(&facets.map(Vec::from))
}

/// Walk the edges in order and keep each one that can be matched without
/// closing a V-path. Returns the matched edges.
pub fn greedy_matching<L>(complex: &mut Complex<L>) -> Vec<EdgeId> {
    let candidates: Vec<EdgeId> = complex.edges().map(|(id, _)| id).collect();
    let mut matched = Vec::new();
    for edge in candidates {
        if !complex.is_edge_matchable(edge) {
            continue;
        }
        complex.add_to_matching(edge).unwrap();
        let (low, grade) = {
            let edge = complex.edge(edge);
            (edge.low(), complex.cell(edge.high()).grade())
        };
        if complex.is_acyclic(low, grade) {
            matched.push(edge);
        } else {
            complex.remove_from_matching(edge).unwrap();
        }
    }
    matched
}
