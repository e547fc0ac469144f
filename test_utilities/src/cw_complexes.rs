// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use dmorse::{Complex, ComplexBuilder, Simplex, simplicial_complex};

/// Boundary of the triangle on vertices 1, 2, 3, with the empty simplex.
pub fn triangle_boundary() -> Complex<Simplex> {
    simplicial_complex(&[1, 2, 3], 2)
}

/// One 0-cell, three 1-cells and two 2-cells, every incidence of degree 1.
pub fn identified_torus() -> Complex<&'static str> {
    let mut builder = ComplexBuilder::new();
    let vertex = builder.add_cell(0, "v").unwrap();
    let edges: Vec<_> = ["a", "b", "c"]
        .into_iter()
        .map(|label| builder.add_cell(1, label).unwrap())
        .collect();
    let faces: Vec<_> = ["f", "g"]
        .into_iter()
        .map(|label| builder.add_cell(2, label).unwrap())
        .collect();

    for edge in &edges {
        builder.add_edge(*edge, vertex, 1).unwrap();
    }
    for face in &faces {
        for edge in &edges {
            builder.add_edge(*face, *edge, 1).unwrap();
        }
    }
    builder.build()
}

/// One cell in each grade 0 to 2, the face wrapping twice around the edge.
pub fn projective_plane() -> Complex<&'static str> {
    let mut builder = ComplexBuilder::new();
    builder.add_cell(0, "v").unwrap();
    let edge = builder.add_cell(1, "e").unwrap();
    let face = builder.add_cell(2, "f").unwrap();
    builder.add_edge(face, edge, 2).unwrap();
    builder.build()
}

/// Square boundary a -> b -> c -> d -> a.
pub fn square_boundary() -> Complex<&'static str> {
    let mut builder = ComplexBuilder::new();
    let vertices: Vec<_> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|label| builder.add_cell(0, label).unwrap())
        .collect();
    for (label, tail, head) in [("ab", 0, 1), ("bc", 1, 2), ("cd", 2, 3), ("da", 3, 0)] {
        let side = builder.add_cell(1, label).unwrap();
        builder.add_edge(side, vertices[head], 1).unwrap();
        builder.add_edge(side, vertices[tail], -1).unwrap();
    }
    builder.build()
}
