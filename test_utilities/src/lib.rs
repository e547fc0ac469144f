// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use cw_complexes::{identified_torus, projective_plane, square_boundary, triangle_boundary};
pub use surfaces::{
    greedy_matching, seven_vertex_torus, simplicial_closure, six_vertex_projective_plane,
};

mod cw_complexes;
mod surfaces;
