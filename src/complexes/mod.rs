// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use builder::ComplexBuilder;
pub use cell::{Cell, CellId, Edge, EdgeId};
pub use complex::Complex;
pub use simplicial::{Simplex, cone_matching, simplicial_complex};

mod builder;
mod cell;
mod complex;
mod record;
mod simplicial;
