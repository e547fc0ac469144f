// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `dmorse` crate reduces finite graded cell complexes with discrete
//! Morse theory: a complex is built with [`ComplexBuilder`], an acyclic
//! matching is applied to it, and [`Complex::reduce`] produces the smaller
//! complex of critical cells, whose boundary ranks give the homology of the
//! original.
//!
//! ```rust
//! use dmorse::{ReductionConfig, cone_matching, simplicial_complex};
//!
//! // The boundary of a tetrahedron, a 2-sphere.
//! let mut sphere = simplicial_complex(&[0, 1, 2, 3], 3);
//! let matching = cone_matching(&sphere, 0);
//! sphere.apply_matching(&matching, &ReductionConfig::default())?;
//!
//! let reduced = sphere.reduce()?;
//! assert_eq!(reduced.cell_count(), 1);
//! assert_eq!(reduced.betti_numbers(), sphere.betti_numbers());
//! # Ok::<(), dmorse::MorseError>(())
//! ```

#![warn(missing_docs)]

pub use crate::algebra::{
    Additive, AlgebraicBase, Cyclic, FieldLike, HashMapModule, Multiplicative, Rational, RingLike,
};
pub use crate::complexes::{
    Cell, CellId, Complex, ComplexBuilder, Edge, EdgeId, Simplex, cone_matching,
    simplicial_complex,
};
pub use crate::config::{AcyclicityCheck, ReductionConfig};
pub use crate::error::MorseError;
pub use crate::homology::{BoundaryMatrix, MatchResult, Matching};

mod algebra;
mod complexes;
mod config;
mod error;
mod homology;
