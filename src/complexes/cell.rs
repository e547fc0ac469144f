// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Stable handle of a cell inside the arena of one [`crate::Complex`].
///
/// Handles are issued by [`crate::ComplexBuilder::add_cell`] in insertion
/// order and remain valid in the built complex. They are unrelated to the
/// per-grade index of the cell (see [`Cell::index`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub(crate) u32);

/// Stable handle of an incidence edge inside the arena of one
/// [`crate::Complex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub(crate) u32);

impl CellId {
    /// Position of the cell in the arena.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    /// Position of the edge in the arena.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "#{}", self.0)
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "e{}", self.0)
    }
}

/// A cell of a graded complex.
///
/// The face and coface lists are derived from the edges of the owning complex
/// when it is built. The matching edge, if any, is one of them.
#[derive(Clone, Debug)]
pub struct Cell<L> {
    pub(crate) grade: u32,
    pub(crate) index: u32,
    pub(crate) label: Option<L>,
    pub(crate) faces: Vec<EdgeId>,
    pub(crate) cofaces: Vec<EdgeId>,
    pub(crate) matching: Option<EdgeId>,
}

impl<L> Cell<L> {
    pub(crate) fn new(grade: u32, label: Option<L>) -> Self {
        Self {
            grade,
            index: 0,
            label,
            faces: Vec::new(),
            cofaces: Vec::new(),
            matching: None,
        }
    }

    /// The grade (dimension) of the cell.
    pub fn grade(&self) -> u32 {
        self.grade
    }

    /// Identifier of the cell within its grade, contiguous from zero. This is
    /// the row or column of the cell in the boundary matrices.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The label given at construction.
    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    /// Edges to cells of grade one less.
    pub fn faces(&self) -> &[EdgeId] {
        &self.faces
    }

    /// Edges to cells of grade one more.
    pub fn cofaces(&self) -> &[EdgeId] {
        &self.cofaces
    }

    /// The matching edge containing this cell.
    pub fn matching_edge(&self) -> Option<EdgeId> {
        self.matching
    }

    /// Whether this cell is matched.
    pub fn is_matched(&self) -> bool {
        self.matching.is_some()
    }
}

/// A signed incidence between a cell of grade `k` (`high`) and a cell of
/// grade `k - 1` (`low`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub(crate) high: CellId,
    pub(crate) low: CellId,
    pub(crate) degree: i64,
    pub(crate) matchable: bool,
    pub(crate) in_matching: bool,
}

impl Edge {
    /// The cell of greater grade.
    pub fn high(&self) -> CellId {
        self.high
    }

    /// The cell of lesser grade.
    pub fn low(&self) -> CellId {
        self.low
    }

    /// The incidence degree.
    pub fn degree(&self) -> i64 {
        self.degree
    }

    /// Whether the edge may be added to a matching at all. Even then, only
    /// unit degree edges between unmatched cells can be.
    pub fn allows_matching(&self) -> bool {
        self.matchable
    }

    /// Whether the edge is currently in the matching.
    pub fn is_in_matching(&self) -> bool {
        self.in_matching
    }
}
