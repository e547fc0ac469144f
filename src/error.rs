// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::{CellId, EdgeId};

/// Error type for complex construction, matching and reduction.
///
/// None of these are recoverable: each signals either a defect in the calling
/// logic (a contract violation) or an invalid candidate matching, which must
/// be discarded as a whole.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MorseError {
    /// The edge has been marked as not matchable at construction.
    #[error("edge {0} is marked as not matchable")]
    UnmatchableEdge(EdgeId),

    /// Only edges of incidence degree 1 or -1 can be collapsed.
    #[error("edge {edge} has non-unit incidence degree {degree} and cannot be matched")]
    NonUnitIncidence {
        /// The offending edge.
        edge: EdgeId,
        /// Its incidence degree.
        degree: i64,
    },

    /// One endpoint of the edge is already matched through another edge.
    #[error("cell {cell} is already matched by edge {matched_by}")]
    CellAlreadyMatched {
        /// The endpoint already in the matching.
        cell: CellId,
        /// The matching edge it belongs to.
        matched_by: EdgeId,
    },

    /// Attempted to remove an edge that is not in the matching.
    #[error("edge {0} is not in the matching")]
    EdgeNotInMatching(EdgeId),

    /// An edge handle that does not belong to the complex.
    #[error("edge {0} does not belong to this complex")]
    UnknownEdge(EdgeId),

    /// An edge must join a cell of grade `k` to a cell of grade `k - 1`.
    #[error("edge from grade {high_grade} to grade {low_grade} does not join adjacent grades")]
    GradeMismatch {
        /// Grade of the higher cell.
        high_grade: u32,
        /// Grade of the lower cell.
        low_grade: u32,
    },

    /// A cell handle that does not belong to the complex.
    #[error("cell {0} does not belong to this complex")]
    UnknownCell(CellId),

    /// An edge between these two cells was already added.
    #[error("duplicate edge from cell {high} to cell {low}")]
    DuplicateEdge {
        /// The higher cell.
        high: CellId,
        /// The lower cell.
        low: CellId,
    },

    /// Two cells were given the same label.
    #[error("duplicate cell label {0}")]
    DuplicateLabel(String),

    /// No cell carries the label.
    #[error("no cell is labeled {0}")]
    UnknownLabel(String),

    /// The two labeled cells are not incident.
    #[error("cells {0} and {1} are not joined by an edge")]
    MissingEdge(String, String),

    /// A matched cell has no label, so the matching cannot be exported.
    #[error("matched cell {0} has no label")]
    UnlabeledCell(CellId),

    /// The matching induces a closed V-path between grades `grade` and
    /// `grade - 1`.
    #[error("matching is not acyclic below grade {grade}: cycle through {cycle:?}")]
    CyclicMatching {
        /// The upper grade of the offending pair.
        grade: u32,
        /// Cells of the closed path, in traversal order.
        cycle: Vec<CellId>,
    },

    /// A reduced incidence degree does not fit in an `i64`.
    #[error("incidence degree between cells {high} and {low} overflows")]
    DegreeOverflow {
        /// Source critical cell.
        high: CellId,
        /// Target critical cell.
        low: CellId,
    },
}
