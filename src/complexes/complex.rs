// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::RangeInclusive;

use crate::complexes::cell::{Cell, CellId, Edge, EdgeId};
use crate::HashMapModule;

/// A finite graded cell complex storing only the incidence degrees between
/// cells of adjacent grades.
///
/// Cells and edges live in two arenas addressed by [`CellId`] and [`EdgeId`];
/// the cells of each grade are additionally kept in an ordered list whose
/// order defines their per-grade index ([`Cell::index`]). Every grade between
/// the lowest and the highest is present, possibly without cells.
///
/// Membership is fixed once the complex is built (see
/// [`crate::ComplexBuilder`]); only the matching state of cells and edges can
/// change afterwards. Reductions ([`Complex::reduce`]) produce new complexes.
///
/// Serialized complexes are rebuilt through [`crate::ComplexBuilder`] when
/// read back, so a corrupted document fails to load instead of yielding a
/// complex with dangling handles.
#[derive(Clone, Debug)]
pub struct Complex<L> {
    min_grade: u32,
    graded: Vec<Vec<CellId>>,
    pub(crate) cells: Vec<Cell<L>>,
    pub(crate) edges: Vec<Edge>,
    labels: HashMap<L, CellId>,
}

impl<L> Complex<L> {
    /// Assemble a complex from cells partitioned by grade, starting at
    /// `min_grade`. Empty top grades are dropped, per-grade indices assigned
    /// and adjacency lists derived from `edges`. `labels` indexes the labeled
    /// cells.
    pub(crate) fn from_parts(
        min_grade: u32,
        mut graded: Vec<Vec<CellId>>,
        mut cells: Vec<Cell<L>>,
        edges: Vec<Edge>,
        labels: HashMap<L, CellId>,
    ) -> Self {
        while graded.last().is_some_and(Vec::is_empty) {
            graded.pop();
        }

        for (offset, ids) in graded.iter().enumerate() {
            for (index, id) in ids.iter().enumerate() {
                debug_assert_eq!(cells[id.as_usize()].grade, min_grade + offset as u32);
                cells[id.as_usize()].index = index as u32;
            }
        }

        for (index, edge) in edges.iter().enumerate() {
            debug_assert_eq!(
                cells[edge.high.as_usize()].grade,
                cells[edge.low.as_usize()].grade + 1,
                "edge between non-adjacent grades"
            );
            cells[edge.high.as_usize()].faces.push(EdgeId(index as u32));
            cells[edge.low.as_usize()].cofaces.push(EdgeId(index as u32));
        }

        Self {
            min_grade,
            graded,
            cells,
            edges,
            labels,
        }
    }

    /// The complex with no cells.
    pub fn empty() -> Self {
        Self {
            min_grade: 0,
            graded: Vec::new(),
            cells: Vec::new(),
            edges: Vec::new(),
            labels: HashMap::new(),
        }
    }

    /// The top grade of the complex, or `None` if it has no cells.
    pub fn dimension(&self) -> Option<u32> {
        (!self.graded.is_empty()).then(|| self.min_grade + self.graded.len() as u32 - 1)
    }

    /// The lowest grade of the complex, or `None` if it has no cells.
    pub fn min_grade(&self) -> Option<u32> {
        (!self.graded.is_empty()).then_some(self.min_grade)
    }

    /// Every grade of the complex in increasing order, including grades
    /// without cells that lie between the lowest and the top grade.
    pub fn grades(&self) -> RangeInclusive<u32> {
        match self.dimension() {
            Some(dimension) => self.min_grade..=dimension,
            #[allow(clippy::reversed_empty_ranges)]
            None => 1..=0,
        }
    }

    /// Whether `grade` is one of [`Complex::grades`].
    pub fn has_grade(&self, grade: u32) -> bool {
        self.grades().contains(&grade)
    }

    /// The cells of `grade` ordered by their per-grade index. Empty if the
    /// grade is not part of the complex.
    pub fn cells_of_grade(&self, grade: u32) -> &[CellId] {
        if !self.has_grade(grade) {
            return &[];
        }
        &self.graded[(grade - self.min_grade) as usize]
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells of each grade, in increasing grade order.
    pub fn cell_counts(&self) -> Vec<usize> {
        self.graded.iter().map(Vec::len).collect()
    }

    /// Total number of incidence edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a cell. Panics if `id` was not issued for this complex.
    pub fn cell(&self, id: CellId) -> &Cell<L> {
        &self.cells[id.as_usize()]
    }

    /// Look up a cell, returning `None` for foreign handles.
    pub fn get_cell(&self, id: CellId) -> Option<&Cell<L>> {
        self.cells.get(id.as_usize())
    }

    /// Look up an edge. Panics if `id` was not issued for this complex.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.as_usize()]
    }

    /// Look up an edge, returning `None` for foreign handles.
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.as_usize())
    }

    /// Iterate over all cells in arena order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell<L>)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (CellId(index as u32), cell))
    }

    /// Iterate over all edges in arena order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId(index as u32), edge))
    }

    /// The edge joining `first` and `second`, in either orientation.
    pub fn edge_between(&self, first: CellId, second: CellId) -> Option<EdgeId> {
        let (high, low) = match (self.get_cell(first), self.get_cell(second)) {
            (Some(a), Some(b)) if a.grade == b.grade + 1 => (first, second),
            (Some(a), Some(b)) if b.grade == a.grade + 1 => (second, first),
            _ => return None,
        };
        self.cells[high.as_usize()]
            .faces
            .iter()
            .copied()
            .find(|edge| self.edges[edge.as_usize()].low == low)
    }

    /// The faces of `cell` weighted by incidence degree.
    pub fn cell_boundary(&self, cell: CellId) -> HashMapModule<CellId, i64> {
        self.cells[cell.as_usize()]
            .faces
            .iter()
            .map(|edge| {
                let edge = &self.edges[edge.as_usize()];
                (edge.low, edge.degree)
            })
            .collect()
    }

    /// The cofaces of `cell` weighted by incidence degree.
    pub fn cell_coboundary(&self, cell: CellId) -> HashMapModule<CellId, i64> {
        self.cells[cell.as_usize()]
            .cofaces
            .iter()
            .map(|edge| {
                let edge = &self.edges[edge.as_usize()];
                (edge.high, edge.degree)
            })
            .collect()
    }

    /// Successors of `cell` in the Hasse diagram between `grade` and
    /// `grade - 1` oriented by the matching, with the incidence degree of the
    /// traversed edge.
    ///
    /// A cell of `grade` points down along each of its non-matching face
    /// edges; a cell of `grade - 1` points up along its matching edge, if the
    /// partner has `grade`. Cells of other grades have no successors.
    pub(crate) fn restricted_children(&self, cell: CellId, grade: u32) -> Vec<(CellId, i64)> {
        let node = &self.cells[cell.as_usize()];
        if node.grade == grade {
            node.faces
                .iter()
                .filter(|edge| Some(**edge) != node.matching)
                .map(|edge| {
                    let edge = &self.edges[edge.as_usize()];
                    (edge.low, edge.degree)
                })
                .collect()
        } else if node.grade + 1 == grade {
            node.matching
                .map(|edge| &self.edges[edge.as_usize()])
                .filter(|edge| edge.low == cell)
                .map(|edge| vec![(edge.high, edge.degree)])
                .unwrap_or_default()
        } else {
            Vec::new()
        }
    }

    /// Position of `cell` in a side table covering the cells of `grade` and
    /// `grade - 1`: the cells of `grade` come first.
    pub(crate) fn grade_pair_slot(&self, cell: CellId, grade: u32) -> Option<usize> {
        let node = self.get_cell(cell)?;
        if node.grade == grade {
            Some(node.index as usize)
        } else if node.grade + 1 == grade {
            Some(self.cells_of_grade(grade).len() + node.index as usize)
        } else {
            None
        }
    }

    /// Size of the side table used by [`Complex::grade_pair_slot`].
    pub(crate) fn grade_pair_len(&self, grade: u32) -> usize {
        let lower = match grade.checked_sub(1) {
            Some(lower) => self.cells_of_grade(lower).len(),
            None => 0,
        };
        self.cells_of_grade(grade).len() + lower
    }
}

impl<L: Eq + Hash> Complex<L> {
    /// The cell carrying `label`, if any.
    pub fn find_cell(&self, label: &L) -> Option<CellId> {
        self.labels.get(label).copied()
    }
}

impl<L> Default for Complex<L> {
    fn default() -> Self {
        Self::empty()
    }
}
