// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::complexes::cell::{Cell, CellId, Edge, EdgeId};
use crate::{Complex, MorseError};

/// Incremental construction of a [`Complex`] from an unordered collection of
/// cells and incidences.
///
/// Cells receive a [`CellId`] when added, which stays valid in the built
/// complex. Per-grade indices are assigned by [`ComplexBuilder::build`] in the
/// order cells of each grade were added.
///
/// ```rust
/// use dmorse::ComplexBuilder;
///
/// // An interval: two vertices and an edge between them.
/// let mut builder = ComplexBuilder::new();
/// let a = builder.add_cell(0, "a")?;
/// let b = builder.add_cell(0, "b")?;
/// let ab = builder.add_cell(1, "ab")?;
/// builder.add_edge(ab, b, 1)?;
/// builder.add_edge(ab, a, -1)?;
///
/// let complex = builder.build();
/// assert_eq!(complex.cell_counts(), vec![2, 1]);
/// # Ok::<(), dmorse::MorseError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ComplexBuilder<L> {
    cells: Vec<Cell<L>>,
    edges: Vec<Edge>,
    pairs: HashSet<(CellId, CellId)>,
    labels: HashMap<L, CellId>,
}

impl<L> ComplexBuilder<L>
where
    L: Clone + Eq + Hash + Debug,
{
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            edges: Vec::new(),
            pairs: HashSet::new(),
            labels: HashMap::new(),
        }
    }

    /// Add a labeled cell of `grade`. Labels must be unique.
    pub fn add_cell(&mut self, grade: u32, label: L) -> Result<CellId, MorseError> {
        if self.labels.contains_key(&label) {
            return Err(MorseError::DuplicateLabel(format!("{label:?}")));
        }
        Ok(self.push_cell(grade, Some(label)))
    }

    /// Add a cell of `grade` without label.
    pub fn add_unlabeled_cell(&mut self, grade: u32) -> CellId {
        self.push_cell(grade, None)
    }

    /// Add the incidence `high -> low` with the given degree. The edge can
    /// later be added to a matching if its degree is a unit.
    pub fn add_edge(&mut self, high: CellId, low: CellId, degree: i64) -> Result<EdgeId, MorseError> {
        self.checked_edge(high, low, degree, true)
    }

    /// Add the incidence `high -> low`, excluding it from any matching
    /// regardless of its degree.
    pub fn add_unmatchable_edge(
        &mut self,
        high: CellId,
        low: CellId,
        degree: i64,
    ) -> Result<EdgeId, MorseError> {
        self.checked_edge(high, low, degree, false)
    }

    /// Number of cells added so far.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Finish construction.
    pub fn build(self) -> Complex<L> {
        self.build_from_grade(u32::MAX)
    }

    /// Finish construction, keeping every grade from `floor` up even if the
    /// lowest of them have no cells. A `floor` above the lowest cell grade
    /// has no effect.
    pub(crate) fn build_from_grade(self, floor: u32) -> Complex<L> {
        let Some(lowest) = self.cells.iter().map(Cell::grade).min() else {
            return Complex::empty();
        };
        let min_grade = lowest.min(floor);
        let max_grade = self.cells.iter().map(Cell::grade).max().unwrap_or(lowest);

        let mut graded = vec![Vec::new(); (max_grade - min_grade) as usize + 1];
        for (index, cell) in self.cells.iter().enumerate() {
            graded[(cell.grade - min_grade) as usize].push(CellId(index as u32));
        }

        Complex::from_parts(min_grade, graded, self.cells, self.edges, self.labels)
    }

    fn checked_edge(
        &mut self,
        high: CellId,
        low: CellId,
        degree: i64,
        matchable: bool,
    ) -> Result<EdgeId, MorseError> {
        let high_grade = self
            .cells
            .get(high.as_usize())
            .ok_or(MorseError::UnknownCell(high))?
            .grade;
        let low_grade = self
            .cells
            .get(low.as_usize())
            .ok_or(MorseError::UnknownCell(low))?
            .grade;
        if high_grade != low_grade + 1 {
            return Err(MorseError::GradeMismatch {
                high_grade,
                low_grade,
            });
        }
        if !self.pairs.insert((high, low)) {
            return Err(MorseError::DuplicateEdge { high, low });
        }
        Ok(self.push_edge(high, low, degree, matchable))
    }

    /// Add a cell without checking label uniqueness.
    pub(crate) fn push_cell(&mut self, grade: u32, label: Option<L>) -> CellId {
        let id = CellId(self.cells.len() as u32);
        if let Some(label) = &label {
            self.labels.insert(label.clone(), id);
        }
        self.cells.push(Cell::new(grade, label));
        id
    }
}

impl<L> ComplexBuilder<L> {

    /// Add an edge without validation; callers guarantee adjacent grades and
    /// uniqueness.
    pub(crate) fn push_edge(
        &mut self,
        high: CellId,
        low: CellId,
        degree: i64,
        matchable: bool,
    ) -> EdgeId {
        debug_assert_eq!(
            self.cells[high.as_usize()].grade,
            self.cells[low.as_usize()].grade + 1
        );
        self.edges.push(Edge {
            high,
            low,
            degree,
            matchable,
            in_matching: false,
        });
        EdgeId(self.edges.len() as u32 - 1)
    }
}

impl<L> Default for ComplexBuilder<L>
where
    L: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_adjacent_grades() {
        let mut builder = ComplexBuilder::new();
        let vertex = builder.add_cell(0, 'v').unwrap();
        let face = builder.add_cell(2, 'f').unwrap();
        assert_eq!(
            builder.add_edge(face, vertex, 1),
            Err(MorseError::GradeMismatch {
                high_grade: 2,
                low_grade: 0
            })
        );
        assert_eq!(
            builder.add_edge(vertex, face, 1),
            Err(MorseError::GradeMismatch {
                high_grade: 0,
                low_grade: 2
            })
        );
    }

    #[test]
    fn rejects_duplicates_and_foreign_cells() {
        let mut builder = ComplexBuilder::new();
        let vertex = builder.add_cell(0, 'v').unwrap();
        let edge = builder.add_cell(1, 'e').unwrap();
        assert_eq!(
            builder.add_cell(1, 'e'),
            Err(MorseError::DuplicateLabel("'e'".to_string()))
        );

        builder.add_edge(edge, vertex, 1).unwrap();
        assert_eq!(
            builder.add_unmatchable_edge(edge, vertex, -1),
            Err(MorseError::DuplicateEdge {
                high: edge,
                low: vertex
            })
        );
        assert_eq!(
            builder.add_edge(CellId(7), vertex, 1),
            Err(MorseError::UnknownCell(CellId(7)))
        );
    }

    #[test]
    fn keeps_intermediate_empty_grades() {
        let mut builder = ComplexBuilder::<u8>::new();
        builder.add_unlabeled_cell(3);
        builder.add_unlabeled_cell(1);
        let complex = builder.build();
        assert_eq!(complex.grades(), 1..=3);
        assert_eq!(complex.cell_counts(), vec![1, 0, 1]);
    }

    #[test]
    fn grade_floor_keeps_empty_low_grades() {
        let mut builder = ComplexBuilder::new();
        builder.add_cell(2, "f").unwrap();
        let complex = builder.clone().build_from_grade(0);
        assert_eq!(complex.grades(), 0..=2);
        assert_eq!(complex.cell_counts(), vec![0, 0, 1]);
        assert_eq!(builder.build_from_grade(5).grades(), 2..=2);
    }

    #[test]
    fn unmatchable_edges_are_recorded() {
        let mut builder = ComplexBuilder::new();
        let vertex = builder.add_cell(0, 0u32).unwrap();
        let edge = builder.add_cell(1, 1u32).unwrap();
        let id = builder.add_unmatchable_edge(edge, vertex, 1).unwrap();
        let complex = builder.build();
        assert!(!complex.edge(id).allows_matching());
        assert!(!complex.edge(id).is_in_matching());
    }

    #[test]
    fn empty_builder() {
        let complex = ComplexBuilder::<u32>::default().build();
        assert_eq!(complex.dimension(), None);
    }
}
