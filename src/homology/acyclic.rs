// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::{debug, trace};

use crate::{CellId, Complex, MorseError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visit {
    Unvisited,
    Open,
    Closed,
}

/// Traversal state of the cells of one adjacent grade pair.
pub(crate) struct GradePairVisits {
    grade: u32,
    states: Vec<Visit>,
}

impl GradePairVisits {
    pub(crate) fn new<L>(complex: &Complex<L>, grade: u32) -> Self {
        Self {
            grade,
            states: vec![Visit::Unvisited; complex.grade_pair_len(grade)],
        }
    }

    fn slot<L>(&self, complex: &Complex<L>, cell: CellId) -> usize {
        // Only cells of the pair are ever reached from a cell of the pair.
        complex
            .grade_pair_slot(cell, self.grade)
            .unwrap_or_else(|| unreachable!("cell {cell} outside grade pair {}", self.grade))
    }

    fn is_unvisited<L>(&self, complex: &Complex<L>, cell: CellId) -> bool {
        self.states[self.slot(complex, cell)] == Visit::Unvisited
    }

    /// Depth-first search from `start` over the restricted Hasse diagram.
    /// Returns the cells of the first closed path met, starting at the cell
    /// where it closes. Cells fully explored stay closed for later searches
    /// sharing this table.
    fn search<L>(&mut self, complex: &Complex<L>, start: CellId) -> Option<Vec<CellId>> {
        let slot = self.slot(complex, start);
        if self.states[slot] != Visit::Unvisited {
            return None;
        }
        self.states[slot] = Visit::Open;
        let mut stack = vec![(start, complex.restricted_children(start, self.grade), 0)];

        while let Some((cell, children, next)) = stack.last_mut() {
            let Some(&(child, _)) = children.get(*next) else {
                let slot = self.slot(complex, *cell);
                self.states[slot] = Visit::Closed;
                stack.pop();
                continue;
            };
            *next += 1;

            let slot = self.slot(complex, child);
            match self.states[slot] {
                Visit::Closed => {}
                Visit::Open => {
                    let position = stack
                        .iter()
                        .position(|(open, _, _)| *open == child)
                        .unwrap_or_default();
                    return Some(stack[position..].iter().map(|(cell, _, _)| *cell).collect());
                }
                Visit::Unvisited => {
                    self.states[slot] = Visit::Open;
                    stack.push((child, complex.restricted_children(child, self.grade), 0));
                }
            }
        }

        None
    }
}

impl<L> Complex<L> {
    /// Look for a closed V-path through cells reachable from `start` between
    /// `grade` and `grade - 1`.
    ///
    /// The directed graph searched has an edge from each cell of `grade` to
    /// every face it is not matched with, and an edge from each cell of
    /// `grade - 1` to the cell of `grade` it is matched with. Returns the
    /// cells of the first cycle found in path order, or `None` if none is
    /// reachable or `start` is not of either grade.
    pub fn find_cycle(&self, start: CellId, grade: u32) -> Option<Vec<CellId>> {
        self.grade_pair_slot(start, grade)?;
        let cycle = GradePairVisits::new(self, grade).search(self, start);
        trace!(%start, grade, cyclic = cycle.is_some(), "acyclicity search");
        cycle
    }

    /// Whether no closed V-path between `grade` and `grade - 1` is reachable
    /// from `start`.
    pub fn is_acyclic(&self, start: CellId, grade: u32) -> bool {
        self.find_cycle(start, grade).is_none()
    }

    /// Check the whole matching for closed V-paths, one grade pair at a
    /// time, visiting each cell at most once per pair.
    pub fn verify_matching(&self) -> Result<(), MorseError> {
        for grade in self.grades().skip(1) {
            let mut visits = GradePairVisits::new(self, grade);
            for &cell in self.cells_of_grade(grade) {
                if !visits.is_unvisited(self, cell) {
                    continue;
                }
                if let Some(cycle) = visits.search(self, cell) {
                    return Err(MorseError::CyclicMatching { grade, cycle });
                }
            }
            debug!(grade, "grade pair is acyclic");
        }
        Ok(())
    }
}
