// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, info, trace};

use crate::complexes::{Cell, Edge};
use crate::{CellId, Complex, MorseError};

/// Accumulated weight of the V-paths from a cell to the current target,
/// split by the parity of the number of upward steps along matching edges.
type Weight = [i64; 2];

#[derive(Clone, Copy, Debug)]
enum Slot {
    Unvisited,
    InProgress,
    Done(Weight),
}

struct Frame {
    cell: CellId,
    children: Vec<(CellId, i64)>,
    next: usize,
    incoming: i64,
    weight: Weight,
}

/// Memoized path weights towards one critical target of grade `grade - 1`,
/// over the cells of `grade` and `grade - 1`.
struct PathWeights {
    grade: u32,
    slots: Vec<Slot>,
}

impl PathWeights {
    fn new<L>(complex: &Complex<L>, grade: u32) -> Self {
        Self {
            grade,
            slots: vec![Slot::Unvisited; complex.grade_pair_len(grade)],
        }
    }

    fn slot<L>(&self, complex: &Complex<L>, cell: CellId) -> usize {
        complex
            .grade_pair_slot(cell, self.grade)
            .unwrap_or_else(|| unreachable!("cell {cell} outside grade pair {}", self.grade))
    }

    /// Forget all memoized weights and aim at `target`.
    fn reset<L>(&mut self, complex: &Complex<L>, target: CellId) {
        self.slots.fill(Slot::Unvisited);
        let slot = self.slot(complex, target);
        self.slots[slot] = Slot::Done([1, 0]);
    }

    /// Weight of `source`, computed by an explicit-stack post-order
    /// traversal of the restricted Hasse diagram.
    fn weight<L>(
        &mut self,
        complex: &Complex<L>,
        source: CellId,
        target: CellId,
    ) -> Result<Weight, MorseError> {
        let overflow = || MorseError::DegreeOverflow {
            high: source,
            low: target,
        };

        let slot = self.slot(complex, source);
        if let Slot::Done(weight) = self.slots[slot] {
            return Ok(weight);
        }
        self.slots[slot] = Slot::InProgress;
        let mut stack = vec![self.frame(complex, source, 1)];

        loop {
            let Some(frame) = stack.last_mut() else {
                unreachable!("path weight stack emptied before the source finished");
            };
            let upward = complex.cell(frame.cell).grade != self.grade;

            if let Some(&(child, degree)) = frame.children.get(frame.next) {
                frame.next += 1;
                let slot = self.slot(complex, child);
                match self.slots[slot] {
                    Slot::Done(weight) => {
                        accumulate(&mut frame.weight, degree, weight, upward).ok_or_else(overflow)?;
                    }
                    Slot::InProgress => {
                        let position = stack
                            .iter()
                            .position(|open| open.cell == child)
                            .unwrap_or_default();
                        return Err(MorseError::CyclicMatching {
                            grade: self.grade,
                            cycle: stack[position..].iter().map(|open| open.cell).collect(),
                        });
                    }
                    Slot::Unvisited => {
                        self.slots[slot] = Slot::InProgress;
                        let frame = self.frame(complex, child, degree);
                        stack.push(frame);
                    }
                }
                continue;
            }

            let Some(Frame {
                cell,
                incoming,
                weight,
                ..
            }) = stack.pop()
            else {
                unreachable!("frame vanished from the path weight stack");
            };
            let slot = self.slot(complex, cell);
            self.slots[slot] = Slot::Done(weight);

            match stack.last_mut() {
                None => return Ok(weight),
                Some(parent) => {
                    let upward = complex.cell(parent.cell).grade != self.grade;
                    accumulate(&mut parent.weight, incoming, weight, upward).ok_or_else(overflow)?;
                }
            }
        }
    }

    fn frame<L>(&self, complex: &Complex<L>, cell: CellId, incoming: i64) -> Frame {
        Frame {
            cell,
            children: complex.restricted_children(cell, self.grade),
            next: 0,
            incoming,
            weight: [0, 0],
        }
    }
}

/// Add `degree * child` to `weight`, exchanging the parities when the step
/// goes up a matching edge. `None` on overflow.
fn accumulate(weight: &mut Weight, degree: i64, child: Weight, upward: bool) -> Option<()> {
    let [even, odd] = if upward { [child[1], child[0]] } else { child };
    weight[0] = weight[0].checked_add(degree.checked_mul(even)?)?;
    weight[1] = weight[1].checked_add(degree.checked_mul(odd)?)?;
    Some(())
}

impl<L: Clone + Eq + Hash> Complex<L> {
    /// The Morse complex of the current matching.
    ///
    /// The result has one cell for every critical (unmatched) cell of `self`,
    /// with the same grade and label, in the same per-grade order. Between a
    /// critical cell `a` of grade `k` and a critical cell `b` of grade `k - 1`
    /// the reduced incidence is the signed count of V-paths from `a` to `b`:
    /// every path alternates a face step with an upward step along a matching
    /// edge, contributes the product of the traversed degrees and is negated
    /// once per upward step. Only nonzero incidences become edges, ordered by
    /// source then target. The result carries no matching.
    ///
    /// The matching is checked with [`Complex::verify_matching`] first, so a
    /// closed V-path anywhere fails with [`MorseError::CyclicMatching`], even
    /// one no critical cell leads to. Incidences that leave the `i64` range
    /// fail with [`MorseError::DegreeOverflow`].
    ///
    /// ```rust
    /// use dmorse::{ReductionConfig, cone_matching, simplicial_complex};
    ///
    /// let mut circle = simplicial_complex(&[1, 2, 3], 2);
    /// let matching = cone_matching(&circle, 1);
    /// circle.apply_matching(&matching, &ReductionConfig::default())?;
    ///
    /// let reduced = circle.reduce()?;
    /// assert_eq!(reduced.cell_counts(), vec![0, 0, 1]);
    /// assert_eq!(reduced.ranks(), vec![0, 0]);
    /// # Ok::<(), dmorse::MorseError>(())
    /// ```
    pub fn reduce(&self) -> Result<Complex<L>, MorseError> {
        self.verify_matching()?;

        let mut twins: Vec<Option<CellId>> = vec![None; self.cell_count()];
        let mut cells: Vec<Cell<L>> = Vec::new();
        let mut graded: Vec<Vec<CellId>> = Vec::new();
        let mut labels: HashMap<L, CellId> = HashMap::new();

        for grade in self.grades() {
            let mut ids = Vec::new();
            for cell in self.critical_cells_of_grade(grade) {
                let twin = CellId(cells.len() as u32);
                let label = self.cell(cell).label.clone();
                if let Some(label) = &label {
                    labels.insert(label.clone(), twin);
                }
                cells.push(Cell::new(grade, label));
                twins[cell.as_usize()] = Some(twin);
                ids.push(twin);
            }
            graded.push(ids);
        }
        let twin = |cell: CellId| {
            twins[cell.as_usize()]
                .unwrap_or_else(|| unreachable!("critical cell {cell} without twin"))
        };

        let mut edges: Vec<Edge> = Vec::new();
        for grade in self.grades().skip(1) {
            let sources: Vec<CellId> = self.critical_cells_of_grade(grade).collect();
            let targets: Vec<CellId> = self.critical_cells_of_grade(grade - 1).collect();
            let mut weights = PathWeights::new(self, grade);
            let mut reduced: Vec<Edge> = Vec::new();

            for &target in &targets {
                weights.reset(self, target);
                for &source in &sources {
                    let [even, odd] = weights.weight(self, source, target)?;
                    let degree = even
                        .checked_sub(odd)
                        .ok_or(MorseError::DegreeOverflow {
                            high: source,
                            low: target,
                        })?;
                    if degree == 0 {
                        continue;
                    }
                    trace!(%source, %target, degree, "reduced incidence");
                    reduced.push(Edge {
                        high: twin(source),
                        low: twin(target),
                        degree,
                        matchable: true,
                        in_matching: false,
                    });
                }
            }

            reduced.sort_by_key(|edge| (edge.high, edge.low));
            debug!(
                grade,
                sources = sources.len(),
                targets = targets.len(),
                edges = reduced.len(),
                "reduced grade pair"
            );
            edges.extend(reduced);
        }

        let min_grade = self.min_grade().unwrap_or_default();
        let reduced = Complex::from_parts(min_grade, graded, cells, edges, labels);
        info!(
            cells = self.cell_count(),
            critical = reduced.cell_count(),
            edges = reduced.edge_count(),
            "morse reduction finished"
        );
        Ok(reduced)
    }
}
