// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{AcyclicityCheck, CellId, Complex, EdgeId, MorseError, ReductionConfig, RingLike};

/// Classification of a cell by a partial matching.
///
/// A `King` is matched with a `Queen` of exactly one lesser grade through an
/// edge of unit incidence. Cells that are neither, the `Ace` or critical
/// cells, survive into the reduced complex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// `cell` is matched down to `queen`.
    King {
        /// The king cell.
        cell: CellId,
        /// The queen cell matched to `cell`.
        queen: CellId,
        /// The incidence of `cell` and `queen`, either 1 or -1.
        incidence: i64,
    },
    /// `cell` is matched up to `king`.
    Queen {
        /// The queen cell.
        cell: CellId,
        /// The king cell matched to `cell`.
        king: CellId,
        /// The incidence of `king` and `cell`, either 1 or -1.
        incidence: i64,
    },
    /// `cell` is critical.
    Ace {
        /// The ace cell.
        cell: CellId,
    },
}

/// A matching described by the labels of the matched cells, as supplied by
/// (or persisted for) an external matching generator.
///
/// Each pair names two cells of adjacent grades in either order; the
/// corresponding edge is looked up when the matching is applied with
/// [`Complex::apply_matching`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matching<L> {
    pairs: Vec<(L, L)>,
}

impl<L> Matching<L> {
    /// Create an empty matching.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append the pair `(sigma, tau)`.
    pub fn push(&mut self, sigma: L, tau: L) {
        self.pairs.push((sigma, tau));
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the matching has no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (L, L)> {
        self.pairs.iter()
    }
}

impl<L> FromIterator<(L, L)> for Matching<L> {
    fn from_iter<T: IntoIterator<Item = (L, L)>>(iter: T) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<L> IntoIterator for Matching<L> {
    type IntoIter = std::vec::IntoIter<(L, L)>;
    type Item = (L, L);

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<L> Complex<L> {
    /// Whether `edge` could be added to the matching right now: it allows
    /// matching, has unit degree, and neither endpoint is matched.
    pub fn is_edge_matchable(&self, edge: EdgeId) -> bool {
        self.check_matchable(edge).is_ok()
    }

    fn check_matchable(&self, edge_id: EdgeId) -> Result<(), MorseError> {
        let edge = self
            .get_edge(edge_id)
            .ok_or(MorseError::UnknownEdge(edge_id))?;
        if !edge.matchable {
            return Err(MorseError::UnmatchableEdge(edge_id));
        }
        for endpoint in [edge.high, edge.low] {
            if let Some(matched_by) = self.cell(endpoint).matching {
                return Err(MorseError::CellAlreadyMatched {
                    cell: endpoint,
                    matched_by,
                });
            }
        }
        debug_assert!(!edge.in_matching, "matched edge with unmatched endpoints");
        if !edge.degree.is_invertible() {
            return Err(MorseError::NonUnitIncidence {
                edge: edge_id,
                degree: edge.degree,
            });
        }
        Ok(())
    }

    /// Add `edge` to the matching, pairing its two endpoints.
    ///
    /// Fails without modifying the complex if the edge is not matchable (see
    /// [`Complex::is_edge_matchable`]). Acyclicity is not checked here; see
    /// [`Complex::is_acyclic`] and [`Complex::apply_matching`].
    pub fn add_to_matching(&mut self, edge: EdgeId) -> Result<(), MorseError> {
        self.check_matchable(edge)?;
        let (high, low) = {
            let edge = &mut self.edges[edge.as_usize()];
            edge.in_matching = true;
            (edge.high, edge.low)
        };
        self.cells[high.as_usize()].matching = Some(edge);
        self.cells[low.as_usize()].matching = Some(edge);
        Ok(())
    }

    /// Remove `edge` from the matching, unpairing its endpoints.
    pub fn remove_from_matching(&mut self, edge: EdgeId) -> Result<(), MorseError> {
        let (high, low) = match self.edges.get_mut(edge.as_usize()) {
            Some(entry) if entry.in_matching => {
                entry.in_matching = false;
                (entry.high, entry.low)
            }
            _ => return Err(MorseError::EdgeNotInMatching(edge)),
        };
        self.cells[high.as_usize()].matching = None;
        self.cells[low.as_usize()].matching = None;
        Ok(())
    }

    /// Remove every edge from the matching.
    pub fn clear_matching(&mut self) {
        for edge in self.edges.iter_mut() {
            edge.in_matching = false;
        }
        for cell in self.cells.iter_mut() {
            cell.matching = None;
        }
    }

    /// The edges currently in the matching, in arena order.
    pub fn matched_edges(&self) -> impl Iterator<Item = EdgeId> {
        self.edges()
            .filter(|(_, edge)| edge.in_matching)
            .map(|(id, _)| id)
    }

    /// The unmatched cells, in arena order.
    pub fn critical_cells(&self) -> impl Iterator<Item = CellId> {
        self.cells()
            .filter(|(_, cell)| !cell.is_matched())
            .map(|(id, _)| id)
    }

    /// The unmatched cells of `grade`, in per-grade order.
    pub fn critical_cells_of_grade(&self, grade: u32) -> impl Iterator<Item = CellId> {
        self.cells_of_grade(grade)
            .iter()
            .copied()
            .filter(|id| !self.cell(*id).is_matched())
    }

    /// Classify `cell` as king, queen or ace with respect to the matching.
    pub fn match_cell(&self, cell: CellId) -> MatchResult {
        match self.cell(cell).matching {
            None => MatchResult::Ace { cell },
            Some(edge) => {
                let edge = self.edge(edge);
                if edge.high == cell {
                    MatchResult::King {
                        cell,
                        queen: edge.low,
                        incidence: edge.degree,
                    }
                } else {
                    MatchResult::Queen {
                        cell,
                        king: edge.high,
                        incidence: edge.degree,
                    }
                }
            }
        }
    }
}

impl<L> Complex<L>
where
    L: Clone + Eq + Hash + Debug,
{
    /// Match the cells labeled `sigma` and `tau`, given in either order.
    pub fn add_to_matching_by_labels(&mut self, sigma: &L, tau: &L) -> Result<EdgeId, MorseError> {
        let edge = self.labeled_edge(sigma, tau)?;
        self.add_to_matching(edge)?;
        Ok(edge)
    }

    /// Apply an externally supplied matching and check it is acyclic,
    /// following `config`.
    ///
    /// On any failure the whole matching of the complex is cleared before the
    /// error is returned: a partially applied candidate matching is never
    /// left behind.
    pub fn apply_matching(
        &mut self,
        matching: &Matching<L>,
        config: &ReductionConfig,
    ) -> Result<(), MorseError> {
        let result = self.try_apply_matching(matching, config);
        if result.is_err() {
            self.clear_matching();
        }
        result
    }

    fn try_apply_matching(
        &mut self,
        matching: &Matching<L>,
        config: &ReductionConfig,
    ) -> Result<(), MorseError> {
        let edges = matching
            .iter()
            .map(|(sigma, tau)| self.labeled_edge(sigma, tau))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            pairs = edges.len(),
            policy = ?config.acyclicity,
            "applying matching"
        );

        for edge in edges {
            self.add_to_matching(edge)?;
            if config.acyclicity == AcyclicityCheck::EveryEdge {
                let (low, grade) = (self.edge(edge).low, self.cell(self.edge(edge).high).grade);
                if let Some(cycle) = self.find_cycle(low, grade) {
                    self.report_cycle(&cycle, config);
                    return Err(MorseError::CyclicMatching { grade, cycle });
                }
            }
        }

        if config.acyclicity == AcyclicityCheck::Batch {
            if let Err(error) = self.verify_matching() {
                if let MorseError::CyclicMatching { cycle, .. } = &error {
                    self.report_cycle(cycle, config);
                }
                return Err(error);
            }
        }

        Ok(())
    }

    /// The matching as label pairs `(king, queen)`, in edge order.
    pub fn export_matching(&self) -> Result<Matching<L>, MorseError> {
        self.matched_edges()
            .map(|edge| {
                let edge = self.edge(edge);
                let label = |cell: CellId| {
                    self.cell(cell)
                        .label()
                        .cloned()
                        .ok_or(MorseError::UnlabeledCell(cell))
                };
                Ok((label(edge.high)?, label(edge.low)?))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Matching::from_iter)
    }

    fn labeled_edge(&self, sigma: &L, tau: &L) -> Result<EdgeId, MorseError> {
        let lookup = |label: &L| {
            self.find_cell(label)
                .ok_or_else(|| MorseError::UnknownLabel(format!("{label:?}")))
        };
        let (first, second) = (lookup(sigma)?, lookup(tau)?);
        self.edge_between(first, second)
            .ok_or_else(|| MorseError::MissingEdge(format!("{sigma:?}"), format!("{tau:?}")))
    }

    fn report_cycle(&self, cycle: &[CellId], config: &ReductionConfig) {
        warn!(length = cycle.len(), "matching is not acyclic");
        if config.trace_cycles {
            for cell in cycle {
                let node = self.cell(*cell);
                warn!(
                    grade = node.grade(),
                    index = node.index(),
                    label = ?node.label(),
                    "cycle cell"
                );
            }
        }
    }
}
