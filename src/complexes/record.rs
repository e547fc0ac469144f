// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serialized form of a [`Complex`]: the cells in arena order and the edges
//! with their matching state. Adjacency lists and per-grade indices are
//! derived again when a complex is read back.

use std::fmt::Debug;
use std::hash::Hash;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{CellId, Complex, ComplexBuilder, MorseError};

#[derive(Serialize, Deserialize)]
struct ComplexRecord<L> {
    min_grade: u32,
    cells: Vec<CellRecord<L>>,
    edges: Vec<EdgeRecord>,
}

#[derive(Serialize, Deserialize)]
struct CellRecord<L> {
    grade: u32,
    label: Option<L>,
}

#[derive(Serialize, Deserialize)]
struct EdgeRecord {
    high: CellId,
    low: CellId,
    degree: i64,
    #[serde(default = "matchable_by_default")]
    matchable: bool,
    #[serde(default)]
    matched: bool,
}

fn matchable_by_default() -> bool {
    true
}

impl<L> ComplexRecord<L>
where
    L: Clone + Eq + Hash + Debug,
{
    /// Replay the record through a builder, then restore the matching.
    fn into_complex(self) -> Result<Complex<L>, MorseError> {
        let mut builder = ComplexBuilder::new();
        for cell in self.cells {
            match cell.label {
                Some(label) => builder.add_cell(cell.grade, label)?,
                None => builder.add_unlabeled_cell(cell.grade),
            };
        }

        let mut matched = Vec::new();
        for edge in self.edges {
            let id = if edge.matchable {
                builder.add_edge(edge.high, edge.low, edge.degree)?
            } else {
                builder.add_unmatchable_edge(edge.high, edge.low, edge.degree)?
            };
            if edge.matched {
                matched.push(id);
            }
        }

        let mut complex = builder.build_from_grade(self.min_grade);
        for edge in matched {
            complex.add_to_matching(edge)?;
        }
        Ok(complex)
    }
}

impl<L: Serialize> Serialize for Complex<L> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let record = ComplexRecord {
            min_grade: self.min_grade().unwrap_or_default(),
            cells: self
                .cells()
                .map(|(_, cell)| CellRecord {
                    grade: cell.grade(),
                    label: cell.label(),
                })
                .collect(),
            edges: self
                .edges()
                .map(|(_, edge)| EdgeRecord {
                    high: edge.high(),
                    low: edge.low(),
                    degree: edge.degree(),
                    matchable: edge.allows_matching(),
                    matched: edge.is_in_matching(),
                })
                .collect(),
        };
        record.serialize(serializer)
    }
}

impl<'de, L> Deserialize<'de> for Complex<L>
where
    L: Clone + Eq + Hash + Debug + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ComplexRecord::<L>::deserialize(deserializer)?
            .into_complex()
            .map_err(D::Error::custom)
    }
}
