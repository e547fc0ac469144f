// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::{Complex, FieldLike, HashMapModule, Rational};

/// The matrix of the boundary map from grade `k` to grade `k - 1`.
///
/// Rows are indexed by the per-grade index of the cells of grade `k - 1`,
/// columns by that of the cells of grade `k`. Columns are stored sparsely.
/// Matrices with no rows or no columns are valid and have rank zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryMatrix {
    grade: u32,
    rows: usize,
    columns: Vec<HashMapModule<u32, i64>>,
}

impl BoundaryMatrix {
    /// The grade `k` of the domain.
    pub fn grade(&self) -> u32 {
        self.grade
    }

    /// Number of rows, the cells of grade `k - 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, the cells of grade `k`.
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// The incidence degree between the cells of index `col` and `row`.
    /// Panics if `col` is out of range.
    pub fn entry(&self, row: usize, col: usize) -> i64 {
        self.columns[col].coef(&(row as u32))
    }

    /// The nonzero entries of column `col`, keyed by row.
    pub fn column(&self, col: usize) -> &HashMapModule<u32, i64> {
        &self.columns[col]
    }

    /// Exact rank over the rationals.
    pub fn rank(&self) -> usize {
        self.rank_over::<Rational>()
    }

    /// Rank over the field `F`, entries mapped through `F::from`.
    ///
    /// Columns are reduced left to right against the columns already kept,
    /// each keyed by its greatest nonzero row; a column that does not vanish
    /// adds one to the rank.
    pub fn rank_over<F: FieldLike>(&self) -> usize {
        if self.rows == 0 || self.columns.is_empty() {
            return 0;
        }

        let mut pivots: HashMap<u32, HashMapModule<u32, F>> = HashMap::new();
        for column in &self.columns {
            let mut reduced = column.map_coefficients(|degree| F::from(*degree));
            while let Some((row, coef)) = reduced
                .leading_term()
                .map(|(row, coef)| (*row, coef.clone()))
            {
                if let Some(pivot) = pivots.get(&row) {
                    let factor = coef * pivot.coef(&row).invert();
                    reduced -= pivot.clone().scalar_mul(factor);
                    continue;
                }
                pivots.insert(row, reduced);
                break;
            }
        }
        pivots.len()
    }
}

impl<L> Complex<L> {
    /// The boundary matrix from `grade` to `grade - 1`, if both grades are
    /// part of the complex.
    pub fn boundary_matrix(&self, grade: u32) -> Option<BoundaryMatrix> {
        let lower = grade.checked_sub(1)?;
        if !self.has_grade(grade) || !self.has_grade(lower) {
            return None;
        }

        let columns: Vec<HashMapModule<u32, i64>> = self
            .cells_of_grade(grade)
            .iter()
            .map(|cell| {
                self.cell(*cell)
                    .faces()
                    .iter()
                    .map(|edge| {
                        let edge = self.edge(*edge);
                        (self.cell(edge.low()).index(), edge.degree())
                    })
                    .collect()
            })
            .collect();

        Some(BoundaryMatrix {
            grade,
            rows: self.cells_of_grade(lower).len(),
            columns,
        })
    }

    /// The boundary matrices of every grade above the lowest, in increasing
    /// grade order.
    pub fn boundaries(&self) -> Vec<BoundaryMatrix> {
        self.grades()
            .skip(1)
            .filter_map(|grade| self.boundary_matrix(grade))
            .collect()
    }

    /// The rational ranks of [`Complex::boundaries`].
    pub fn ranks(&self) -> Vec<usize> {
        self.ranks_over::<Rational>()
    }

    /// The ranks of [`Complex::boundaries`] over the field `F`.
    ///
    /// ```rust
    /// use dmorse::{ComplexBuilder, Cyclic};
    ///
    /// // The real projective plane: the face wraps twice around the edge.
    /// let mut builder = ComplexBuilder::new();
    /// builder.add_cell(0, "v")?;
    /// let edge = builder.add_cell(1, "e")?;
    /// let face = builder.add_cell(2, "f")?;
    /// builder.add_edge(face, edge, 2)?;
    /// let plane = builder.build();
    ///
    /// assert_eq!(plane.ranks(), vec![0, 1]);
    /// assert_eq!(plane.ranks_over::<Cyclic<2>>(), vec![0, 0]);
    /// # Ok::<(), dmorse::MorseError>(())
    /// ```
    pub fn ranks_over<F: FieldLike>(&self) -> Vec<usize> {
        self.boundaries()
            .iter()
            .map(|matrix| {
                let rank = matrix.rank_over::<F>();
                debug!(
                    grade = matrix.grade(),
                    rows = matrix.rows(),
                    cols = matrix.cols(),
                    rank,
                    "boundary rank"
                );
                rank
            })
            .collect()
    }

    /// Rational Betti numbers by grade, `n_k - rank d_k - rank d_(k+1)`.
    ///
    /// Only meaningful when the boundary squares to zero; otherwise the
    /// differences are clamped at zero.
    pub fn betti_numbers(&self) -> BTreeMap<u32, usize> {
        self.betti_numbers_over::<Rational>()
    }

    /// Betti numbers by grade over the field `F`.
    pub fn betti_numbers_over<F: FieldLike>(&self) -> BTreeMap<u32, usize> {
        let ranks = self.ranks_over::<F>();
        let rank_into = |grade: u32| {
            self.min_grade()
                .and_then(|min_grade| grade.checked_sub(min_grade + 1))
                .and_then(|position| ranks.get(position as usize).copied())
                .unwrap_or_default()
        };

        self.grades()
            .map(|grade| {
                let cycles = self.cells_of_grade(grade).len().saturating_sub(rank_into(grade));
                (grade, cycles.saturating_sub(rank_into(grade + 1)))
            })
            .collect()
    }
}
