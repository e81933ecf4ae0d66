//! Pairwise judgment matrix and the membership vector derived from it.

use serde::Serialize;

use crate::{Intensity, Preference, SaatyError};

/// Reciprocal n×n matrix of pairwise judgments.
///
/// Invariants, held from construction onward:
/// - `M[i][i] == 1`
/// - `M[i][j] == 1 / M[j][i]`, written together by [`JudgmentMatrix::record`]
/// - each unordered pair is recorded at most once; unrecorded pairs read 1.0
#[derive(Debug, Clone, PartialEq)]
pub struct JudgmentMatrix {
    n: usize,
    cells: Vec<f64>,
    recorded: Vec<bool>,
}

impl JudgmentMatrix {
    /// Neutral matrix: every cell reads 1.0 and no pair is recorded.
    pub fn neutral(n: usize) -> Result<Self, SaatyError> {
        if n == 0 {
            return Err(SaatyError::invalid_argument(
                "judgment matrix needs at least one element",
            ));
        }
        Ok(Self {
            n,
            cells: vec![1.0; n * n],
            recorded: vec![false; n * n],
        })
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of unordered pairs, `n·(n−1)/2`.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.n * (self.n - 1) / 2
    }

    /// Cell `(row, col)`. Panics when out of bounds, like slice indexing.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n && col < self.n, "matrix index out of bounds");
        self.cells[row * self.n + col]
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.cells[row * self.n..(row + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks_exact(self.n)
    }

    #[must_use]
    pub fn is_recorded(&self, i: usize, j: usize) -> bool {
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        lo < hi && hi < self.n && self.recorded[lo * self.n + hi]
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.is_recorded(i, j)))
    }

    /// Records the judgment for pair `(i, j)` with `i < j`.
    ///
    /// The preferred side receives `intensity`, the other side its reciprocal.
    pub fn record(
        &mut self,
        i: usize,
        j: usize,
        intensity: Intensity,
        preference: Preference,
    ) -> Result<(), SaatyError> {
        if i >= j || j >= self.n {
            return Err(SaatyError::invalid_argument(format!(
                "pair ({i}, {j}) is not an upper-triangle pair of a {n}x{n} matrix",
                n = self.n
            )));
        }
        if self.is_recorded(i, j) {
            return Err(SaatyError::invalid_argument(format!(
                "pair ({i}, {j}) already has a judgment"
            )));
        }

        let value = intensity.value();
        let (upper, lower) = match preference {
            Preference::First => (value, 1.0 / value),
            Preference::Second => (1.0 / value, value),
        };
        let slot = i * self.n + j;
        self.cells[slot] = upper;
        self.cells[j * self.n + i] = lower;
        self.recorded[slot] = true;
        Ok(())
    }
}

/// One membership degree per element, in element order.
///
/// Degrees are not renormalized to sum to exactly 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MembershipVector(Vec<f64>);

impl MembershipVector {
    #[must_use]
    pub fn new(degrees: Vec<f64>) -> Self {
        Self(degrees)
    }

    #[must_use]
    pub fn degrees(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}
