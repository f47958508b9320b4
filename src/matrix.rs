use std::ops::Index;

use crate::error::AlignError;
use crate::scoring::{AlignmentMode, ScoringConfig};

/// Dynamic programming score matrix with `len(a) + 1` rows and `len(b) + 1` columns.
///
/// Cell `(i, j)` holds the best score of aligning the first `i` elements of `a` with the
/// first `j` elements of `b`. The matrix is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    cells: Vec<i32>,
    rows: usize,
    cols: usize,
    mode: AlignmentMode,
}

impl AlignmentMatrix {
    /// Fills the matrix for `a` against `b`.
    ///
    /// Global mode seeds row 0 and column 0 with the cumulative gap penalty; local mode
    /// seeds them with 0 and floors every cell at 0. Fails with
    /// [`AlignError::ScoreOverflow`] when some cell could leave `i32` range.
    pub fn build<T: PartialEq>(
        a: &[T],
        b: &[T],
        scoring: &ScoringConfig,
        mode: AlignmentMode,
    ) -> Result<Self, AlignError> {
        scoring.check_capacity(a.len(), b.len())?;
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0; rows * cols];

        if mode == AlignmentMode::Global {
            for i in 1..rows {
                cells[i * cols] = cells[(i - 1) * cols] + scoring.gap;
            }
            for j in 1..cols {
                cells[j] = cells[j - 1] + scoring.gap;
            }
        }

        for i in 1..rows {
            for j in 1..cols {
                let diag = cells[(i - 1) * cols + j - 1] + scoring.pair(&a[i - 1], &b[j - 1]);
                let up = cells[(i - 1) * cols + j] + scoring.gap;
                let left = cells[i * cols + j - 1] + scoring.gap;
                let best = diag.max(up).max(left);
                cells[i * cols + j] = match mode {
                    AlignmentMode::Global => best,
                    AlignmentMode::Local => best.max(0),
                };
            }
        }

        log::debug!(
            "built {:?} matrix {}x{}, corner score {}",
            mode,
            rows,
            cols,
            cells[rows * cols - 1]
        );
        Ok(AlignmentMatrix {
            cells,
            rows,
            cols,
            mode,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.cells[i * self.cols + j]
    }

    /// Score of the bottom-right cell, the global alignment score.
    pub fn corner(&self) -> i32 {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Highest cell and its coordinates. Ties go to the first cell in row-major order.
    pub fn max_cell(&self) -> (i32, usize, usize) {
        let mut best = (self.cells[0], 0, 0);
        for (idx, &score) in self.cells.iter().enumerate() {
            if score > best.0 {
                best = (score, idx / self.cols, idx % self.cols);
            }
        }
        best
    }

    /// Row `i` of the matrix.
    pub fn row(&self, i: usize) -> &[i32] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }
}

impl Index<(usize, usize)> for AlignmentMatrix {
    type Output = i32;

    fn index(&self, (i, j): (usize, usize)) -> &i32 {
        &self.cells[i * self.cols + j]
    }
}

/// Return the last row of the global matrix, using two rows of memory.
///
/// The final entry is the global alignment score, so this is enough when only the score
/// is needed.
#[allow(clippy::needless_range_loop)]
pub fn last_row<T: PartialEq>(a: &[T], b: &[T], scoring: &ScoringConfig) -> Vec<i32> {
    let mut score = (vec![0; b.len() + 1], vec![0; b.len() + 1]);
    for j in 1..=b.len() {
        score.0[j] = score.0[j - 1] + scoring.gap;
    }
    for i in 0..a.len() {
        score.1[0] = score.0[0] + scoring.gap;
        for j in 0..b.len() {
            let sub = score.0[j] + scoring.pair(&a[i], &b[j]);
            let del = score.0[j + 1] + scoring.gap;
            let ins = score.1[j] + scoring.gap;
            score.1[j + 1] = sub.max(del).max(ins);
        }
        std::mem::swap(&mut score.0, &mut score.1);
    }
    score.0
}
