use crate::error::AlignError;
use crate::matrix::AlignmentMatrix;
use crate::result::AlignmentResult;
use crate::scoring::{AlignmentMode, ScoringConfig};
use crate::traceback::{step, Columns};
use crate::{check_gap_marker, check_matrix, Aligner};

/// Needleman-Wunsch global alignment: every element of both sequences is placed.
pub struct GlobalAligner<'a, T> {
    a: &'a [T],
    b: &'a [T],
    scoring: ScoringConfig,
}

impl<'a, T: Copy + PartialEq> Aligner<'a, T> for GlobalAligner<'a, T> {
    fn with(a: &'a [T], b: &'a [T], scoring: ScoringConfig) -> Self {
        GlobalAligner { a, b, scoring }
    }

    fn matrix(&self) -> Result<AlignmentMatrix, AlignError> {
        AlignmentMatrix::build(self.a, self.b, &self.scoring, AlignmentMode::Global)
    }

    fn align(&self, gap: T) -> Result<AlignmentResult<T>, AlignError> {
        check_gap_marker(self.a, self.b, &gap)?;
        let m = self.matrix()?;
        walk(&m, self.a, self.b, &self.scoring, gap)
    }
}

impl<'a, T: Copy + PartialEq> GlobalAligner<'a, T> {
    /// Global alignment score alone, computed in linear memory.
    pub fn score(&self) -> Result<i32, AlignError> {
        self.scoring.check_capacity(self.a.len(), self.b.len())?;
        let row = crate::matrix::last_row(self.a, self.b, &self.scoring);
        Ok(row[self.b.len()])
    }
}

/// Backtracks a prebuilt global matrix from `(len(a), len(b))` to the origin.
pub fn traceback<T: Copy + PartialEq>(
    m: &AlignmentMatrix,
    a: &[T],
    b: &[T],
    scoring: &ScoringConfig,
    gap: T,
) -> Result<AlignmentResult<T>, AlignError> {
    scoring.check_capacity(a.len(), b.len())?;
    check_matrix(m, a, b, AlignmentMode::Global)?;
    check_gap_marker(a, b, &gap)?;
    walk(m, a, b, scoring, gap)
}

fn walk<T: Copy + PartialEq>(
    m: &AlignmentMatrix,
    a: &[T],
    b: &[T],
    scoring: &ScoringConfig,
    gap: T,
) -> Result<AlignmentResult<T>, AlignError> {
    let (mut i, mut j) = (a.len(), b.len());
    let mut columns = Columns::new(gap, a.len() + b.len());
    while i > 0 || j > 0 {
        let s = step(m, a, b, scoring, i, j)?;
        log::trace!("({}, {}) score {} -> {:?}", i, j, m.get(i, j), s);
        (i, j) = columns.take(s, a, b, i, j);
    }
    let (aligned_a, aligned_b) = columns.finish();
    log::debug!(
        "global alignment of {} x {}: {} columns, score {}",
        a.len(),
        b.len(),
        aligned_a.len(),
        m.corner()
    );
    Ok(AlignmentResult::classify(m.corner(), aligned_a, aligned_b, gap, 0, 0))
}
