use crate::error::AlignError;
use crate::matrix::AlignmentMatrix;
use crate::result::AlignmentResult;
use crate::scoring::{AlignmentMode, ScoringConfig};
use crate::traceback::{step, Columns};
use crate::{check_gap_marker, check_matrix, Aligner};

/// Smith-Waterman local alignment: only the best scoring pair of contiguous regions is
/// aligned. An empty result means no region scores above zero.
pub struct LocalAligner<'a, T> {
    a: &'a [T],
    b: &'a [T],
    scoring: ScoringConfig,
}

impl<'a, T: Copy + PartialEq> Aligner<'a, T> for LocalAligner<'a, T> {
    fn with(a: &'a [T], b: &'a [T], scoring: ScoringConfig) -> Self {
        LocalAligner { a, b, scoring }
    }

    fn matrix(&self) -> Result<AlignmentMatrix, AlignError> {
        AlignmentMatrix::build(self.a, self.b, &self.scoring, AlignmentMode::Local)
    }

    fn align(&self, gap: T) -> Result<AlignmentResult<T>, AlignError> {
        check_gap_marker(self.a, self.b, &gap)?;
        let m = self.matrix()?;
        walk(&m, self.a, self.b, &self.scoring, gap)
    }
}

/// Backtracks a prebuilt local matrix from its highest cell until the score reaches 0.
pub fn traceback<T: Copy + PartialEq>(
    m: &AlignmentMatrix,
    a: &[T],
    b: &[T],
    scoring: &ScoringConfig,
    gap: T,
) -> Result<AlignmentResult<T>, AlignError> {
    scoring.check_capacity(a.len(), b.len())?;
    check_matrix(m, a, b, AlignmentMode::Local)?;
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
    let (best, mut i, mut j) = m.max_cell();
    log::debug!("local alignment starts at ({}, {}) with score {}", i, j, best);

    let mut columns = Columns::new(gap, i + j);
    while i > 0 && j > 0 && m.get(i, j) > 0 {
        let s = step(m, a, b, scoring, i, j)?;
        log::trace!("({}, {}) score {} -> {:?}", i, j, m.get(i, j), s);
        (i, j) = columns.take(s, a, b, i, j);
    }
    let (aligned_a, aligned_b) = columns.finish();
    Ok(AlignmentResult::classify(best, aligned_a, aligned_b, gap, i, j))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::global::GlobalAligner;

    const GAP: i32 = i32::MIN;

    fn align(a: &[i32], b: &[i32]) -> AlignmentResult<i32> {
        LocalAligner::with(a, b, ScoringConfig::default())
            .align(GAP)
            .unwrap()
    }

    #[test]
    fn finds_shared_region() {
        let a = [9, 9, 9, 1, 2, 3, 4, 8, 8];
        let b = [5, 5, 1, 2, 3, 4, 6, 6, 6];
        let aln = align(&a, &b);
        assert_eq!(aln.score, 4);
        assert_eq!(aln.aligned_a, vec![1, 2, 3, 4]);
        assert_eq!(aln.aligned_b, vec![1, 2, 3, 4]);
        assert_eq!((aln.start_a, aln.start_b), (3, 2));
        assert_eq!(aln.source_index(crate::Side::A, 0), Ok(Some(3)));

        let global = GlobalAligner::with(&a[..], &b[..], ScoringConfig::default())
            .align(GAP)
            .unwrap();
        assert!(aln.len() < global.len());
    }

    #[test]
    fn keeps_internal_gap_when_it_pays() {
        let cfg = ScoringConfig::new(3, -3, -1);
        let a = [1, 2, 3, 4, 5];
        let b = [1, 2, 4, 5];
        let aln = LocalAligner::with(&a[..], &b[..], cfg).align(GAP).unwrap();
        assert_eq!(aln.score, 11);
        assert_eq!(aln.aligned_b, vec![1, 2, GAP, 4, 5]);
        assert_eq!(aln.gap_positions_b, vec![2]);
    }

    #[test]
    fn no_positive_region_is_empty() {
        let aln = align(&[1, 2, 3], &[4, 5, 6]);
        assert!(aln.is_empty());
        assert_eq!(aln.score, 0);

        let aln = align(&[], &[]);
        assert!(aln.is_empty());
        let aln = align(&[1], &[]);
        assert!(aln.is_empty());
    }

    #[test]
    fn traceback_over_prebuilt_matrix() {
        let a = [9, 9, 9, 1, 2, 3, 4, 8, 8];
        let b = [5, 5, 1, 2, 3, 4, 6, 6, 6];
        let cfg = ScoringConfig::default();
        let m = AlignmentMatrix::build(&a, &b, &cfg, AlignmentMode::Local).unwrap();
        let aln = traceback(&m, &a, &b, &cfg, GAP).unwrap();
        assert_eq!(aln, align(&a, &b));
    }

    #[test]
    fn traceback_rejects_global_matrix() {
        let a = [9, 9, 9, 1, 2, 3, 4, 8, 8];
        let b = [5, 5, 1, 2, 3, 4, 6, 6, 6];
        let cfg = ScoringConfig::default();
        let m = AlignmentMatrix::build(&a, &b, &cfg, AlignmentMode::Global).unwrap();
        assert_eq!(
            traceback(&m, &a, &b, &cfg, GAP),
            Err(AlignError::ModeMismatch {
                expected: AlignmentMode::Local,
                found: AlignmentMode::Global
            })
        );
    }

    #[test]
    fn traceback_rejects_overflowing_scoring() {
        let (a, b) = ([1, 1], [1, 1]);
        let m = AlignmentMatrix::build(&a, &b, &ScoringConfig::default(), AlignmentMode::Local)
            .unwrap();
        assert_eq!(
            traceback(&m, &a, &b, &ScoringConfig::new(i32::MAX, -1, -2), GAP),
            Err(AlignError::ScoreOverflow { len_a: 2, len_b: 2 })
        );
    }
}
