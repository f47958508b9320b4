//! Many independent alignments on the rayon thread pool.
//!
//! Each pair only touches its own matrix, so no coordination is needed between tasks.
//! Results are returned in input order.

use rayon::prelude::*;

use crate::error::AlignError;
use crate::result::AlignmentResult;
use crate::scoring::{AlignmentMode, ScoringConfig};

pub fn align_batch<T>(
    pairs: &[(&[T], &[T])],
    scoring: ScoringConfig,
    mode: AlignmentMode,
    gap: T,
) -> Vec<Result<AlignmentResult<T>, AlignError>>
where
    T: Copy + PartialEq + Send + Sync,
{
    log::debug!("aligning batch of {} pairs ({:?})", pairs.len(), mode);
    pairs
        .par_iter()
        .map(|(a, b)| crate::align(a, b, scoring, mode, gap))
        .collect()
}

/// Aligns `query` against each of `targets`.
pub fn align_against<T, S>(
    query: &[T],
    targets: &[S],
    scoring: ScoringConfig,
    mode: AlignmentMode,
    gap: T,
) -> Vec<Result<AlignmentResult<T>, AlignError>>
where
    T: Copy + PartialEq + Send + Sync,
    S: AsRef<[T]> + Sync,
{
    log::debug!(
        "aligning query of length {} against {} targets",
        query.len(),
        targets.len()
    );
    targets
        .par_iter()
        .map(|target| crate::align(query, target.as_ref(), scoring, mode, gap))
        .collect()
}

/// Indices of `targets` ordered by descending global score against `query`, ties by
/// index. Only scores are computed.
pub fn rank_global<T, S>(
    query: &[T],
    targets: &[S],
    scoring: ScoringConfig,
) -> Result<Vec<(usize, i32)>, AlignError>
where
    T: Copy + PartialEq + Send + Sync,
    S: AsRef<[T]> + Sync,
{
    let mut ranked = targets
        .par_iter()
        .enumerate()
        .map(|(idx, target)| -> Result<(usize, i32), AlignError> {
            let target = target.as_ref();
            scoring.check_capacity(query.len(), target.len())?;
            let row = crate::matrix::last_row(query, target, &scoring);
            Ok((idx, row[target.len()]))
        })
        .collect::<Result<Vec<_>, AlignError>>()?;
    ranked.sort_by(|x, y| y.1.cmp(&x.1).then(x.0.cmp(&y.0)));
    Ok(ranked)
}
