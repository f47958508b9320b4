//! Translation between alignment columns and indices into the original sequences.
//!
//! Downstream consumers annotate the un-aligned input, so every alignment position has
//! to be shifted left by the number of gaps inserted before it on the same side.

use crate::error::AlignError;
use crate::result::{AlignmentResult, Side};

/// Index into the original sequence for alignment column `position`, given the ascending
/// gap columns of that side. Returns `None` when the column is itself a gap.
pub fn to_source_index(position: usize, gaps: &[usize]) -> Option<usize> {
    if gaps.binary_search(&position).is_ok() {
        return None;
    }
    Some(position - gaps.partition_point(|&g| g < position))
}

/// Inverse of [`to_source_index`]: the column holding the `index`-th element of the
/// side, if the alignment spans that many elements.
pub fn to_alignment_position(index: usize, gaps: &[usize], len: usize) -> Option<usize> {
    let mut position = index;
    for &g in gaps {
        if g > position {
            break;
        }
        position += 1;
    }
    (position < len).then_some(position)
}

impl<T> AlignmentResult<T> {
    /// Index into the original `side` sequence for column `position`, `Ok(None)` if the
    /// column is a gap on that side.
    pub fn source_index(&self, side: Side, position: usize) -> Result<Option<usize>, AlignError> {
        if position >= self.len() {
            return Err(AlignError::PositionOutOfRange {
                position,
                len: self.len(),
            });
        }
        Ok(to_source_index(position, self.gaps(side)).map(|i| i + self.start(side)))
    }

    /// Source index (or `None` for a gap) of every column, in order.
    pub fn source_indices(&self, side: Side) -> impl Iterator<Item = Option<usize>> + '_ {
        let gaps = self.gaps(side);
        let start = self.start(side);
        (0..self.len()).map(move |p| to_source_index(p, gaps).map(|i| i + start))
    }

    /// Column at which element `index` of the original `side` sequence was placed, or
    /// `None` if it lies outside the aligned region.
    pub fn alignment_position(&self, side: Side, index: usize) -> Option<usize> {
        let offset = index.checked_sub(self.start(side))?;
        to_alignment_position(offset, self.gaps(side), self.len())
    }

    /// Number of original elements of `side` covered by the alignment.
    pub fn span(&self, side: Side) -> usize {
        self.len().saturating_sub(self.gaps(side).len())
    }

    pub fn start(&self, side: Side) -> usize {
        match side {
            Side::A => self.start_a,
            Side::B => self.start_b,
        }
    }
}
