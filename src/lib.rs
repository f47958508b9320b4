//! Pairwise alignment of melodic sequences.
//!
//! Two integer sequences (contour deltas or septenary pitch positions) are aligned
//! globally or locally, each alignment column is classified as a match, mismatch or gap,
//! and alignment columns can be mapped back onto indices of the original sequences.

pub mod annotate;
pub mod batch;
pub mod contour;
pub mod error;
pub mod global;
pub mod local;
pub mod matrix;
pub mod remap;
pub mod result;
pub mod scoring;
mod traceback;

pub use annotate::{annotate, Annotation, AnnotationFilter, AnnotationKind};
pub use error::AlignError;
pub use global::GlobalAligner;
pub use local::LocalAligner;
pub use matrix::AlignmentMatrix;
pub use remap::to_source_index;
pub use result::{AlignmentOp, AlignmentResult, Side};
pub use scoring::{AlignmentMode, ScoringConfig};

pub trait Aligner<'a, T> {
    fn with(a: &'a [T], b: &'a [T], scoring: ScoringConfig) -> Self;
    /// The filled score matrix for the two sequences.
    fn matrix(&self) -> Result<AlignmentMatrix, AlignError>;
    /// Aligns the sequences, writing `gap` wherever a side has no element.
    fn align(&self, gap: T) -> Result<AlignmentResult<T>, AlignError>;
}

/// Aligns `a` against `b` in the given mode.
pub fn align<T: Copy + PartialEq>(
    a: &[T],
    b: &[T],
    scoring: ScoringConfig,
    mode: AlignmentMode,
    gap: T,
) -> Result<AlignmentResult<T>, AlignError> {
    match mode {
        AlignmentMode::Global => GlobalAligner::with(a, b, scoring).align(gap),
        AlignmentMode::Local => LocalAligner::with(a, b, scoring).align(gap),
    }
}

/// The gap marker must not occur in either sequence, or gaps could not be told apart
/// from elements.
pub(crate) fn check_gap_marker<T: PartialEq>(
    a: &[T],
    b: &[T],
    gap: &T,
) -> Result<(), AlignError> {
    for (side, seq) in [(Side::A, a), (Side::B, b)] {
        if let Some(index) = seq.iter().position(|x| x == gap) {
            return Err(AlignError::AmbiguousGapMarker { side, index });
        }
    }
    Ok(())
}

/// A prebuilt matrix must come from `mode` and have one more row and column than the
/// sequences have elements.
pub(crate) fn check_matrix<T>(
    m: &AlignmentMatrix,
    a: &[T],
    b: &[T],
    mode: AlignmentMode,
) -> Result<(), AlignError> {
    if m.mode() != mode {
        return Err(AlignError::ModeMismatch {
            expected: mode,
            found: m.mode(),
        });
    }
    if m.rows() != a.len() + 1 || m.cols() != b.len() + 1 {
        return Err(AlignError::MatrixShape {
            rows: m.rows(),
            cols: m.cols(),
            len_a: a.len(),
            len_b: b.len(),
        });
    }
    Ok(())
}
