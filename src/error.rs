use crate::{AlignmentMode, Side};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AlignError {
    /// A score handed over as a float cannot be represented as an integer score.
    #[error("invalid {name} score: {value}")]
    InvalidScore { name: &'static str, value: f64 },

    /// The largest reachable cumulative score would not fit in the matrix cells.
    #[error("scores overflow for sequences of length {len_a} and {len_b}")]
    ScoreOverflow { len_a: usize, len_b: usize },

    /// The gap marker is also an element of one of the input sequences.
    #[error("gap marker is ambiguous: it appears in sequence {side} at index {index}")]
    AmbiguousGapMarker { side: Side, index: usize },

    /// The matrix does not have the `(len(a) + 1) x (len(b) + 1)` shape of the inputs.
    #[error("matrix is {rows}x{cols} but sequences have lengths {len_a} and {len_b}")]
    MatrixShape {
        rows: usize,
        cols: usize,
        len_a: usize,
        len_b: usize,
    },

    /// A matrix built for one mode was handed to the traceback of the other.
    #[error("expected a {expected:?} matrix, got a {found:?} one")]
    ModeMismatch {
        expected: AlignmentMode,
        found: AlignmentMode,
    },

    /// No predecessor of cell `(row, col)` explains its score, so the matrix was not
    /// built with the scoring passed to the traceback.
    #[error("cell ({row}, {col}) is not reachable under the given scoring")]
    InconsistentMatrix { row: usize, col: usize },

    #[error("alignment position {position} is out of range (length {len})")]
    PositionOutOfRange { position: usize, len: usize },
}
