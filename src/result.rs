use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sequences being aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Classification of a single alignment column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignmentOp {
    Match,
    Mismatch,
    /// A holds the gap marker, B has an element with no counterpart in A.
    GapInA,
    /// B holds the gap marker, A has an element with no counterpart in B.
    GapInB,
}

/// Outcome of one alignment call.
///
/// `aligned_a` and `aligned_b` have equal length. Every position is exactly one of
/// match, mismatch, gap in A or gap in B; the position lists are ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult<T> {
    pub score: i32,
    pub aligned_a: Vec<T>,
    pub aligned_b: Vec<T>,
    pub gap_positions_a: Vec<usize>,
    pub gap_positions_b: Vec<usize>,
    pub mismatch_positions: Vec<usize>,
    pub ops: Vec<AlignmentOp>,
    /// Index in the original A of the first aligned element (non-zero only for local
    /// alignments).
    pub start_a: usize,
    pub start_b: usize,
    pub gap_marker: T,
}

impl<T: Copy + PartialEq> AlignmentResult<T> {
    /// Classifies each column of an already assembled alignment.
    pub(crate) fn classify(
        score: i32,
        aligned_a: Vec<T>,
        aligned_b: Vec<T>,
        gap_marker: T,
        start_a: usize,
        start_b: usize,
    ) -> Self {
        debug_assert_eq!(aligned_a.len(), aligned_b.len());
        let mut gap_positions_a = Vec::new();
        let mut gap_positions_b = Vec::new();
        let mut mismatch_positions = Vec::new();
        let mut ops = Vec::with_capacity(aligned_a.len());

        for (p, (x, y)) in aligned_a.iter().zip(aligned_b.iter()).enumerate() {
            let op = if *x == gap_marker {
                gap_positions_a.push(p);
                AlignmentOp::GapInA
            } else if *y == gap_marker {
                gap_positions_b.push(p);
                AlignmentOp::GapInB
            } else if x != y {
                mismatch_positions.push(p);
                AlignmentOp::Mismatch
            } else {
                AlignmentOp::Match
            };
            ops.push(op);
        }

        AlignmentResult {
            score,
            aligned_a,
            aligned_b,
            gap_positions_a,
            gap_positions_b,
            mismatch_positions,
            ops,
            start_a,
            start_b,
            gap_marker,
        }
    }
}

impl<T> AlignmentResult<T> {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    pub fn matches(&self) -> usize {
        self.ops.iter().filter(|op| **op == AlignmentOp::Match).count()
    }

    pub fn mismatches(&self) -> usize {
        self.mismatch_positions.len()
    }

    pub fn gaps(&self, side: Side) -> &[usize] {
        match side {
            Side::A => &self.gap_positions_a,
            Side::B => &self.gap_positions_b,
        }
    }

    pub fn aligned(&self, side: Side) -> &[T] {
        match side {
            Side::A => &self.aligned_a,
            Side::B => &self.aligned_b,
        }
    }

    /// Fraction of columns that are matches; 0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.matches() as f64 / self.len() as f64
    }
}

impl<T: fmt::Display + PartialEq> fmt::Display for AlignmentResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        for row in [&self.aligned_a, &self.aligned_b] {
            let cells = row
                .iter()
                .map(|v| {
                    if *v == self.gap_marker {
                        "-".to_string()
                    } else {
                        v.to_string()
                    }
                })
                .collect::<Vec<_>>();
            writeln!(f, "{}", cells.join(" "))?;
        }
        write!(f, "Score: {}", self.score)
    }
}
