use crate::error::AlignError;
use crate::matrix::AlignmentMatrix;
use crate::scoring::ScoringConfig;

/// Move taken from cell `(i, j)` towards the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Consume `a[i - 1]` and `b[j - 1]`.
    Diagonal,
    /// Consume `a[i - 1]` against a gap.
    Up,
    /// Consume `b[j - 1]` against a gap.
    Left,
}

/// Picks the predecessor of `(i, j)`, which must not be the origin.
///
/// Diagonal wins over up, and up wins over left, whenever scores tie. A cell that none
/// of its neighbours explains means the matrix was filled under different scoring.
pub(crate) fn step<T: PartialEq>(
    m: &AlignmentMatrix,
    a: &[T],
    b: &[T],
    scoring: &ScoringConfig,
    i: usize,
    j: usize,
) -> Result<Step, AlignError> {
    let cell = m.get(i, j);
    let reaches = |from: i32, delta: i32| from.checked_add(delta) == Some(cell);
    if i > 0 && j > 0 && reaches(m.get(i - 1, j - 1), scoring.pair(&a[i - 1], &b[j - 1])) {
        Ok(Step::Diagonal)
    } else if i > 0 && reaches(m.get(i - 1, j), scoring.gap) {
        Ok(Step::Up)
    } else if j > 0 && reaches(m.get(i, j - 1), scoring.gap) {
        Ok(Step::Left)
    } else {
        Err(AlignError::InconsistentMatrix { row: i, col: j })
    }
}

/// Accumulates aligned columns from the end of the alignment towards its start.
pub(crate) struct Columns<T> {
    a: Vec<T>,
    b: Vec<T>,
    gap: T,
}

impl<T: Copy> Columns<T> {
    pub fn new(gap: T, capacity: usize) -> Self {
        Columns {
            a: Vec::with_capacity(capacity),
            b: Vec::with_capacity(capacity),
            gap,
        }
    }

    /// Records `step` taken from `(i, j)` and returns the cell it leads to.
    pub fn take(&mut self, step: Step, a: &[T], b: &[T], i: usize, j: usize) -> (usize, usize) {
        match step {
            Step::Diagonal => {
                self.a.push(a[i - 1]);
                self.b.push(b[j - 1]);
                (i - 1, j - 1)
            }
            Step::Up => {
                self.a.push(a[i - 1]);
                self.b.push(self.gap);
                (i - 1, j)
            }
            Step::Left => {
                self.a.push(self.gap);
                self.b.push(b[j - 1]);
                (i, j - 1)
            }
        }
    }

    /// Aligned rows in start-to-end order.
    pub fn finish(mut self) -> (Vec<T>, Vec<T>) {
        self.a.reverse();
        self.b.reverse();
        (self.a, self.b)
    }
}
