use serde::{Deserialize, Serialize};

use crate::error::AlignError;

/// Which boundary conditions and traceback rule the aligners use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignmentMode {
    /// Needleman-Wunsch: both sequences are aligned end to end.
    #[default]
    Global,
    /// Smith-Waterman: only the best scoring pair of subregions is aligned.
    Local,
}

/// Linear gap scoring. `gap` is added once per gap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub match_score: i32,
    pub mismatch: i32,
    pub gap: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::new(1, -1, -2)
    }
}

impl ScoringConfig {
    /// Weighting used when two chants are compared side by side: matches dominate so the
    /// alignment prefers to line up shared melodic material.
    pub const CHANT_COMPARISON: ScoringConfig = ScoringConfig::new(10, -1, -2);

    pub const fn new(match_score: i32, mismatch: i32, gap: i32) -> Self {
        ScoringConfig {
            match_score,
            mismatch,
            gap,
        }
    }

    /// Builds a config from loosely typed numbers, rejecting anything that is not a
    /// finite integer within `i32` range.
    pub fn from_f64(match_score: f64, mismatch: f64, gap: f64) -> Result<Self, AlignError> {
        Ok(ScoringConfig {
            match_score: integral("match", match_score)?,
            mismatch: integral("mismatch", mismatch)?,
            gap: integral("gap", gap)?,
        })
    }

    /// Score of aligning `a` against `b`.
    #[inline]
    pub fn pair<T: PartialEq>(&self, a: &T, b: &T) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }

    /// Fails if some path through a `(len_a + 1) x (len_b + 1)` matrix could accumulate
    /// a score outside `i32`. Every path has at most `len_a + len_b` steps.
    pub fn check_capacity(&self, len_a: usize, len_b: usize) -> Result<(), AlignError> {
        let largest = [self.match_score, self.mismatch, self.gap]
            .iter()
            .map(|s| i64::from(*s).abs())
            .max()
            .unwrap_or(0);
        let steps = len_a
            .checked_add(len_b)
            .and_then(|n| i64::try_from(n).ok());
        match steps.and_then(|n| n.checked_mul(largest)) {
            Some(total) if total <= i64::from(i32::MAX) => Ok(()),
            _ => Err(AlignError::ScoreOverflow { len_a, len_b }),
        }
    }
}

fn integral(name: &'static str, value: f64) -> Result<i32, AlignError> {
    if !value.is_finite()
        || value.fract() != 0.0
        || value < f64::from(i32::MIN)
        || value > f64::from(i32::MAX)
    {
        return Err(AlignError::InvalidScore { name, value });
    }
    Ok(value as i32)
}
