//! Numeric encodings of melody that the aligners consume.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Transposition-invariant shape of a melody: 0 followed by the step between each pair of
/// consecutive positions.
///
/// Steps wrap on `i32` overflow, so `prev.wrapping_add(step)` always gives back the next
/// position.
pub fn contour(positions: &[i32]) -> Vec<i32> {
    let mut out = Vec::with_capacity(positions.len());
    if let Some(first) = positions.first() {
        out.push(0);
        let mut prev = *first;
        for &p in &positions[1..] {
            out.push(p.wrapping_sub(prev));
            prev = p;
        }
    }
    out
}

/// Diatonic pitch names in ascending order within an octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl PitchName {
    const ALL: [PitchName; 7] = [
        PitchName::C,
        PitchName::D,
        PitchName::E,
        PitchName::F,
        PitchName::G,
        PitchName::A,
        PitchName::B,
    ];

    pub fn index(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for PitchName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = ['c', 'd', 'e', 'f', 'g', 'a', 'b'][self.index() as usize];
        write!(f, "{c}")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown pitch name: {0:?}")]
pub struct UnknownPitch(pub String);

impl FromStr for PitchName {
    type Err = UnknownPitch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" => Ok(PitchName::C),
            "d" => Ok(PitchName::D),
            "e" => Ok(PitchName::E),
            "f" => Ok(PitchName::F),
            "g" => Ok(PitchName::G),
            "a" => Ok(PitchName::A),
            "b" => Ok(PitchName::B),
            _ => Err(UnknownPitch(s.to_string())),
        }
    }
}

/// Base-7 position of a pitch: `pitch + 7 * octave`, so one diatonic step is 1. `None`
/// if the octave is too far from 0 for the position to fit in `i32`.
pub fn septenary(pitch: PitchName, octave: i32) -> Option<i32> {
    octave.checked_mul(7)?.checked_add(pitch.index())
}

pub fn from_septenary(value: i32) -> (PitchName, i32) {
    let octave = value.div_euclid(7);
    (PitchName::ALL[value.rem_euclid(7) as usize], octave)
}

/// Start indices in `positions` where the melody moves by exactly the steps in `pattern`.
///
/// A match at `s` covers `positions[s..=s + pattern.len()]`.
pub fn find_contour(positions: &[i32], pattern: &[i32]) -> Vec<usize> {
    if pattern.is_empty() || positions.len() <= pattern.len() {
        return Vec::new();
    }
    positions
        .windows(pattern.len() + 1)
        .enumerate()
        .filter(|(_, w)| {
            w.windows(2)
                .zip(pattern)
                .all(|(pair, step)| pair[0].wrapping_add(*step) == pair[1])
        })
        .map(|(s, _)| s)
        .collect()
}
