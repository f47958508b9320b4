//! Per-element annotations on the original sequences.
//!
//! A renderer receives one [`Annotation`] per flagged element and decides how to draw it.
//! Which surrounding notes to highlight beyond these is up to the renderer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::remap::to_source_index;
use crate::result::{AlignmentOp, AlignmentResult, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// Aligned against a different element on the other side.
    Mismatch,
    /// Has no counterpart: the other side holds a gap in this column.
    GapFiller,
    /// Directly before or after a gap on its own side.
    GapNeighbor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub side: Side,
    pub source_index: usize,
    pub kind: AnnotationKind,
}

/// Selects which classifications produce annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationFilter {
    pub mismatches: bool,
    pub gaps_in_a: bool,
    pub gaps_in_b: bool,
}

impl Default for AnnotationFilter {
    fn default() -> Self {
        AnnotationFilter {
            mismatches: true,
            gaps_in_a: true,
            gaps_in_b: true,
        }
    }
}

impl AnnotationFilter {
    pub fn mismatches_only() -> Self {
        AnnotationFilter {
            mismatches: true,
            gaps_in_a: false,
            gaps_in_b: false,
        }
    }

    pub fn gaps_only() -> Self {
        AnnotationFilter {
            mismatches: false,
            gaps_in_a: true,
            gaps_in_b: true,
        }
    }
}

/// All annotations for `aln`, sorted by side, source index and kind.
pub fn annotate<T>(aln: &AlignmentResult<T>) -> Vec<Annotation> {
    annotate_filtered(aln, AnnotationFilter::default())
}

pub fn annotate_filtered<T>(aln: &AlignmentResult<T>, filter: AnnotationFilter) -> Vec<Annotation> {
    let mut out = BTreeSet::new();
    for (p, op) in aln.ops.iter().enumerate() {
        match op {
            AlignmentOp::Match => {}
            AlignmentOp::Mismatch if filter.mismatches => {
                for side in [Side::A, Side::B] {
                    if let Some(source_index) = source(aln, side, p) {
                        out.insert(Annotation {
                            side,
                            source_index,
                            kind: AnnotationKind::Mismatch,
                        });
                    }
                }
            }
            AlignmentOp::GapInA if filter.gaps_in_a => gap(aln, Side::A, p, &mut out),
            AlignmentOp::GapInB if filter.gaps_in_b => gap(aln, Side::B, p, &mut out),
            _ => {}
        }
    }
    out.into_iter().collect()
}

fn source<T>(aln: &AlignmentResult<T>, side: Side, p: usize) -> Option<usize> {
    to_source_index(p, aln.gaps(side)).map(|i| i + aln.start(side))
}

/// Column `p` is a gap on `gapped`: flag the element filling it on the other side and the
/// nearest elements of `gapped` around it.
fn gap<T>(aln: &AlignmentResult<T>, gapped: Side, p: usize, out: &mut BTreeSet<Annotation>) {
    let other = match gapped {
        Side::A => Side::B,
        Side::B => Side::A,
    };
    if let Some(source_index) = source(aln, other, p) {
        out.insert(Annotation {
            side: other,
            source_index,
            kind: AnnotationKind::GapFiller,
        });
    }

    let gaps = aln.gaps(gapped);
    // Elements of `gapped` placed before column p.
    let before = p - gaps.partition_point(|&g| g < p);
    let start = aln.start(gapped);
    if before > 0 {
        out.insert(Annotation {
            side: gapped,
            source_index: start + before - 1,
            kind: AnnotationKind::GapNeighbor,
        });
    }
    if before < aln.span(gapped) {
        out.insert(Annotation {
            side: gapped,
            source_index: start + before,
            kind: AnnotationKind::GapNeighbor,
        });
    }
}
