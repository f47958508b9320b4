use chantalign::remap::to_source_index;
use chantalign::{align, AlignmentMode, AlignmentOp, AlignmentResult, ScoringConfig, Side};
use proptest::prelude::*;

const GAP: i32 = i32::MIN;

fn contour(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-4..=4i32, 0..=max_len)
}

fn scoring() -> impl Strategy<Value = ScoringConfig> {
    (1..=10i32, -5..=0i32, -5..=-1i32).prop_map(|(m, mm, g)| ScoringConfig::new(m, mm, g))
}

fn check_shape(aln: &AlignmentResult<i32>) -> Result<(), TestCaseError> {
    prop_assert_eq!(aln.aligned_a.len(), aln.aligned_b.len());
    prop_assert_eq!(aln.ops.len(), aln.len());
    let total = aln.matches()
        + aln.mismatches()
        + aln.gap_positions_a.len()
        + aln.gap_positions_b.len();
    prop_assert_eq!(total, aln.len());
    for p in &aln.gap_positions_a {
        prop_assert!(aln.gap_positions_b.binary_search(p).is_err());
    }
    Ok(())
}

fn check_remap(
    aln: &AlignmentResult<i32>,
    side: Side,
    original: &[i32],
) -> Result<(), TestCaseError> {
    let gaps = aln.gaps(side);
    let indices: Vec<usize> = (0..aln.len())
        .filter_map(|p| to_source_index(p, gaps))
        .collect();
    prop_assert_eq!(indices.len(), aln.span(side));
    for (k, idx) in indices.iter().enumerate() {
        prop_assert_eq!(*idx, k);
    }
    for (p, source) in aln.source_indices(side).enumerate() {
        match source {
            Some(i) => {
                prop_assert_eq!(aln.aligned(side)[p], original[i]);
            }
            None => {
                prop_assert_eq!(aln.aligned(side)[p], GAP);
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn global_alignment_invariants(a in contour(16), b in contour(16), cfg in scoring()) {
        let aln = align(&a, &b, cfg, AlignmentMode::Global, GAP).unwrap();
        check_shape(&aln)?;
        prop_assert!(aln.len() <= a.len() + b.len());
        prop_assert!(aln.len() >= a.len().max(b.len()));
        prop_assert_eq!(aln.span(Side::A), a.len());
        prop_assert_eq!(aln.span(Side::B), b.len());
        check_remap(&aln, Side::A, &a)?;
        check_remap(&aln, Side::B, &b)?;
    }

    #[test]
    fn score_matches_columns(a in contour(12), b in contour(12), cfg in scoring()) {
        let aln = align(&a, &b, cfg, AlignmentMode::Global, GAP).unwrap();
        let recomputed: i32 = aln.ops.iter().map(|op| match op {
            AlignmentOp::Match => cfg.match_score,
            AlignmentOp::Mismatch => cfg.mismatch,
            AlignmentOp::GapInA | AlignmentOp::GapInB => cfg.gap,
        }).sum();
        prop_assert_eq!(recomputed, aln.score);
    }

    #[test]
    fn self_alignment_is_identity(a in contour(20), cfg in scoring()) {
        let aln = align(&a, &a, cfg, AlignmentMode::Global, GAP).unwrap();
        prop_assert!(aln.gap_positions_a.is_empty());
        prop_assert!(aln.gap_positions_b.is_empty());
        prop_assert!(aln.mismatch_positions.is_empty());
        prop_assert_eq!(&aln.aligned_a, &a);
        prop_assert_eq!(&aln.aligned_b, &a);
    }

    #[test]
    fn swapping_inputs_keeps_score(a in contour(12), b in contour(12), cfg in scoring()) {
        let ab = align(&a, &b, cfg, AlignmentMode::Global, GAP).unwrap();
        let ba = align(&b, &a, cfg, AlignmentMode::Global, GAP).unwrap();
        prop_assert_eq!(ab.score, ba.score);
        let ab_net = ab.gap_positions_a.len() as i64 - ab.gap_positions_b.len() as i64;
        let ba_net = ba.gap_positions_b.len() as i64 - ba.gap_positions_a.len() as i64;
        prop_assert_eq!(ab_net, ba_net);
    }

    #[test]
    fn local_alignment_invariants(a in contour(16), b in contour(16), cfg in scoring()) {
        let aln = align(&a, &b, cfg, AlignmentMode::Local, GAP).unwrap();
        check_shape(&aln)?;
        prop_assert!(aln.score >= 0);
        if aln.is_empty() {
            prop_assert_eq!(aln.score, 0);
        } else {
            prop_assert_eq!(aln.ops.first(), Some(&AlignmentOp::Match));
            prop_assert_eq!(aln.ops.last(), Some(&AlignmentOp::Match));
            prop_assert!(aln.start_a + aln.span(Side::A) <= a.len());
            prop_assert!(aln.start_b + aln.span(Side::B) <= b.len());
            let global = align(&a, &b, cfg, AlignmentMode::Global, GAP).unwrap();
            prop_assert!(aln.score >= global.score);
        }
    }
}
