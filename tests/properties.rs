use fit_aligner::{
    align, AlignmentParams, FitAligner, RescanMode, ScoreMatrix, Sequence, StreamConfig,
};
use proptest::prelude::*;

fn streamed(document: &[String], target: &str, rescan: RescanMode) -> FitAligner {
    let config = StreamConfig {
        rescan,
        early_termination: false,
        ..StreamConfig::default()
    };
    let mut aligner = FitAligner::new(AlignmentParams::default()).with_config(config);
    aligner.set_target(&Sequence::new(target)).unwrap();
    for chunk in document {
        aligner.extend(chunk).unwrap();
    }
    aligner
}

proptest! {
    #[test]
    fn test_embedded_target_costs_nothing(
        prefix in "[a-d \n]{0,20}",
        target in "[a-d]{1,8}",
        suffix in "[a-d \n]{0,20}"
    ) {
        let document = format!("{}{}{}", prefix, target, suffix);
        let result = align(&document, &target).unwrap();
        let chars: Vec<char> = document.chars().collect();
        let embedded_end = prefix.chars().count() + target.chars().count();

        prop_assert_eq!(result.cost, 0);
        prop_assert!(result.end <= embedded_end);
        let matched: String = chars[result.start..result.end].iter().collect();
        prop_assert_eq!(matched, target);
        prop_assert!(result.pairs.iter().all(|p| p.document == p.target));
    }

    #[test]
    fn test_alignment_is_idempotent(
        document in "[a-e\t ]{0,30}",
        target in "[a-e]{1,6}"
    ) {
        let first = align(&document, &target).unwrap();
        let second = align(&document, &target).unwrap();
        prop_assert_eq!(first.cost, second.cost);
        prop_assert_eq!((first.start, first.end), (second.start, second.end));
        prop_assert_eq!(first.pairs, second.pairs);
    }

    #[test]
    fn test_cost_never_increases_as_document_grows(
        chunks in prop::collection::vec("[a-e\n]{0,6}", 1..8),
        target in "[a-e]{1,5}"
    ) {
        let mut aligner = FitAligner::new(AlignmentParams::default());
        aligner.set_target(&Sequence::new(&target)).unwrap();
        let mut previous = aligner.align().unwrap().cost;
        for chunk in &chunks {
            let cost = aligner.extend(chunk).unwrap().cost;
            prop_assert!(cost <= previous);
            previous = cost;
        }
    }

    #[test]
    fn test_extend_is_identical_to_recompute(
        chunks in prop::collection::vec("[a-c\u{1} ]{0,6}", 0..6),
        target in "[a-c]{1,5}"
    ) {
        let extended = streamed(&chunks, &target, RescanMode::Extend);
        let recomputed = streamed(&chunks, &target, RescanMode::Recompute);

        prop_assert_eq!(extended.matrix(), recomputed.matrix());
        let a = extended.align_with_traceback().unwrap();
        let b = recomputed.align_with_traceback().unwrap();
        prop_assert_eq!(a.cost, b.cost);
        prop_assert_eq!((a.start, a.end), (b.start, b.end));
        prop_assert_eq!(a.pairs, b.pairs);
    }

    #[test]
    fn test_path_cost_matches_matrix(
        document in "[a-d\n]{0,25}",
        target in "[a-d\t]{1,6}"
    ) {
        let doc: Vec<char> = document.chars().collect();
        let tgt: Vec<char> = target.chars().collect();
        let params = AlignmentParams::default();
        let matrix = ScoreMatrix::build(&doc, &tgt, params.penalties());
        let (end, best) = matrix.best_end();

        let result = align(&document, &target).unwrap();
        prop_assert_eq!(result.end, end);
        prop_assert_eq!(result.cost, best);
        prop_assert!(matrix.last_column().all(|c| c >= best));
        prop_assert_eq!(
            result.pairs.iter().filter(|p| p.target.is_some()).count(),
            tgt.len()
        );
        prop_assert_eq!(
            result.pairs.iter().filter(|p| p.document.is_some()).count(),
            result.end - result.start
        );
    }
}
