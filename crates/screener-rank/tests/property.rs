//! Property-based tests for scoring and ranking.

use proptest::prelude::*;
use screener_core::types::MatchLabel;
use screener_rank::{normalize_distances, rank_candidates, similarity_to_score};

fn distances_strategy() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(0.0f32..4.0, 0..40)
}

/// Few distinct values so that ties are common.
fn tied_distances_strategy() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec((0u8..4).prop_map(|d| f32::from(d) * 0.25), 1..30)
}

proptest! {
    /// Property: pair scores stay within [0, 100].
    #[test]
    fn prop_similarity_score_bounded(sim in -2.0f32..2.0) {
        let score = similarity_to_score(sim);
        prop_assert!((0.0..=100.0).contains(&score));
    }

    /// Property: batch scores stay within [0, 100] and the closest scores highest.
    #[test]
    fn prop_batch_scores_bounded(distances in distances_strategy()) {
        let scores = normalize_distances(&distances);
        prop_assert_eq!(scores.len(), distances.len());
        for s in &scores {
            prop_assert!((0.0..=100.0).contains(s), "out of range: {}", s);
        }
        for (i, j) in (0..distances.len()).flat_map(|i| (0..distances.len()).map(move |j| (i, j))) {
            if distances[i] < distances[j] {
                prop_assert!(scores[i] >= scores[j]);
            }
        }
    }

    /// Property: the label is monotonic in the score.
    #[test]
    fn prop_label_monotonic(a in 0.0f32..=100.0, b in 0.0f32..=100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(MatchLabel::from_score(lo) <= MatchLabel::from_score(hi));
    }

    /// Property: ranked output is non-increasing, and equal scores keep input order.
    #[test]
    fn prop_ranking_sorted_and_stable(distances in tied_distances_strategy()) {
        let ids: Vec<String> = (0..distances.len()).map(|i| format!("{i:03}")).collect();
        let ranked = rank_candidates(ids, &distances);

        prop_assert_eq!(ranked.len(), distances.len());
        for w in ranked.windows(2) {
            prop_assert!(w[0].score >= w[1].score);
            if w[0].score == w[1].score {
                prop_assert!(w[0].candidate_id < w[1].candidate_id);
            }
        }
    }
}
