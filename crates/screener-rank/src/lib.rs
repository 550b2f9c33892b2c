//! screener-rank
//!
//! Turns raw similarities and distances into 0–100 scores, buckets them
//! into [`MatchLabel`]s and orders ranked candidates.
//!
//! Two scales exist. Single-pair scoring uses cosine similarity directly
//! ([`similarity_to_score`]) and is comparable across calls. Pool ranking
//! uses [`normalize_distances`], which is relative to the batch being
//! ranked: the farthest candidate in a batch always lands near 0, so those
//! scores say nothing about another batch.

use screener_core::types::{CandidateId, MatchLabel, RankedMatch};

/// Added to the batch maximum so that a batch of identical (or zero)
/// distances does not divide by zero.
pub const DISTANCE_EPSILON: f64 = 1e-6;

/// Cosine similarity → score in `[0, 100]`.
pub fn similarity_to_score(similarity: f32) -> f32 {
    if similarity.is_nan() {
        return 0.0;
    }
    (similarity * 100.0).clamp(0.0, 100.0)
}

/// `100 * (1 - d / (max_d + ε))` for every distance of one batch.
///
/// Output order matches input order. Distances are expected to be
/// non-negative; the result is kept within `[0, 100]` regardless, and a NaN
/// distance scores 0.
pub fn normalize_distances(distances: &[f32]) -> Vec<f32> {
    // f32::max skips NaN, so a NaN entry never becomes the batch maximum.
    let max = distances.iter().copied().fold(0.0f32, f32::max);
    let denom = f64::from(max) + DISTANCE_EPSILON;
    distances
        .iter()
        .map(|&d| {
            if d.is_nan() {
                return 0.0;
            }
            let score = 100.0 * (1.0 - f64::from(d) / denom);
            (score as f32).clamp(0.0, 100.0)
        })
        .collect()
}

/// Score, label and sort a batch of neighbours.
///
/// `ids[i]` belongs to `distances[i]`; both are expected in the order the
/// index returned them. The result is ordered by descending score and the
/// sort is stable, so equal scores keep that order.
pub fn rank_candidates(ids: Vec<CandidateId>, distances: &[f32]) -> Vec<RankedMatch> {
    if ids.len() != distances.len() {
        tracing::warn!(ids = ids.len(), distances = distances.len(), "id/distance count mismatch; extra entries dropped");
    }
    let scores = normalize_distances(distances);
    let mut ranked: Vec<RankedMatch> = ids
        .into_iter()
        .zip(distances.iter().zip(scores))
        .map(|(candidate_id, (&distance, score))| RankedMatch {
            candidate_id,
            score,
            distance,
            explanation: MatchLabel::from_score(score),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(top) = ranked.first() {
        tracing::debug!(candidates = ranked.len(), top = %top.candidate_id, top_score = top.score, "ranked candidates");
    }
    ranked
}

/// Entries whose score is at least `threshold`, order preserved.
pub fn meeting_threshold(ranked: &[RankedMatch], threshold: f32) -> Vec<&RankedMatch> {
    ranked.iter().filter(|m| m.score >= threshold).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<CandidateId> {
        (0..n).map(|i| format!("c{i}")).collect()
    }

    #[test]
    fn similarity_is_scaled_and_clamped() {
        assert_eq!(similarity_to_score(1.0), 100.0);
        assert!((similarity_to_score(0.5714) - 57.14).abs() < 1e-3);
        assert_eq!(similarity_to_score(-0.3), 0.0);
        assert_eq!(similarity_to_score(1.000_01), 100.0);
        assert_eq!(similarity_to_score(f32::NAN), 0.0);
    }

    #[test]
    fn farthest_in_batch_scores_near_zero() {
        let scores = normalize_distances(&[0.0, 0.5, 1.0]);
        assert!((scores[0] - 100.0).abs() < 1e-4);
        assert!((scores[1] - 50.0).abs() < 1e-3);
        assert!(scores[2] < 1e-3 && scores[2] >= 0.0);
    }

    #[test]
    fn all_zero_distances_score_full_marks() {
        assert_eq!(normalize_distances(&[0.0, 0.0]), vec![100.0, 100.0]);
        assert!(normalize_distances(&[]).is_empty());
    }

    #[test]
    fn nan_distance_scores_zero_without_disturbing_the_batch() {
        let scores = normalize_distances(&[0.0, f32::NAN, 1.0]);
        assert_eq!(scores[1], 0.0);
        assert!((scores[0] - 100.0).abs() < 1e-4);
        assert!(scores[2] >= 0.0 && scores[2] < 1e-3);
    }

    #[test]
    fn single_candidate_scores_zero() {
        let scores = normalize_distances(&[0.8]);
        assert!(scores[0] >= 0.0 && scores[0] < 1e-3);
    }

    #[test]
    fn ranking_is_descending_and_labelled() {
        let ranked = rank_candidates(ids(3), &[0.2, 0.0, 1.0]);
        let order: Vec<&str> = ranked.iter().map(|m| m.candidate_id.as_str()).collect();
        assert_eq!(order, vec!["c1", "c0", "c2"]);
        assert_eq!(ranked[0].explanation, MatchLabel::Excellent);
        assert_eq!(ranked[2].explanation, MatchLabel::Weak);
        assert_eq!(ranked[1].distance, 0.2);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let ranked = rank_candidates(ids(4), &[0.5, 0.5, 0.0, 0.5]);
        let order: Vec<&str> = ranked.iter().map(|m| m.candidate_id.as_str()).collect();
        assert_eq!(order, vec!["c2", "c0", "c1", "c3"]);
    }

    #[test]
    fn threshold_filter_is_inclusive() {
        let ranked = rank_candidates(ids(3), &[0.0, 0.5, 1.0]);
        let kept = meeting_threshold(&ranked, 50.0);
        // 100, just over 50, just over 0
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].candidate_id, "c1");
        assert_eq!(meeting_threshold(&ranked, 0.0).len(), 3);
    }
}
