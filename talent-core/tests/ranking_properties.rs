//! Property-based tests for ranking.
//!
//! # Invariants tested
//!
//! - **Ordering:** ranked output is non-increasing by total score.
//! - **Length:** output length equals `min(top_n, pool size)`.
//! - **Stability:** equal totals keep their input order.
//! - **Batch coverage:** every resolvable identifier is scored exactly once
//!   per occurrence.

use proptest::prelude::*;
use talent_core::{
    CandidateProfile, JobPosting, MatchScore, Matcher, batch_match, rank_candidates,
};

/// Scores a candidate by its experience, in tenths, capped at ten years.
struct TenthsMatcher;

impl Matcher for TenthsMatcher {
    #[expect(
        clippy::float_arithmetic,
        reason = "fake scores divide experience into tenths"
    )]
    fn score(&self, candidate: &CandidateProfile, _job: &JobPosting) -> MatchScore {
        let years = u16::try_from(candidate.experience_years.min(10)).unwrap_or(10);
        let total = f32::from(years) / 10.0;
        MatchScore::new(total, total, total, total)
    }
}

fn pool_strategy() -> impl Strategy<Value = Vec<CandidateProfile>> {
    prop::collection::vec(0_u32..15, 0..40).prop_map(|years| {
        years
            .into_iter()
            .enumerate()
            .map(|(index, years)| {
                CandidateProfile::new()
                    .with_id(format!("c-{index}"))
                    .with_experience(years)
            })
            .collect()
    })
}

fn position(candidate: &CandidateProfile) -> usize {
    candidate
        .id
        .as_deref()
        .and_then(|id| id.strip_prefix("c-"))
        .and_then(|index| index.parse().ok())
        .unwrap_or(usize::MAX)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: totals never increase along the ranked list.
    #[test]
    fn ranked_totals_are_non_increasing(pool in pool_strategy(), top_n in 0_usize..50) {
        let ranked = rank_candidates(&TenthsMatcher, &pool, &JobPosting::new(), top_n);
        for pair in ranked.entries().windows(2) {
            if let [first, second] = pair {
                prop_assert!(first.score.total_score >= second.score.total_score);
            }
        }
    }

    /// Property: the list holds `min(top_n, pool size)` entries.
    #[test]
    fn ranked_length_is_bounded(pool in pool_strategy(), top_n in 0_usize..50) {
        let ranked = rank_candidates(&TenthsMatcher, &pool, &JobPosting::new(), top_n);
        prop_assert_eq!(ranked.len(), top_n.min(pool.len()));
    }

    /// Property: entries with equal totals appear in input order.
    #[test]
    fn ties_keep_input_order(pool in pool_strategy()) {
        let ranked = rank_candidates(&TenthsMatcher, &pool, &JobPosting::new(), pool.len());
        for pair in ranked.entries().windows(2) {
            if let [first, second] = pair
                && first.score.total_score == second.score.total_score
            {
                prop_assert!(position(first.item) < position(second.item));
            }
        }
    }

    /// Property: batch scoring returns one entry per resolvable identifier.
    #[test]
    fn batch_scores_every_resolvable_id(
        pool in pool_strategy(),
        requested in prop::collection::vec(0_usize..60, 0..30),
    ) {
        let ids: Vec<String> = requested.iter().map(|index| format!("c-{index}")).collect();
        let expected = requested.iter().filter(|index| **index < pool.len()).count();
        let ranked = batch_match(&TenthsMatcher, &pool, &ids, &JobPosting::new());
        prop_assert_eq!(ranked.len(), expected);
    }
}
