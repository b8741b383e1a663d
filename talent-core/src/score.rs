//! The comparable result of scoring one candidate against one job.

use serde::{Deserialize, Serialize};

/// Total score at or above which a match is flagged for human review.
pub const RECOMMENDATION_THRESHOLD: f32 = 0.6;

/// Scale used to round score fields to three decimal places.
const ROUNDING_SCALE: f32 = 1000.0;

/// Relevance of a candidate to a job.
///
/// Every field lies in `0.0..=1.0` and is rounded to three decimal places.
/// `is_recommended` is derived from the unrounded total so rounding never
/// flips the flag.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchScore {
    /// Weighted combination of the three components.
    pub total_score: f32,
    /// Share of required skills held, plus the nice-to-have bonus.
    pub skill_match: f32,
    /// Discrete experience fit tier.
    pub experience_match: f32,
    /// Cosine similarity between resume and job description.
    pub text_similarity: f32,
    /// Whether `total_score` reached [`RECOMMENDATION_THRESHOLD`].
    pub is_recommended: bool,
}

impl MatchScore {
    /// Assemble a score from its components and their weighted total.
    ///
    /// Each value is sanitised with [`sanitise`] before the recommendation
    /// flag is computed and the fields are rounded.
    ///
    /// # Examples
    /// ```
    /// use talent_core::MatchScore;
    ///
    /// let score = MatchScore::new(1.0, 0.8, 0.123_456, 0.677_037);
    /// assert_eq!(score.text_similarity, 0.123);
    /// assert_eq!(score.total_score, 0.677);
    /// assert!(score.is_recommended);
    /// ```
    #[must_use]
    pub fn new(skill_match: f32, experience_match: f32, text_similarity: f32, total: f32) -> Self {
        let total = sanitise(total);
        Self {
            total_score: round_score(total),
            skill_match: round_score(sanitise(skill_match)),
            experience_match: round_score(sanitise(experience_match)),
            text_similarity: round_score(sanitise(text_similarity)),
            is_recommended: total >= RECOMMENDATION_THRESHOLD,
        }
    }
}

/// Clamp and validate a raw score.
///
/// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
#[must_use]
pub fn sanitise(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Round a score to three decimal places.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by a power of ten and back"
)]
#[must_use]
pub fn round_score(score: f32) -> f32 {
    (score * ROUNDING_SCALE).round() / ROUNDING_SCALE
}
