//! Skill overlap between a candidate and a job.

use std::collections::HashSet;

/// Weight of full nice-to-have coverage on top of the required-skill share.
pub const NICE_TO_HAVE_BONUS: f32 = 0.2;

fn fold<S: AsRef<str>>(skills: &[S]) -> HashSet<String> {
    skills
        .iter()
        .map(|skill| skill.as_ref().to_lowercase())
        .collect()
}

/// Share of `wanted` present in `held`, or `None` when nothing is wanted.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "overlap is a ratio of set sizes"
)]
fn coverage(held: &HashSet<String>, wanted: &HashSet<String>) -> Option<f32> {
    if wanted.is_empty() {
        return None;
    }
    let matched = wanted.intersection(held).count();
    Some(matched as f32 / wanted.len() as f32)
}

/// Score skill overlap in `0.0..=1.0`.
///
/// Skills compare case-insensitively as sets, so duplicates count once. The
/// score is the share of required skills the candidate holds plus
/// [`NICE_TO_HAVE_BONUS`] times the share of nice-to-have skills held,
/// capped at `1.0`. A job with no required skills scores `0.0` whatever the
/// candidate holds.
///
/// # Examples
/// ```
/// use talent_scorer::skill_match;
///
/// let held = ["Rust", "SQL"];
/// assert_eq!(skill_match(&held, &["rust", "go"], &[] as &[&str]), 0.5);
/// assert_eq!(skill_match(&held, &["rust"], &["sql"]), 1.0);
/// assert_eq!(skill_match(&held, &[] as &[&str], &["sql"]), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "bonus is added to the required share"
)]
#[must_use]
pub fn skill_match<C, R, N>(candidate: &[C], required: &[R], nice_to_have: &[N]) -> f32
where
    C: AsRef<str>,
    R: AsRef<str>,
    N: AsRef<str>,
{
    let held = fold(candidate);
    let Some(required_share) = coverage(&held, &fold(required)) else {
        return 0.0;
    };
    let bonus = coverage(&held, &fold(nice_to_have))
        .map_or(0.0, |share| share * NICE_TO_HAVE_BONUS);
    (required_share + bonus).min(1.0)
}
