//! Score a candidate against a job.
//!
//! The `Matcher` trait is the seam between ranking and scoring: the ranking
//! functions in [`crate::ranking`] accept any implementation.

use crate::{CandidateProfile, JobPosting, MatchScore};

/// Calculate how well a candidate fits a job.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so pools can be
/// scored across threads. The method is infallible: degraded input (empty
/// skills, empty text) resolves to a zero component, never an error.
///
/// Implementations must:
/// - Return identical output for identical input.
/// - Keep every field of the returned [`MatchScore`] within `0.0..=1.0`.
/// - Leave both records untouched.
///
/// # Examples
///
/// ```rust
/// use talent_core::{CandidateProfile, JobPosting, MatchScore, Matcher};
///
/// struct ExperienceOnly;
///
/// impl Matcher for ExperienceOnly {
///     fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchScore {
///         let fit = if candidate.experience_years >= job.min_experience { 1.0 } else { 0.0 };
///         MatchScore::new(0.0, fit, 0.0, fit)
///     }
/// }
///
/// let candidate = CandidateProfile::new().with_experience(5);
/// let job = JobPosting::new().with_experience_range(3, None);
/// assert!(ExperienceOnly.score(&candidate, &job).is_recommended);
/// ```
pub trait Matcher: Send + Sync {
    /// Return the score for `candidate` applying to `job`.
    fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchScore;
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchScore {
        (**self).score(candidate, job)
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchScore {
        (**self).score(candidate, job)
    }
}
