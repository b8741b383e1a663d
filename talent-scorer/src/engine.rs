//! Weighted composition of the three sub-scores.

use talent_core::{
    BatchCandidate, CandidateProfile, CandidateSource, JobPosting, MatchScore, Matcher,
    RankedList, ranking,
};

use crate::{experience_match, skill_match, text_similarity};

/// Weight of [`skill_match`] in the total.
pub const SKILL_WEIGHT: f32 = 0.4;
/// Weight of [`experience_match`] in the total.
pub const EXPERIENCE_WEIGHT: f32 = 0.3;
/// Weight of [`text_similarity`] in the total.
pub const TEXT_WEIGHT: f32 = 0.3;

/// Stateless scorer combining skill, experience and text signals.
///
/// The weights are fixed. The engine holds no state between calls, so one
/// instance can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchingEngine;

impl MatchingEngine {
    /// Create an engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Score `candidate` against `job`.
    ///
    /// The total is `0.4 * skill + 0.3 * experience + 0.3 * text`. The
    /// recommendation flag is set when the unrounded total reaches
    /// [`talent_core::RECOMMENDATION_THRESHOLD`].
    #[expect(
        clippy::float_arithmetic,
        reason = "the total is a weighted sum of bounded sub-scores"
    )]
    #[must_use]
    pub fn compute_score(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchScore {
        let skill = skill_match(
            candidate.skills.as_slice(),
            job.required_skills.as_slice(),
            job.nice_to_have_skills.as_slice(),
        );
        let experience = experience_match(
            candidate.experience_years,
            job.min_experience,
            job.max_experience,
        );
        let text = text_similarity(&candidate.resume_text, &job.description_text);
        let total = skill * SKILL_WEIGHT + experience * EXPERIENCE_WEIGHT + text * TEXT_WEIGHT;
        log::trace!(
            "scored candidate {:?} for job {:?}: skill={skill} experience={experience} text={text}",
            candidate.id,
            job.id
        );
        MatchScore::new(skill, experience, text, total)
    }

    /// Rank `candidates` for `job` and keep the best `top_n`.
    #[must_use]
    pub fn rank_candidates<'a>(
        &self,
        candidates: &'a [CandidateProfile],
        job: &JobPosting,
        top_n: usize,
    ) -> RankedList<&'a CandidateProfile> {
        ranking::rank_candidates(self, candidates, job, top_n)
    }

    /// Rank `jobs` for `candidate` and keep the best `top_n`.
    #[must_use]
    pub fn recommend_jobs<'a>(
        &self,
        candidate: &CandidateProfile,
        jobs: &'a [JobPosting],
        top_n: usize,
    ) -> RankedList<&'a JobPosting> {
        ranking::recommend_jobs(self, candidate, jobs, top_n)
    }

    /// Score every resolvable identifier in `ids` against `job`.
    #[must_use]
    pub fn batch_match<'a, S, I>(
        &self,
        source: &'a S,
        ids: I,
        job: &JobPosting,
    ) -> RankedList<BatchCandidate<'a>>
    where
        S: CandidateSource + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        ranking::batch_match(self, source, ids, job)
    }
}

impl Matcher for MatchingEngine {
    fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchScore {
        self.compute_score(candidate, job)
    }
}
