//! Rank candidate and job pools by match score.
//!
//! Every function scores each element against a fixed counterpart with a
//! [`Matcher`], stable-sorts the results by descending total score and, for
//! the top-N variants, truncates. Ties keep their input order. No minimum
//! score filter is applied here; see [`RankedList::filter_min_score`] for the
//! caller-side threshold.

use std::cmp::Ordering;

use serde::Serialize;

use crate::{CandidateProfile, CandidateSource, JobPosting, MatchScore, Matcher};

/// An item paired with its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ranked<T> {
    /// The ranked record, as supplied by the caller.
    pub item: T,
    /// Score of the record against the fixed counterpart.
    pub score: MatchScore,
}

/// Scored items ordered by descending total score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedList<T> {
    entries: Vec<Ranked<T>>,
}

impl<T> RankedList<T> {
    /// Sort scored entries and keep at most `limit` of them.
    fn from_scored<I>(scored: I, limit: Option<usize>) -> Self
    where
        I: IntoIterator<Item = Ranked<T>>,
    {
        let mut entries: Vec<Ranked<T>> = scored.into_iter().collect();
        // `sort_by` is stable, which keeps tied entries in input order.
        entries.sort_by(|left, right| {
            right
                .score
                .total_score
                .partial_cmp(&left.score.total_score)
                .unwrap_or(Ordering::Equal)
        });
        if let Some(max_len) = limit {
            entries.truncate(max_len);
        }
        Self { entries }
    }

    /// Number of ranked entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the entries in rank order.
    #[must_use]
    pub fn entries(&self) -> &[Ranked<T>] {
        &self.entries
    }

    /// Iterate over the entries in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, Ranked<T>> {
        self.entries.iter()
    }

    /// Iterate over entries whose recommendation flag is set.
    pub fn recommended(&self) -> impl Iterator<Item = &Ranked<T>> {
        self.entries.iter().filter(|entry| entry.score.is_recommended)
    }

    /// Drop entries whose total score is below `min_score`.
    ///
    /// Ranking never filters by itself; presentation layers call this with
    /// their own threshold.
    ///
    /// # Examples
    /// ```
    /// use talent_core::{CandidateProfile, JobPosting, MatchScore, Matcher, rank_candidates};
    ///
    /// struct YearsOnly;
    ///
    /// impl Matcher for YearsOnly {
    ///     fn score(&self, candidate: &CandidateProfile, _job: &JobPosting) -> MatchScore {
    ///         let total = if candidate.experience_years > 5 { 0.9 } else { 0.2 };
    ///         MatchScore::new(0.0, total, 0.0, total)
    ///     }
    /// }
    ///
    /// let pool = vec![
    ///     CandidateProfile::new().with_experience(10),
    ///     CandidateProfile::new().with_experience(1),
    /// ];
    /// let ranked = rank_candidates(&YearsOnly, &pool, &JobPosting::new(), 10);
    /// assert_eq!(ranked.filter_min_score(0.3).len(), 1);
    /// ```
    #[must_use]
    pub fn filter_min_score(mut self, min_score: f32) -> Self {
        self.entries
            .retain(|entry| entry.score.total_score >= min_score);
        self
    }

    /// Consume the list and return the ordered entries.
    #[must_use]
    pub fn into_inner(self) -> Vec<Ranked<T>> {
        self.entries
    }
}

impl<T> Default for RankedList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> IntoIterator for RankedList<T> {
    type Item = Ranked<T>;
    type IntoIter = std::vec::IntoIter<Ranked<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a RankedList<T> {
    type Item = &'a Ranked<T>;
    type IntoIter = std::slice::Iter<'a, Ranked<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A candidate resolved during batch scoring, with the identifier it was
/// requested under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchCandidate<'a> {
    /// Identifier supplied by the caller.
    pub candidate_id: String,
    /// Profile the identifier resolved to.
    pub candidate: &'a CandidateProfile,
}

/// Return the `top_n` best candidates for `job`.
///
/// A `top_n` of zero yields an empty list; a `top_n` larger than the pool
/// returns every candidate.
///
/// # Examples
/// ```
/// use talent_core::{CandidateProfile, JobPosting, MatchScore, Matcher, rank_candidates};
///
/// struct YearsOnly;
///
/// impl Matcher for YearsOnly {
///     fn score(&self, candidate: &CandidateProfile, _job: &JobPosting) -> MatchScore {
///         let total = f32::from(u8::try_from(candidate.experience_years).unwrap_or(10)) / 10.0;
///         MatchScore::new(0.0, total, 0.0, total)
///     }
/// }
///
/// let pool = vec![
///     CandidateProfile::new().with_id("junior").with_experience(2),
///     CandidateProfile::new().with_id("senior").with_experience(8),
/// ];
/// let ranked = rank_candidates(&YearsOnly, &pool, &JobPosting::new(), 1);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked.entries()[0].item.id.as_deref(), Some("senior"));
/// ```
pub fn rank_candidates<'a, M>(
    matcher: &M,
    candidates: &'a [CandidateProfile],
    job: &JobPosting,
    top_n: usize,
) -> RankedList<&'a CandidateProfile>
where
    M: Matcher + ?Sized,
{
    let scored = candidates.iter().map(|candidate| Ranked {
        item: candidate,
        score: matcher.score(candidate, job),
    });
    let ranked = RankedList::from_scored(scored, Some(top_n));
    log::trace!(
        "ranked {} of {} candidates (top_n = {top_n})",
        ranked.len(),
        candidates.len()
    );
    ranked
}

/// Return the `top_n` best jobs for `candidate`.
///
/// The mirror image of [`rank_candidates`]: the candidate is fixed and each
/// job is scored against it.
pub fn recommend_jobs<'a, M>(
    matcher: &M,
    candidate: &CandidateProfile,
    jobs: &'a [JobPosting],
    top_n: usize,
) -> RankedList<&'a JobPosting>
where
    M: Matcher + ?Sized,
{
    let scored = jobs.iter().map(|job| Ranked {
        item: job,
        score: matcher.score(candidate, job),
    });
    let ranked = RankedList::from_scored(scored, Some(top_n));
    log::trace!(
        "ranked {} of {} jobs (top_n = {top_n})",
        ranked.len(),
        jobs.len()
    );
    ranked
}

/// Score the candidates named by `ids` against `job`, best first.
///
/// Identifiers `source` cannot resolve are skipped, not reported. No top-N
/// cutoff is applied, and an identifier listed twice is scored twice.
pub fn batch_match<'a, M, S, I>(
    matcher: &M,
    source: &'a S,
    ids: I,
    job: &JobPosting,
) -> RankedList<BatchCandidate<'a>>
where
    M: Matcher + ?Sized,
    S: CandidateSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let scored = ids.into_iter().filter_map(|requested| {
        let candidate_id = requested.as_ref();
        let Some(candidate) = source.candidate(candidate_id) else {
            log::debug!("skipping unresolved candidate id {candidate_id:?}");
            return None;
        };
        Some(Ranked {
            item: BatchCandidate {
                candidate_id: candidate_id.to_owned(),
                candidate,
            },
            score: matcher.score(candidate, job),
        })
    });
    RankedList::from_scored(scored, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedMatcher;
    use rstest::{fixture, rstest};

    #[fixture]
    fn matcher() -> FixedMatcher {
        FixedMatcher::new()
            .with_total("a", 0.4)
            .with_total("b", 0.9)
            .with_total("c", 0.4)
            .with_total("d", 0.7)
    }

    #[fixture]
    fn pool() -> Vec<CandidateProfile> {
        ["a", "b", "c", "d"]
            .into_iter()
            .map(|id| CandidateProfile::new().with_id(id))
            .collect()
    }

    fn ids<T>(ranked: &RankedList<T>, id_of: impl Fn(&T) -> Option<&str>) -> Vec<String> {
        ranked
            .iter()
            .map(|entry| id_of(&entry.item).unwrap_or_default().to_owned())
            .collect()
    }

    #[rstest]
    fn candidates_sort_descending_with_stable_ties(
        matcher: FixedMatcher,
        pool: Vec<CandidateProfile>,
    ) {
        let ranked = rank_candidates(&matcher, &pool, &JobPosting::new(), 10);
        let order = ids(&ranked, |candidate| candidate.id.as_deref());
        assert_eq!(order, ["b", "d", "a", "c"]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(2, 2)]
    #[case(4, 4)]
    #[case(50, 4)]
    fn top_n_truncates(
        matcher: FixedMatcher,
        pool: Vec<CandidateProfile>,
        #[case] top_n: usize,
        #[case] expected: usize,
    ) {
        let ranked = rank_candidates(&matcher, &pool, &JobPosting::new(), top_n);
        assert_eq!(ranked.len(), expected);
    }

    #[rstest]
    fn empty_pool_yields_empty_list(matcher: FixedMatcher) {
        assert!(rank_candidates(&matcher, &[], &JobPosting::new(), 5).is_empty());
        assert!(recommend_jobs(&matcher, &CandidateProfile::new(), &[], 5).is_empty());
    }

    #[rstest]
    fn jobs_are_ranked_for_a_candidate(matcher: FixedMatcher) {
        let jobs: Vec<JobPosting> = ["c", "b", "a"]
            .into_iter()
            .map(|id| JobPosting::new().with_id(id))
            .collect();
        let ranked = recommend_jobs(&matcher, &CandidateProfile::new(), &jobs, 2);
        let order = ids(&ranked, |job| job.id.as_deref());
        assert_eq!(order, ["b", "c"]);
    }

    #[rstest]
    fn batch_skips_unresolved_ids(matcher: FixedMatcher, pool: Vec<CandidateProfile>) {
        let ranked = batch_match(&matcher, &pool, ["a", "missing", "b"], &JobPosting::new());
        let order: Vec<&str> = ranked
            .iter()
            .map(|entry| entry.item.candidate_id.as_str())
            .collect();
        assert_eq!(order, ["b", "a"]);
    }

    #[rstest]
    fn batch_has_no_cutoff(matcher: FixedMatcher, pool: Vec<CandidateProfile>) {
        let requested: Vec<String> = (0..3)
            .flat_map(|_| ["a", "b", "c", "d"])
            .map(str::to_owned)
            .collect();
        let ranked = batch_match(&matcher, &pool, &requested, &JobPosting::new());
        assert_eq!(ranked.len(), 12);
    }

    #[rstest]
    fn min_score_filter_is_inclusive(matcher: FixedMatcher, pool: Vec<CandidateProfile>) {
        let ranked = rank_candidates(&matcher, &pool, &JobPosting::new(), 10);
        let filtered = ranked.filter_min_score(0.7);
        let order = ids(&filtered, |candidate| candidate.id.as_deref());
        assert_eq!(order, ["b", "d"]);
    }

    #[rstest]
    fn recommended_follows_flag(matcher: FixedMatcher, pool: Vec<CandidateProfile>) {
        let ranked = rank_candidates(&matcher, &pool, &JobPosting::new(), 10);
        assert_eq!(ranked.recommended().count(), 2);
    }

    #[rstest]
    fn serialises_as_a_plain_array(matcher: FixedMatcher, pool: Vec<CandidateProfile>) {
        let ranked = rank_candidates(&matcher, &pool, &JobPosting::new(), 1);
        let value = serde_json::to_value(&ranked).expect("ranked list serialises");
        assert_eq!(value[0]["item"]["id"], "b");
        assert_eq!(value[0]["score"]["is_recommended"], true);
    }
}
