//! Resolve record identifiers to pre-fetched records.
//!
//! Batch scoring receives identifiers rather than records. The calling layer
//! fetches the records up front and hands them over behind
//! [`CandidateSource`]; identifiers the source cannot resolve are skipped.
//! [`JobSource`] offers the same lookup for postings.
//!
//! Slices resolve by linear scan. Callers resolving many identifiers against
//! a large pool should index it into a map first.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::{CandidateProfile, JobPosting};

/// Read-only lookup of candidate profiles by identifier.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use talent_core::{CandidateProfile, CandidateSource};
///
/// let pool = HashMap::from([("c-1".to_owned(), CandidateProfile::new())]);
/// assert!(pool.candidate("c-1").is_some());
/// assert!(pool.candidate("c-2").is_none());
/// ```
pub trait CandidateSource {
    /// Return the profile registered under `id`, if any.
    fn candidate(&self, id: &str) -> Option<&CandidateProfile>;
}

impl<S: BuildHasher> CandidateSource for HashMap<String, CandidateProfile, S> {
    fn candidate(&self, id: &str) -> Option<&CandidateProfile> {
        self.get(id)
    }
}

impl CandidateSource for BTreeMap<String, CandidateProfile> {
    fn candidate(&self, id: &str) -> Option<&CandidateProfile> {
        self.get(id)
    }
}

/// Linear scan matching [`CandidateProfile::id`].
impl CandidateSource for [CandidateProfile] {
    fn candidate(&self, id: &str) -> Option<&CandidateProfile> {
        self.iter()
            .find(|candidate| candidate.id.as_deref() == Some(id))
    }
}

impl CandidateSource for Vec<CandidateProfile> {
    fn candidate(&self, id: &str) -> Option<&CandidateProfile> {
        self.as_slice().candidate(id)
    }
}

/// Read-only lookup of job postings by identifier.
pub trait JobSource {
    /// Return the posting registered under `id`, if any.
    fn job(&self, id: &str) -> Option<&JobPosting>;
}

impl<S: BuildHasher> JobSource for HashMap<String, JobPosting, S> {
    fn job(&self, id: &str) -> Option<&JobPosting> {
        self.get(id)
    }
}

/// Linear scan matching [`JobPosting::id`].
impl JobSource for [JobPosting] {
    fn job(&self, id: &str) -> Option<&JobPosting> {
        self.iter().find(|job| job.id.as_deref() == Some(id))
    }
}

impl JobSource for Vec<JobPosting> {
    fn job(&self, id: &str) -> Option<&JobPosting> {
        self.as_slice().job(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn slice_source_matches_on_id() {
        let pool = vec![
            CandidateProfile::new(),
            CandidateProfile::new().with_id("c-2").with_experience(7),
        ];
        let found = pool.candidate("c-2").map(|candidate| candidate.experience_years);
        assert_eq!(found, Some(7));
        assert!(pool.candidate("c-3").is_none());
    }

    #[rstest]
    fn anonymous_profiles_never_resolve() {
        let pool = vec![CandidateProfile::new()];
        assert!(pool.candidate("").is_none());
    }

    #[rstest]
    fn btree_source_resolves_keys() {
        let pool = BTreeMap::from([("c-1".to_owned(), CandidateProfile::new().with_experience(2))]);
        assert_eq!(pool.candidate("c-1").map(|c| c.experience_years), Some(2));
    }

    #[rstest]
    fn job_slices_match_on_id() {
        let jobs = vec![
            JobPosting::new().with_id("j-1"),
            JobPosting::new().with_id("j-2").with_experience_range(4, None),
        ];
        assert_eq!(jobs.job("j-2").map(|job| job.min_experience), Some(4));
        assert!(jobs.job("j-3").is_none());
    }
}
