//! Deterministic `Matcher` fakes used by unit and behaviour tests.

use std::collections::HashMap;

use crate::{CandidateProfile, JobPosting, MatchScore, Matcher};

/// Matcher returning a preset total per record identifier.
///
/// The candidate's identifier is looked up first, then the job's. Unknown
/// identifiers score `0.0`. Every component of the returned score equals the
/// total.
#[derive(Debug, Default, Clone)]
pub struct FixedMatcher {
    totals: HashMap<String, f32>,
}

impl FixedMatcher {
    /// Create a matcher with no preset totals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the total returned for `id`.
    #[must_use]
    pub fn with_total(mut self, id: impl Into<String>, total: f32) -> Self {
        self.totals.insert(id.into(), total);
        self
    }

    fn lookup(&self, id: Option<&str>) -> Option<f32> {
        id.and_then(|key| self.totals.get(key).copied())
    }
}

impl Matcher for FixedMatcher {
    fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchScore {
        let total = self
            .lookup(candidate.id.as_deref())
            .or_else(|| self.lookup(job.id.as_deref()))
            .unwrap_or(0.0);
        MatchScore::new(total, total, total, total)
    }
}
