//! Facade crate for the talent matching engine.
//!
//! This crate re-exports the domain records, the [`Matcher`] seam, the
//! ranking functions and the default [`MatchingEngine`].
//!
//! # Examples
//!
//! ```
//! use talent_match::{CandidateProfile, JobPosting, MatchingEngine};
//!
//! let pool = vec![
//!     CandidateProfile::new().with_id("rust").with_skills(["Rust"]).with_experience(4),
//!     CandidateProfile::new().with_id("go").with_skills(["Go"]).with_experience(4),
//! ];
//! let job = JobPosting::new()
//!     .with_required_skills(["rust"])
//!     .with_experience_range(3, Some(8));
//!
//! let ranked = MatchingEngine::new().rank_candidates(&pool, &job, 1);
//! assert_eq!(ranked.entries()[0].item.id.as_deref(), Some("rust"));
//! ```

#![forbid(unsafe_code)]

pub use talent_core::{
    BatchCandidate, CandidateProfile, CandidateSource, JobPosting, JobSource, MatchScore, Matcher,
    RECOMMENDATION_THRESHOLD, Ranked, RankedList, batch_match, rank_candidates, recommend_jobs,
};

#[cfg(feature = "test-support")]
pub use talent_core::test_support;

pub use talent_scorer::{
    EXPERIENCE_WEIGHT, ExperienceFit, MatchingEngine, SKILL_WEIGHT, TEXT_WEIGHT, VectorizeError,
    experience_match, normalize, skill_match, text_similarity,
};
