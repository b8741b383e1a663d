//! Core domain types for the talent matching engine.
//!
//! Records arrive from collaborating layers as loosely-typed JSON objects and
//! are never mutated. The [`Matcher`] trait turns a candidate/job pair into a
//! [`MatchScore`]; the ranking functions apply any matcher across a pool and
//! return a [`RankedList`] sorted by total score.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod candidate;
pub mod job;
pub mod matcher;
pub mod ranking;
mod record;
pub mod score;
pub mod source;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use candidate::CandidateProfile;
pub use job::JobPosting;
pub use matcher::Matcher;
pub use ranking::{
    BatchCandidate, Ranked, RankedList, batch_match, rank_candidates, recommend_jobs,
};
pub use score::{MatchScore, RECOMMENDATION_THRESHOLD};
pub use source::{CandidateSource, JobSource};
