//! Scoring for the talent matching engine.
//!
//! The crate turns a candidate/job pair into a [`MatchScore`] by combining
//! three sub-scores with fixed weights:
//! - **Skill overlap** ([`skill_match`]): share of required skills held, plus
//!   a capped bonus for nice-to-have skills.
//! - **Experience fit** ([`experience_match`]): a coarse step function over
//!   the gap between held and required years.
//! - **Text similarity** ([`text_similarity`]): TF-IDF cosine similarity
//!   between the resume and the job description, fitted on just that pair.
//!
//! [`MatchingEngine`] packages the composition and implements
//! [`Matcher`](talent_core::Matcher) so it plugs into the ranking functions.
//!
//! # Examples
//!
//! ```
//! use talent_core::{CandidateProfile, JobPosting};
//! use talent_scorer::MatchingEngine;
//!
//! let candidate = CandidateProfile::new()
//!     .with_skills(["Python", "ML", "Docker"])
//!     .with_experience(5)
//!     .with_resume_text("Experienced Python developer with ML expertise");
//! let job = JobPosting::new()
//!     .with_required_skills(["Python", "ML"])
//!     .with_experience_range(3, None)
//!     .with_description_text("Looking for Python ML engineer");
//!
//! let score = MatchingEngine::new().compute_score(&candidate, &job);
//! assert_eq!(score.skill_match, 1.0);
//! assert_eq!(score.experience_match, 1.0);
//! assert!(score.is_recommended);
//! ```

#![forbid(unsafe_code)]

mod engine;
mod experience;
mod skills;
mod stopwords;
mod text;
mod tfidf;

pub use engine::{EXPERIENCE_WEIGHT, MatchingEngine, SKILL_WEIGHT, TEXT_WEIGHT};
pub use experience::{ExperienceFit, OVERQUALIFIED_MARGIN, experience_match};
pub use skills::{NICE_TO_HAVE_BONUS, skill_match};
pub use talent_core::MatchScore;
pub use text::normalize;
pub use tfidf::{MAX_FEATURES, TfidfVectorizer, VectorizeError, cosine_similarity, text_similarity};
