//! Candidate profiles as supplied by the calling layer.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::record::{ID_FIELD, Provenance, STORE_ID_FIELD};

const SKILLS_FIELD: &str = "skills";
const EXPERIENCE_FIELD: &str = "experience_years";
const RESUME_FIELD: &str = "resume_text";
const STORE_RESUME_FIELD: &str = "cv_text";

/// A job seeker's profile.
///
/// Only `skills`, `experience_years` and `resume_text` influence scoring.
/// Every other field of the source document (name, email, location and so
/// on) is kept verbatim in [`CandidateProfile::extra`].
///
/// Missing or `null` scoring fields fall back to empty skills, zero years and
/// empty text. Documents exported from the candidate store name the resume
/// text `cv_text` and the identifier `_id`; both spellings are accepted, and
/// `_id` wins when a document carries both identifiers.
///
/// Serializing a deserialized profile reproduces its source document: scoring
/// fields keep the key they were read under and their raw value while
/// unchanged, and fields the document never had are only written once set.
///
/// # Examples
///
/// ```
/// use talent_core::CandidateProfile;
///
/// let candidate: CandidateProfile = serde_json::from_str(
///     r#"{"_id": "c-1", "name": "Ada", "skills": ["Rust"], "cv_text": null}"#,
/// )
/// .expect("valid candidate JSON");
/// assert_eq!(candidate.id.as_deref(), Some("c-1"));
/// assert_eq!(candidate.experience_years, 0);
/// assert!(candidate.resume_text.is_empty());
/// assert_eq!(candidate.field("name"), Some(&serde_json::json!("Ada")));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateProfile {
    /// Identifier assigned by the candidate store, if any.
    pub id: Option<String>,
    /// Declared skills, compared case-insensitively.
    pub skills: Vec<String>,
    /// Years of professional experience.
    pub experience_years: u32,
    /// Free-text resume body.
    pub resume_text: String,
    /// Remaining fields of the source document, untouched.
    pub extra: Map<String, Value>,
    provenance: Provenance,
}

impl CandidateProfile {
    /// Construct an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier while returning `self` for chaining.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Replace the skill list while returning `self` for chaining.
    ///
    /// # Examples
    /// ```
    /// use talent_core::CandidateProfile;
    ///
    /// let candidate = CandidateProfile::new()
    ///     .with_skills(["Python", "Docker"])
    ///     .with_experience(4);
    /// assert_eq!(candidate.skills, vec!["Python", "Docker"]);
    /// assert_eq!(candidate.experience_years, 4);
    /// ```
    #[must_use]
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set the years of experience while returning `self` for chaining.
    #[must_use]
    pub const fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    /// Set the resume text while returning `self` for chaining.
    #[must_use]
    pub fn with_resume_text(mut self, text: impl Into<String>) -> Self {
        self.resume_text = text.into();
        self
    }

    /// Return a pass-through field of the source document.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl CandidateProfile {
    fn from_document(mut document: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut provenance = Provenance::default();
        let id = provenance.take(&mut document, ID_FIELD, Some(STORE_ID_FIELD))?;
        let skills = provenance.take(&mut document, SKILLS_FIELD, None)?;
        let experience_years = provenance.take(&mut document, EXPERIENCE_FIELD, None)?;
        let resume_text =
            provenance.take(&mut document, RESUME_FIELD, Some(STORE_RESUME_FIELD))?;
        Ok(Self {
            id,
            skills,
            experience_years,
            resume_text,
            extra: document,
            provenance,
        })
    }

    fn to_document(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut document = self.extra.clone();
        self.provenance.restore(&mut document, ID_FIELD, &self.id)?;
        self.provenance
            .restore(&mut document, SKILLS_FIELD, &self.skills)?;
        self.provenance
            .restore(&mut document, EXPERIENCE_FIELD, &self.experience_years)?;
        self.provenance
            .restore(&mut document, RESUME_FIELD, &self.resume_text)?;
        Ok(document)
    }
}

impl<'de> Deserialize<'de> for CandidateProfile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_document(document).map_err(D::Error::custom)
    }
}

impl Serialize for CandidateProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
