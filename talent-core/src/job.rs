//! Job postings as supplied by the calling layer.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::record::{ID_FIELD, Provenance, STORE_ID_FIELD};

const REQUIRED_SKILLS_FIELD: &str = "required_skills";
const NICE_TO_HAVE_FIELD: &str = "nice_to_have_skills";
const MIN_EXPERIENCE_FIELD: &str = "min_experience";
const MAX_EXPERIENCE_FIELD: &str = "max_experience";
const DESCRIPTION_FIELD: &str = "description_text";
const STORE_DESCRIPTION_FIELD: &str = "description";
const STATUS_FIELD: &str = "status";
const ACTIVE_STATUS: &str = "active";

/// An open position and its requirements.
///
/// `required_skills`, `nice_to_have_skills`, `min_experience`,
/// `max_experience` and `description_text` drive scoring. The job store
/// names the description `description` and the identifier `_id`; both
/// spellings are accepted, with `_id` preferred when both identifiers are
/// present. All other fields are preserved in [`JobPosting::extra`], and
/// serializing a deserialized posting writes its source document back
/// unchanged.
///
/// # Examples
///
/// ```
/// use talent_core::JobPosting;
///
/// let job = JobPosting::new()
///     .with_required_skills(["Python", "ML"])
///     .with_experience_range(3, Some(8))
///     .with_description_text("Looking for Python ML engineer");
/// assert_eq!(job.min_experience, 3);
/// assert_eq!(job.max_experience, Some(8));
/// assert!(job.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobPosting {
    /// Identifier assigned by the job store, if any.
    pub id: Option<String>,
    /// Skills every applicant is expected to have.
    pub required_skills: Vec<String>,
    /// Skills that earn a bonus when present.
    pub nice_to_have_skills: Vec<String>,
    /// Minimum years of experience.
    pub min_experience: u32,
    /// Maximum years of experience; `None` leaves the range unbounded.
    pub max_experience: Option<u32>,
    /// Free-text job description.
    pub description_text: String,
    /// Remaining fields of the source document, untouched.
    pub extra: Map<String, Value>,
    provenance: Provenance,
}

impl JobPosting {
    /// Construct an empty posting.
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

    /// Replace the required skills while returning `self` for chaining.
    #[must_use]
    pub fn with_required_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the nice-to-have skills while returning `self` for chaining.
    #[must_use]
    pub fn with_nice_to_have_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nice_to_have_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set the experience range while returning `self` for chaining.
    #[must_use]
    pub const fn with_experience_range(mut self, min: u32, max: Option<u32>) -> Self {
        self.min_experience = min;
        self.max_experience = max;
        self
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description_text(mut self, text: impl Into<String>) -> Self {
        self.description_text = text.into();
        self
    }

    /// Return a pass-through field of the source document.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Report whether the posting is open for recommendations.
    ///
    /// Postings without a `status` field count as active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.field(STATUS_FIELD)
            .is_none_or(|status| status.as_str() == Some(ACTIVE_STATUS))
    }
}

impl JobPosting {
    fn from_document(mut document: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut provenance = Provenance::default();
        let id = provenance.take(&mut document, ID_FIELD, Some(STORE_ID_FIELD))?;
        let required_skills = provenance.take(&mut document, REQUIRED_SKILLS_FIELD, None)?;
        let nice_to_have_skills = provenance.take(&mut document, NICE_TO_HAVE_FIELD, None)?;
        let min_experience = provenance.take(&mut document, MIN_EXPERIENCE_FIELD, None)?;
        let max_experience = provenance.take(&mut document, MAX_EXPERIENCE_FIELD, None)?;
        let description_text = provenance.take(
            &mut document,
            DESCRIPTION_FIELD,
            Some(STORE_DESCRIPTION_FIELD),
        )?;
        Ok(Self {
            id,
            required_skills,
            nice_to_have_skills,
            min_experience,
            max_experience,
            description_text,
            extra: document,
            provenance,
        })
    }

    fn to_document(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut document = self.extra.clone();
        let origin = &self.provenance;
        origin.restore(&mut document, ID_FIELD, &self.id)?;
        origin.restore(&mut document, REQUIRED_SKILLS_FIELD, &self.required_skills)?;
        origin.restore(&mut document, NICE_TO_HAVE_FIELD, &self.nice_to_have_skills)?;
        origin.restore(&mut document, MIN_EXPERIENCE_FIELD, &self.min_experience)?;
        origin.restore(&mut document, MAX_EXPERIENCE_FIELD, &self.max_experience)?;
        origin.restore(&mut document, DESCRIPTION_FIELD, &self.description_text)?;
        Ok(document)
    }
}

impl<'de> Deserialize<'de> for JobPosting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_document(document).map_err(D::Error::custom)
    }
}

impl Serialize for JobPosting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn missing_fields_take_defaults() {
        let job: JobPosting =
            serde_json::from_value(json!({"title": "SRE"})).expect("valid record json");
        assert!(job.required_skills.is_empty());
        assert!(job.nice_to_have_skills.is_empty());
        assert_eq!(job.min_experience, 0);
        assert!(job.max_experience.is_none());
        assert!(job.description_text.is_empty());
        assert_eq!(job.field("title"), Some(&json!("SRE")));
    }

    #[rstest]
    fn store_field_names_are_accepted() {
        let job: JobPosting = serde_json::from_value(json!({
            "_id": "j-1",
            "description": "Build pipelines",
            "max_experience": null,
        }))
        .expect("valid record json");
        assert_eq!(job.id.as_deref(), Some("j-1"));
        assert_eq!(job.description_text, "Build pipelines");
        assert!(job.max_experience.is_none());
    }

    #[rstest]
    #[case(json!({}), true)]
    #[case(json!({"status": "active"}), true)]
    #[case(json!({"status": "closed"}), false)]
    #[case(json!({"status": "draft"}), false)]
    #[case(json!({"status": 1}), false)]
    fn activity_follows_status(#[case] value: Value, #[case] expected: bool) {
        let job: JobPosting = serde_json::from_value(value).expect("valid record json");
        assert_eq!(job.is_active(), expected);
    }

    #[rstest]
    #[case(json!({"_id": "j-1", "description": "Rust", "max_experience": null}))]
    #[case(json!({"_id": "j-2", "id": "legacy", "title": "SRE", "status": "closed"}))]
    #[case(json!({
        "id": "j-3",
        "required_skills": ["Rust"],
        "min_experience": 2,
        "max_experience": 6,
        "description_text": "Systems work",
    }))]
    fn store_documents_survive_a_round_trip(#[case] source: Value) {
        let job: JobPosting = serde_json::from_value(source.clone()).expect("valid record json");
        assert_eq!(serde_json::to_value(&job).expect("record serialises"), source);
    }

    #[rstest]
    fn store_id_wins_over_plain_id() {
        let job: JobPosting =
            serde_json::from_str(r#"{"_id": "a", "id": "b"}"#).expect("valid record json");
        assert_eq!(job.id.as_deref(), Some("a"));
        assert_eq!(job.field("id"), Some(&json!("b")));
    }
}
