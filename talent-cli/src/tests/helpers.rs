//! Test helpers writing record fixtures into a temporary data directory.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture");
}

/// A data directory holding `candidates.json` and `jobs.json`.
#[derive(Debug)]
pub(super) struct DataDir {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl DataDir {
    /// Create an empty data directory.
    pub(super) fn empty() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    /// Create a data directory populated with the sample records.
    pub(super) fn with_samples() -> Self {
        let dir = Self::empty();
        dir.write_json("candidates.json", &sample_candidates());
        dir.write_json("jobs.json", &sample_jobs());
        dir
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_json(&self, name: &str, value: &Value) {
        let payload = serde_json::to_vec_pretty(value).expect("serialise fixture");
        write_utf8(&self.path(name), &payload);
    }
}

pub(super) fn sample_candidates() -> Value {
    json!([
        {
            "_id": "c-ada",
            "name": "Ada",
            "email": "ada@example.com",
            "skills": ["Python", "ML", "Docker"],
            "experience_years": 5,
            "cv_text": "Experienced Python developer with ML expertise"
        },
        {
            "_id": "c-bob",
            "name": "Bob",
            "email": "bob@example.com",
            "skills": ["Java"],
            "experience_years": 1,
            "cv_text": "Java backend developer"
        },
        {
            "_id": "c-cy",
            "name": "Cy",
            "skills": null,
            "experience_years": null
        }
    ])
}

pub(super) fn sample_jobs() -> Value {
    json!([
        {
            "_id": "j-ml",
            "title": "ML Engineer",
            "company": "Acme",
            "location": "Remote",
            "remote": true,
            "required_skills": ["Python", "ML"],
            "min_experience": 3,
            "description": "Looking for Python ML engineer",
            "status": "active"
        },
        {
            "_id": "j-closed",
            "title": "Data Analyst",
            "company": "Acme",
            "required_skills": ["SQL"],
            "status": "closed"
        },
        {
            "_id": "j-java",
            "title": "Java Developer",
            "company": "Initech",
            "required_skills": ["Java"],
            "min_experience": 2,
            "description": "Java services team"
        }
    ])
}
