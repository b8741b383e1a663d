//! Loading candidate and job records from disk.
//!
//! Record files are JSON arrays of objects, opened through `cap-std` with
//! ambient authority.

use std::collections::HashMap;
use std::io::{self, BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use serde::Serialize;
use serde::de::DeserializeOwned;
use talent_core::{CandidateProfile, CandidateSource, JobPosting, JobSource};

use crate::{ARG_CANDIDATES, ARG_JOBS, CliError};

/// File name looked up in the data directory when `--candidates` is unset.
pub(crate) const DEFAULT_CANDIDATES_FILE: &str = "candidates.json";
/// File name looked up in the data directory when `--jobs` is unset.
pub(crate) const DEFAULT_JOBS_FILE: &str = "jobs.json";

/// Resolved locations of the two record files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DataPaths {
    /// JSON array of candidate records.
    pub(crate) candidates: Utf8PathBuf,
    /// JSON array of job records.
    pub(crate) jobs: Utf8PathBuf,
}

impl DataPaths {
    /// Resolve explicit paths, falling back to default file names inside
    /// `data_dir` (or the working directory).
    pub(crate) fn resolve(
        data_dir: Option<Utf8PathBuf>,
        candidates: Option<Utf8PathBuf>,
        jobs: Option<Utf8PathBuf>,
    ) -> Self {
        let root = data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        Self {
            candidates: candidates.unwrap_or_else(|| root.join(DEFAULT_CANDIDATES_FILE)),
            jobs: jobs.unwrap_or_else(|| root.join(DEFAULT_JOBS_FILE)),
        }
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.candidates, ARG_CANDIDATES)?;
        require_existing(&self.jobs, ARG_JOBS)?;
        Ok(())
    }

    pub(crate) fn load_candidates(&self) -> Result<Vec<CandidateProfile>, CliError> {
        load_records(&self.candidates, ARG_CANDIDATES)
    }

    pub(crate) fn load_jobs(&self) -> Result<Vec<JobPosting>, CliError> {
        load_records(&self.jobs, ARG_JOBS)
    }
}

fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Decode a JSON array of records from `path`.
pub(crate) fn load_records<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<Vec<T>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRecords {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<T> = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        CliError::ParseRecords {
            field,
            path: path.to_path_buf(),
            source,
        }
    })?;
    log::debug!("loaded {} {field} records from {path}", records.len());
    Ok(records)
}

pub(crate) fn find_candidate<'a, S>(
    candidates: &'a S,
    id: &str,
) -> Result<&'a CandidateProfile, CliError>
where
    S: CandidateSource + ?Sized,
{
    candidates
        .candidate(id)
        .ok_or_else(|| CliError::CandidateNotFound { id: id.to_owned() })
}

pub(crate) fn find_job<'a, S>(jobs: &'a S, id: &str) -> Result<&'a JobPosting, CliError>
where
    S: JobSource + ?Sized,
{
    jobs.job(id)
        .ok_or_else(|| CliError::JobNotFound { id: id.to_owned() })
}

/// Key candidates by identifier for repeated lookups.
///
/// Profiles without an identifier cannot be requested and are dropped. When
/// an identifier repeats, the first profile wins, as it does for a slice
/// scan.
pub(crate) fn index_candidates(
    candidates: Vec<CandidateProfile>,
) -> HashMap<String, CandidateProfile> {
    let mut index = HashMap::with_capacity(candidates.len());
    for candidate in candidates {
        if let Some(id) = candidate.id.clone() {
            index.entry(id).or_insert(candidate);
        }
    }
    index
}

/// Write `report` as pretty-printed JSON followed by a newline.
pub(crate) fn write_report<R: Serialize>(
    writer: &mut dyn Write,
    report: &R,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}
