//! Batch command implementation for the talent CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use talent_core::{MatchScore, Matcher, batch_match};

use crate::input::{DataPaths, find_job, index_candidates, write_report};
use crate::{ARG_CANDIDATES, ARG_DATA_DIR, ARG_JOB_ID, ARG_JOBS, CliError, ENV_BATCH_JOB_ID};

/// CLI arguments for the `batch` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "batch",
    long_about = "Score the listed candidates against a job, best first. \
                 Identifiers missing from the candidate records are skipped \
                 and no top-N cut or minimum score is applied.",
    about = "Score a list of candidates against a job"
)]
#[ortho_config(prefix = "TALENT")]
pub(crate) struct BatchArgs {
    /// Identifiers of the candidates to score.
    #[arg(value_name = "candidate-id")]
    #[serde(default)]
    pub(crate) candidate_ids: Vec<String>,
    /// Directory holding `candidates.json` and `jobs.json`.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the candidate records.
    #[arg(long = ARG_CANDIDATES, value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Override the path to the job records.
    #[arg(long = ARG_JOBS, value_name = "path")]
    #[serde(default)]
    pub(crate) jobs: Option<Utf8PathBuf>,
    /// Identifier of the job to score against.
    #[arg(long = ARG_JOB_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) job_id: Option<String>,
}

impl BatchArgs {
    fn into_config(self) -> Result<BatchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        BatchConfig::try_from(merged)
    }
}

/// Resolved `batch` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BatchConfig {
    pub(crate) paths: DataPaths,
    pub(crate) job_id: String,
    pub(crate) candidate_ids: Vec<String>,
}

impl TryFrom<BatchArgs> for BatchConfig {
    type Error = CliError;

    fn try_from(args: BatchArgs) -> Result<Self, Self::Error> {
        let job_id = args.job_id.ok_or(CliError::MissingArgument {
            field: ARG_JOB_ID,
            env: ENV_BATCH_JOB_ID,
        })?;
        Ok(Self {
            paths: DataPaths::resolve(args.data_dir, args.candidates, args.jobs),
            job_id,
            candidate_ids: args.candidate_ids,
        })
    }
}

#[derive(Debug, Serialize)]
struct BatchResult<'a> {
    candidate_id: String,
    name: Option<&'a Value>,
    #[serde(flatten)]
    score: MatchScore,
}

/// Scores for the resolvable candidates, best first.
#[derive(Debug, Serialize)]
pub(crate) struct BatchReport<'a> {
    job_id: &'a str,
    job_title: Option<&'a Value>,
    total_evaluated: usize,
    results: Vec<BatchResult<'a>>,
}

pub(crate) fn run_batch_with(
    args: BatchArgs,
    matcher: &dyn Matcher,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.paths.validate_sources()?;
    let candidates = index_candidates(config.paths.load_candidates()?);
    let jobs = config.paths.load_jobs()?;
    let job = find_job(&jobs, &config.job_id)?;

    let results: Vec<BatchResult<'_>> =
        batch_match(matcher, &candidates, &config.candidate_ids, job)
            .into_iter()
            .map(|entry| BatchResult {
                name: entry.item.candidate.field("name"),
                candidate_id: entry.item.candidate_id,
                score: entry.score,
            })
            .collect();

    let report = BatchReport {
        job_id: &config.job_id,
        job_title: job.field("title"),
        total_evaluated: results.len(),
        results,
    };
    write_report(writer, &report)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<BatchConfig, CliError> {
    let merged = BatchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    BatchConfig::try_from(merged)
}
