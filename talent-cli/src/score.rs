//! Score command implementation for the talent CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use talent_core::{MatchScore, Matcher};

use crate::input::{DataPaths, find_candidate, find_job, write_report};
use crate::{
    ARG_CANDIDATE_ID, ARG_CANDIDATES, ARG_DATA_DIR, ARG_JOB_ID, ARG_JOBS, CliError,
    ENV_SCORE_CANDIDATE_ID, ENV_SCORE_JOB_ID,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score one candidate against one job. Records are read from \
                 JSON arrays of candidates and jobs; paths can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Score one candidate against one job"
)]
#[ortho_config(prefix = "TALENT")]
pub(crate) struct ScoreArgs {
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
    /// Identifier of the candidate to score.
    #[arg(long = ARG_CANDIDATE_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) candidate_id: Option<String>,
    /// Identifier of the job to score against.
    #[arg(long = ARG_JOB_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) job_id: Option<String>,
}

impl ScoreArgs {
    fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) paths: DataPaths,
    pub(crate) candidate_id: String,
    pub(crate) job_id: String,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let candidate_id = args.candidate_id.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATE_ID,
            env: ENV_SCORE_CANDIDATE_ID,
        })?;
        let job_id = args.job_id.ok_or(CliError::MissingArgument {
            field: ARG_JOB_ID,
            env: ENV_SCORE_JOB_ID,
        })?;
        Ok(Self {
            paths: DataPaths::resolve(args.data_dir, args.candidates, args.jobs),
            candidate_id,
            job_id,
        })
    }
}

/// Score of one pair, with the names a reviewer needs to read it.
#[derive(Debug, Serialize)]
pub(crate) struct ScoreReport<'a> {
    candidate_id: &'a str,
    candidate_name: Option<&'a Value>,
    job_id: &'a str,
    job_title: Option<&'a Value>,
    #[serde(flatten)]
    score: MatchScore,
}

pub(crate) fn run_score_with(
    args: ScoreArgs,
    matcher: &dyn Matcher,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.paths.validate_sources()?;
    let candidates = config.paths.load_candidates()?;
    let jobs = config.paths.load_jobs()?;
    let candidate = find_candidate(&candidates, &config.candidate_id)?;
    let job = find_job(&jobs, &config.job_id)?;

    let report = ScoreReport {
        candidate_id: &config.candidate_id,
        candidate_name: candidate.field("name"),
        job_id: &config.job_id,
        job_title: job.field("title"),
        score: matcher.score(candidate, job),
    };
    write_report(writer, &report)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
