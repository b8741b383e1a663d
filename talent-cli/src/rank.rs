//! Rank command implementation for the talent CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use talent_core::{MatchScore, Matcher, rank_candidates};

use crate::input::{DataPaths, find_job, write_report};
use crate::{
    ARG_CANDIDATES, ARG_DATA_DIR, ARG_JOB_ID, ARG_JOBS, ARG_MIN_SCORE, ARG_TOP_N, CliError,
    DEFAULT_TOP_N, ENV_RANK_JOB_ID, resolve_min_score,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Score every candidate against a job and print the best \
                 matches. Matches below the minimum score are dropped after \
                 the top-N cut.",
    about = "Rank every candidate for a job"
)]
#[ortho_config(prefix = "TALENT")]
pub(crate) struct RankArgs {
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
    /// Identifier of the job to rank candidates for.
    #[arg(long = ARG_JOB_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) job_id: Option<String>,
    /// Number of candidates to keep (default 10).
    #[arg(long = ARG_TOP_N, value_name = "n")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Lowest total score reported (default 0.3).
    #[arg(long = ARG_MIN_SCORE, value_name = "score")]
    #[serde(default)]
    pub(crate) min_score: Option<f32>,
}

impl RankArgs {
    fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) paths: DataPaths,
    pub(crate) job_id: String,
    pub(crate) top_n: usize,
    pub(crate) min_score: f32,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let job_id = args.job_id.ok_or(CliError::MissingArgument {
            field: ARG_JOB_ID,
            env: ENV_RANK_JOB_ID,
        })?;
        Ok(Self {
            paths: DataPaths::resolve(args.data_dir, args.candidates, args.jobs),
            job_id,
            top_n: args.top_n.unwrap_or(DEFAULT_TOP_N),
            min_score: resolve_min_score(args.min_score)?,
        })
    }
}

#[derive(Debug, Serialize)]
struct CandidateRecommendation<'a> {
    candidate_id: Option<&'a str>,
    name: Option<&'a Value>,
    email: Option<&'a Value>,
    skills: &'a [String],
    experience_years: u32,
    #[serde(flatten)]
    score: MatchScore,
}

/// Best candidates for a job.
#[derive(Debug, Serialize)]
pub(crate) struct RankReport<'a> {
    job_id: &'a str,
    job_title: Option<&'a Value>,
    total_candidates_evaluated: usize,
    recommendations: Vec<CandidateRecommendation<'a>>,
}

pub(crate) fn run_rank_with(
    args: RankArgs,
    matcher: &dyn Matcher,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.paths.validate_sources()?;
    let candidates = config.paths.load_candidates()?;
    let jobs = config.paths.load_jobs()?;
    let job = find_job(&jobs, &config.job_id)?;

    let recommendations = rank_candidates(matcher, &candidates, job, config.top_n)
        .filter_min_score(config.min_score)
        .into_iter()
        .map(|entry| CandidateRecommendation {
            candidate_id: entry.item.id.as_deref(),
            name: entry.item.field("name"),
            email: entry.item.field("email"),
            skills: &entry.item.skills,
            experience_years: entry.item.experience_years,
            score: entry.score,
        })
        .collect();

    let report = RankReport {
        job_id: &config.job_id,
        job_title: job.field("title"),
        total_candidates_evaluated: candidates.len(),
        recommendations,
    };
    write_report(writer, &report)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
