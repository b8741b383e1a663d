//! Recommend command implementation for the talent CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use talent_core::{JobPosting, MatchScore, Matcher, recommend_jobs};

use crate::input::{DataPaths, find_candidate, write_report};
use crate::{
    ARG_CANDIDATE_ID, ARG_CANDIDATES, ARG_DATA_DIR, ARG_JOBS, ARG_MIN_SCORE, ARG_TOP_N,
    CliError, DEFAULT_TOP_N, ENV_RECOMMEND_CANDIDATE_ID, resolve_min_score,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Score every active job against a candidate and print the \
                 best matches. Jobs whose status is set to anything other \
                 than \"active\" are skipped.",
    about = "Recommend active jobs for a candidate"
)]
#[ortho_config(prefix = "TALENT")]
pub(crate) struct RecommendArgs {
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
    /// Identifier of the candidate to recommend jobs for.
    #[arg(long = ARG_CANDIDATE_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) candidate_id: Option<String>,
    /// Number of jobs to keep (default 10).
    #[arg(long = ARG_TOP_N, value_name = "n")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Lowest total score reported (default 0.3).
    #[arg(long = ARG_MIN_SCORE, value_name = "score")]
    #[serde(default)]
    pub(crate) min_score: Option<f32>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) paths: DataPaths,
    pub(crate) candidate_id: String,
    pub(crate) top_n: usize,
    pub(crate) min_score: f32,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let candidate_id = args.candidate_id.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATE_ID,
            env: ENV_RECOMMEND_CANDIDATE_ID,
        })?;
        Ok(Self {
            paths: DataPaths::resolve(args.data_dir, args.candidates, args.jobs),
            candidate_id,
            top_n: args.top_n.unwrap_or(DEFAULT_TOP_N),
            min_score: resolve_min_score(args.min_score)?,
        })
    }
}

#[derive(Debug, Serialize)]
struct JobRecommendation<'a> {
    job_id: Option<&'a str>,
    title: Option<&'a Value>,
    company: Option<&'a Value>,
    required_skills: &'a [String],
    min_experience: u32,
    location: Option<&'a Value>,
    remote: bool,
    #[serde(flatten)]
    score: MatchScore,
}

impl<'a> JobRecommendation<'a> {
    fn new(job: &'a JobPosting, score: MatchScore) -> Self {
        Self {
            job_id: job.id.as_deref(),
            title: job.field("title"),
            company: job.field("company"),
            required_skills: &job.required_skills,
            min_experience: job.min_experience,
            location: job.field("location"),
            remote: job.field("remote").and_then(Value::as_bool).unwrap_or(false),
            score,
        }
    }
}

/// Best active jobs for a candidate.
#[derive(Debug, Serialize)]
pub(crate) struct RecommendReport<'a> {
    candidate_id: &'a str,
    candidate_name: Option<&'a Value>,
    total_jobs_evaluated: usize,
    recommendations: Vec<JobRecommendation<'a>>,
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    matcher: &dyn Matcher,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.paths.validate_sources()?;
    let candidates = config.paths.load_candidates()?;
    let candidate = find_candidate(&candidates, &config.candidate_id)?;
    let active: Vec<JobPosting> = config
        .paths
        .load_jobs()?
        .into_iter()
        .filter(JobPosting::is_active)
        .collect();

    let recommendations = recommend_jobs(matcher, candidate, &active, config.top_n)
        .filter_min_score(config.min_score)
        .into_iter()
        .map(|entry| JobRecommendation::new(entry.item, entry.score))
        .collect();

    let report = RecommendReport {
        candidate_id: &config.candidate_id,
        candidate_name: candidate.field("name"),
        total_jobs_evaluated: active.len(),
        recommendations,
    };
    write_report(writer, &report)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
