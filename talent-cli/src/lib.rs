//! Command-line interface for the talent matching engine.
//!
//! Each subcommand loads candidate and job records from JSON files, scores
//! them with [`MatchingEngine`] and prints a JSON report to stdout. Options
//! layer CLI flags over `TALENT_*` environment variables over configuration
//! files.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use talent_core::Matcher;
use talent_scorer::MatchingEngine;

mod batch;
mod error;
mod input;
mod rank;
mod recommend;
mod score;

pub use error::CliError;

use batch::BatchArgs;
use rank::RankArgs;
use recommend::RecommendArgs;
use score::ScoreArgs;

const ARG_DATA_DIR: &str = "data-dir";
const ARG_CANDIDATES: &str = "candidates";
const ARG_JOBS: &str = "jobs";
const ARG_CANDIDATE_ID: &str = "candidate-id";
const ARG_JOB_ID: &str = "job-id";
const ARG_TOP_N: &str = "top-n";
const ARG_MIN_SCORE: &str = "min-score";
const ENV_SCORE_CANDIDATE_ID: &str = "TALENT_CMDS_SCORE_CANDIDATE_ID";
const ENV_SCORE_JOB_ID: &str = "TALENT_CMDS_SCORE_JOB_ID";
const ENV_RANK_JOB_ID: &str = "TALENT_CMDS_RANK_JOB_ID";
const ENV_RECOMMEND_CANDIDATE_ID: &str = "TALENT_CMDS_RECOMMEND_CANDIDATE_ID";
const ENV_BATCH_JOB_ID: &str = "TALENT_CMDS_BATCH_JOB_ID";

/// Results kept by `rank` and `recommend` when `--top-n` is unset.
const DEFAULT_TOP_N: usize = 10;
/// Threshold applied by `rank` and `recommend` when `--min-score` is unset.
const DEFAULT_MIN_SCORE: f32 = 0.3;

/// Run the talent CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments or configuration are invalid, an
/// input file cannot be read, a requested record does not exist, or the
/// report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let engine = MatchingEngine::new();
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &engine, &mut stdout)
}

fn dispatch(
    command: Command,
    matcher: &dyn Matcher,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Score(args) => score::run_score_with(args, matcher, writer),
        Command::Rank(args) => rank::run_rank_with(args, matcher, writer),
        Command::Recommend(args) => recommend::run_recommend_with(args, matcher, writer),
        Command::Batch(args) => batch::run_batch_with(args, matcher, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "talent",
    about = "Score and rank candidates against job postings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one candidate against one job.
    Score(ScoreArgs),
    /// Rank every candidate for a job.
    Rank(RankArgs),
    /// Recommend active jobs for a candidate.
    Recommend(RecommendArgs),
    /// Score a list of candidates against a job.
    Batch(BatchArgs),
}

fn resolve_min_score(min_score: Option<f32>) -> Result<f32, CliError> {
    let value = min_score.unwrap_or(DEFAULT_MIN_SCORE);
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CliError::InvalidMinScore { value })
    }
}

#[cfg(test)]
mod tests;
