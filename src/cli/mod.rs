//! CLI argument parsing for kitrubric
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CheckArgs, NormalizeArgs, ScoreArgs};
pub use kitrubric_core::format::OutputFormat;
use parse::parse_format;

/// Kitrubric - normalize weighted scoring rubrics for interview kits
#[derive(Parser, Debug)]
#[command(name = "kitrubric")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: ./kitrubric.toml when present)
    #[arg(long, global = true, env = "KITRUBRIC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (error, warn, info, debug, trace, or a full directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize rubric weights so they sum to 1.0
    Normalize(NormalizeArgs),

    /// Verify a rubric already has valid weights, without changing it
    Check(CheckArgs),

    /// Compute a weighted score from per-criterion scores
    Score(ScoreArgs),
}
