use std::path::PathBuf;

use clap::Args;

use super::parse::parse_unit_weight;

#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// Rubric or kit document (JSON or YAML); reads stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Weight assumed for criteria with a missing or unreadable weight
    #[arg(long, value_parser = parse_unit_weight)]
    pub missing_weight: Option<f64>,

    /// With --format json, emit the whole kit rather than only the rubric
    #[arg(long)]
    pub kit: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Rubric or kit document (JSON or YAML); reads stdin when omitted or `-`
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Rubric or kit document (JSON or YAML); reads stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// JSON object of per-criterion scores in [0, 1], or a judge response with a `scores` object
    #[arg(long)]
    pub scores: PathBuf,

    /// Weight assumed for criteria with a missing or unreadable weight
    #[arg(long, value_parser = parse_unit_weight)]
    pub missing_weight: Option<f64>,
}
