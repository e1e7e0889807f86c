//! Output format handling for kitrubric
//!
//! - human: aligned `label  weight` lines for terminal use
//! - json: stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::criterion::Criterion;
use crate::error::KitError;
use crate::normalize::WEIGHT_DECIMALS;

/// Output format for kitrubric commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(KitError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a rubric as aligned `label  weight` lines
pub fn format_rubric_human(rubric: &[Criterion]) -> String {
    let width = rubric
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0);
    let precision = WEIGHT_DECIMALS as usize;

    rubric
        .iter()
        .map(|c| format!("{:<width$}  {:.precision$}", c.label, c.weight))
        .collect::<Vec<_>>()
        .join("\n")
}
