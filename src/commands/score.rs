//! `kitrubric score`

use std::collections::HashMap;

use tracing::warn;

use crate::cli::{Cli, OutputFormat};
use kitrubric_core::config::NormalizerConfig;
use kitrubric_core::error::Result;
use kitrubric_core::kit::InterviewKit;
use kitrubric_core::score::weighted_score;

pub fn execute(
    cli: &Cli,
    config: &NormalizerConfig,
    kit: &InterviewKit,
    scores: &HashMap<String, f64>,
) -> Result<()> {
    let rubric = kit.normalized_rubric(config);
    let result = weighted_score(&rubric, scores)?;

    for label in &result.unused {
        warn!(label = %label, "score given for unknown criterion");
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                let width = result
                    .breakdown
                    .iter()
                    .map(|b| b.label.chars().count())
                    .max()
                    .unwrap_or(0);
                for b in &result.breakdown {
                    println!(
                        "{:<width$}  {:.2} x {:.2} = {:.3}",
                        b.label, b.weight, b.score, b.contribution
                    );
                }
                for label in &result.unused {
                    eprintln!("warning: no criterion named '{}'", label);
                }
            }
            println!("Weighted score: {:.3}", result.total);
        }
    }

    Ok(())
}
