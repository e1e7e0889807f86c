//! `kitrubric check`

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use kitrubric_core::criterion::{Criterion, RawWeight};
use kitrubric_core::error::{KitError, Result};
use kitrubric_core::kit::InterviewKit;
use kitrubric_core::normalize::validate;

/// Take weights exactly as written; anything that is not a number fails the check
fn literal_rubric(kit: &InterviewKit) -> Result<Vec<Criterion>> {
    kit.rubric
        .iter()
        .map(|c| match &c.weight {
            RawWeight::Number(w) => Ok(Criterion::new(c.label.clone(), *w)),
            RawWeight::Missing => Err(KitError::invalid_rubric(format!(
                "weight for '{}' is missing",
                c.label
            ))),
            RawWeight::Invalid(raw) => Err(KitError::invalid_rubric(format!(
                "weight for '{}' is not a number: {}",
                c.label, raw
            ))),
        })
        .collect()
}

pub fn execute(cli: &Cli, kit: &InterviewKit) -> Result<()> {
    let rubric = literal_rubric(kit)?;
    validate(&rubric)?;

    let total: f64 = rubric.iter().map(|c| c.weight).sum();
    debug!(criteria = rubric.len(), total, "check");

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "valid": true,
                "criteria": rubric.len(),
                "total": total,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "ok: {} criteria, weights sum to {:.2}",
                    rubric.len(),
                    total
                );
            }
        }
    }

    Ok(())
}
