//! `kitrubric normalize`

use crate::cli::{Cli, OutputFormat};
use kitrubric_core::config::NormalizerConfig;
use kitrubric_core::error::Result;
use kitrubric_core::format::format_rubric_human;
use kitrubric_core::kit::InterviewKit;

pub fn execute(
    cli: &Cli,
    config: &NormalizerConfig,
    kit: &InterviewKit,
    emit_kit: bool,
) -> Result<()> {
    let rubric = kit.normalized_rubric(config);

    match cli.format {
        OutputFormat::Json => {
            let json = if emit_kit {
                kit.to_json_with_rubric(&rubric)
            } else {
                serde_json::json!(rubric)
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if rubric.is_empty() {
                if !cli.quiet {
                    println!("Rubric is empty");
                }
            } else {
                println!("{}", format_rubric_human(&rubric));
            }
        }
    }

    Ok(())
}
