//! Command implementations for all kitrubric commands

use crate::cli::{CheckArgs, Commands, NormalizeArgs, ScoreArgs};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{check, input, normalize, score};
use kitrubric_core::error::Result;
use kitrubric_core::trace_time;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Normalize(args) => execute_normalize(ctx, args),
            Commands::Check(args) => execute_check(ctx, args),
            Commands::Score(args) => execute_score(ctx, args),
        }
    }
}

fn execute_normalize(ctx: &CommandContext, args: &NormalizeArgs) -> Result<()> {
    let config = ctx.normalizer_config(args.missing_weight)?;
    let kit = input::read_kit(args.file.as_deref())?;
    trace_time!(ctx.start, "read_kit");
    normalize::execute(ctx.cli, &config, &kit, args.kit)
}

fn execute_check(ctx: &CommandContext, args: &CheckArgs) -> Result<()> {
    let kit = input::read_kit(args.file.as_deref())?;
    trace_time!(ctx.start, "read_kit");
    check::execute(ctx.cli, &kit)
}

fn execute_score(ctx: &CommandContext, args: &ScoreArgs) -> Result<()> {
    let config = ctx.normalizer_config(args.missing_weight)?;
    let kit = input::read_kit(args.file.as_deref())?;
    let scores = input::read_scores(&args.scores)?;
    trace_time!(ctx.start, "read_inputs");
    score::execute(ctx.cli, &config, &kit, &scores)
}
