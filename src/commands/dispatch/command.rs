//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use kitrubric_core::config::{KitConfig, NormalizerConfig};
use kitrubric_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Resolve normalizer settings from the config file and a CLI override
    pub fn normalizer_config(&self, missing_weight: Option<f64>) -> Result<NormalizerConfig> {
        let config = KitConfig::discover(self.cli.config.as_deref(), self.root)?;
        debug!(elapsed = ?self.start.elapsed(), "load_config");

        let normalizer = match missing_weight {
            Some(weight) => config.normalizer.with_missing_weight(weight),
            None => config.normalizer,
        };
        normalizer.validate()?;
        Ok(normalizer)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("kitrubric {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Normalize weighted scoring rubrics for interview kits.");
        println!();
        println!("Run `kitrubric --help` for usage information.");
        Ok(())
    }
}
