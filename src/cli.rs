//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use ppa_utils::output::{ColorChoice, OutputConfig};

use crate::commands;

/// ppa - Install, list and safely remove Launchpad PPAs
#[derive(Parser, Debug)]
#[command(name = "ppa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", value_enum, default_value = "auto")]
    color: ColorChoice,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download a PPA's signing key and register the PPA
    Install(commands::install::InstallArgs),

    /// List registered PPAs
    List(commands::list::ListArgs),

    /// Remove a PPA, keeping keyrings other PPAs still use
    Remove(commands::remove::RemoveArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let out = OutputConfig::from_choice(self.color);

        match self.command {
            Commands::Install(args) => commands::install::execute(args, &out),
            Commands::List(args) => commands::list::execute(args),
            Commands::Remove(args) => commands::remove::execute(args, &out),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Sends log records to stderr. `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
