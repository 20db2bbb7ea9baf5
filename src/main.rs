//! # PPA CLI
//!
//! This is the binary entry point for the `ppa` command-line tool.
//!
//! It parses arguments with `clap`, sets up logging and dispatches to the
//! subcommand. All PPA logic lives in the `ppa_utils` library crate; the
//! binary only translates its results and errors into terminal output.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
