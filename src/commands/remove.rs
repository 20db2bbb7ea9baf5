//! # Remove Command Implementation
//!
//! Removes a PPA registration. Source files that only register the PPA are
//! deleted, shared source files are rewritten without its lines, and its
//! keyring is deleted unless another registered PPA still points at it.
//!
//! With `--dryrun` nothing is modified; each step is logged instead.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use ppa_utils::config::AptConfig;
use ppa_utils::defaults::DEFAULT_APT_CONFIG;
use ppa_utils::filesystem::RemovalReport;
use ppa_utils::output::{OutputConfig, Status};
use ppa_utils::registry;
use ppa_utils::suggestions;

/// Remove a PPA
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// PPA to remove, as ppa:<owner>/<name>
    #[arg(value_name = "PPA")]
    pub handle: String,

    /// Show what would be removed without changing any file.
    #[arg(short = 'n', long = "dryrun", visible_alias = "dry-run")]
    pub dry_run: bool,

    /// Root of the APT configuration.
    #[arg(long, value_name = "DIR", env = "PPA_APT_CONFIG", default_value = DEFAULT_APT_CONFIG)]
    pub apt_config: PathBuf,
}

/// Execute the `remove` command.
pub fn execute(args: RemoveArgs, out: &OutputConfig) -> Result<()> {
    let config = AptConfig::new(&args.apt_config);
    let report = registry::remove(&config, &args.handle, args.dry_run)
        .map_err(|e| suggestions::explain(e, &args.apt_config))?;

    if report.deleted.is_empty() && report.edited.is_empty() && report.shared_keyrings.is_empty()
    {
        return Ok(());
    }

    print_report(&report, args.dry_run, out);
    Ok(())
}

fn print_report(report: &RemovalReport, dry_run: bool, out: &OutputConfig) {
    let (deleted, edited) = if dry_run {
        (Status::DryRun, Status::DryRun)
    } else {
        (Status::Deleted, Status::Edited)
    };
    let verb = if dry_run { "would " } else { "" };

    for path in &report.deleted {
        println!("{} {verb}delete {}", out.marker(deleted), path.display());
    }
    for path in &report.edited {
        println!("{} {verb}edit {}", out.marker(edited), path.display());
    }
    for path in &report.shared_keyrings {
        println!("{} keep {}", out.marker(Status::Kept), path.display());
    }
}
