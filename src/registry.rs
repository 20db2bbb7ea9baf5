//! List and remove registered repositories.
//!
//! Both operations start from a fresh scan of `<root>/sources.list.d`; no
//! state is carried between invocations.

use log::{debug, warn};

use crate::config::AptConfig;
use crate::error::{Error, Result};
use crate::filesystem::{FileMutator, RemovalReport};
use crate::keyring::KeyringFingerprints;
use crate::plan::RemovalPlan;
use crate::repository::Repository;
use crate::sources;

/// Returns every repository registered under `config`, in scan order.
pub fn list(config: &AptConfig) -> Result<Vec<Repository>> {
    let sources_dir = config.sources_dir();
    debug!("Scanning {}", sources_dir.display());
    sources::scan(&sources_dir, &KeyringFingerprints::new(config))
}

/// Serializes `repos` as a compact JSON array of records.
pub fn to_json(repos: &[Repository]) -> Result<String> {
    Ok(serde_json::to_string(repos)?)
}

/// Plans the removal of `handle` against the current registrations.
pub fn plan_removal(config: &AptConfig, handle: &str) -> Result<RemovalPlan> {
    // Reject a bad handle before scanning anything.
    Repository::from_short_handle(handle)?;
    let repos = list(config)?;
    RemovalPlan::build(handle, &repos, config)
}

/// Removes `handle` from `config`.
///
/// Every planned step is attempted even if an earlier one fails. A target
/// that is not registered anywhere is not an error: the returned report is
/// empty.
///
/// # Errors
///
/// Returns [`Error::InvalidHandle`] or a scan error before any file is
/// touched, and [`Error::PartialRemoval`] after the fact if any step failed.
pub fn remove(config: &AptConfig, handle: &str, dry_run: bool) -> Result<RemovalReport> {
    let plan = plan_removal(config, handle)?;

    if plan.is_empty() {
        warn!("{} is not installed", plan.target);
        return Ok(RemovalReport::default());
    }

    debug!(
        "Removal plan for {}: delete {:?}, edit {:?}, shared {:?}",
        plan.target, plan.delete, plan.edit, plan.shared_keyrings
    );

    let report = FileMutator::new(dry_run).apply(&plan);
    if report.is_success() {
        return Ok(report);
    }

    Err(Error::PartialRemoval {
        failed: report.failures.len(),
        details: report
            .failures
            .iter()
            .map(|(_, e)| format!("  {e}"))
            .collect(),
    })
}
