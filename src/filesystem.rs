//! File mutations for removing a repository.
//!
//! [`FileMutator`] executes a [`RemovalPlan`]: whole files are deleted, and
//! shared source files are rewritten without the target's lines. In dry-run
//! mode every operation only logs what it would do.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::plan::RemovalPlan;
use crate::repository::Repository;

/// Outcome of applying a [`RemovalPlan`].
#[derive(Debug, Default)]
pub struct RemovalReport {
    /// Files deleted (or that would be, under dry-run).
    pub deleted: Vec<PathBuf>,
    /// Source files rewritten (or that would be, under dry-run).
    pub edited: Vec<PathBuf>,
    /// Keyrings left in place because other repositories use them.
    pub shared_keyrings: Vec<PathBuf>,
    /// Operations that failed, with their error.
    pub failures: Vec<(PathBuf, Error)>,
}

impl RemovalReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Deletes and edits files, or only logs the intent under dry-run.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileMutator {
    dry_run: bool,
}

impl FileMutator {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Removes `path`. Returns `false` when there was nothing to remove.
    pub fn delete_file(&self, path: &Path) -> Result<bool> {
        if self.dry_run {
            info!("[dryrun] deleting {}", path.display());
            return Ok(true);
        }

        match fs::remove_file(path) {
            Ok(()) => {
                debug!("Deleted {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("{} does not exist, skipping", path.display());
                Ok(false)
            }
            Err(e) => Err(Error::file("delete", path, e)),
        }
    }

    /// Rewrites `path` without the lines mentioning `target`'s URL.
    ///
    /// A line is dropped when it contains the URL as a substring, under
    /// either `https://` or `http://`. The new
    /// content is written to a temporary file in the same directory, given
    /// the original permissions and renamed over the original. Returns the
    /// number of lines dropped.
    pub fn edit_file(&self, path: &Path, target: &Repository) -> Result<usize> {
        if self.dry_run {
            info!("[dryrun] removing PPA line from file: {}", path.display());
            return Ok(0);
        }

        let content = fs::read_to_string(path).map_err(|e| Error::file("read", path, e))?;

        let mut kept = String::with_capacity(content.len());
        let mut dropped = 0;
        for line in content.split_inclusive('\n') {
            if target.mentioned_in(line) {
                dropped += 1;
            } else {
                kept.push_str(line);
            }
        }

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|e| Error::file("create temp file in", dir, e))?;
        tmp.write_all(kept.as_bytes())
            .map_err(|e| Error::file("write", tmp.path().to_path_buf(), e))?;

        let permissions = fs::metadata(path)
            .map_err(|e| Error::file("stat", path, e))?
            .permissions();
        fs::set_permissions(tmp.path(), permissions)
            .map_err(|e| Error::file("set permissions on", tmp.path().to_path_buf(), e))?;

        tmp.persist(path)
            .map_err(|e| Error::file("replace", path, e.error))?;

        debug!(
            "Removed {} line(s) for {} from {}",
            dropped,
            target,
            path.display()
        );
        Ok(dropped)
    }

    /// Executes every step of `plan`, continuing past failures.
    ///
    /// Source files are edited first, then files are deleted. Each shared
    /// keyring is reported with a warning.
    pub fn apply(&self, plan: &RemovalPlan) -> RemovalReport {
        let mut report = RemovalReport::default();

        for path in &plan.edit {
            match self.edit_file(path, &plan.target) {
                Ok(_) => report.edited.push(path.clone()),
                Err(e) => report.failures.push((path.clone(), e)),
            }
        }

        for path in &plan.delete {
            match self.delete_file(path) {
                Ok(true) => report.deleted.push(path.clone()),
                Ok(false) => {}
                Err(e) => report.failures.push((path.clone(), e)),
            }
        }

        for path in &plan.shared_keyrings {
            warn!(
                "not removing keyring because it's used by another PPA: {}",
                path.display()
            );
            report.shared_keyrings.push(path.clone());
        }

        report
    }
}
