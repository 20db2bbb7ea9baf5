//! # Removal Planning
//!
//! This module decides what happens to every file involved in removing a
//! PPA. It works in two steps.
//!
//! 1. **Multiplicity** ([`ResourceUsage::tally`]): count how many registered
//!    repositories reference each source file and each keyring file, and
//!    flag the files referenced by the removal target.
//! 2. **Decision** ([`decide`]): classify each file from its count and flag.
//!
//! | implicated | references | source file | keyring file |
//! |------------|------------|-------------|--------------|
//! | no         | any        | untouched   | untouched    |
//! | yes        | 1          | delete      | delete       |
//! | yes        | > 1        | edit        | keep, warn   |
//!
//! A keyring referenced by another repository is never deleted: doing so
//! would break signature checks for that repository.
//!
//! Counts are derived from a fresh scan on every invocation and never
//! stored; the files on disk are the only source of truth.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::AptConfig;
use crate::error::Result;
use crate::repository::Repository;

/// How many records depend on a file, and whether the target is one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    /// Number of repository records referencing the file.
    pub references: usize,
    /// Whether a record matching the removal target references the file.
    pub implicated: bool,
}

impl Usage {
    fn record(&mut self, implicated: bool) {
        self.references += 1;
        self.implicated |= implicated;
    }
}

/// Kind of file a [`Usage`] entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    SourceFile,
    Keyring,
}

/// What to do with a file when removing the target repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The target does not use the file.
    Untouched,
    /// Only the target uses the file.
    Delete,
    /// The file also registers other repositories; drop the target's lines.
    Edit,
    /// The keyring also signs other repositories; leave it and warn.
    KeepShared,
}

/// Applies the decision table to one file.
pub fn decide(kind: ResourceKind, usage: Usage) -> Decision {
    match (usage.implicated, usage.references, kind) {
        (false, _, _) => Decision::Untouched,
        (true, 0 | 1, _) => Decision::Delete,
        (true, _, ResourceKind::SourceFile) => Decision::Edit,
        (true, _, ResourceKind::Keyring) => Decision::KeepShared,
    }
}

/// Per-file reference counts over a set of repository records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceUsage {
    /// Keyed by the path the record was parsed from.
    pub source_files: BTreeMap<PathBuf, Usage>,
    /// Keyed by the keyring path resolved into the configured keyring
    /// directory, so different spellings of one keyring collide.
    pub keyring_files: BTreeMap<PathBuf, Usage>,
}

impl ResourceUsage {
    /// Counts references to every file in `repos`.
    ///
    /// Files referenced by a record whose short handle equals `target` are
    /// flagged as implicated. Records without a `signed-by` keyring add no
    /// keyring entry.
    pub fn tally(repos: &[Repository], target: &str, config: &AptConfig) -> Self {
        let mut usage = Self::default();

        for repo in repos {
            let implicated = repo.matches(target);

            usage
                .source_files
                .entry(repo.source_file.clone())
                .or_default()
                .record(implicated);

            if let Some(keyring) = config.resolve_keyring(&repo.keyring_file) {
                usage
                    .keyring_files
                    .entry(keyring)
                    .or_default()
                    .record(implicated);
            }
        }

        usage
    }
}

/// The file operations needed to remove one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalPlan {
    /// Repository being removed (owner and name only).
    pub target: Repository,
    /// Files to delete outright, source files first, then keyrings.
    pub delete: Vec<PathBuf>,
    /// Source files to rewrite without the target's lines.
    pub edit: Vec<PathBuf>,
    /// Keyrings kept because other repositories still use them.
    pub shared_keyrings: Vec<PathBuf>,
}

impl RemovalPlan {
    /// Plans the removal of `handle` given the currently registered `repos`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidHandle`] if `handle` is not a
    /// valid short handle.
    pub fn build(handle: &str, repos: &[Repository], config: &AptConfig) -> Result<Self> {
        let target = Repository::from_short_handle(handle)?;
        let usage = ResourceUsage::tally(repos, &target.short_handle(), config);
        Ok(Self::from_usage(target, &usage))
    }

    /// Classifies every file in `usage`.
    pub fn from_usage(target: Repository, usage: &ResourceUsage) -> Self {
        let mut plan = Self {
            target,
            delete: Vec::new(),
            edit: Vec::new(),
            shared_keyrings: Vec::new(),
        };

        for (path, file_usage) in &usage.source_files {
            match decide(ResourceKind::SourceFile, *file_usage) {
                Decision::Delete => plan.delete.push(path.clone()),
                Decision::Edit => plan.edit.push(path.clone()),
                Decision::Untouched | Decision::KeepShared => {}
            }
        }

        for (path, file_usage) in &usage.keyring_files {
            match decide(ResourceKind::Keyring, *file_usage) {
                Decision::Delete => plan.delete.push(path.clone()),
                Decision::KeepShared => plan.shared_keyrings.push(path.clone()),
                Decision::Untouched | Decision::Edit => {}
            }
        }

        plan
    }

    /// Whether the target was not found in any file.
    pub fn is_empty(&self) -> bool {
        self.delete.is_empty() && self.edit.is_empty() && self.shared_keyrings.is_empty()
    }
}
